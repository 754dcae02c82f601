use super::*;

/// Redeems a reward on behalf of `user_id`.
///
/// The ownership check and the redeemed-flag update run in the same
/// transaction so that two concurrent redemption attempts cannot both
/// succeed.
pub fn redeem_reward(
    connections: &sqlite::Connections,
    user_id: i64,
    reward_id: i64,
) -> Result<Reward> {
    let mut db = connections.exclusive()?;
    Ok(db.transaction(|conn| usecases::redeem_reward(conn, user_id, reward_id))?)
}
