use super::*;

/// The outcome of one check-in. `new_badges` and `new_rewards` are
/// always present and pair up one-to-one, possibly both empty.
#[derive(Debug, Clone)]
pub struct CheckinResult {
    pub checkin: Checkin,
    pub user: User,
    pub new_badges: Vec<Badge>,
    pub new_rewards: Vec<Reward>,
}

/// Records a visit and runs the whole award pipeline:
/// record the check-in, resync the counter, evaluate badge thresholds
/// against the fresh counter, and mint one reward per newly unlocked
/// badge.
///
/// The pipeline runs inside a single transaction on the exclusive
/// connection. Any failure rolls back every step, so a check-in is
/// either fully processed or not recorded at all; concurrent check-ins
/// are serialized by the pool's writer lock, which closes the
/// read-then-award race on badges.
pub fn check_in(
    connections: &sqlite::Connections,
    user_id: i64,
    venue_id: i64,
) -> Result<CheckinResult> {
    let mut db = connections.exclusive()?;
    let result = db.transaction(|conn| {
        let (checkin, user) = usecases::record_checkin(conn, user_id, venue_id)?;
        let new_badges = usecases::evaluate_badges(conn, user_id, user.total_checkins)?;
        let mut new_rewards = Vec::with_capacity(new_badges.len());
        for badge in &new_badges {
            new_rewards.push(usecases::issue_reward(conn, badge, user_id).inspect_err(
                |err| {
                    warn!("Failed to issue reward for badge '{}': {err}", badge.name);
                },
            )?);
        }
        Ok::<_, usecases::Error>(CheckinResult {
            checkin,
            user,
            new_badges,
            new_rewards,
        })
    })?;
    debug_assert_eq!(result.new_badges.len(), result.new_rewards.len());
    Ok(result)
}
