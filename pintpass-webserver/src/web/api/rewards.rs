use super::*;

#[get("/rewards", format = "application/json")]
pub fn get_rewards(db: sqlite::Connections, account: Account) -> Result<Vec<json::Reward>> {
    let user = current_user(&db, &account)?;
    let rewards = usecases::user_rewards(&db.shared()?, user.id)?;
    Ok(Json(rewards.into_iter().map(to_json::reward).collect()))
}

#[post("/rewards/redeem", format = "application/json", data = "<redeem>")]
pub fn post_redeem_reward(
    db: sqlite::Connections,
    account: Account,
    redeem: JsonResult<json::RedeemReward>,
) -> Result<json::Reward> {
    let json::RedeemReward { reward_id } = redeem?.into_inner();
    let user = current_user(&db, &account)?;
    let reward = flows::redeem_reward(&db, user.id, reward_id)?;
    Ok(Json(to_json::reward(reward)))
}
