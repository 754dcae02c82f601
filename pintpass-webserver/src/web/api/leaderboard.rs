use super::*;

#[get("/leaderboard?<city>", format = "application/json")]
pub fn get_leaderboard(
    db: sqlite::Connections,
    _account: Account,
    city: Option<String>,
) -> Result<Vec<json::LeaderboardUser>> {
    let entries = usecases::leaderboard(&db.shared()?, city.as_deref())?;
    Ok(Json(
        entries.into_iter().map(to_json::leaderboard_user).collect(),
    ))
}
