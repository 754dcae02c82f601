use super::*;

#[get("/badges", format = "application/json")]
pub fn get_badges(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::BadgeWithStatus>> {
    let user = current_user(&db, &account)?;
    let catalog = usecases::badge_catalog_for_user(&db.shared()?, user.id)?;
    Ok(Json(
        catalog
            .into_iter()
            .map(|(badge, unlocked_at)| to_json::badge_with_status(badge, unlocked_at))
            .collect(),
    ))
}
