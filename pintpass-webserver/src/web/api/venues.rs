use super::*;

#[get("/venues", format = "application/json")]
pub fn get_venues(db: sqlite::Connections, _account: Account) -> Result<Vec<json::Venue>> {
    let venues = usecases::all_venues(&db.shared()?)?;
    Ok(Json(venues.into_iter().map(to_json::venue).collect()))
}

#[get("/venues/nearby", format = "application/json")]
pub fn get_nearby_venues(db: sqlite::Connections, _account: Account) -> Result<Vec<json::Venue>> {
    let venues = usecases::nearby_venues(&db.shared()?)?;
    Ok(Json(venues.into_iter().map(to_json::venue).collect()))
}
