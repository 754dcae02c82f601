use rocket::{http::Status, response::status::Custom};

use super::*;

#[post("/checkins", format = "application/json", data = "<new_checkin>")]
pub fn post_checkin(
    db: sqlite::Connections,
    account: Account,
    new_checkin: JsonResult<json::NewCheckin>,
) -> result::Result<Custom<Json<json::CheckinResponse>>, ApiError> {
    let json::NewCheckin { venue_id } = new_checkin?.into_inner();
    let user = current_user(&db, &account)?;
    let result = flows::check_in(&db, user.id, venue_id)?;
    Ok(Custom(
        Status::Created,
        Json(to_json::checkin_response(result)),
    ))
}

#[get("/checkins/history", format = "application/json")]
pub fn get_checkin_history(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::CheckinWithVenue>> {
    let user = current_user(&db, &account)?;
    let history = usecases::checkin_history(&db.shared()?, user.id)?;
    Ok(Json(
        history
            .into_iter()
            .map(|(checkin, venue)| to_json::checkin_with_venue(checkin, venue))
            .collect(),
    ))
}
