use std::{fmt::Display, result};

use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use pintpass_application::prelude as flows;
use pintpass_boundary::Error as JsonErrorResponse;
use pintpass_core::{entities::*, repositories::UserRepo as _, usecases};

use super::{guards::*, sqlite};
use crate::adapters::json::{self, from_json, to_json};

mod badges;
mod checkins;
mod error;
mod leaderboard;
mod rewards;
mod users;
mod util;
mod venues;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   accounts   --- //
        users::post_signup,
        users::post_login,
        users::post_logout,
        users::get_current_user,
        users::get_user,
        // ---   venues   --- //
        venues::get_venues,
        venues::get_nearby_venues,
        // ---   check-ins   --- //
        checkins::post_checkin,
        checkins::get_checkin_history,
        // ---   badges   --- //
        badges::get_badges,
        // ---   rewards   --- //
        rewards::get_rewards,
        rewards::post_redeem_reward,
        // ---   leaderboard   --- //
        leaderboard::get_leaderboard,
        util::get_version,
    ]
}

/// Resolves the acting user behind the session cookie.
fn current_user(db: &sqlite::Connections, account: &Account) -> result::Result<User, ApiError> {
    Ok(db.shared()?.get_user_by_email(account.email())?)
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
