use rocket::http::{Cookie, CookieJar, SameSite, Status};
use rocket::response::status::Custom;

use super::*;

fn add_session_cookie(cookies: &CookieJar<'_>, email: &EmailAddress) {
    cookies.add_private(
        Cookie::build((COOKIE_EMAIL_KEY, email.to_string())).same_site(SameSite::Lax),
    );
}

#[post("/auth/signup", format = "application/json", data = "<new_user>")]
pub fn post_signup(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    new_user: JsonResult<json::NewUser>,
) -> result::Result<Custom<Json<json::User>>, ApiError> {
    let new_account = from_json::try_new_account(new_user?.into_inner())?;
    let user = usecases::create_new_user(&db.exclusive()?, new_account)?;
    // Sign the fresh account in right away.
    add_session_cookie(cookies, &user.email);
    Ok(Custom(Status::Created, Json(to_json::user(user))))
}

#[post("/auth/login", format = "application/json", data = "<credentials>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    credentials: JsonResult<json::Credentials>,
) -> Result<json::User> {
    let credentials = credentials?.into_inner();
    let email = credentials.email.parse::<EmailAddress>()?;
    let user = usecases::login_with_email(
        &db.shared()?,
        &usecases::Credentials {
            email: &email,
            password: &credentials.password,
        },
    )
    .map_err(|err| {
        debug!("Login with email '{email}' failed: {err}");
        err
    })?;
    add_session_cookie(cookies, &user.email);
    Ok(Json(to_json::user(user)))
}

#[post("/auth/logout", format = "application/json")]
pub fn post_logout(_account: Account, cookies: &CookieJar<'_>) -> Json<()> {
    cookies.remove_private(COOKIE_EMAIL_KEY);
    Json(())
}

#[get("/users/me", format = "application/json")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = current_user(&db, &account)?;
    Ok(Json(to_json::user(user)))
}

#[get("/users/<id>", format = "application/json", rank = 2)]
pub fn get_user(db: sqlite::Connections, account: Account, id: i64) -> Result<json::User> {
    let user = usecases::get_user(&db.shared()?, account.email(), id)?;
    Ok(Json(to_json::user(user)))
}
