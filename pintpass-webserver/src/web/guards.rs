use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

use pintpass_core::entities::EmailAddress;

pub const COOKIE_EMAIL_KEY: &str = "pintpass-user-email";

/// Request state derived from the (optional) session cookie.
#[derive(Debug)]
pub struct Auth {
    account_email: Option<EmailAddress>,
}

impl Auth {
    pub fn account_email(&self) -> Option<&EmailAddress> {
        self.account_email.as_ref()
    }

    fn account_email_from_cookie(request: &Request) -> Option<EmailAddress> {
        request
            .cookies()
            .get_private(COOKIE_EMAIL_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let account_email = Self::account_email_from_cookie(request);
        Outcome::Success(Self { account_email })
    }
}

/// The authenticated account. Requests without a valid session cookie
/// are rejected with 401.
#[derive(Debug)]
pub struct Account(EmailAddress);

impl Account {
    pub fn email(&self) -> &EmailAddress {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_email {
            Some(email) => Outcome::Success(Account(email)),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Version(pub &'static str);
