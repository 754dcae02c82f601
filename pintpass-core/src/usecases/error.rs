use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid e-mail address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("The reward has already been redeemed")]
    RewardAlreadyRedeemed,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<pintpass_entities::password::ParseError> for Error {
    fn from(_: pintpass_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<pintpass_entities::email::EmailAddressParseError> for Error {
    fn from(_: pintpass_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}
