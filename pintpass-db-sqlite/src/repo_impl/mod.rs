// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use pintpass_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod badge;
mod checkin;
mod reward;
mod user;
mod venue;

type Result<T> = std::result::Result<T, repo::Error>;

pub(crate) fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}
