use crate::{email::EmailAddress, password::Password};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id             : i64,
    pub email          : EmailAddress,
    pub username       : String,
    pub name           : String,
    pub city           : String,
    /// Materialized cache of the number of check-in records owned by this
    /// user. Always recomputed from the authoritative row count, never
    /// incremented.
    pub total_checkins : u64,
    pub password       : Password,
}
