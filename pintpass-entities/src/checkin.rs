use crate::time::Timestamp;

/// One user-venue visit event. Append-only; never updated or deleted.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkin {
    pub id         : i64,
    pub user_id    : i64,
    pub venue_id   : i64,
    pub created_at : Timestamp,
}
