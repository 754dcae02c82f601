//! # pintpass-boundary
//!
//! Serializable, anemic data structures for accessing the pintpass API in
//! a type-safe manner. Timestamps are unix timestamps in milliseconds.

use serde::{Deserialize, Serialize};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id             : i64,
    pub email          : String,
    pub username       : String,
    pub name           : String,
    pub city           : String,
    pub total_checkins : u64,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id          : i64,
    pub name        : String,
    pub address     : String,
    pub lat         : String,
    pub lng         : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url   : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating      : Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance    : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkin {
    pub id         : i64,
    pub user_id    : i64,
    pub venue_id   : i64,
    pub created_at : i64,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinWithVenue {
    pub id         : i64,
    pub user_id    : i64,
    pub venue_id   : i64,
    pub created_at : i64,
    pub venue      : Venue,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id          : i64,
    pub name        : String,
    pub description : String,
    pub icon_url    : String,
    pub threshold   : u64,
    pub badge_type  : String,
    pub color       : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeWithStatus {
    pub id          : i64,
    pub name        : String,
    pub description : String,
    pub icon_url    : String,
    pub threshold   : u64,
    pub badge_type  : String,
    pub color       : String,
    pub unlocked    : bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_at : Option<i64>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub id          : i64,
    pub badge_id    : i64,
    pub user_id     : i64,
    pub code        : String,
    pub details     : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_days : Option<u32>,
    pub redeemed    : bool,
}

/// The result of a successful check-in. The badge and reward sequences
/// are always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinResponse {
    pub checkin: Checkin,
    pub user: User,
    pub new_badges: Vec<Badge>,
    pub new_rewards: Vec<Reward>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardUser {
    pub id             : i64,
    pub username       : String,
    pub name           : String,
    pub city           : String,
    pub total_checkins : u64,
    pub badge_count    : u64,
    /// 1-based.
    pub rank           : u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub city: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewCheckin {
    pub venue_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RedeemReward {
    pub reward_id: i64,
}

/// Generic JSON error payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
