// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Insertable user record. The id is assigned by the storage backend.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub username: String,
    pub name: String,
    pub city: String,
    pub password: Password,
}

pub trait UserRepo {
    fn create_user(&self, user: NewUser) -> Result<User>;

    fn get_user(&self, id: i64) -> Result<User>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Overwrites the materialized check-in counter with a freshly
    /// recomputed value.
    fn update_total_checkins(&self, user_id: i64, total_checkins: u64) -> Result<()>;

    /// Users ranked by their check-in counter (descending), ties broken
    /// by ascending id, each annotated with the number of badges they
    /// hold.
    fn leaderboard(&self, city: Option<&str>, limit: usize) -> Result<Vec<(User, u64)>>;
}

#[derive(Debug, Clone)]
pub struct NewVenue {
    pub name: String,
    pub address: String,
    pub lat: String,
    pub lng: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i32>,
    pub distance: Option<String>,
}

pub trait VenueRepo {
    fn create_venue(&self, venue: NewVenue) -> Result<Venue>;

    fn get_venue(&self, id: i64) -> Result<Venue>;
    fn all_venues(&self) -> Result<Vec<Venue>>;
    fn nearby_venues(&self, limit: usize) -> Result<Vec<Venue>>;
}

#[derive(Debug, Clone, Copy)]
pub struct NewCheckin {
    pub user_id: i64,
    pub venue_id: i64,
    pub created_at: Timestamp,
}

pub trait CheckinRepo {
    fn create_checkin(&self, checkin: NewCheckin) -> Result<Checkin>;

    /// Most recent check-ins first.
    fn recent_checkins_of_user(&self, user_id: i64, limit: usize) -> Result<Vec<Checkin>>;

    /// The authoritative check-in count, derived from the durable rows.
    fn count_checkins_of_user(&self, user_id: i64) -> Result<u64>;
}

#[derive(Debug, Clone)]
pub struct NewBadge {
    pub name: String,
    pub description: String,
    pub icon_url: String,
    pub threshold: u64,
    pub kind: BadgeKind,
    pub tier: BadgeTier,
}

pub trait BadgeRepo {
    // Only used for seeding the catalog; badges are not mutated at runtime.
    fn create_badge(&self, badge: NewBadge) -> Result<Badge>;

    fn all_badges(&self) -> Result<Vec<Badge>>;
    fn count_badges(&self) -> Result<usize>;

    /// The badges a user holds, together with when each was unlocked.
    fn badges_unlocked_by_user(&self, user_id: i64) -> Result<Vec<(Badge, Timestamp)>>;
}

pub trait UserBadgeRepo {
    /// Fails with [`Error::AlreadyExists`] if the (user, badge) pair is
    /// already present.
    fn create_user_badge(&self, user_badge: &UserBadge) -> Result<()>;

    fn badge_ids_of_user(&self, user_id: i64) -> Result<Vec<i64>>;
}

#[derive(Debug, Clone)]
pub struct NewReward {
    pub badge_id: i64,
    pub user_id: i64,
    pub code: String,
    pub details: String,
    pub expiry_days: Option<u32>,
}

pub trait RewardRepo {
    fn create_reward(&self, reward: NewReward) -> Result<Reward>;

    fn get_reward(&self, id: i64) -> Result<Reward>;
    fn rewards_of_user(&self, user_id: i64) -> Result<Vec<Reward>>;

    /// Monotonic: flips `redeemed` to true, never back.
    fn mark_reward_redeemed(&self, id: i64) -> Result<()>;
}
