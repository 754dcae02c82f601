// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use pintpass_core::entities::*;

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub name: &'a str,
    pub city: &'a str,
    pub total_checkins: i64,
    pub password: &'a str,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub name: String,
    pub city: String,
    pub total_checkins: i64,
    pub password: String,
}

impl From<UserEntity> for User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            id,
            email,
            username,
            name,
            city,
            total_checkins,
            password,
        } = from;
        Self {
            id,
            email: EmailAddress::new_unchecked(email),
            username,
            name,
            city,
            total_checkins: total_checkins.max(0) as u64,
            password: Password::from(password),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = venues)]
pub struct NewVenue<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub lat: &'a str,
    pub lng: &'a str,
    pub image_url: Option<&'a str>,
    pub description: Option<&'a str>,
    pub rating: Option<i32>,
    pub distance: Option<&'a str>,
}

#[derive(Queryable)]
pub struct VenueEntity {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub lat: String,
    pub lng: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i32>,
    pub distance: Option<String>,
}

impl From<VenueEntity> for Venue {
    fn from(from: VenueEntity) -> Self {
        let VenueEntity {
            id,
            name,
            address,
            lat,
            lng,
            image_url,
            description,
            rating,
            distance,
        } = from;
        Self {
            id,
            name,
            address,
            lat,
            lng,
            image_url,
            description,
            rating,
            distance,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = checkins)]
pub struct NewCheckin {
    pub user_id: i64,
    pub venue_id: i64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct CheckinEntity {
    pub id: i64,
    pub user_id: i64,
    pub venue_id: i64,
    pub created_at: i64,
}

impl From<CheckinEntity> for Checkin {
    fn from(from: CheckinEntity) -> Self {
        let CheckinEntity {
            id,
            user_id,
            venue_id,
            created_at,
        } = from;
        Self {
            id,
            user_id,
            venue_id,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = badges)]
pub struct NewBadge<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub icon_url: &'a str,
    pub threshold: i64,
    pub badge_type: String,
    pub color: String,
}

#[derive(Queryable)]
pub struct BadgeEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub icon_url: String,
    pub threshold: i64,
    pub badge_type: String,
    pub color: String,
}

impl From<BadgeEntity> for Badge {
    fn from(from: BadgeEntity) -> Self {
        let BadgeEntity {
            id,
            name,
            description,
            icon_url,
            threshold,
            badge_type,
            color,
        } = from;
        Self {
            id,
            name,
            description,
            icon_url,
            threshold: threshold.max(0) as u64,
            // Unknown tags from the database degrade to the defaults.
            kind: badge_type.parse().unwrap_or_default(),
            tier: color.parse().unwrap_or_default(),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = user_badges)]
pub struct NewUserBadge {
    pub user_id: i64,
    pub badge_id: i64,
    pub unlocked_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = rewards)]
pub struct NewReward<'a> {
    pub badge_id: i64,
    pub user_id: i64,
    pub code: &'a str,
    pub details: &'a str,
    pub expiry_days: Option<i32>,
    pub redeemed: bool,
}

#[derive(Queryable)]
pub struct RewardEntity {
    pub id: i64,
    pub badge_id: i64,
    pub user_id: i64,
    pub code: String,
    pub details: String,
    pub expiry_days: Option<i32>,
    pub redeemed: bool,
}

impl From<RewardEntity> for Reward {
    fn from(from: RewardEntity) -> Self {
        let RewardEntity {
            id,
            badge_id,
            user_id,
            code,
            details,
            expiry_days,
            redeemed,
        } = from;
        Self {
            id,
            badge_id,
            user_id,
            code,
            details,
            expiry_days: expiry_days.map(|days| days.max(0) as u32),
            redeemed,
        }
    }
}
