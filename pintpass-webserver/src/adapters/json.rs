pub use pintpass_boundary::*;

use pintpass_core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both live outside of this crate.

    pub fn try_new_account(
        from: NewUser,
    ) -> Result<usecases::NewAccount, e::EmailAddressParseError> {
        let NewUser {
            email,
            name,
            city,
            password,
        } = from;
        Ok(usecases::NewAccount {
            email: email.parse()?,
            name,
            city,
            password,
        })
    }
}

pub mod to_json {
    //! Entity -> JSON

    use pintpass_application::prelude::CheckinResult;

    use super::*;

    pub fn user(from: e::User) -> User {
        let e::User {
            id,
            email,
            username,
            name,
            city,
            total_checkins,
            // The password hash never leaves the server.
            password: _,
        } = from;
        User {
            id,
            email: email.into_string(),
            username,
            name,
            city,
            total_checkins,
        }
    }

    pub fn venue(from: e::Venue) -> Venue {
        let e::Venue {
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
        Venue {
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

    pub fn checkin(from: e::Checkin) -> Checkin {
        let e::Checkin {
            id,
            user_id,
            venue_id,
            created_at,
        } = from;
        Checkin {
            id,
            user_id,
            venue_id,
            created_at: created_at.into_millis(),
        }
    }

    pub fn checkin_with_venue(checkin: e::Checkin, venue: e::Venue) -> CheckinWithVenue {
        let e::Checkin {
            id,
            user_id,
            venue_id,
            created_at,
        } = checkin;
        CheckinWithVenue {
            id,
            user_id,
            venue_id,
            created_at: created_at.into_millis(),
            venue: self::venue(venue),
        }
    }

    pub fn badge(from: e::Badge) -> Badge {
        let e::Badge {
            id,
            name,
            description,
            icon_url,
            threshold,
            kind,
            tier,
        } = from;
        Badge {
            id,
            name,
            description,
            icon_url,
            threshold,
            badge_type: kind.to_string(),
            color: tier.to_string(),
        }
    }

    pub fn badge_with_status(
        from: e::Badge,
        unlocked_at: Option<e::Timestamp>,
    ) -> BadgeWithStatus {
        let e::Badge {
            id,
            name,
            description,
            icon_url,
            threshold,
            kind,
            tier,
        } = from;
        BadgeWithStatus {
            id,
            name,
            description,
            icon_url,
            threshold,
            badge_type: kind.to_string(),
            color: tier.to_string(),
            unlocked: unlocked_at.is_some(),
            unlocked_at: unlocked_at.map(e::Timestamp::into_millis),
        }
    }

    pub fn reward(from: e::Reward) -> Reward {
        let e::Reward {
            id,
            badge_id,
            user_id,
            code,
            details,
            expiry_days,
            redeemed,
        } = from;
        Reward {
            id,
            badge_id,
            user_id,
            code,
            details,
            expiry_days,
            redeemed,
        }
    }

    pub fn checkin_response(from: CheckinResult) -> CheckinResponse {
        let CheckinResult {
            checkin,
            user,
            new_badges,
            new_rewards,
        } = from;
        CheckinResponse {
            checkin: self::checkin(checkin),
            user: self::user(user),
            new_badges: new_badges.into_iter().map(badge).collect(),
            new_rewards: new_rewards.into_iter().map(reward).collect(),
        }
    }

    pub fn leaderboard_user(from: usecases::LeaderboardEntry) -> LeaderboardUser {
        let usecases::LeaderboardEntry {
            user,
            badge_count,
            rank,
        } = from;
        LeaderboardUser {
            id: user.id,
            username: user.username,
            name: user.name,
            city: user.city,
            total_checkins: user.total_checkins,
            badge_count,
            rank,
        }
    }
}
