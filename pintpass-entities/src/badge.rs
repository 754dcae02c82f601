use crate::time::Timestamp;

/// An achievement from the static badge catalog, unlocked once a user's
/// check-in counter reaches `threshold`.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub id          : i64,
    pub name        : String,
    pub description : String,
    pub icon_url    : String,
    pub threshold   : u64,
    pub kind        : BadgeKind,
    pub tier        : BadgeTier,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum BadgeKind {
    Venues,
    Checkins,
    Achievements,
    #[default]
    Special,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum BadgeTier {
    #[default]
    Bronze,
    Silver,
    Gold,
}

/// The award of a badge to a user. At most one per (user, badge) pair.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserBadge {
    pub user_id     : i64,
    pub badge_id    : i64,
    pub unlocked_at : Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_strings() {
        assert_eq!("checkins".parse::<BadgeKind>().unwrap(), BadgeKind::Checkins);
        assert_eq!(BadgeKind::Achievements.to_string(), "achievements");
        assert_eq!("gold".parse::<BadgeTier>().unwrap(), BadgeTier::Gold);
        assert_eq!(BadgeTier::Bronze.to_string(), "bronze");
    }
}
