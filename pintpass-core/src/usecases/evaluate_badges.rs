use std::collections::HashSet;

use super::prelude::*;

/// Awards every badge whose threshold is reached by `total_checkins` and
/// that the user does not already hold, returning the newly unlocked
/// badges.
///
/// A single call awards **all** qualifying badges, so a counter jump
/// crossing several thresholds at once unlocks each of them. Awarding is
/// idempotent: with an unchanged counter a second evaluation yields an
/// empty result. No ordering of the returned badges is guaranteed.
pub fn evaluate_badges<R>(repo: &R, user_id: i64, total_checkins: u64) -> Result<Vec<Badge>>
where
    R: BadgeRepo + UserBadgeRepo,
{
    let unlocked: HashSet<i64> = repo.badge_ids_of_user(user_id)?.into_iter().collect();
    let newly_unlocked: Vec<_> = repo
        .all_badges()?
        .into_iter()
        .filter(|badge| badge.threshold <= total_checkins && !unlocked.contains(&badge.id))
        .collect();

    let unlocked_at = Timestamp::now();
    for badge in &newly_unlocked {
        log::debug!("User {user_id} unlocked badge '{}'", badge.name);
        repo.create_user_badge(&UserBadge {
            user_id,
            badge_id: badge.id,
            unlocked_at,
        })?;
    }
    Ok(newly_unlocked)
}
