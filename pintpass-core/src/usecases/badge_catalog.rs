use std::collections::HashMap;

use super::prelude::*;

/// The complete badge catalog, annotated per badge with when the given
/// user unlocked it (if at all).
pub fn badge_catalog_for_user<R>(
    repo: &R,
    user_id: i64,
) -> Result<Vec<(Badge, Option<Timestamp>)>>
where
    R: BadgeRepo,
{
    let unlocked: HashMap<i64, Timestamp> = repo
        .badges_unlocked_by_user(user_id)?
        .into_iter()
        .map(|(badge, unlocked_at)| (badge.id, unlocked_at))
        .collect();
    Ok(repo
        .all_badges()?
        .into_iter()
        .map(|badge| {
            let unlocked_at = unlocked.get(&badge.id).copied();
            (badge, unlocked_at)
        })
        .collect())
}
