use super::prelude::*;

pub const LEADERBOARD_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct LeaderboardEntry {
    pub user: User,
    pub badge_count: u64,
    /// 1-based, contiguous.
    pub rank: u64,
}

/// Users ranked by their check-in counter, optionally restricted to one
/// city. Ordering and tie-breaking are delegated to the repository; the
/// rank annotation happens here.
pub fn leaderboard<R: UserRepo>(repo: &R, city: Option<&str>) -> Result<Vec<LeaderboardEntry>> {
    Ok(repo
        .leaderboard(city, LEADERBOARD_LIMIT)?
        .into_iter()
        .enumerate()
        .map(|(i, (user, badge_count))| LeaderboardEntry {
            user,
            badge_count,
            rank: i as u64 + 1,
        })
        .collect())
}
