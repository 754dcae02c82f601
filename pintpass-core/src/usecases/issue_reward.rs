use rand::{distributions::Alphanumeric, Rng};

use super::prelude::*;

/// Days from issuance until a freshly minted reward expires.
pub const REWARD_EXPIRY_DAYS: u32 = 30;

const REDEMPTION_CODE_LEN: usize = 6;

/// Mints the reward for a badge that was just unlocked by `user_id`.
///
/// Called once per badge returned by the badge evaluation; uniqueness of
/// the redemption code relies on generation entropy plus the unique
/// constraint on the code column.
pub fn issue_reward<R: RewardRepo>(repo: &R, badge: &Badge, user_id: i64) -> Result<Reward> {
    let reward = NewReward {
        badge_id: badge.id,
        user_id,
        code: generate_redemption_code(),
        details: format!("Reward for unlocking the {} badge", badge.name),
        expiry_days: Some(REWARD_EXPIRY_DAYS),
    };
    Ok(repo.create_reward(reward)?)
}

fn generate_redemption_code() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(REDEMPTION_CODE_LEN)
        .map(char::from)
        .collect();
    format!("REWARD-{}", suffix.to_uppercase())
}
