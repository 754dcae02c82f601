use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Redeems a reward on behalf of its owner.
///
/// A reward belonging to another user is reported as `NotFound` so the
/// existence of foreign reward ids does not leak. Redemption is
/// monotonic; an already-redeemed reward is rejected instead of silently
/// succeeding a second time.
pub fn redeem_reward<R: RewardRepo>(repo: &R, user_id: i64, reward_id: i64) -> Result<Reward> {
    let reward = repo.get_reward(reward_id)?;
    if reward.user_id != user_id {
        return Err(Error::Repo(RepoError::NotFound));
    }
    if reward.redeemed {
        return Err(Error::RewardAlreadyRedeemed);
    }
    repo.mark_reward_redeemed(reward_id)?;
    Ok(Reward {
        redeemed: true,
        ..reward
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn seed_reward(db: &MockDb, user_id: i64) -> Reward {
        let badge = db.seed_badge("First Sip", 1);
        super::super::issue_reward(db, &badge, user_id).unwrap()
    }

    #[test]
    fn redeem_own_reward() {
        let db = MockDb::default();
        let user = db.seed_user("foo@bar.io");
        let reward = seed_reward(&db, user.id);

        let redeemed = redeem_reward(&db, user.id, reward.id).unwrap();
        assert!(redeemed.redeemed);
        assert!(db.rewards.borrow()[0].redeemed);
    }

    #[test]
    fn redeeming_twice_fails() {
        let db = MockDb::default();
        let user = db.seed_user("foo@bar.io");
        let reward = seed_reward(&db, user.id);

        redeem_reward(&db, user.id, reward.id).unwrap();
        let err = redeem_reward(&db, user.id, reward.id).unwrap_err();
        assert!(matches!(err, Error::RewardAlreadyRedeemed));
        // Still redeemed, never reverted.
        assert!(db.rewards.borrow()[0].redeemed);
    }

    #[test]
    fn redeeming_a_foreign_reward_fails() {
        let db = MockDb::default();
        let owner = db.seed_user("owner@bar.io");
        let other = db.seed_user("other@bar.io");
        let reward = seed_reward(&db, owner.id);

        let err = redeem_reward(&db, other.id, reward.id).unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::NotFound)));
        assert!(!db.rewards.borrow()[0].redeemed);
    }

    #[test]
    fn redeeming_an_unknown_reward_fails() {
        let db = MockDb::default();
        let user = db.seed_user("foo@bar.io");
        let err = redeem_reward(&db, user.id, 4711).unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::NotFound)));
    }
}
