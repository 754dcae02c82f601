mod badge_catalog;
mod checkin_history;
mod create_new_user;
mod error;
mod evaluate_badges;
mod issue_reward;
mod leaderboard;
mod login;
mod record_checkin;
mod redeem_reward;

#[cfg(test)]
pub mod tests;

pub use self::{
    badge_catalog::*, checkin_history::*, create_new_user::*, error::Error, evaluate_badges::*,
    issue_reward::*, leaderboard::*, login::*, record_checkin::*, redeem_reward::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub const NEARBY_VENUES_LIMIT: usize = 5;

pub fn get_user<R>(repo: &R, logged_in_email: &EmailAddress, requested_id: i64) -> Result<User>
where
    R: UserRepo,
{
    let user = repo.get_user(requested_id)?;
    if user.email != *logged_in_email {
        return Err(Error::Forbidden);
    }
    Ok(user)
}

pub fn all_venues<R: VenueRepo>(repo: &R) -> Result<Vec<Venue>> {
    Ok(repo.all_venues()?)
}

pub fn nearby_venues<R: VenueRepo>(repo: &R) -> Result<Vec<Venue>> {
    Ok(repo.nearby_venues(NEARBY_VENUES_LIMIT)?)
}

pub fn user_rewards<R: RewardRepo>(repo: &R, user_id: i64) -> Result<Vec<Reward>> {
    Ok(repo.rewards_of_user(user_id)?)
}
