use std::cell::{Cell, RefCell};

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory repository double backing the usecase tests.
#[derive(Default)]
pub struct MockDb {
    last_id: Cell<i64>,
    pub users: RefCell<Vec<User>>,
    pub venues: RefCell<Vec<Venue>>,
    pub checkins: RefCell<Vec<Checkin>>,
    pub badges: RefCell<Vec<Badge>>,
    pub user_badges: RefCell<Vec<UserBadge>>,
    pub rewards: RefCell<Vec<Reward>>,
}

impl MockDb {
    fn next_id(&self) -> i64 {
        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        id
    }

    pub fn seed_user(&self, email: &str) -> User {
        self.seed_user_in_city(email, "London")
    }

    pub fn seed_user_in_city(&self, email: &str, city: &str) -> User {
        let user = User {
            id: self.next_id(),
            email: email.parse().unwrap(),
            username: email.split('@').next().unwrap().to_owned(),
            name: "Test User".into(),
            city: city.into(),
            total_checkins: 0,
            password: "secret1".parse().unwrap(),
        };
        self.users.borrow_mut().push(user.clone());
        user
    }

    pub fn seed_venue(&self, name: &str) -> Venue {
        let venue = Venue {
            id: self.next_id(),
            name: name.into(),
            address: "1 Test Lane".into(),
            lat: "51.5".into(),
            lng: "-0.1".into(),
            image_url: None,
            description: None,
            rating: None,
            distance: None,
        };
        self.venues.borrow_mut().push(venue.clone());
        venue
    }

    pub fn seed_badge(&self, name: &str, threshold: u64) -> Badge {
        let badge = Badge {
            id: self.next_id(),
            name: name.into(),
            description: format!("{name} badge"),
            icon_url: "https://img.example.com/badge.png".into(),
            threshold,
            kind: BadgeKind::Checkins,
            tier: BadgeTier::Bronze,
        };
        self.badges.borrow_mut().push(badge.clone());
        badge
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: NewUser) -> RepoResult<User> {
        let mut users = self.users.borrow_mut();
        if users
            .iter()
            .any(|u| u.email == user.email || u.username == user.username)
        {
            return Err(RepoError::AlreadyExists);
        }
        let user = User {
            id: self.next_id(),
            email: user.email,
            username: user.username,
            name: user.name,
            city: user.city,
            total_checkins: 0,
            password: user.password,
        };
        users.push(user.clone());
        Ok(user)
    }

    fn get_user(&self, id: i64) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        self.try_get_user_by_email(email)?.ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    fn try_get_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    fn update_total_checkins(&self, user_id: i64, total_checkins: u64) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(RepoError::NotFound)?;
        user.total_checkins = total_checkins;
        Ok(())
    }

    fn leaderboard(&self, city: Option<&str>, limit: usize) -> RepoResult<Vec<(User, u64)>> {
        let user_badges = self.user_badges.borrow();
        let mut users: Vec<_> = self
            .users
            .borrow()
            .iter()
            .filter(|u| city.map_or(true, |c| u.city == c))
            .cloned()
            .collect();
        users.sort_by(|a, b| {
            b.total_checkins
                .cmp(&a.total_checkins)
                .then(a.id.cmp(&b.id))
        });
        Ok(users
            .into_iter()
            .take(limit)
            .map(|user| {
                let badge_count =
                    user_badges.iter().filter(|ub| ub.user_id == user.id).count() as u64;
                (user, badge_count)
            })
            .collect())
    }
}

impl VenueRepo for MockDb {
    fn create_venue(&self, venue: NewVenue) -> RepoResult<Venue> {
        let venue = Venue {
            id: self.next_id(),
            name: venue.name,
            address: venue.address,
            lat: venue.lat,
            lng: venue.lng,
            image_url: venue.image_url,
            description: venue.description,
            rating: venue.rating,
            distance: venue.distance,
        };
        self.venues.borrow_mut().push(venue.clone());
        Ok(venue)
    }

    fn get_venue(&self, id: i64) -> RepoResult<Venue> {
        self.venues
            .borrow()
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_venues(&self) -> RepoResult<Vec<Venue>> {
        Ok(self.venues.borrow().clone())
    }

    fn nearby_venues(&self, limit: usize) -> RepoResult<Vec<Venue>> {
        Ok(self.venues.borrow().iter().take(limit).cloned().collect())
    }
}

impl CheckinRepo for MockDb {
    fn create_checkin(&self, checkin: NewCheckin) -> RepoResult<Checkin> {
        let checkin = Checkin {
            id: self.next_id(),
            user_id: checkin.user_id,
            venue_id: checkin.venue_id,
            created_at: checkin.created_at,
        };
        self.checkins.borrow_mut().push(checkin.clone());
        Ok(checkin)
    }

    fn recent_checkins_of_user(&self, user_id: i64, limit: usize) -> RepoResult<Vec<Checkin>> {
        let mut checkins: Vec<_> = self
            .checkins
            .borrow()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        checkins.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        checkins.truncate(limit);
        Ok(checkins)
    }

    fn count_checkins_of_user(&self, user_id: i64) -> RepoResult<u64> {
        Ok(self
            .checkins
            .borrow()
            .iter()
            .filter(|c| c.user_id == user_id)
            .count() as u64)
    }
}

impl BadgeRepo for MockDb {
    fn create_badge(&self, badge: NewBadge) -> RepoResult<Badge> {
        let badge = Badge {
            id: self.next_id(),
            name: badge.name,
            description: badge.description,
            icon_url: badge.icon_url,
            threshold: badge.threshold,
            kind: badge.kind,
            tier: badge.tier,
        };
        self.badges.borrow_mut().push(badge.clone());
        Ok(badge)
    }

    fn all_badges(&self) -> RepoResult<Vec<Badge>> {
        Ok(self.badges.borrow().clone())
    }

    fn count_badges(&self) -> RepoResult<usize> {
        Ok(self.badges.borrow().len())
    }

    fn badges_unlocked_by_user(&self, user_id: i64) -> RepoResult<Vec<(Badge, Timestamp)>> {
        let badges = self.badges.borrow();
        Ok(self
            .user_badges
            .borrow()
            .iter()
            .filter(|ub| ub.user_id == user_id)
            .filter_map(|ub| {
                badges
                    .iter()
                    .find(|b| b.id == ub.badge_id)
                    .map(|b| (b.clone(), ub.unlocked_at))
            })
            .collect())
    }
}

impl UserBadgeRepo for MockDb {
    fn create_user_badge(&self, user_badge: &UserBadge) -> RepoResult<()> {
        let mut user_badges = self.user_badges.borrow_mut();
        if user_badges
            .iter()
            .any(|ub| ub.user_id == user_badge.user_id && ub.badge_id == user_badge.badge_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        user_badges.push(*user_badge);
        Ok(())
    }

    fn badge_ids_of_user(&self, user_id: i64) -> RepoResult<Vec<i64>> {
        Ok(self
            .user_badges
            .borrow()
            .iter()
            .filter(|ub| ub.user_id == user_id)
            .map(|ub| ub.badge_id)
            .collect())
    }
}

impl RewardRepo for MockDb {
    fn create_reward(&self, reward: NewReward) -> RepoResult<Reward> {
        let mut rewards = self.rewards.borrow_mut();
        if rewards
            .iter()
            .any(|r| r.user_id == reward.user_id && r.badge_id == reward.badge_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        let reward = Reward {
            id: self.next_id(),
            badge_id: reward.badge_id,
            user_id: reward.user_id,
            code: reward.code,
            details: reward.details,
            expiry_days: reward.expiry_days,
            redeemed: false,
        };
        rewards.push(reward.clone());
        Ok(reward)
    }

    fn get_reward(&self, id: i64) -> RepoResult<Reward> {
        self.rewards
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn rewards_of_user(&self, user_id: i64) -> RepoResult<Vec<Reward>> {
        Ok(self
            .rewards
            .borrow()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    fn mark_reward_redeemed(&self, id: i64) -> RepoResult<()> {
        let mut rewards = self.rewards.borrow_mut();
        let reward = rewards
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RepoError::NotFound)?;
        reward.redeemed = true;
        Ok(())
    }
}
