use super::*;

impl<'a> RewardRepo for DbReadOnly<'a> {
    fn create_reward(&self, _reward: NewReward) -> Result<Reward> {
        unreachable!();
    }
    fn mark_reward_redeemed(&self, _id: i64) -> Result<()> {
        unreachable!();
    }

    fn get_reward(&self, id: i64) -> Result<Reward> {
        get_reward(&mut self.conn.borrow_mut(), id)
    }
    fn rewards_of_user(&self, user_id: i64) -> Result<Vec<Reward>> {
        rewards_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> RewardRepo for DbReadWrite<'a> {
    fn create_reward(&self, reward: NewReward) -> Result<Reward> {
        create_reward(&mut self.conn.borrow_mut(), reward)
    }
    fn mark_reward_redeemed(&self, id: i64) -> Result<()> {
        mark_reward_redeemed(&mut self.conn.borrow_mut(), id)
    }

    fn get_reward(&self, id: i64) -> Result<Reward> {
        get_reward(&mut self.conn.borrow_mut(), id)
    }
    fn rewards_of_user(&self, user_id: i64) -> Result<Vec<Reward>> {
        rewards_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> RewardRepo for DbConnection<'a> {
    fn create_reward(&self, reward: NewReward) -> Result<Reward> {
        create_reward(&mut self.conn.borrow_mut(), reward)
    }
    fn mark_reward_redeemed(&self, id: i64) -> Result<()> {
        mark_reward_redeemed(&mut self.conn.borrow_mut(), id)
    }

    fn get_reward(&self, id: i64) -> Result<Reward> {
        get_reward(&mut self.conn.borrow_mut(), id)
    }
    fn rewards_of_user(&self, user_id: i64) -> Result<Vec<Reward>> {
        rewards_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn create_reward(conn: &mut SqliteConnection, r: NewReward) -> Result<Reward> {
    let new_reward = models::NewReward {
        badge_id: r.badge_id,
        user_id: r.user_id,
        code: &r.code,
        details: &r.details,
        expiry_days: r.expiry_days.map(|days| days as i32),
        redeemed: false,
    };
    Ok(diesel::insert_into(schema::rewards::table)
        .values(&new_reward)
        .get_result::<models::RewardEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn get_reward(conn: &mut SqliteConnection, id: i64) -> Result<Reward> {
    use schema::rewards::dsl;
    Ok(dsl::rewards
        .find(id)
        .first::<models::RewardEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn rewards_of_user(conn: &mut SqliteConnection, user_id: i64) -> Result<Vec<Reward>> {
    use schema::rewards::dsl;
    Ok(dsl::rewards
        .filter(dsl::user_id.eq(user_id))
        .load::<models::RewardEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn mark_reward_redeemed(conn: &mut SqliteConnection, id: i64) -> Result<()> {
    use schema::rewards::dsl;
    let count = diesel::update(dsl::rewards.find(id))
        .set(dsl::redeemed.eq(true))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
