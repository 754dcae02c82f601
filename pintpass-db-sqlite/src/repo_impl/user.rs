use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: NewUser) -> Result<User> {
        unreachable!();
    }
    fn update_total_checkins(&self, _user_id: i64, _total_checkins: u64) -> Result<()> {
        unreachable!();
    }

    fn get_user(&self, id: i64) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn leaderboard(&self, city: Option<&str>, limit: usize) -> Result<Vec<(User, u64)>> {
        leaderboard(&mut self.conn.borrow_mut(), city, limit)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: NewUser) -> Result<User> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_total_checkins(&self, user_id: i64, total_checkins: u64) -> Result<()> {
        update_total_checkins(&mut self.conn.borrow_mut(), user_id, total_checkins)
    }

    fn get_user(&self, id: i64) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn leaderboard(&self, city: Option<&str>, limit: usize) -> Result<Vec<(User, u64)>> {
        leaderboard(&mut self.conn.borrow_mut(), city, limit)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: NewUser) -> Result<User> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_total_checkins(&self, user_id: i64, total_checkins: u64) -> Result<()> {
        update_total_checkins(&mut self.conn.borrow_mut(), user_id, total_checkins)
    }

    fn get_user(&self, id: i64) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn leaderboard(&self, city: Option<&str>, limit: usize) -> Result<Vec<(User, u64)>> {
        leaderboard(&mut self.conn.borrow_mut(), city, limit)
    }
}

fn create_user(conn: &mut SqliteConnection, u: NewUser) -> Result<User> {
    let new_user = models::NewUser {
        email: u.email.as_str(),
        username: &u.username,
        name: &u.name,
        city: &u.city,
        total_checkins: 0,
        password: u.password.as_ref(),
    };
    Ok(diesel::insert_into(schema::users::table)
        .values(&new_user)
        .get_result::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn get_user(conn: &mut SqliteConnection, id: i64) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .find(id)
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_user_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn try_get_user_by_username(conn: &mut SqliteConnection, username: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::username.eq(username))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn update_total_checkins(
    conn: &mut SqliteConnection,
    user_id: i64,
    total_checkins: u64,
) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::update(dsl::users.find(user_id))
        .set(dsl::total_checkins.eq(total_checkins as i64))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn leaderboard(
    conn: &mut SqliteConnection,
    city: Option<&str>,
    limit: usize,
) -> Result<Vec<(User, u64)>> {
    use schema::{user_badges::dsl as ub_dsl, users::dsl as u_dsl};

    let mut query = u_dsl::users
        .order((u_dsl::total_checkins.desc(), u_dsl::id.asc()))
        .limit(limit as i64)
        .into_boxed();
    if let Some(city) = city {
        query = query.filter(u_dsl::city.eq(city.to_owned()));
    }
    let users = query
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;

    let user_ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    let badge_counts: Vec<(i64, i64)> = ub_dsl::user_badges
        .filter(ub_dsl::user_id.eq_any(&user_ids))
        .group_by(ub_dsl::user_id)
        .select((ub_dsl::user_id, diesel::dsl::count_star()))
        .load(conn)
        .map_err(from_diesel_err)?;

    Ok(users
        .into_iter()
        .map(|user| {
            let badge_count = badge_counts
                .iter()
                .find(|(user_id, _)| *user_id == user.id)
                .map_or(0, |(_, count)| *count as u64);
            (user.into(), badge_count)
        })
        .collect())
}
