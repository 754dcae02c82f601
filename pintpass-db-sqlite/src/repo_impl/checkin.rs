use super::*;

impl<'a> CheckinRepo for DbReadOnly<'a> {
    fn create_checkin(&self, _checkin: NewCheckin) -> Result<Checkin> {
        unreachable!();
    }

    fn recent_checkins_of_user(&self, user_id: i64, limit: usize) -> Result<Vec<Checkin>> {
        recent_checkins_of_user(&mut self.conn.borrow_mut(), user_id, limit)
    }
    fn count_checkins_of_user(&self, user_id: i64) -> Result<u64> {
        count_checkins_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> CheckinRepo for DbReadWrite<'a> {
    fn create_checkin(&self, checkin: NewCheckin) -> Result<Checkin> {
        create_checkin(&mut self.conn.borrow_mut(), checkin)
    }

    fn recent_checkins_of_user(&self, user_id: i64, limit: usize) -> Result<Vec<Checkin>> {
        recent_checkins_of_user(&mut self.conn.borrow_mut(), user_id, limit)
    }
    fn count_checkins_of_user(&self, user_id: i64) -> Result<u64> {
        count_checkins_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> CheckinRepo for DbConnection<'a> {
    fn create_checkin(&self, checkin: NewCheckin) -> Result<Checkin> {
        create_checkin(&mut self.conn.borrow_mut(), checkin)
    }

    fn recent_checkins_of_user(&self, user_id: i64, limit: usize) -> Result<Vec<Checkin>> {
        recent_checkins_of_user(&mut self.conn.borrow_mut(), user_id, limit)
    }
    fn count_checkins_of_user(&self, user_id: i64) -> Result<u64> {
        count_checkins_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn create_checkin(conn: &mut SqliteConnection, c: NewCheckin) -> Result<Checkin> {
    let new_checkin = models::NewCheckin {
        user_id: c.user_id,
        venue_id: c.venue_id,
        created_at: c.created_at.into_millis(),
    };
    Ok(diesel::insert_into(schema::checkins::table)
        .values(&new_checkin)
        .get_result::<models::CheckinEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn recent_checkins_of_user(
    conn: &mut SqliteConnection,
    user_id: i64,
    limit: usize,
) -> Result<Vec<Checkin>> {
    use schema::checkins::dsl;
    Ok(dsl::checkins
        .filter(dsl::user_id.eq(user_id))
        .order((dsl::created_at.desc(), dsl::id.desc()))
        .limit(limit as i64)
        .load::<models::CheckinEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_checkins_of_user(conn: &mut SqliteConnection, user_id: i64) -> Result<u64> {
    use schema::checkins::dsl;
    Ok(dsl::checkins
        .filter(dsl::user_id.eq(user_id))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as u64)
}
