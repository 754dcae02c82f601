use super::*;

impl<'a> BadgeRepo for DbReadOnly<'a> {
    fn create_badge(&self, _badge: NewBadge) -> Result<Badge> {
        unreachable!();
    }

    fn all_badges(&self) -> Result<Vec<Badge>> {
        all_badges(&mut self.conn.borrow_mut())
    }
    fn count_badges(&self) -> Result<usize> {
        count_badges(&mut self.conn.borrow_mut())
    }
    fn badges_unlocked_by_user(&self, user_id: i64) -> Result<Vec<(Badge, Timestamp)>> {
        badges_unlocked_by_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> BadgeRepo for DbReadWrite<'a> {
    fn create_badge(&self, badge: NewBadge) -> Result<Badge> {
        create_badge(&mut self.conn.borrow_mut(), badge)
    }

    fn all_badges(&self) -> Result<Vec<Badge>> {
        all_badges(&mut self.conn.borrow_mut())
    }
    fn count_badges(&self) -> Result<usize> {
        count_badges(&mut self.conn.borrow_mut())
    }
    fn badges_unlocked_by_user(&self, user_id: i64) -> Result<Vec<(Badge, Timestamp)>> {
        badges_unlocked_by_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> BadgeRepo for DbConnection<'a> {
    fn create_badge(&self, badge: NewBadge) -> Result<Badge> {
        create_badge(&mut self.conn.borrow_mut(), badge)
    }

    fn all_badges(&self) -> Result<Vec<Badge>> {
        all_badges(&mut self.conn.borrow_mut())
    }
    fn count_badges(&self) -> Result<usize> {
        count_badges(&mut self.conn.borrow_mut())
    }
    fn badges_unlocked_by_user(&self, user_id: i64) -> Result<Vec<(Badge, Timestamp)>> {
        badges_unlocked_by_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> UserBadgeRepo for DbReadOnly<'a> {
    fn create_user_badge(&self, _user_badge: &UserBadge) -> Result<()> {
        unreachable!();
    }

    fn badge_ids_of_user(&self, user_id: i64) -> Result<Vec<i64>> {
        badge_ids_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> UserBadgeRepo for DbReadWrite<'a> {
    fn create_user_badge(&self, user_badge: &UserBadge) -> Result<()> {
        create_user_badge(&mut self.conn.borrow_mut(), user_badge)
    }

    fn badge_ids_of_user(&self, user_id: i64) -> Result<Vec<i64>> {
        badge_ids_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> UserBadgeRepo for DbConnection<'a> {
    fn create_user_badge(&self, user_badge: &UserBadge) -> Result<()> {
        create_user_badge(&mut self.conn.borrow_mut(), user_badge)
    }

    fn badge_ids_of_user(&self, user_id: i64) -> Result<Vec<i64>> {
        badge_ids_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn create_badge(conn: &mut SqliteConnection, b: NewBadge) -> Result<Badge> {
    let new_badge = models::NewBadge {
        name: &b.name,
        description: &b.description,
        icon_url: &b.icon_url,
        threshold: b.threshold as i64,
        badge_type: b.kind.to_string(),
        color: b.tier.to_string(),
    };
    Ok(diesel::insert_into(schema::badges::table)
        .values(&new_badge)
        .get_result::<models::BadgeEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_badges(conn: &mut SqliteConnection) -> Result<Vec<Badge>> {
    use schema::badges::dsl;
    Ok(dsl::badges
        .load::<models::BadgeEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_badges(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::badges::dsl;
    Ok(dsl::badges
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn badges_unlocked_by_user(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<(Badge, Timestamp)>> {
    use schema::{badges::dsl as b_dsl, user_badges::dsl as ub_dsl};
    Ok(b_dsl::badges
        .inner_join(ub_dsl::user_badges)
        .filter(ub_dsl::user_id.eq(user_id))
        .select((
            (
                b_dsl::id,
                b_dsl::name,
                b_dsl::description,
                b_dsl::icon_url,
                b_dsl::threshold,
                b_dsl::badge_type,
                b_dsl::color,
            ),
            ub_dsl::unlocked_at,
        ))
        .load::<(models::BadgeEntity, i64)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(badge, unlocked_at)| (badge.into(), Timestamp::from_millis(unlocked_at)))
        .collect())
}

fn create_user_badge(conn: &mut SqliteConnection, ub: &UserBadge) -> Result<()> {
    let new_user_badge = models::NewUserBadge {
        user_id: ub.user_id,
        badge_id: ub.badge_id,
        unlocked_at: ub.unlocked_at.into_millis(),
    };
    diesel::insert_into(schema::user_badges::table)
        .values(&new_user_badge)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn badge_ids_of_user(conn: &mut SqliteConnection, user_id: i64) -> Result<Vec<i64>> {
    use schema::user_badges::dsl;
    Ok(dsl::user_badges
        .filter(dsl::user_id.eq(user_id))
        .select(dsl::badge_id)
        .load::<i64>(conn)
        .map_err(from_diesel_err)?)
}
