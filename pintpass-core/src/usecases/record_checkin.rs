use super::prelude::*;

/// Records a visit of `user_id` at `venue_id` and resyncs the user's
/// check-in counter.
///
/// Both references are validated up front so that a dangling venue id
/// surfaces as `NotFound` instead of a foreign-key failure from the
/// storage backend.
pub fn record_checkin<R>(repo: &R, user_id: i64, venue_id: i64) -> Result<(Checkin, User)>
where
    R: UserRepo + VenueRepo + CheckinRepo,
{
    repo.get_user(user_id)?;
    repo.get_venue(venue_id)?;
    let checkin = repo.create_checkin(NewCheckin {
        user_id,
        venue_id,
        created_at: Timestamp::now(),
    })?;
    let user = refresh_total_checkins(repo, user_id)?;
    Ok((checkin, user))
}

/// Recomputes `total_checkins` from the authoritative count of check-in
/// rows and persists it on the user record.
///
/// The counter is a materialized cache; recomputing instead of
/// incrementing lets it self-heal from any prior drift.
pub fn refresh_total_checkins<R>(repo: &R, user_id: i64) -> Result<User>
where
    R: UserRepo + CheckinRepo,
{
    let total_checkins = repo.count_checkins_of_user(user_id)?;
    repo.update_total_checkins(user_id, total_checkins)?;
    Ok(repo.get_user(user_id)?)
}
