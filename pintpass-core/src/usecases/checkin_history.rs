use super::prelude::*;

pub const CHECKIN_HISTORY_LIMIT: usize = 10;

/// The user's most recent check-ins, newest first, each joined with the
/// visited venue.
pub fn checkin_history<R>(repo: &R, user_id: i64) -> Result<Vec<(Checkin, Venue)>>
where
    R: CheckinRepo + VenueRepo,
{
    let checkins = repo.recent_checkins_of_user(user_id, CHECKIN_HISTORY_LIMIT)?;
    let mut history = Vec::with_capacity(checkins.len());
    for checkin in checkins {
        let venue = repo.get_venue(checkin.venue_id)?;
        history.push((checkin, venue));
    }
    Ok(history)
}
