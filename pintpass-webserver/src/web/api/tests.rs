use pintpass_core::repositories::{BadgeRepo as _, NewBadge, NewVenue, VenueRepo as _};

use super::*;
use crate::web::{api, sqlite, tests::prelude::*};

fn setup() -> (Client, sqlite::Connections) {
    crate::web::tests::setup(vec![("/", api::routes())])
}

fn seed_venue(db: &sqlite::Connections, name: &str) -> Venue {
    db.exclusive()
        .unwrap()
        .create_venue(NewVenue {
            name: name.into(),
            address: "1 Test Lane".into(),
            lat: "51.5".into(),
            lng: "-0.1".into(),
            image_url: None,
            description: None,
            rating: None,
            distance: None,
        })
        .unwrap()
}

fn seed_badge(db: &sqlite::Connections, name: &str, threshold: u64) -> Badge {
    db.exclusive()
        .unwrap()
        .create_badge(NewBadge {
            name: name.into(),
            description: format!("{name} badge"),
            icon_url: "https://img.example.com/badge.png".into(),
            threshold,
            kind: BadgeKind::Checkins,
            tier: BadgeTier::Bronze,
        })
        .unwrap()
}

/// Signs up a fresh account; the tracked client keeps the session
/// cookie afterwards.
fn signup(client: &Client, email: &str) -> json::User {
    let res = client
        .post("/auth/signup")
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"email":"{email}","name":"Test User","city":"London","password":"secret1"}}"#
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    serde_json::from_str(&res.into_string().unwrap()).unwrap()
}

fn check_in(client: &Client, venue_id: i64) -> json::CheckinResponse {
    let res = client
        .post("/checkins")
        .header(ContentType::JSON)
        .body(format!(r#"{{"venue_id":{venue_id}}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    serde_json::from_str(&res.into_string().unwrap()).unwrap()
}

#[test]
fn get_version() {
    let (client, _) = setup();
    let res = client.get("/version").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.into_string().unwrap(), DUMMY_VERSION);
}

#[test]
fn current_user_without_session() {
    let (client, _) = setup();
    let res = client.get("/users/me").dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn signup_and_current_user() {
    let (client, _) = setup();
    let user = signup(&client, "user@example.com");
    assert_eq!(user.email, "user@example.com");
    assert_eq!(user.total_checkins, 0);
    assert!(user.username.starts_with("testuser"));

    let res = client.get("/users/me").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    // The password hash must never be serialized.
    assert!(!body.contains("password"));
    let me: json::User = serde_json::from_str(&body).unwrap();
    assert_eq!(me.id, user.id);
}

#[test]
fn signup_with_taken_email() {
    let (client, _) = setup();
    signup(&client, "user@example.com");
    let res = client
        .post("/auth/signup")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com","name":"X","city":"Y","password":"secret1"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn login_with_invalid_credentials() {
    let (client, _) = setup();
    signup(&client, "user@example.com");

    let res = client
        .post("/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com","password":"wrong!"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let res = client
        .post("/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"nobody@example.com","password":"secret1"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn logout_clears_the_session() {
    let (client, _) = setup();
    signup(&client, "user@example.com");

    let res = client
        .post("/auth/logout")
        .header(ContentType::JSON)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client.get("/users/me").dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn check_in_awards_badges_and_mints_rewards() {
    let (client, db) = setup();
    let venue = seed_venue(&db, "The Hop Inn");
    let first = seed_badge(&db, "First Sip", 1);
    seed_badge(&db, "Regular", 10);
    signup(&client, "user@example.com");

    let response = check_in(&client, venue.id);
    assert_eq!(response.user.total_checkins, 1);
    assert_eq!(response.checkin.venue_id, venue.id);
    assert_eq!(response.new_badges.len(), 1);
    assert_eq!(response.new_badges[0].id, first.id);
    assert_eq!(response.new_rewards.len(), 1);
    assert!(response.new_rewards[0].code.starts_with("REWARD-"));
    assert_eq!(response.new_rewards[0].expiry_days, Some(30));

    // The second visit crosses no threshold.
    let response = check_in(&client, venue.id);
    assert_eq!(response.user.total_checkins, 2);
    assert!(response.new_badges.is_empty());
    assert!(response.new_rewards.is_empty());
}

#[test]
fn check_in_at_unknown_venue() {
    let (client, _) = setup();
    signup(&client, "user@example.com");
    let res = client
        .post("/checkins")
        .header(ContentType::JSON)
        .body(r#"{"venue_id":4711}"#)
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn check_in_with_malformed_payload() {
    let (client, db) = setup();
    seed_venue(&db, "The Hop Inn");
    signup(&client, "user@example.com");
    let res = client
        .post("/checkins")
        .header(ContentType::JSON)
        .body(r#"{"venue_id":"not a number"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn checkin_history_is_annotated_with_venues() {
    let (client, db) = setup();
    let venue = seed_venue(&db, "The Hop Inn");
    signup(&client, "user@example.com");
    check_in(&client, venue.id);
    check_in(&client, venue.id);

    let res = client.get("/checkins/history").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let history: Vec<json::CheckinWithVenue> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|c| c.venue.name == "The Hop Inn"));
}

#[test]
fn badge_catalog_is_annotated_per_user() {
    let (client, db) = setup();
    let venue = seed_venue(&db, "The Hop Inn");
    let first = seed_badge(&db, "First Sip", 1);
    let locked = seed_badge(&db, "Regular", 10);
    signup(&client, "user@example.com");
    check_in(&client, venue.id);

    let res = client.get("/badges").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let badges: Vec<json::BadgeWithStatus> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(badges.len(), 2);
    let unlocked = badges.iter().find(|b| b.id == first.id).unwrap();
    assert!(unlocked.unlocked);
    assert!(unlocked.unlocked_at.is_some());
    let still_locked = badges.iter().find(|b| b.id == locked.id).unwrap();
    assert!(!still_locked.unlocked);
    assert!(still_locked.unlocked_at.is_none());
}

#[test]
fn redeem_reward_once() {
    let (client, db) = setup();
    let venue = seed_venue(&db, "The Hop Inn");
    seed_badge(&db, "First Sip", 1);
    signup(&client, "user@example.com");
    let response = check_in(&client, venue.id);
    let reward_id = response.new_rewards[0].id;

    let res = client
        .post("/rewards/redeem")
        .header(ContentType::JSON)
        .body(format!(r#"{{"reward_id":{reward_id}}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let reward: json::Reward = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(reward.redeemed);

    // Redeeming the same reward again must fail.
    let res = client
        .post("/rewards/redeem")
        .header(ContentType::JSON)
        .body(format!(r#"{{"reward_id":{reward_id}}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);

    // The rewards listing still shows it as redeemed.
    let res = client.get("/rewards").dispatch();
    let rewards: Vec<json::Reward> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(rewards.len(), 1);
    assert!(rewards[0].redeemed);
}

#[test]
fn redeeming_a_foreign_reward_is_not_found() {
    let (client, db) = setup();
    let venue = seed_venue(&db, "The Hop Inn");
    seed_badge(&db, "First Sip", 1);
    signup(&client, "owner@example.com");
    let response = check_in(&client, venue.id);
    let reward_id = response.new_rewards[0].id;

    // Switching accounts replaces the session cookie.
    signup(&client, "other@example.com");
    let res = client
        .post("/rewards/redeem")
        .header(ContentType::JSON)
        .body(format!(r#"{{"reward_id":{reward_id}}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn leaderboard_ranks_users() {
    let (client, db) = setup();
    let venue = seed_venue(&db, "The Hop Inn");
    seed_badge(&db, "First Sip", 1);

    let alice = signup(&client, "alice@example.com");
    check_in(&client, venue.id);

    let bob = signup(&client, "bob@example.com");
    check_in(&client, venue.id);
    check_in(&client, venue.id);

    let res = client.get("/leaderboard").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let entries: Vec<json::LeaderboardUser> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(
        entries.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![bob.id, alice.id]
    );
    assert_eq!(
        entries.iter().map(|e| e.rank).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert!(entries.iter().all(|e| e.badge_count == 1));
}

#[test]
fn leaderboard_with_city_filter() {
    let (client, db) = setup();
    let venue = seed_venue(&db, "The Hop Inn");

    signup(&client, "alice@example.com");
    check_in(&client, venue.id);

    let res = client.get("/leaderboard?city=Paris").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let entries: Vec<json::LeaderboardUser> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(entries.is_empty());

    let res = client.get("/leaderboard?city=London").dispatch();
    let entries: Vec<json::LeaderboardUser> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(entries.len(), 1);
}
