///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        email -> Text,
        username -> Text,
        name -> Text,
        city -> Text,
        total_checkins -> BigInt,
        password -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Venues
///////////////////////////////////////////////////////////////////////

table! {
    venues (id) {
        id -> BigInt,
        name -> Text,
        address -> Text,
        lat -> Text,
        lng -> Text,
        image_url -> Nullable<Text>,
        description -> Nullable<Text>,
        rating -> Nullable<Integer>,
        distance -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Check-ins
///////////////////////////////////////////////////////////////////////

table! {
    checkins (id) {
        id -> BigInt,
        user_id -> BigInt,
        venue_id -> BigInt,
        created_at -> BigInt,
    }
}

joinable!(checkins -> users (user_id));
joinable!(checkins -> venues (venue_id));

///////////////////////////////////////////////////////////////////////
// Badges
///////////////////////////////////////////////////////////////////////

table! {
    badges (id) {
        id -> BigInt,
        name -> Text,
        description -> Text,
        icon_url -> Text,
        threshold -> BigInt,
        badge_type -> Text,
        color -> Text,
    }
}

table! {
    user_badges (id) {
        id -> BigInt,
        user_id -> BigInt,
        badge_id -> BigInt,
        unlocked_at -> BigInt,
    }
}

joinable!(user_badges -> users (user_id));
joinable!(user_badges -> badges (badge_id));

///////////////////////////////////////////////////////////////////////
// Rewards
///////////////////////////////////////////////////////////////////////

table! {
    rewards (id) {
        id -> BigInt,
        badge_id -> BigInt,
        user_id -> BigInt,
        code -> Text,
        details -> Text,
        expiry_days -> Nullable<Integer>,
        redeemed -> Bool,
    }
}

joinable!(rewards -> users (user_id));
joinable!(rewards -> badges (badge_id));

allow_tables_to_appear_in_same_query!(users, user_badges);
allow_tables_to_appear_in_same_query!(badges, user_badges);
allow_tables_to_appear_in_same_query!(checkins, venues);
