pub mod price_preference;
pub mod user_prefs;
