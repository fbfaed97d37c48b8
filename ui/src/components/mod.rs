//! Shared building blocks for the dashboard screens.
pub mod empty_state;
pub mod pico;
pub mod wallet_connect;
