// File: src/platforms/twitch/mod.rs

pub mod client;
pub mod requests;
pub mod source;

pub use client::{TwitchEndpoints, TwitchHelixClient};
pub use source::TwitchStreamSource;
