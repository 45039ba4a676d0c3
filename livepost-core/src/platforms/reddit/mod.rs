// File: src/platforms/reddit/mod.rs

pub mod client;
pub mod requests;
pub mod sink;

pub use client::{RedditClient, RedditEndpoints};
pub use sink::RedditAnnouncementSink;
