//! Wire types shared by the Olha chat client and anything that speaks its API.
//!
//! - `models`: entities returned by the server (users, channels, messages)
//! - `api`: request and response bodies that are not entities
//! - `events`: the display form of live chat messages

pub mod api;
pub mod events;
pub mod models;
