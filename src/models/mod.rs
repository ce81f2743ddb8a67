//! Persisted entities and their declared field layouts.

mod event;
mod user;

pub use event::Event;
pub use user::User;
