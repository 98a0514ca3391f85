//! HTTP Handlers

mod ping;
mod user;

pub use ping::*;
pub use user::*;
