//! Single-owner actor around the shop state.

mod messages;
mod service;

pub use messages::*;
pub use service::*;
