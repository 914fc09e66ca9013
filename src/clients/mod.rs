//! Client handles for the shop actor.

#[macro_use]
mod macros;
mod shop_client;

pub use shop_client::*;
