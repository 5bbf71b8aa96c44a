//! Domain primitives shared by the korip database and API crates.
//!
//! - [`error`] -- the domain error enumeration and its wire error codes.
//! - [`lang`] -- supported language codes and their legacy aliases.
//! - [`types`] -- shared type aliases for ids and timestamps.

pub mod error;
pub mod lang;
pub mod types;
