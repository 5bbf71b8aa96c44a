//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` entity structs matching database rows
//! - `Deserialize` create DTOs for inserts
//! - Language-resolved query rows used by the listing endpoints, where
//!   `name` is `Option<String>` (no translation stored for the requested
//!   language) and the text fields default to empty strings

pub mod category;
pub mod place;
pub mod refresh_token;
pub mod region;
pub mod subregion;
pub mod user;
