//! Request middleware: authentication extraction.

pub mod auth;

pub use auth::AuthUser;
