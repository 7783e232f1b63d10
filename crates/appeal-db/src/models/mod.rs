//! Database models - SQLx-compatible structs for PostgreSQL tables

mod unban_request;

pub use unban_request::UnbanRequestModel;
