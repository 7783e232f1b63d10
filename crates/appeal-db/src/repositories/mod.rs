//! Repository implementations
//!
//! PostgreSQL implementation of the request-store port defined in appeal-core.

mod error;
mod unban_request;

pub use unban_request::PgRequestRepository;
