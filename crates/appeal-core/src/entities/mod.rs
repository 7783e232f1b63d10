//! Domain entities

mod unban_request;

pub use unban_request::{RequestSubmission, Resolution, ResolutionParseError, UnbanRequest};
