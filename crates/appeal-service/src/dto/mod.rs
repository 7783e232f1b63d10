//! Data transfer objects for the service layer

mod requests;

pub use requests::SubmitRequest;
