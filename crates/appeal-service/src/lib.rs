//! # appeal-service
//!
//! Application layer: the request lifecycle controller, the rate limiter,
//! and the background sweep scheduler, all driven through a shared
//! `ServiceContext`.

pub mod dto;
pub mod services;

pub use dto::SubmitRequest;
pub use services::{
    RateLimiter, RequestService, ServiceContext, ServiceError, ServiceResult, SubmitOutcome,
    SweepScheduler,
};
