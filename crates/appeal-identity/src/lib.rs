//! # appeal-identity
//!
//! HTTP clients for the two external identity providers and the
//! `IdentityVerifier` port implementation built on top of them.
//!
//! All lookups are read-only and uncached; every verification hits the
//! providers fresh, with a bounded per-request timeout.

mod faceit;
mod steam;
mod verifier;

pub use faceit::{FaceitClient, FaceitProfile};
pub use steam::{SteamClient, SteamProfile};
pub use verifier::HttpIdentityVerifier;
