//! Value objects - immutable domain primitives

mod account_id;
mod capabilities;
mod channel;

pub use account_id::{AccountId, AccountIdParseError};
pub use capabilities::{Actor, Capabilities};
pub use channel::ChannelId;
