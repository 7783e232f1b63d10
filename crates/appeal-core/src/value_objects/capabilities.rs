//! Moderator capability flags
//!
//! Capabilities are resolved once at the chat-platform boundary (from the
//! caller's roles) and passed into the service layer as a typed flag set.
//! The core never compares role-name strings.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Capability flags held by an acting user
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u32 {
        /// May resolve a pending unban request
        const RESOLVE_REQUESTS = 1 << 0;
        /// May delete support channels
        const MANAGE_CHANNELS = 1 << 1;
    }
}

impl Capabilities {
    /// Full moderator capability set
    pub const MODERATOR: Self = Self::RESOLVE_REQUESTS.union(Self::MANAGE_CHANNELS);

    /// Check if all flags in `other` are present
    #[inline]
    pub fn has(&self, other: Self) -> bool {
        self.contains(other)
    }

    /// List the names of the set flags
    pub fn list(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::RESOLVE_REQUESTS) {
            names.push("RESOLVE_REQUESTS");
        }
        if self.contains(Self::MANAGE_CHANNELS) {
            names.push("MANAGE_CHANNELS");
        }
        names
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.list().join(" | "))
    }
}

/// The acting user as seen by the service layer: a display name for audit
/// fields plus the capabilities resolved at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub display_name: String,
    pub capabilities: Capabilities,
}

impl Actor {
    pub fn new(display_name: impl Into<String>, capabilities: Capabilities) -> Self {
        Self {
            display_name: display_name.into(),
            capabilities,
        }
    }

    /// An actor with no capabilities (a regular user)
    pub fn user(display_name: impl Into<String>) -> Self {
        Self::new(display_name, Capabilities::empty())
    }

    /// An actor holding the full moderator set
    pub fn moderator(display_name: impl Into<String>) -> Self {
        Self::new(display_name, Capabilities::MODERATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderator_set() {
        assert!(Capabilities::MODERATOR.has(Capabilities::RESOLVE_REQUESTS));
        assert!(Capabilities::MODERATOR.has(Capabilities::MANAGE_CHANNELS));
    }

    #[test]
    fn test_user_has_no_capabilities() {
        let actor = Actor::user("muuki");
        assert!(!actor.capabilities.has(Capabilities::RESOLVE_REQUESTS));
    }

    #[test]
    fn test_list() {
        assert_eq!(
            Capabilities::RESOLVE_REQUESTS.list(),
            vec!["RESOLVE_REQUESTS"]
        );
        assert_eq!(Capabilities::empty().list(), Vec::<&str>::new());
    }
}
