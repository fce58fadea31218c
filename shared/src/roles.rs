//! The role taxonomy the dashboard understands.

use serde::{Deserialize, Serialize};

/// Roles the admin dashboard can display, count, and assign.
///
/// The wire format stays `Vec<String>` (see [`crate::User`]); this enum only
/// describes the tags this client recognizes. Tags that don't parse are
/// ignored by the aggregator, not treated as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Dispatcher,
    Broker,
    Owner,
    Driver,
}

impl Role {
    /// Every recognized role, in the order the role picker lists them.
    pub const ALL: [Role; 6] = [
        Role::User,
        Role::Admin,
        Role::Dispatcher,
        Role::Broker,
        Role::Owner,
        Role::Driver,
    ];

    /// Parse a raw role tag; `None` for anything this client doesn't know.
    pub fn parse(tag: &str) -> Option<Role> {
        match tag {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            "dispatcher" => Some(Role::Dispatcher),
            "broker" => Some(Role::Broker),
            "owner" => Some(Role::Owner),
            "driver" => Some(Role::Driver),
            _ => None,
        }
    }

    /// The wire tag for this role.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Dispatcher => "dispatcher",
            Role::Broker => "broker",
            Role::Owner => "owner",
            Role::Driver => "driver",
        }
    }

    /// Human-readable label for tables and summary cards.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
            Role::Dispatcher => "Dispatcher",
            Role::Broker => "Broker",
            Role::Owner => "Owner",
            Role::Driver => "Driver",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn parse_round_trips_every_known_tag() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_tag()), Some(role));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_cased_tags() {
        assert_eq!(Role::parse("superadmin"), None);
        // Tags are exact-match; the backend lowercases before storing.
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(""), None);
    }
}
