//! User entity

use super::Entity;
use crate::value_objects::Snowflake;
use serde::{Deserialize, Serialize};

/// A user account as delivered by the remote API
///
/// Every field has a default so partial payloads still decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User identifier
    pub id: Snowflake,
    /// Account name
    pub username: String,
    /// Legacy four-digit tag
    pub discriminator: String,
    /// Display name, if set
    pub global_name: Option<String>,
    /// Avatar hash
    pub avatar: Option<String>,
    /// Whether the account is a bot
    pub bot: bool,
    /// Whether the account is an official system account
    pub system: bool,
    /// Whether two-factor authentication is enabled
    pub mfa_enabled: bool,
    /// Chosen language
    pub locale: Option<String>,
    /// Whether the email address is verified
    pub verified: bool,
    /// Email address (only present with the right scope)
    pub email: Option<String>,
    /// Account flags bitfield
    pub flags: u64,
    /// Subscription tier
    pub premium_type: u8,
    /// Public flags bitfield
    pub public_flags: u64,
}

impl User {
    /// Create a user with the given id and name, other fields defaulted
    pub fn new<S: Into<String>>(id: Snowflake, username: S) -> Self {
        Self {
            id,
            username: username.into(),
            ..Self::default()
        }
    }

    /// `username#discriminator`, or the bare username for migrated accounts
    pub fn tag(&self) -> String {
        if self.discriminator.is_empty() || self.discriminator == "0" {
            self.username.clone()
        } else {
            format!("{}#{}", self.username, self.discriminator)
        }
    }
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> Snowflake {
        self.id
    }
}
