//! Typed entity identifiers
//!
//! Every table uses a database-generated `BIGINT` key. Wrapping each one in
//! its own newtype keeps a `ChannelId` from being passed where a `UserId` is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error when parsing an identifier from user input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid {kind} id: {value:?}")]
    InvalidFormat { kind: &'static str, value: String },

    #[error("{kind} id must be positive")]
    NotPositive { kind: &'static str },
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an identifier from a raw database key
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Parse a positive identifier from text
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                let value = s.trim().parse::<i64>().map_err(|_| IdParseError::InvalidFormat {
                    kind: $kind,
                    value: s.to_string(),
                })?;
                if value <= 0 {
                    return Err(IdParseError::NotPositive { kind: $kind });
                }
                Ok(Self(value))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`User`](crate::entities::User)
    UserId,
    "user"
);
entity_id!(
    /// Identifier of a [`Group`](crate::entities::Group)
    GroupId,
    "group"
);
entity_id!(
    /// Identifier of a [`Channel`](crate::entities::Channel)
    ChannelId,
    "channel"
);
entity_id!(
    /// Identifier of a [`Message`](crate::entities::Message)
    MessageId,
    "message"
);
