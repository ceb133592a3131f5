use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing a `shard.realm.num` entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("{kind} must not be null")]
    Missing { kind: &'static str },
    #[error("{kind} must have the form shard.realm.num, got `{input}`")]
    Malformed { kind: &'static str, input: String },
    #[error("{kind} component `{component}` is not a valid number")]
    InvalidComponent {
        kind: &'static str,
        component: String,
    },
}

/// Parse the three dot separated components shared by every ledger entity id.
fn parse_components(kind: &'static str, input: &str) -> Result<[u64; 3], IdParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IdParseError::Missing { kind });
    }

    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() != 3 {
        return Err(IdParseError::Malformed {
            kind,
            input: input.to_string(),
        });
    }

    let mut out = [0u64; 3];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<u64>()
            .map_err(|_| IdParseError::InvalidComponent {
                kind,
                component: part.to_string(),
            })?;
    }
    Ok(out)
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name {
            pub shard: u64,
            pub realm: u64,
            pub num: u64,
        }

        impl $name {
            pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
                Self { shard, realm, num }
            }

            /// Shorthand for an entity in shard 0, realm 0.
            pub const fn from_num(num: u64) -> Self {
                Self::new(0, 0, num)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let [shard, realm, num] = parse_components($kind, s)?;
                Ok(Self { shard, realm, num })
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

entity_id!(
    /// Network-assigned handle of a stored file.
    FileId,
    "fileId"
);

entity_id!(
    /// Ledger account, used to address consensus nodes.
    AccountId,
    "accountId"
);
