//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing an ItemId where an OrderId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix on every generated order token.
pub const ORDER_ID_PREFIX: &str = "OW-";

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define all ID types
define_id!(ItemId);
define_id!(LineId);
define_id!(OrderId);

impl OrderId {
    /// Generate a short order token (e.g., "OW-7KQ2PX").
    pub fn generate() -> Self {
        Self(format!("{ORDER_ID_PREFIX}{}", random_token(6, UPPER)))
    }
}

impl LineId {
    /// Generate a new cart line ID.
    pub fn generate() -> Self {
        Self(format!("line-{}", random_token(8, LOWER)))
    }
}

const UPPER: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random token from the given alphabet.
fn random_token(len: usize, alphabet: &[u8]) -> String {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ItemId::new("hot-cheetos");
        assert_eq!(id.as_str(), "hot-cheetos");
    }

    #[test]
    fn test_id_from_string() {
        let id: ItemId = "oreos-snack".into();
        assert_eq!(id.as_str(), "oreos-snack");
    }

    #[test]
    fn test_id_display() {
        let id = OrderId::new("OW-ABC123");
        assert_eq!(format!("{}", id), "OW-ABC123");
    }

    #[test]
    fn test_id_equality() {
        let id1 = ItemId::new("same");
        let id2 = ItemId::new("same");
        let id3 = ItemId::new("different");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_order_id_generation() {
        let id = OrderId::generate();
        assert!(id.as_str().starts_with(ORDER_ID_PREFIX));
        assert_eq!(id.as_str().len(), ORDER_ID_PREFIX.len() + 6);
        assert_ne!(id, OrderId::generate());
    }

    #[test]
    fn test_line_id_generation() {
        let id = LineId::generate();
        assert!(id.as_str().starts_with("line-"));
        assert_ne!(id, LineId::generate());
    }
}
