//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Identifier of a stocked item (e.g. `"apple"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Name of a warehouse. Unique per allocation run; used as the output key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseName(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a value without validation.
            ///
            /// Use `str::parse` when the value comes from an untrusted source.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: cannot be blank", $name)));
                }
                Ok(Self(s.to_owned()))
            }
        }
    };
}

impl_string_newtype!(ItemId, "ItemId");
impl_string_newtype!(WarehouseName, "WarehouseName");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_identifiers() {
        let err = "   ".parse::<ItemId>().unwrap_err();
        assert_eq!(err, DomainError::InvalidId("ItemId: cannot be blank".to_string()));
        assert!("".parse::<WarehouseName>().is_err());
    }

    #[test]
    fn parse_keeps_value_verbatim() {
        let name: WarehouseName = "owd".parse().unwrap();
        assert_eq!(name.as_str(), "owd");
        assert_eq!(name.to_string(), "owd");
    }

    #[test]
    fn serializes_as_plain_string() {
        let item = ItemId::from("apple");
        assert_eq!(serde_json::to_string(&item).unwrap(), "\"apple\"");
        let back: ItemId = serde_json::from_str("\"apple\"").unwrap();
        assert_eq!(back, item);
    }
}
