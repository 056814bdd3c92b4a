//! Strongly-typed identifiers for domain entities
//!
//! Storage assigns integer keys to every row. Wrapping them in newtypes keeps a
//! seller key from being passed where a department key is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a storage-assigned key
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the raw key as stored in the database
            pub const fn value(&self) -> i32 {
                self.0
            }

            /// Renders the identifier with its prefix for log fields, e.g. `SEL-11`
            pub fn tagged(&self) -> String {
                format!("{}-{}", $prefix, self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = CoreError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                i32::try_from(value).map(Self).map_err(|_| {
                    CoreError::invalid_identifier(format!(
                        "{} key {} is out of range",
                        $prefix, value
                    ))
                })
            }
        }
    };
}

define_id!(SellerId, "SEL");
define_id!(DepartmentId, "DEP");
