//! Strongly-typed identifier types for registry entities.
//!
//! SQLite hands out integer row ids; these newtypes keep the ids of different
//! tables from being mixed up at compile time. All of them serialize as plain
//! integers, are stored as SQLite integers, and parse from the decimal string
//! form JSON:API uses for resource identifiers.

macro_rules! new_id {
    ($struct:ident) => {
        new_id!($struct, "A newtype wrapper around a row id");
    };
    ($struct:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $struct(pub i64);

        impl From<i64> for $struct {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$struct> for i64 {
            fn from(value: $struct) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $struct {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

new_id!(ConfigurationId, "Unique identifier for a configuration");
new_id!(DeviceId, "Unique identifier for a device");
new_id!(
    DevicePropertyId,
    "Unique identifier for a quantity measured by a device"
);
new_id!(
    LocationActionId,
    "Unique identifier for a location action, within its kind"
);
new_id!(MountActionId);
