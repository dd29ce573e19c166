use std::{fmt::Debug, fmt::Display, hash::Hash, str::FromStr};
use time::OffsetDateTime;

mod configuration;
mod device;
mod location;
mod mount;

pub use configuration::ConfigurationRepository;
pub use device::DeviceRepository;
pub use location::LocationActionRepository;
pub use mount::MountRepository;

/// Base repository trait defining the types shared by every port.
///
/// Storage adapters choose their own identifier and timestamp types. The core
/// only requires that identifiers can be parsed from (and printed back to) the
/// string form used in JSON:API documents, and that timestamps are totally
/// ordered and can be produced from a parsed `OffsetDateTime`.
pub trait Repository: Sized {
    /// The error type for underlying implementation failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// A timestamp type for temporal queries
    type DateTime: Clone + Ord + Debug + Display + Send + Sync + From<OffsetDateTime> + 'static;

    /// A unique identifier for configurations
    type ConfigurationId: Copy
        + Eq
        + Hash
        + Debug
        + Display
        + FromStr
        + Send
        + Sync
        + 'static;

    /// A unique identifier for devices
    type DeviceId: Copy + Eq + Hash + Debug + Display + FromStr + Send + Sync + 'static;

    /// A unique identifier for device properties (measured quantities)
    type DevicePropertyId: Copy
        + Eq
        + Hash
        + Debug
        + Display
        + FromStr
        + Send
        + Sync
        + 'static;

    /// A unique identifier for location actions.
    ///
    /// Static and dynamic location actions live in separate id spaces, so an
    /// id on its own is only meaningful together with a
    /// [`LocationKind`](crate::models::LocationKind).
    type LocationActionId: Copy
        + Eq
        + Hash
        + Debug
        + Display
        + FromStr
        + Send
        + Sync
        + 'static;

    /// A unique identifier for device mount actions
    type MountActionId: Copy + Eq + Hash + Debug + Display + FromStr + Send + Sync + 'static;
}
