use crate::ports::Repository;
use serde::Serialize;

/// A physical instrument registered in the system.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "T::DeviceId: Serialize"))]
pub struct Device<T: Repository> {
    /// Unique identifier of the device
    pub id: T::DeviceId,
    /// Short human readable name
    pub short_name: String,
    /// Archived devices are kept for history but must not be used in new records
    pub archived: bool,
}

/// A quantity measured by a device, e.g. the latitude reported by a GPS.
///
/// Dynamic location actions read their coordinates from device properties.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "T::DevicePropertyId: Serialize, T::DeviceId: Serialize"))]
pub struct DeviceProperty<T: Repository> {
    /// Unique identifier of the property
    pub id: T::DevicePropertyId,
    /// The device that measures this property
    pub device_id: T::DeviceId,
    /// Name of the measured quantity
    pub property_name: String,
    /// Unit of the measured values, if known
    pub unit_name: Option<String>,
}
