use super::{DateTimeRange, InvalidRange};
use crate::ports::Repository;
use serde::Serialize;

/// The writable fields of a device mount action.
///
/// A mount action records that a device was physically attached to a
/// configuration from `begin_date` until `end_date` (or until further notice,
/// if no end is given).
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "
    T::ConfigurationId: Serialize,
    T::DeviceId: Serialize,
    T::DateTime: Serialize,
"))]
pub struct DeviceMountData<T: Repository> {
    /// The configuration the device was mounted on
    pub configuration_id: T::ConfigurationId,
    /// The mounted device
    pub device_id: T::DeviceId,
    /// When the device was mounted
    pub begin_date: T::DateTime,
    /// When the device was unmounted, if ever
    pub end_date: Option<T::DateTime>,
    /// Offset of the device relative to the configuration origin
    pub offset_x: f64,
    /// Offset of the device relative to the configuration origin
    pub offset_y: f64,
    /// Offset of the device relative to the configuration origin
    pub offset_z: f64,
    /// Free text describing the mount
    pub begin_description: Option<String>,
    /// Free text describing the unmount
    pub end_description: Option<String>,
}

impl<T: Repository> DeviceMountData<T> {
    /// The time span during which the device was mounted
    pub fn range(&self) -> Result<DateTimeRange<T::DateTime>, InvalidRange> {
        DateTimeRange::new(self.begin_date.clone(), self.end_date.clone())
    }
}

/// A stored device mount action.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "
    T::MountActionId: Serialize,
    T::ConfigurationId: Serialize,
    T::DeviceId: Serialize,
    T::DateTime: Serialize,
"))]
pub struct DeviceMountAction<T: Repository> {
    /// Unique identifier of the mount action
    pub id: T::MountActionId,
    /// The stored fields
    #[serde(flatten)]
    pub data: DeviceMountData<T>,
}
