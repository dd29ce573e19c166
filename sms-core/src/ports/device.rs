use crate::models::{Device, DeviceProperty};

/// Repository interface for devices and the quantities they measure.
pub trait DeviceRepository: super::Repository {
    /// Register a new, unarchived device.
    fn create_device(
        &self,
        short_name: String,
    ) -> impl Future<Output = Result<Device<Self>, Self::Error>> + Send;

    /// Retrieve a device, returning Option::None if it does not exist.
    fn get_device(
        &self,
        device_id: Self::DeviceId,
    ) -> impl Future<Output = Result<Option<Device<Self>>, Self::Error>> + Send;

    /// Archive or restore a device.
    ///
    /// # Returns
    ///
    /// - Ok(true) if successful
    /// - Ok(false) if no such device exists
    /// - Err otherwise
    fn set_device_archived(
        &self,
        device_id: Self::DeviceId,
        archived: bool,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Register a measured quantity for an existing device.
    fn create_device_property(
        &self,
        device_id: Self::DeviceId,
        property_name: String,
        unit_name: Option<String>,
    ) -> impl Future<Output = Result<DeviceProperty<Self>, Self::Error>> + Send;

    /// Retrieve a device property, returning Option::None if it does not exist.
    fn get_device_property(
        &self,
        property_id: Self::DevicePropertyId,
    ) -> impl Future<Output = Result<Option<DeviceProperty<Self>>, Self::Error>> + Send;
}
