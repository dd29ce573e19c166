use crate::models::{DeviceMountAction, DeviceMountData};

/// Repository interface for device mount actions.
///
/// The location validation only ever reads mount actions; they serve as
/// evidence that a device was present on a configuration for some span.
pub trait MountRepository: super::Repository {
    /// Store a new mount action.
    fn create_device_mount_action(
        &self,
        data: DeviceMountData<Self>,
    ) -> impl Future<Output = Result<DeviceMountAction<Self>, Self::Error>> + Send;

    /// Query all the mount actions of a device on a specific configuration.
    ///
    /// # Returns
    ///
    /// The mount actions ordered by their begin date.
    fn query_device_mount_actions(
        &self,
        device_id: Self::DeviceId,
        configuration_id: Self::ConfigurationId,
    ) -> impl Future<Output = Result<Vec<DeviceMountAction<Self>>, Self::Error>> + Send;
}
