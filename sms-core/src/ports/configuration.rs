use crate::models::Configuration;

/// Repository interface for configurations.
pub trait ConfigurationRepository: super::Repository {
    /// Register a new, empty configuration.
    fn create_configuration(
        &self,
        label: String,
    ) -> impl Future<Output = Result<Configuration<Self>, Self::Error>> + Send;

    /// Retrieve a configuration, returning Option::None if it does not exist.
    fn get_configuration(
        &self,
        configuration_id: Self::ConfigurationId,
    ) -> impl Future<Output = Result<Option<Configuration<Self>>, Self::Error>> + Send;
}
