use crate::ports::Repository;
use serde::Serialize;

/// An assembled set of devices and platforms that is deployed as a unit.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "T::ConfigurationId: Serialize"))]
pub struct Configuration<T: Repository> {
    /// Unique identifier of the configuration
    pub id: T::ConfigurationId,
    /// Human readable name
    pub label: String,
}
