use crate::models::{
    DynamicLocationAction, DynamicLocationData, LocationTimeline, StaticLocationAction,
    StaticLocationData,
};

/// Repository interface for static and dynamic location actions.
///
/// None of these methods validate anything: callers are expected to run the
/// [`LocationActionValidator`](crate::validation::LocationActionValidator)
/// first and only write the data it returns.
pub trait LocationActionRepository: super::Repository {
    /// Query the timelines of all location actions of a configuration, of
    /// both kinds, ordered by begin date.
    fn query_location_timelines(
        &self,
        configuration_id: Self::ConfigurationId,
    ) -> impl Future<Output = Result<Vec<LocationTimeline<Self>>, Self::Error>> + Send;

    /// Store a new static location action.
    fn create_static_location_action(
        &self,
        data: StaticLocationData<Self>,
    ) -> impl Future<Output = Result<StaticLocationAction<Self>, Self::Error>> + Send;

    /// Retrieve a static location action, returning Option::None if it does not exist.
    fn get_static_location_action(
        &self,
        action_id: Self::LocationActionId,
    ) -> impl Future<Output = Result<Option<StaticLocationAction<Self>>, Self::Error>> + Send;

    /// Replace the stored fields of a static location action.
    ///
    /// # Returns
    ///
    /// The updated record, or Option::None if no such action exists.
    fn update_static_location_action(
        &self,
        action_id: Self::LocationActionId,
        data: StaticLocationData<Self>,
    ) -> impl Future<Output = Result<Option<StaticLocationAction<Self>>, Self::Error>> + Send;

    /// Delete a static location action, returning whether it existed.
    fn delete_static_location_action(
        &self,
        action_id: Self::LocationActionId,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Store a new dynamic location action.
    fn create_dynamic_location_action(
        &self,
        data: DynamicLocationData<Self>,
    ) -> impl Future<Output = Result<DynamicLocationAction<Self>, Self::Error>> + Send;

    /// Retrieve a dynamic location action, returning Option::None if it does not exist.
    fn get_dynamic_location_action(
        &self,
        action_id: Self::LocationActionId,
    ) -> impl Future<Output = Result<Option<DynamicLocationAction<Self>>, Self::Error>> + Send;

    /// Replace the stored fields of a dynamic location action.
    ///
    /// # Returns
    ///
    /// The updated record, or Option::None if no such action exists.
    fn update_dynamic_location_action(
        &self,
        action_id: Self::LocationActionId,
        data: DynamicLocationData<Self>,
    ) -> impl Future<Output = Result<Option<DynamicLocationAction<Self>>, Self::Error>> + Send;

    /// Delete a dynamic location action, returning whether it existed.
    fn delete_dynamic_location_action(
        &self,
        action_id: Self::LocationActionId,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
