use super::{LocationPayload, ValidationError};
use crate::{
    models::{DateTimeRange, DeviceProperty, DynamicLocationData, LocationData, LocationKind, Map},
    ports::{DeviceRepository, LocationActionRepository, MountRepository},
};
use serde_json::Value;

/// Detail of the conflict raised when two location timelines overlap.
pub const OVERLAPPING_LOCATION: &str =
    "There is already a location action that is active for parts of the expected location timeline.";

/// Detail of the conflict raised when a measured quantity is not mounted long enough.
pub const UNCOVERED_PROPERTY: &str =
    "One of the measured quantities is not available for the whole location timeline.";

/// Detail of the conflict raised when an archived device is referenced.
pub const ARCHIVED_DEVICE: &str = "Usage of archived devices is not allowed";

type Result<T, E> = std::result::Result<T, ValidationError<E>>;

/// Gatekeeper for creating and updating location actions.
///
/// A configuration can only be at one place at a time, so the location
/// actions of a configuration, static and dynamic alike, must not overlap.
/// Dynamic location actions additionally require every referenced device
/// property to belong to an unarchived device that was mounted on the
/// configuration for the whole location timeline.
///
/// The validator only reads. It takes no locks, so two concurrent writes
/// that each pass validation can still produce an overlap unless the caller
/// serializes them.
pub struct LocationActionValidator<'a, T> {
    db: &'a T,
    kind: LocationKind,
}

impl<'a, T> LocationActionValidator<'a, T>
where
    T: LocationActionRepository + DeviceRepository + MountRepository + Sync,
{
    /// Create a validator for location actions of the given kind.
    pub fn new(db: &'a T, kind: LocationKind) -> Self {
        Self { db, kind }
    }

    /// Create a validator for static location actions.
    pub fn static_location(db: &'a T) -> Self {
        Self::new(db, LocationKind::Static)
    }

    /// Create a validator for dynamic location actions.
    pub fn dynamic_location(db: &'a T) -> Self {
        Self::new(db, LocationKind::Dynamic)
    }

    /// Validate the request to create a location action.
    ///
    /// # Returns
    ///
    /// The fields to store if the request is acceptable.
    #[tracing::instrument(skip_all, fields(kind = %self.kind))]
    pub async fn validate_create(&self, payload: &Value) -> Result<LocationData<T>, T::Error> {
        let payload = LocationPayload::<T>::from_value(payload)?;
        let data = match self.kind {
            LocationKind::Static => LocationData::Static(payload.new_static()?),
            LocationKind::Dynamic => LocationData::Dynamic(payload.new_dynamic()?),
        };

        self.check(&data, None).await?;
        tracing::info!(configuration_id = %data.configuration_id(), "location action accepted");
        Ok(data)
    }

    /// Validate the request to update the location action `action_id`.
    ///
    /// Members missing from the payload keep their stored values. The
    /// action itself is left out of the overlap check, so saving it unchanged
    /// never conflicts.
    ///
    /// # Returns
    ///
    /// The merged fields to store if the request is acceptable.
    #[tracing::instrument(skip_all, fields(kind = %self.kind, %action_id))]
    pub async fn validate_update(
        &self,
        payload: &Value,
        action_id: T::LocationActionId,
    ) -> Result<LocationData<T>, T::Error> {
        let current = self.current(action_id).await?;
        let payload = LocationPayload::<T>::from_value(payload)?;
        let data = match current {
            LocationData::Static(current) => LocationData::Static(payload.patch_static(current)?),
            LocationData::Dynamic(current) => {
                LocationData::Dynamic(payload.patch_dynamic(current)?)
            }
        };

        self.check(&data, Some(action_id)).await?;
        tracing::info!(configuration_id = %data.configuration_id(), "location action update accepted");
        Ok(data)
    }

    async fn current(&self, action_id: T::LocationActionId) -> Result<LocationData<T>, T::Error> {
        let current = match self.kind {
            LocationKind::Static => self
                .db
                .get_static_location_action(action_id)
                .await
                .map_err(ValidationError::Repository)?
                .map(|action| LocationData::Static(action.data)),
            LocationKind::Dynamic => self
                .db
                .get_dynamic_location_action(action_id)
                .await
                .map_err(ValidationError::Repository)?
                .map(|action| LocationData::Dynamic(action.data)),
        };

        current.ok_or_else(|| {
            tracing::warn!("location action does not exist");
            ValidationError::NotFound(format!(
                "There is no {} location action with id {action_id}",
                self.kind
            ))
        })
    }

    async fn check(
        &self,
        data: &LocationData<T>,
        ignore_id: Option<T::LocationActionId>,
    ) -> Result<(), T::Error> {
        let range = data.range()?;
        let configuration_id = data.configuration_id();

        self.check_overlap(configuration_id, &range, ignore_id)
            .await?;

        if let LocationData::Dynamic(dynamic) = data {
            let properties = self.properties(dynamic).await?;
            self.check_coverage(configuration_id, &range, &properties)
                .await?;
            self.check_archived(&properties).await?;
        }

        Ok(())
    }

    async fn check_overlap(
        &self,
        configuration_id: T::ConfigurationId,
        range: &DateTimeRange<T::DateTime>,
        ignore_id: Option<T::LocationActionId>,
    ) -> Result<(), T::Error> {
        let timelines = self
            .db
            .query_location_timelines(configuration_id)
            .await
            .map_err(ValidationError::Repository)?;
        tracing::debug!(count = timelines.len(), "comparing location timelines");

        for timeline in timelines {
            // ids are only unique within a kind
            if timeline.kind == self.kind && Some(timeline.id) == ignore_id {
                continue;
            }
            let existing = timeline.range().map_err(|_| {
                ValidationError::InconsistentData(format!(
                    "The {} location action {} ends before it begins",
                    timeline.kind, timeline.id
                ))
            })?;
            if existing.overlaps_with(range) {
                tracing::warn!(kind = %timeline.kind, id = %timeline.id, "overlapping location action");
                return Err(ValidationError::Conflict(OVERLAPPING_LOCATION.to_owned()));
            }
        }

        Ok(())
    }

    async fn properties(
        &self,
        data: &DynamicLocationData<T>,
    ) -> Result<Map<T::DevicePropertyId, DeviceProperty<T>>, T::Error> {
        let mut properties = Map::default();
        for property_id in data.property_ids() {
            if properties.contains_key(&property_id) {
                continue;
            }
            let property = self
                .db
                .get_device_property(property_id)
                .await
                .map_err(ValidationError::Repository)?
                .ok_or_else(|| {
                    ValidationError::NotFound(format!(
                        "There is no device property with id {property_id}"
                    ))
                })?;
            properties.insert(property_id, property);
        }
        Ok(properties)
    }

    async fn check_coverage(
        &self,
        configuration_id: T::ConfigurationId,
        range: &DateTimeRange<T::DateTime>,
        properties: &Map<T::DevicePropertyId, DeviceProperty<T>>,
    ) -> Result<(), T::Error> {
        let mut checked = Map::<T::DeviceId, ()>::default();
        for property in properties.values() {
            if checked.insert(property.device_id, ()).is_some() {
                continue;
            }

            let mounts = self
                .db
                .query_device_mount_actions(property.device_id, configuration_id)
                .await
                .map_err(ValidationError::Repository)?;
            tracing::debug!(device_id = %property.device_id, count = mounts.len(), "comparing mount timelines");

            let mut covered = false;
            for mount in &mounts {
                let mounted = mount.data.range().map_err(|_| {
                    ValidationError::InconsistentData(format!(
                        "The device mount action {} ends before it begins",
                        mount.id
                    ))
                })?;
                if mounted.covers(range) {
                    covered = true;
                    break;
                }
            }

            if !covered {
                tracing::warn!(property_id = %property.id, "measured quantity not mounted for the whole timeline");
                return Err(ValidationError::Conflict(UNCOVERED_PROPERTY.to_owned()));
            }
        }

        Ok(())
    }

    async fn check_archived(
        &self,
        properties: &Map<T::DevicePropertyId, DeviceProperty<T>>,
    ) -> Result<(), T::Error> {
        let mut checked = Map::<T::DeviceId, ()>::default();
        for property in properties.values() {
            if checked.insert(property.device_id, ()).is_some() {
                continue;
            }

            let device = self
                .db
                .get_device(property.device_id)
                .await
                .map_err(ValidationError::Repository)?
                .ok_or_else(|| {
                    ValidationError::InconsistentData(format!(
                        "The device property {} belongs to the missing device {}",
                        property.id, property.device_id
                    ))
                })?;

            if device.archived {
                tracing::warn!(device_id = %device.id, "archived device referenced");
                return Err(ValidationError::Conflict(ARCHIVED_DEVICE.to_owned()));
            }
        }

        Ok(())
    }
}
