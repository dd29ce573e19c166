use super::{DateTimeRange, InvalidRange};
use crate::ports::Repository;
use serde::Serialize;
use std::fmt::Display;

/// Location actions come in two kinds, stored in separate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// The configuration was located at fixed coordinates
    Static,
    /// The coordinates are read from measured quantities of mounted devices
    Dynamic,
}

impl Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static => f.write_str("static"),
            Self::Dynamic => f.write_str("dynamic"),
        }
    }
}

/// The temporal footprint of a stored location action, of either kind.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "T::LocationActionId: Serialize, T::DateTime: Serialize"))]
pub struct LocationTimeline<T: Repository> {
    /// Which table the action lives in
    pub kind: LocationKind,
    /// The id of the action within its kind
    pub id: T::LocationActionId,
    /// When the configuration arrived at the location
    pub begin_date: T::DateTime,
    /// When the configuration left, if it did
    pub end_date: Option<T::DateTime>,
}

impl<T: Repository> LocationTimeline<T> {
    /// The time span covered by the action
    pub fn range(&self) -> Result<DateTimeRange<T::DateTime>, InvalidRange> {
        DateTimeRange::new(self.begin_date.clone(), self.end_date.clone())
    }
}

/// The writable fields of a static location action.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "T::ConfigurationId: Serialize, T::DateTime: Serialize"))]
pub struct StaticLocationData<T: Repository> {
    /// The configuration that was located
    pub configuration_id: T::ConfigurationId,
    /// Begin of the location timeline
    pub begin_date: T::DateTime,
    /// End of the location timeline, if any
    pub end_date: Option<T::DateTime>,
    /// Easting or longitude
    pub x: Option<f64>,
    /// Northing or latitude
    pub y: Option<f64>,
    /// Elevation
    pub z: Option<f64>,
    /// The coordinate reference system of `x` and `y`
    pub epsg_code: Option<String>,
    /// The reference of `z`
    pub elevation_datum_name: Option<String>,
    /// A short name for the location
    pub label: Option<String>,
    /// Free text describing the begin
    pub begin_description: Option<String>,
    /// Free text describing the end
    pub end_description: Option<String>,
}

/// A stored static location action.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "
    T::LocationActionId: Serialize,
    T::ConfigurationId: Serialize,
    T::DateTime: Serialize,
"))]
pub struct StaticLocationAction<T: Repository> {
    /// Unique identifier within the static kind
    pub id: T::LocationActionId,
    /// The stored fields
    #[serde(flatten)]
    pub data: StaticLocationData<T>,
}

/// The writable fields of a dynamic location action.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "
    T::ConfigurationId: Serialize,
    T::DevicePropertyId: Serialize,
    T::DateTime: Serialize,
"))]
pub struct DynamicLocationData<T: Repository> {
    /// The configuration that was located
    pub configuration_id: T::ConfigurationId,
    /// Begin of the location timeline
    pub begin_date: T::DateTime,
    /// End of the location timeline, if any
    pub end_date: Option<T::DateTime>,
    /// The measured quantity providing the x coordinate
    pub x_property_id: Option<T::DevicePropertyId>,
    /// The measured quantity providing the y coordinate
    pub y_property_id: Option<T::DevicePropertyId>,
    /// The measured quantity providing the z coordinate
    pub z_property_id: Option<T::DevicePropertyId>,
    /// The coordinate reference system of `x` and `y`
    pub epsg_code: Option<String>,
    /// The reference of `z`
    pub elevation_datum_name: Option<String>,
    /// A short name for the location
    pub label: Option<String>,
    /// Free text describing the begin
    pub begin_description: Option<String>,
    /// Free text describing the end
    pub end_description: Option<String>,
}

impl<T: Repository> DynamicLocationData<T> {
    /// The referenced device properties in x, y, z order, skipping unset ones
    pub fn property_ids(&self) -> impl Iterator<Item = T::DevicePropertyId> {
        [self.x_property_id, self.y_property_id, self.z_property_id]
            .into_iter()
            .flatten()
    }
}

/// A stored dynamic location action.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "
    T::LocationActionId: Serialize,
    T::ConfigurationId: Serialize,
    T::DevicePropertyId: Serialize,
    T::DateTime: Serialize,
"))]
pub struct DynamicLocationAction<T: Repository> {
    /// Unique identifier within the dynamic kind
    pub id: T::LocationActionId,
    /// The stored fields
    #[serde(flatten)]
    pub data: DynamicLocationData<T>,
}

/// The writable fields of a location action of either kind.
#[derive(Debug, Clone, Serialize)]
#[serde(
    tag = "kind",
    rename_all = "lowercase",
    bound(serialize = "
        T::ConfigurationId: Serialize,
        T::DevicePropertyId: Serialize,
        T::DateTime: Serialize,
    ")
)]
pub enum LocationData<T: Repository> {
    /// Fields of a static location action
    Static(StaticLocationData<T>),
    /// Fields of a dynamic location action
    Dynamic(DynamicLocationData<T>),
}

impl<T: Repository> LocationData<T> {
    /// The kind of location action these fields belong to
    pub fn kind(&self) -> LocationKind {
        match self {
            Self::Static(_) => LocationKind::Static,
            Self::Dynamic(_) => LocationKind::Dynamic,
        }
    }

    /// The configuration that was located
    pub fn configuration_id(&self) -> T::ConfigurationId {
        match self {
            Self::Static(data) => data.configuration_id,
            Self::Dynamic(data) => data.configuration_id,
        }
    }

    /// The location timeline
    pub fn range(&self) -> Result<DateTimeRange<T::DateTime>, InvalidRange> {
        let (begin, end) = match self {
            Self::Static(data) => (&data.begin_date, &data.end_date),
            Self::Dynamic(data) => (&data.begin_date, &data.end_date),
        };
        DateTimeRange::new(begin.clone(), end.clone())
    }
}
