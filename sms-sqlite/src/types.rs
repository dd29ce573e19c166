//! Type definitions for the SQLite implementation.
//!
//! This module contains both public types used throughout the crate and internal
//! types used for database row mapping. The public types include strongly-typed
//! IDs and datetime representations that ensure type safety across the system.

use crate::Db;
use sms_core::models::{
    Configuration, Device, DeviceMountAction, DeviceMountData, DeviceProperty,
    DynamicLocationAction, DynamicLocationData, LocationKind, LocationTimeline,
    StaticLocationAction, StaticLocationData,
};

mod datetime;
pub use datetime::DateTime;

mod ids;
pub use ids::{ConfigurationId, DeviceId, DevicePropertyId, LocationActionId, MountActionId};

#[derive(sqlx::FromRow)]
pub(crate) struct ConfigurationRow {
    pub id: ConfigurationId,
    pub label: String,
}

impl From<ConfigurationRow> for Configuration<Db> {
    fn from(row: ConfigurationRow) -> Self {
        Configuration {
            id: row.id,
            label: row.label,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct DeviceRow {
    pub id: DeviceId,
    pub short_name: String,
    pub archived: bool,
}

impl From<DeviceRow> for Device<Db> {
    fn from(row: DeviceRow) -> Self {
        Device {
            id: row.id,
            short_name: row.short_name,
            archived: row.archived,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct DevicePropertyRow {
    pub id: DevicePropertyId,
    pub device_id: DeviceId,
    pub property_name: String,
    pub unit_name: Option<String>,
}

impl From<DevicePropertyRow> for DeviceProperty<Db> {
    fn from(row: DevicePropertyRow) -> Self {
        DeviceProperty {
            id: row.id,
            device_id: row.device_id,
            property_name: row.property_name,
            unit_name: row.unit_name,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct MountRow {
    pub id: MountActionId,
    pub configuration_id: ConfigurationId,
    pub device_id: DeviceId,
    pub begin_date: DateTime,
    pub end_date: Option<DateTime>,
    pub offset_x: f64,
    pub offset_y: f64,
    pub offset_z: f64,
    pub begin_description: Option<String>,
    pub end_description: Option<String>,
}

impl From<MountRow> for DeviceMountAction<Db> {
    fn from(row: MountRow) -> Self {
        DeviceMountAction {
            id: row.id,
            data: DeviceMountData {
                configuration_id: row.configuration_id,
                device_id: row.device_id,
                begin_date: row.begin_date,
                end_date: row.end_date,
                offset_x: row.offset_x,
                offset_y: row.offset_y,
                offset_z: row.offset_z,
                begin_description: row.begin_description,
                end_description: row.end_description,
            },
        }
    }
}

/// The table a location timeline row was read from
#[derive(sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
pub(crate) enum KindColumn {
    Static,
    Dynamic,
}

#[derive(sqlx::FromRow)]
pub(crate) struct TimelineRow {
    pub kind: KindColumn,
    pub id: LocationActionId,
    pub begin_date: DateTime,
    pub end_date: Option<DateTime>,
}

impl From<TimelineRow> for LocationTimeline<Db> {
    fn from(row: TimelineRow) -> Self {
        LocationTimeline {
            kind: match row.kind {
                KindColumn::Static => LocationKind::Static,
                KindColumn::Dynamic => LocationKind::Dynamic,
            },
            id: row.id,
            begin_date: row.begin_date,
            end_date: row.end_date,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct StaticLocationRow {
    pub id: LocationActionId,
    pub configuration_id: ConfigurationId,
    pub begin_date: DateTime,
    pub end_date: Option<DateTime>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub epsg_code: Option<String>,
    pub elevation_datum_name: Option<String>,
    pub label: Option<String>,
    pub begin_description: Option<String>,
    pub end_description: Option<String>,
}

impl From<StaticLocationRow> for StaticLocationAction<Db> {
    fn from(row: StaticLocationRow) -> Self {
        StaticLocationAction {
            id: row.id,
            data: StaticLocationData {
                configuration_id: row.configuration_id,
                begin_date: row.begin_date,
                end_date: row.end_date,
                x: row.x,
                y: row.y,
                z: row.z,
                epsg_code: row.epsg_code,
                elevation_datum_name: row.elevation_datum_name,
                label: row.label,
                begin_description: row.begin_description,
                end_description: row.end_description,
            },
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct DynamicLocationRow {
    pub id: LocationActionId,
    pub configuration_id: ConfigurationId,
    pub begin_date: DateTime,
    pub end_date: Option<DateTime>,
    pub x_property_id: Option<DevicePropertyId>,
    pub y_property_id: Option<DevicePropertyId>,
    pub z_property_id: Option<DevicePropertyId>,
    pub epsg_code: Option<String>,
    pub elevation_datum_name: Option<String>,
    pub label: Option<String>,
    pub begin_description: Option<String>,
    pub end_description: Option<String>,
}

impl From<DynamicLocationRow> for DynamicLocationAction<Db> {
    fn from(row: DynamicLocationRow) -> Self {
        DynamicLocationAction {
            id: row.id,
            data: DynamicLocationData {
                configuration_id: row.configuration_id,
                begin_date: row.begin_date,
                end_date: row.end_date,
                x_property_id: row.x_property_id,
                y_property_id: row.y_property_id,
                z_property_id: row.z_property_id,
                epsg_code: row.epsg_code,
                elevation_datum_name: row.elevation_datum_name,
                label: row.label,
                begin_description: row.begin_description,
                end_description: row.end_description,
            },
        }
    }
}
