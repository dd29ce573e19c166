#![allow(dead_code)]

use sms_core::{
    models::DeviceMountData,
    ports::{ConfigurationRepository as _, DeviceRepository as _, MountRepository as _},
};
use sms_sqlite::{
    Db,
    config::SqliteConfig,
    types::{ConfigurationId, DeviceId, DevicePropertyId},
};
use time::OffsetDateTime;

/// A fresh in-memory database with a single configuration.
pub async fn setup() -> anyhow::Result<(Db, ConfigurationId)> {
    let db = Db::open(&SqliteConfig::default()).await?;
    let configuration = db.create_configuration("buoy".to_owned()).await?;
    Ok((db, configuration.id))
}

/// Register a device measuring a single quantity and mount it on `configuration_id`.
pub async fn mounted_property(
    db: &Db,
    configuration_id: ConfigurationId,
    begin_date: OffsetDateTime,
    end_date: Option<OffsetDateTime>,
) -> anyhow::Result<(DeviceId, DevicePropertyId)> {
    let device = db.create_device("gps".to_owned()).await?;
    let property = db
        .create_device_property(device.id, "latitude".to_owned(), Some("degree".to_owned()))
        .await?;
    db.create_device_mount_action(DeviceMountData {
        configuration_id,
        device_id: device.id,
        begin_date: begin_date.into(),
        end_date: end_date.map(Into::into),
        offset_x: 0.0,
        offset_y: 0.0,
        offset_z: 0.5,
        begin_description: Some("mounted for the campaign".to_owned()),
        end_description: None,
    })
    .await?;
    Ok((device.id, property.id))
}
