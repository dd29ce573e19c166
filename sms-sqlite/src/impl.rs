//! Repository trait implementations for the SQLite database.
//!
//! This module contains the implementations of all repository traits defined in
//! `sms-core` for the SQLite database backend.

use crate::{
    Db,
    types::{ConfigurationId, DateTime, DeviceId, DevicePropertyId, LocationActionId, MountActionId},
};
use sms_core::ports::Repository;

mod configuration;
mod device;
mod location;
mod mount;

impl Repository for Db {
    type Error = sqlx::Error;
    type DateTime = DateTime;
    type ConfigurationId = ConfigurationId;
    type DeviceId = DeviceId;
    type DevicePropertyId = DevicePropertyId;
    type LocationActionId = LocationActionId;
    type MountActionId = MountActionId;
}
