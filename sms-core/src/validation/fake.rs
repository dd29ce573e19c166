//! An in-memory repository for exercising the validator.

use crate::{
    models::{
        Configuration, Device, DeviceMountAction, DeviceMountData, DeviceProperty,
        DynamicLocationAction, DynamicLocationData, LocationKind, LocationTimeline,
        StaticLocationAction, StaticLocationData,
    },
    ports::{
        ConfigurationRepository, DeviceRepository, LocationActionRepository, MountRepository,
        Repository,
    },
};
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;

#[derive(Debug, thiserror::Error)]
#[error("fake repository failure")]
pub struct FakeError;

#[derive(Debug, Default, Clone)]
pub struct FakeRepository(Arc<Mutex<State>>);

#[derive(Debug, Default)]
struct State {
    configurations: Vec<Configuration<FakeRepository>>,
    devices: Vec<Device<FakeRepository>>,
    properties: Vec<DeviceProperty<FakeRepository>>,
    mounts: Vec<DeviceMountAction<FakeRepository>>,
    statics: Vec<StaticLocationAction<FakeRepository>>,
    dynamics: Vec<DynamicLocationAction<FakeRepository>>,
}

impl Repository for FakeRepository {
    type Error = FakeError;
    type DateTime = OffsetDateTime;
    type ConfigurationId = u32;
    type DeviceId = u32;
    type DevicePropertyId = u32;
    type LocationActionId = u32;
    type MountActionId = u32;
}

impl FakeRepository {
    pub fn add_device(&self, archived: bool) -> u32 {
        let mut state = self.0.lock().unwrap();
        let id = state.devices.len() as u32 + 1;
        state.devices.push(Device {
            id,
            short_name: format!("device {id}"),
            archived,
        });
        id
    }

    pub fn add_property(&self, id: u32, device_id: u32) {
        self.0.lock().unwrap().properties.push(DeviceProperty {
            id,
            device_id,
            property_name: "latitude".to_owned(),
            unit_name: None,
        });
    }

    pub fn add_mount(
        &self,
        device_id: u32,
        configuration_id: u32,
        begin_date: OffsetDateTime,
        end_date: Option<OffsetDateTime>,
    ) {
        let mut state = self.0.lock().unwrap();
        let id = state.mounts.len() as u32 + 1;
        state.mounts.push(DeviceMountAction {
            id,
            data: mount_data(device_id, configuration_id, begin_date, end_date),
        });
    }

    pub fn add_static(
        &self,
        id: u32,
        configuration_id: u32,
        begin_date: OffsetDateTime,
        end_date: Option<OffsetDateTime>,
    ) {
        self.0.lock().unwrap().statics.push(StaticLocationAction {
            id,
            data: StaticLocationData {
                configuration_id,
                begin_date,
                end_date,
                x: None,
                y: None,
                z: None,
                epsg_code: None,
                elevation_datum_name: None,
                label: None,
                begin_description: None,
                end_description: None,
            },
        });
    }

    pub fn add_dynamic(
        &self,
        id: u32,
        configuration_id: u32,
        begin_date: OffsetDateTime,
        end_date: Option<OffsetDateTime>,
        [x, y, z]: [Option<u32>; 3],
    ) {
        self.0.lock().unwrap().dynamics.push(DynamicLocationAction {
            id,
            data: DynamicLocationData {
                configuration_id,
                begin_date,
                end_date,
                x_property_id: x,
                y_property_id: y,
                z_property_id: z,
                epsg_code: None,
                elevation_datum_name: None,
                label: None,
                begin_description: None,
                end_description: None,
            },
        });
    }
}

fn mount_data(
    device_id: u32,
    configuration_id: u32,
    begin_date: OffsetDateTime,
    end_date: Option<OffsetDateTime>,
) -> DeviceMountData<FakeRepository> {
    DeviceMountData {
        configuration_id,
        device_id,
        begin_date,
        end_date,
        offset_x: 0.0,
        offset_y: 0.0,
        offset_z: 0.0,
        begin_description: None,
        end_description: None,
    }
}

impl ConfigurationRepository for FakeRepository {
    async fn create_configuration(
        &self,
        label: String,
    ) -> Result<Configuration<Self>, Self::Error> {
        let mut state = self.0.lock().unwrap();
        let configuration = Configuration {
            id: state.configurations.len() as u32 + 1,
            label,
        };
        state.configurations.push(configuration.clone());
        Ok(configuration)
    }

    async fn get_configuration(
        &self,
        configuration_id: u32,
    ) -> Result<Option<Configuration<Self>>, Self::Error> {
        let state = self.0.lock().unwrap();
        Ok(state
            .configurations
            .iter()
            .find(|c| c.id == configuration_id)
            .cloned())
    }
}

impl DeviceRepository for FakeRepository {
    async fn create_device(&self, short_name: String) -> Result<Device<Self>, Self::Error> {
        let id = self.add_device(false);
        Ok(Device {
            id,
            short_name,
            archived: false,
        })
    }

    async fn get_device(&self, device_id: u32) -> Result<Option<Device<Self>>, Self::Error> {
        let state = self.0.lock().unwrap();
        Ok(state.devices.iter().find(|d| d.id == device_id).cloned())
    }

    async fn set_device_archived(&self, device_id: u32, archived: bool) -> Result<bool, Self::Error> {
        let mut state = self.0.lock().unwrap();
        Ok(match state.devices.iter_mut().find(|d| d.id == device_id) {
            Some(device) => {
                device.archived = archived;
                true
            }
            None => false,
        })
    }

    async fn create_device_property(
        &self,
        device_id: u32,
        property_name: String,
        unit_name: Option<String>,
    ) -> Result<DeviceProperty<Self>, Self::Error> {
        let mut state = self.0.lock().unwrap();
        let property = DeviceProperty {
            id: state.properties.len() as u32 + 1,
            device_id,
            property_name,
            unit_name,
        };
        state.properties.push(property.clone());
        Ok(property)
    }

    async fn get_device_property(
        &self,
        property_id: u32,
    ) -> Result<Option<DeviceProperty<Self>>, Self::Error> {
        let state = self.0.lock().unwrap();
        Ok(state
            .properties
            .iter()
            .find(|p| p.id == property_id)
            .cloned())
    }
}

impl MountRepository for FakeRepository {
    async fn create_device_mount_action(
        &self,
        data: DeviceMountData<Self>,
    ) -> Result<DeviceMountAction<Self>, Self::Error> {
        let mut state = self.0.lock().unwrap();
        let action = DeviceMountAction {
            id: state.mounts.len() as u32 + 1,
            data,
        };
        state.mounts.push(action.clone());
        Ok(action)
    }

    async fn query_device_mount_actions(
        &self,
        device_id: u32,
        configuration_id: u32,
    ) -> Result<Vec<DeviceMountAction<Self>>, Self::Error> {
        let state = self.0.lock().unwrap();
        Ok(state
            .mounts
            .iter()
            .filter(|m| m.data.device_id == device_id && m.data.configuration_id == configuration_id)
            .cloned()
            .collect())
    }
}

impl LocationActionRepository for FakeRepository {
    async fn query_location_timelines(
        &self,
        configuration_id: u32,
    ) -> Result<Vec<LocationTimeline<Self>>, Self::Error> {
        let state = self.0.lock().unwrap();
        let statics = state
            .statics
            .iter()
            .filter(|a| a.data.configuration_id == configuration_id)
            .map(|a| LocationTimeline {
                kind: LocationKind::Static,
                id: a.id,
                begin_date: a.data.begin_date,
                end_date: a.data.end_date,
            });
        let dynamics = state
            .dynamics
            .iter()
            .filter(|a| a.data.configuration_id == configuration_id)
            .map(|a| LocationTimeline {
                kind: LocationKind::Dynamic,
                id: a.id,
                begin_date: a.data.begin_date,
                end_date: a.data.end_date,
            });
        Ok(statics.chain(dynamics).collect())
    }

    async fn create_static_location_action(
        &self,
        data: StaticLocationData<Self>,
    ) -> Result<StaticLocationAction<Self>, Self::Error> {
        let mut state = self.0.lock().unwrap();
        let action = StaticLocationAction {
            id: state.statics.len() as u32 + 1,
            data,
        };
        state.statics.push(action.clone());
        Ok(action)
    }

    async fn get_static_location_action(
        &self,
        action_id: u32,
    ) -> Result<Option<StaticLocationAction<Self>>, Self::Error> {
        let state = self.0.lock().unwrap();
        Ok(state.statics.iter().find(|a| a.id == action_id).cloned())
    }

    async fn update_static_location_action(
        &self,
        action_id: u32,
        data: StaticLocationData<Self>,
    ) -> Result<Option<StaticLocationAction<Self>>, Self::Error> {
        let mut state = self.0.lock().unwrap();
        Ok(state
            .statics
            .iter_mut()
            .find(|a| a.id == action_id)
            .map(|action| {
                action.data = data;
                action.clone()
            }))
    }

    async fn delete_static_location_action(&self, action_id: u32) -> Result<bool, Self::Error> {
        let mut state = self.0.lock().unwrap();
        let before = state.statics.len();
        state.statics.retain(|a| a.id != action_id);
        Ok(state.statics.len() < before)
    }

    async fn create_dynamic_location_action(
        &self,
        data: DynamicLocationData<Self>,
    ) -> Result<DynamicLocationAction<Self>, Self::Error> {
        let mut state = self.0.lock().unwrap();
        let action = DynamicLocationAction {
            id: state.dynamics.len() as u32 + 1,
            data,
        };
        state.dynamics.push(action.clone());
        Ok(action)
    }

    async fn get_dynamic_location_action(
        &self,
        action_id: u32,
    ) -> Result<Option<DynamicLocationAction<Self>>, Self::Error> {
        let state = self.0.lock().unwrap();
        Ok(state.dynamics.iter().find(|a| a.id == action_id).cloned())
    }

    async fn update_dynamic_location_action(
        &self,
        action_id: u32,
        data: DynamicLocationData<Self>,
    ) -> Result<Option<DynamicLocationAction<Self>>, Self::Error> {
        let mut state = self.0.lock().unwrap();
        Ok(state
            .dynamics
            .iter_mut()
            .find(|a| a.id == action_id)
            .map(|action| {
                action.data = data;
                action.clone()
            }))
    }

    async fn delete_dynamic_location_action(&self, action_id: u32) -> Result<bool, Self::Error> {
        let mut state = self.0.lock().unwrap();
        let before = state.dynamics.len();
        state.dynamics.retain(|a| a.id != action_id);
        Ok(state.dynamics.len() < before)
    }
}
