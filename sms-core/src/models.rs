mod configuration;
mod device;
mod location;
mod map;
mod mount;
mod range;

pub use configuration::Configuration;
pub use device::{Device, DeviceProperty};
pub use location::{
    DynamicLocationAction, DynamicLocationData, LocationData, LocationKind, LocationTimeline,
    StaticLocationAction, StaticLocationData,
};
pub use map::Map;
pub use mount::{DeviceMountAction, DeviceMountData};
pub use range::{DateTimeRange, InvalidRange};
