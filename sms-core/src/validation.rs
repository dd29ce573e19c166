mod error;
mod location;
mod payload;

#[cfg(test)]
pub(crate) mod fake;

pub use error::{ErrorDocument, ErrorObject, ValidationError};
pub use location::{
    ARCHIVED_DEVICE, LocationActionValidator, OVERLAPPING_LOCATION, UNCOVERED_PROPERTY,
};
pub use payload::{LocationPayload, PayloadError};
