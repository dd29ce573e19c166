use crate::{
    models::{DynamicLocationData, StaticLocationData},
    ports::Repository,
};
use serde::Deserialize;
use serde_json::Value;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime,
    format_description::well_known::{Iso8601, Rfc3339},
};

/// An error type for the ways a request document may be malformed.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The document does not have the shape of a JSON:API resource object
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A date attribute could not be parsed
    #[error("{field} is not a valid ISO 8601 timestamp: {value:?}")]
    Timestamp {
        /// The offending attribute
        field: &'static str,
        /// The value as sent
        value: String,
    },

    /// A relationship does not carry a usable id
    #[error("{relationship} does not reference a valid id: {value:?}")]
    Identifier {
        /// The offending relationship
        relationship: &'static str,
        /// The id as sent
        value: String,
    },

    /// A required attribute or relationship is missing
    #[error("{0} is required")]
    Missing(&'static str),
}

/// The location action fields of a JSON:API resource object.
///
/// Fields use `Option<Option<_>>` to tell the absence of a member
/// (`None`) from an explicit `null` (`Some(None)`). Absent members keep their
/// stored value on update, while `null` clears it.
#[derive(Debug)]
pub struct LocationPayload<T: Repository> {
    /// `relationships.configuration.data.id`
    pub configuration_id: Option<Option<T::ConfigurationId>>,
    /// `attributes.begin_date`; `null` is treated like an absent member
    pub begin_date: Option<T::DateTime>,
    /// `attributes.end_date`
    pub end_date: Option<Option<T::DateTime>>,
    /// `relationships.x_property.data.id`
    pub x_property_id: Option<Option<T::DevicePropertyId>>,
    /// `relationships.y_property.data.id`
    pub y_property_id: Option<Option<T::DevicePropertyId>>,
    /// `relationships.z_property.data.id`
    pub z_property_id: Option<Option<T::DevicePropertyId>>,
    /// `attributes.x`
    pub x: Option<Option<f64>>,
    /// `attributes.y`
    pub y: Option<Option<f64>>,
    /// `attributes.z`
    pub z: Option<Option<f64>>,
    /// `attributes.epsg_code`
    pub epsg_code: Option<Option<String>>,
    /// `attributes.elevation_datum_name`
    pub elevation_datum_name: Option<Option<String>>,
    /// `attributes.label`
    pub label: Option<Option<String>>,
    /// `attributes.begin_description`
    pub begin_description: Option<Option<String>>,
    /// `attributes.end_description`
    pub end_description: Option<Option<String>>,
}

impl<T: Repository> LocationPayload<T> {
    /// Parse a resource object, or a document whose `data` member is one.
    pub fn from_value(value: &Value) -> Result<Self, PayloadError> {
        let resource = match value.get("data") {
            Some(data) if data.is_object() => data,
            _ => value,
        };
        let RawResource {
            attributes,
            relationships,
        } = RawResource::deserialize(resource)?;

        Ok(Self {
            configuration_id: identifier("configuration", relationships.configuration)?,
            begin_date: attributes
                .begin_date
                .map(|value| timestamp("begin_date", &value))
                .transpose()?,
            end_date: match attributes.end_date {
                None => None,
                Some(None) => Some(None),
                Some(Some(value)) => Some(Some(timestamp("end_date", &value)?)),
            },
            x_property_id: identifier("x_property", relationships.x_property)?,
            y_property_id: identifier("y_property", relationships.y_property)?,
            z_property_id: identifier("z_property", relationships.z_property)?,
            x: attributes.x,
            y: attributes.y,
            z: attributes.z,
            epsg_code: attributes.epsg_code,
            elevation_datum_name: attributes.elevation_datum_name,
            label: attributes.label,
            begin_description: attributes.begin_description,
            end_description: attributes.end_description,
        })
    }

    /// The fields of a new static location action.
    pub fn new_static(&self) -> Result<StaticLocationData<T>, PayloadError> {
        Ok(StaticLocationData {
            configuration_id: self
                .configuration_id
                .flatten()
                .ok_or(PayloadError::Missing("configuration"))?,
            begin_date: self
                .begin_date
                .clone()
                .ok_or(PayloadError::Missing("begin_date"))?,
            end_date: self.end_date.clone().flatten(),
            x: self.x.flatten(),
            y: self.y.flatten(),
            z: self.z.flatten(),
            epsg_code: self.epsg_code.clone().flatten(),
            elevation_datum_name: self.elevation_datum_name.clone().flatten(),
            label: self.label.clone().flatten(),
            begin_description: self.begin_description.clone().flatten(),
            end_description: self.end_description.clone().flatten(),
        })
    }

    /// Apply the payload on top of a stored static location action.
    pub fn patch_static(
        &self,
        current: StaticLocationData<T>,
    ) -> Result<StaticLocationData<T>, PayloadError> {
        Ok(StaticLocationData {
            configuration_id: patch(&self.configuration_id, Some(current.configuration_id))
                .ok_or(PayloadError::Missing("configuration"))?,
            begin_date: self.begin_date.clone().unwrap_or(current.begin_date),
            end_date: patch(&self.end_date, current.end_date),
            x: patch(&self.x, current.x),
            y: patch(&self.y, current.y),
            z: patch(&self.z, current.z),
            epsg_code: patch(&self.epsg_code, current.epsg_code),
            elevation_datum_name: patch(&self.elevation_datum_name, current.elevation_datum_name),
            label: patch(&self.label, current.label),
            begin_description: patch(&self.begin_description, current.begin_description),
            end_description: patch(&self.end_description, current.end_description),
        })
    }

    /// The fields of a new dynamic location action.
    pub fn new_dynamic(&self) -> Result<DynamicLocationData<T>, PayloadError> {
        Ok(DynamicLocationData {
            configuration_id: self
                .configuration_id
                .flatten()
                .ok_or(PayloadError::Missing("configuration"))?,
            begin_date: self
                .begin_date
                .clone()
                .ok_or(PayloadError::Missing("begin_date"))?,
            end_date: self.end_date.clone().flatten(),
            x_property_id: self.x_property_id.flatten(),
            y_property_id: self.y_property_id.flatten(),
            z_property_id: self.z_property_id.flatten(),
            epsg_code: self.epsg_code.clone().flatten(),
            elevation_datum_name: self.elevation_datum_name.clone().flatten(),
            label: self.label.clone().flatten(),
            begin_description: self.begin_description.clone().flatten(),
            end_description: self.end_description.clone().flatten(),
        })
    }

    /// Apply the payload on top of a stored dynamic location action.
    pub fn patch_dynamic(
        &self,
        current: DynamicLocationData<T>,
    ) -> Result<DynamicLocationData<T>, PayloadError> {
        Ok(DynamicLocationData {
            configuration_id: patch(&self.configuration_id, Some(current.configuration_id))
                .ok_or(PayloadError::Missing("configuration"))?,
            begin_date: self.begin_date.clone().unwrap_or(current.begin_date),
            end_date: patch(&self.end_date, current.end_date),
            x_property_id: patch(&self.x_property_id, current.x_property_id),
            y_property_id: patch(&self.y_property_id, current.y_property_id),
            z_property_id: patch(&self.z_property_id, current.z_property_id),
            epsg_code: patch(&self.epsg_code, current.epsg_code),
            elevation_datum_name: patch(&self.elevation_datum_name, current.elevation_datum_name),
            label: patch(&self.label, current.label),
            begin_description: patch(&self.begin_description, current.begin_description),
            end_description: patch(&self.end_description, current.end_description),
        })
    }
}

fn patch<V: Clone>(update: &Option<Option<V>>, current: Option<V>) -> Option<V> {
    match update {
        None => current,
        Some(value) => value.clone(),
    }
}

/// Parse an ISO 8601 timestamp. Timestamps without an offset are taken as UTC,
/// and a bare date means midnight.
fn timestamp<D: From<OffsetDateTime>>(field: &'static str, value: &str) -> Result<D, PayloadError> {
    let parsed = OffsetDateTime::parse(value, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(value, &Iso8601::DEFAULT))
        .or_else(|_| PrimitiveDateTime::parse(value, &Iso8601::DEFAULT).map(|dt| dt.assume_utc()))
        .or_else(|_| Date::parse(value, &Iso8601::DEFAULT).map(|d| d.midnight().assume_utc()))
        .map_err(|_| PayloadError::Timestamp {
            field,
            value: value.to_owned(),
        })?;
    Ok(parsed.into())
}

fn identifier<I: FromStr>(
    relationship: &'static str,
    raw: Option<RawRelationship>,
) -> Result<Option<Option<I>>, PayloadError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let Some(data) = raw.data else {
        return Ok(Some(None));
    };
    let value = data.id.to_string();
    value
        .parse()
        .map(|id| Some(Some(id)))
        .map_err(|_| PayloadError::Identifier {
            relationship,
            value,
        })
}

// The raw document shapes, before any field is interpreted.

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawResource {
    attributes: RawAttributes,
    relationships: RawRelationships,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawAttributes {
    begin_date: Option<String>,
    #[serde(with = "::serde_with::rust::double_option")]
    end_date: Option<Option<String>>,
    #[serde(with = "::serde_with::rust::double_option")]
    x: Option<Option<f64>>,
    #[serde(with = "::serde_with::rust::double_option")]
    y: Option<Option<f64>>,
    #[serde(with = "::serde_with::rust::double_option")]
    z: Option<Option<f64>>,
    #[serde(with = "::serde_with::rust::double_option")]
    epsg_code: Option<Option<String>>,
    #[serde(with = "::serde_with::rust::double_option")]
    elevation_datum_name: Option<Option<String>>,
    #[serde(with = "::serde_with::rust::double_option")]
    label: Option<Option<String>>,
    #[serde(with = "::serde_with::rust::double_option")]
    begin_description: Option<Option<String>>,
    #[serde(with = "::serde_with::rust::double_option")]
    end_description: Option<Option<String>>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawRelationships {
    configuration: Option<RawRelationship>,
    x_property: Option<RawRelationship>,
    y_property: Option<RawRelationship>,
    z_property: Option<RawRelationship>,
}

#[derive(Deserialize)]
struct RawRelationship {
    #[serde(default)]
    data: Option<RawIdentifier>,
}

#[derive(Deserialize)]
struct RawIdentifier {
    id: RawId,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}
