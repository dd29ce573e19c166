//! Execution of the parsed commands against the registry.

use crate::cli::{
    Commands, ConfigurationCommand, DeviceCommand, KindArg, LocationCommand, MountArgs,
    MountCommand, PropertyCommand,
};
use serde::Serialize;
use serde_json::{Value, json};
use sms_core::{
    models::{DeviceMountData, LocationData, LocationKind},
    ports::{
        ConfigurationRepository as _, DeviceRepository as _, LocationActionRepository as _,
        MountRepository as _,
    },
    validation::{ErrorDocument, LocationActionValidator, ValidationError},
};
use sms_sqlite::{Db, types::LocationActionId};
use std::{convert::Infallible, path::Path};

/// The result of a command that ran to completion.
#[derive(Debug)]
pub enum Outcome {
    /// The command succeeded; the document describes what was stored or checked
    Done(Value),
    /// The validator rejected the request
    Rejected(ErrorDocument),
}

/// Run a single command against the database.
///
/// Failures of the database or of reading the payload are returned as
/// errors; requests the validator rejects are an [`Outcome::Rejected`].
pub async fn execute(db: &Db, command: Commands) -> anyhow::Result<Outcome> {
    match command {
        Commands::Configuration(ConfigurationCommand::Create { label }) => {
            let configuration = db.create_configuration(label).await?;
            tracing::info!(id = %configuration.id, "configuration created");
            done(&configuration)
        }
        Commands::Device(command) => device(db, command).await,
        Commands::Property(PropertyCommand::Create { device, name, unit }) => {
            if db.get_device(device).await?.is_none() {
                return Ok(not_found(format!("There is no device with id {device}")));
            }
            let property = db.create_device_property(device, name, unit).await?;
            tracing::info!(id = %property.id, %device, "device property created");
            done(&property)
        }
        Commands::Mount(MountCommand::Create(args)) => mount(db, args).await,
        Commands::Location(command) => {
            let (kind, action_id, payload, commit) = match command {
                LocationCommand::Create { kind, payload } => (kind, None, payload, true),
                LocationCommand::Update { kind, id, payload } => (kind, Some(id), payload, true),
                LocationCommand::Check { kind, id, payload } => (kind, id, payload, false),
                LocationCommand::Delete { kind, id } => return delete_location(db, kind, id).await,
            };
            let payload = read_payload(&payload)?;
            location(db, kind.into(), action_id, &payload, commit).await
        }
    }
}

async fn device(db: &Db, command: DeviceCommand) -> anyhow::Result<Outcome> {
    let (id, archived) = match command {
        DeviceCommand::Create { short_name } => {
            let device = db.create_device(short_name).await?;
            tracing::info!(id = %device.id, "device created");
            return done(&device);
        }
        DeviceCommand::Archive { id } => (id, true),
        DeviceCommand::Unarchive { id } => (id, false),
    };

    if !db.set_device_archived(id, archived).await? {
        return Ok(not_found(format!("There is no device with id {id}")));
    }
    tracing::info!(%id, archived, "device archival changed");
    match db.get_device(id).await? {
        Some(device) => done(&device),
        None => Ok(not_found(format!("There is no device with id {id}"))),
    }
}

async fn mount(db: &Db, args: MountArgs) -> anyhow::Result<Outcome> {
    let data = DeviceMountData {
        configuration_id: args.configuration,
        device_id: args.device,
        begin_date: args.begin.into(),
        end_date: args.end.map(Into::into),
        offset_x: args.offset_x,
        offset_y: args.offset_y,
        offset_z: args.offset_z,
        begin_description: None,
        end_description: None,
    };
    if let Err(error) = data.range() {
        return Ok(Outcome::Rejected(
            ValidationError::<Infallible>::from(error).to_document(),
        ));
    }
    if db.get_configuration(data.configuration_id).await?.is_none() {
        return Ok(not_found(format!(
            "There is no configuration with id {}",
            data.configuration_id
        )));
    }
    if db.get_device(data.device_id).await?.is_none() {
        return Ok(not_found(format!(
            "There is no device with id {}",
            data.device_id
        )));
    }

    let action = db.create_device_mount_action(data).await?;
    tracing::info!(id = %action.id, "device mount action created");
    done(&action)
}

/// Validate a location action request and, if `commit` is set, store it.
pub(crate) async fn location(
    db: &Db,
    kind: LocationKind,
    action_id: Option<LocationActionId>,
    payload: &Value,
    commit: bool,
) -> anyhow::Result<Outcome> {
    let validator = LocationActionValidator::new(db, kind);
    let validated = match action_id {
        Some(action_id) => validator.validate_update(payload, action_id).await,
        None => validator.validate_create(payload).await,
    };

    let data = match validated {
        Ok(data) => data,
        Err(ValidationError::Repository(error)) => return Err(error.into()),
        Err(error) => return Ok(Outcome::Rejected(error.to_document())),
    };
    let configuration_id = data.configuration_id();
    if db.get_configuration(configuration_id).await?.is_none() {
        return Ok(not_found(format!(
            "There is no configuration with id {configuration_id}"
        )));
    }
    if !commit {
        return done(&data);
    }

    match (action_id, data) {
        (None, LocationData::Static(data)) => {
            let action = db.create_static_location_action(data).await?;
            tracing::info!(id = %action.id, "static location action created");
            done(&action)
        }
        (None, LocationData::Dynamic(data)) => {
            let action = db.create_dynamic_location_action(data).await?;
            tracing::info!(id = %action.id, "dynamic location action created");
            done(&action)
        }
        (Some(id), LocationData::Static(data)) => {
            match db.update_static_location_action(id, data).await? {
                Some(action) => done(&action),
                None => Ok(missing_location(kind, id)),
            }
        }
        (Some(id), LocationData::Dynamic(data)) => {
            match db.update_dynamic_location_action(id, data).await? {
                Some(action) => done(&action),
                None => Ok(missing_location(kind, id)),
            }
        }
    }
}

async fn delete_location(db: &Db, kind: KindArg, id: LocationActionId) -> anyhow::Result<Outcome> {
    let kind = LocationKind::from(kind);
    let deleted = match kind {
        LocationKind::Static => db.delete_static_location_action(id).await?,
        LocationKind::Dynamic => db.delete_dynamic_location_action(id).await?,
    };
    if !deleted {
        return Ok(missing_location(kind, id));
    }
    tracing::info!(%kind, %id, "location action deleted");
    Ok(Outcome::Done(json!({"meta": {"deleted": {"kind": kind, "id": id}}})))
}

fn read_payload(path: &Path) -> anyhow::Result<Value> {
    let text = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&text)?)
}

fn done(record: &impl Serialize) -> anyhow::Result<Outcome> {
    let data = serde_json::to_value(record)?;
    Ok(Outcome::Done(json!({ "data": data })))
}

fn not_found(detail: String) -> Outcome {
    Outcome::Rejected(ValidationError::<Infallible>::NotFound(detail).to_document())
}

fn missing_location(kind: LocationKind, id: LocationActionId) -> Outcome {
    not_found(format!("There is no {kind} location action with id {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sms_sqlite::config::SqliteConfig;

    async fn seeded() -> anyhow::Result<Db> {
        let db = Db::open(&SqliteConfig::default()).await?;
        execute(
            &db,
            Commands::Configuration(ConfigurationCommand::Create {
                label: "weather station".to_owned(),
            }),
        )
        .await?;
        Ok(db)
    }

    fn payload(begin: &str, end: Option<&str>) -> Value {
        json!({
            "attributes": {"begin_date": begin, "end_date": end, "x": 11.0, "y": 48.1},
            "relationships": {"configuration": {"data": {"type": "configuration", "id": "1"}}}
        })
    }

    #[tokio::test]
    async fn test_check_does_not_write() -> anyhow::Result<()> {
        let db = seeded().await?;

        let outcome = location(
            &db,
            LocationKind::Static,
            None,
            &payload("2021-01-01T00:00:00Z", None),
            false,
        )
        .await?;

        assert!(matches!(outcome, Outcome::Done(_)));
        assert!(db.query_location_timelines(1.into()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_overlapping_create_is_rejected() -> anyhow::Result<()> {
        let db = seeded().await?;
        let first = payload("2021-01-01T00:00:00Z", Some("2021-06-01T00:00:00Z"));
        location(&db, LocationKind::Static, None, &first, true).await?;

        let outcome = location(
            &db,
            LocationKind::Static,
            None,
            &payload("2021-03-01T00:00:00Z", None),
            true,
        )
        .await?;

        let Outcome::Rejected(document) = outcome else {
            panic!("overlapping location action was accepted");
        };
        assert_eq!(document.errors[0].status, "409");
        assert_eq!(db.query_location_timelines(1.into()).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_keeps_unchanged_fields() -> anyhow::Result<()> {
        let db = seeded().await?;
        let first = payload("2021-01-01T00:00:00Z", None);
        location(&db, LocationKind::Static, None, &first, true).await?;

        let outcome = location(
            &db,
            LocationKind::Static,
            Some(1.into()),
            &json!({"attributes": {"end_date": "2021-02-01T00:00:00Z"}}),
            true,
        )
        .await?;

        assert!(matches!(outcome, Outcome::Done(_)));
        let stored = db.get_static_location_action(1.into()).await?;
        let stored = stored.expect("location action exists");
        assert_eq!(stored.data.x, Some(11.0));
        assert!(stored.data.end_date.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_location_on_unknown_configuration_is_not_found() -> anyhow::Result<()> {
        let db = seeded().await?;
        let payload = json!({
            "attributes": {"begin_date": "2021-01-01T00:00:00Z"},
            "relationships": {"configuration": {"data": {"type": "configuration", "id": "99"}}}
        });

        let outcome = location(&db, LocationKind::Static, None, &payload, true).await?;

        let Outcome::Rejected(document) = outcome else {
            panic!("location action stored for a missing configuration");
        };
        assert_eq!(document.errors[0].status, "404");
        assert!(db.query_location_timelines(99.into()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_unchanged_dynamic_update_is_stored() -> anyhow::Result<()> {
        let db = seeded().await?;
        let device = db.create_device("gnss receiver".to_owned()).await?;
        let property = db
            .create_device_property(device.id, "latitude".to_owned(), Some("degree".to_owned()))
            .await?;
        execute(
            &db,
            Commands::Mount(MountCommand::Create(MountArgs {
                configuration: 1.into(),
                device: device.id,
                begin: time::macros::datetime!(2020-01-01 0:00 UTC),
                end: None,
                offset_x: 0.0,
                offset_y: 0.0,
                offset_z: 0.0,
            })),
        )
        .await?;
        let payload = json!({
            "attributes": {"begin_date": "2021-01-01T00:00:00Z", "end_date": "2021-02-01T00:00:00Z"},
            "relationships": {
                "configuration": {"data": {"type": "configuration", "id": "1"}},
                "x_property": {"data": {"type": "device_property", "id": property.id.to_string()}}
            }
        });
        let created = location(&db, LocationKind::Dynamic, None, &payload, true).await?;
        assert!(matches!(created, Outcome::Done(_)));

        let updated = location(&db, LocationKind::Dynamic, Some(1.into()), &payload, true).await?;

        assert!(matches!(updated, Outcome::Done(_)));
        assert_eq!(db.query_location_timelines(1.into()).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_archiving_unknown_device_is_not_found() -> anyhow::Result<()> {
        let db = seeded().await?;

        let outcome = execute(&db, Commands::Device(DeviceCommand::Archive { id: 42.into() })).await?;

        let Outcome::Rejected(document) = outcome else {
            panic!("archived a device that does not exist");
        };
        assert_eq!(document.errors[0].status, "404");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_location() -> anyhow::Result<()> {
        let db = seeded().await?;
        location(
            &db,
            LocationKind::Static,
            None,
            &payload("2021-01-01T00:00:00Z", None),
            true,
        )
        .await?;

        let command = LocationCommand::Delete {
            kind: KindArg::Static,
            id: 1.into(),
        };
        assert!(matches!(
            execute(&db, Commands::Location(command)).await?,
            Outcome::Done(_)
        ));
        assert!(db.get_static_location_action(1.into()).await?.is_none());
        Ok(())
    }
}
