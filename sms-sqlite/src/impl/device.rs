use crate::{
    Db,
    types::{DevicePropertyRow, DeviceRow},
};
use sms_core::{
    models::{Device, DeviceProperty},
    ports::DeviceRepository,
};

impl DeviceRepository for Db {
    async fn create_device(&self, short_name: String) -> Result<Device<Self>, Self::Error> {
        let row = sqlx::query_as::<_, DeviceRow>(
            r#"
            insert into
                device (short_name, archived)
            values
                ($1, 0)
            returning
                id, short_name, archived
            "#,
        )
        .bind(short_name)
        .fetch_one(&self.writer)
        .await?;
        Ok(row.into())
    }

    async fn get_device(
        &self,
        device_id: Self::DeviceId,
    ) -> Result<Option<Device<Self>>, Self::Error> {
        let row = sqlx::query_as::<_, DeviceRow>(
            r#"
            select
                id, short_name, archived
            from
                device
            where
                id = $1
            "#,
        )
        .bind(device_id)
        .fetch_optional(&self.reader)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn set_device_archived(
        &self,
        device_id: Self::DeviceId,
        archived: bool,
    ) -> Result<bool, Self::Error> {
        let result = sqlx::query(
            r#"
            update
                device
            set
                archived = $2
            where
                id = $1
            "#,
        )
        .bind(device_id)
        .bind(archived)
        .execute(&self.writer)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn create_device_property(
        &self,
        device_id: Self::DeviceId,
        property_name: String,
        unit_name: Option<String>,
    ) -> Result<DeviceProperty<Self>, Self::Error> {
        let row = sqlx::query_as::<_, DevicePropertyRow>(
            r#"
            insert into
                device_property (device_id, property_name, unit_name)
            values
                ($1, $2, $3)
            returning
                id, device_id, property_name, unit_name
            "#,
        )
        .bind(device_id)
        .bind(property_name)
        .bind(unit_name)
        .fetch_one(&self.writer)
        .await?;
        Ok(row.into())
    }

    async fn get_device_property(
        &self,
        property_id: Self::DevicePropertyId,
    ) -> Result<Option<DeviceProperty<Self>>, Self::Error> {
        let row = sqlx::query_as::<_, DevicePropertyRow>(
            r#"
            select
                id, device_id, property_name, unit_name
            from
                device_property
            where
                id = $1
            "#,
        )
        .bind(property_id)
        .fetch_optional(&self.reader)
        .await?;
        Ok(row.map(Into::into))
    }
}
