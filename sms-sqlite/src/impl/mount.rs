use crate::{Db, types::MountRow};
use sms_core::{
    models::{DeviceMountAction, DeviceMountData},
    ports::MountRepository,
};

impl MountRepository for Db {
    async fn create_device_mount_action(
        &self,
        data: DeviceMountData<Self>,
    ) -> Result<DeviceMountAction<Self>, Self::Error> {
        let row = sqlx::query_as::<_, MountRow>(
            r#"
            insert into
                device_mount_action (
                    configuration_id, device_id, begin_date, end_date,
                    offset_x, offset_y, offset_z, begin_description, end_description
                )
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            returning
                id, configuration_id, device_id, begin_date, end_date,
                offset_x, offset_y, offset_z, begin_description, end_description
            "#,
        )
        .bind(data.configuration_id)
        .bind(data.device_id)
        .bind(data.begin_date)
        .bind(data.end_date)
        .bind(data.offset_x)
        .bind(data.offset_y)
        .bind(data.offset_z)
        .bind(data.begin_description)
        .bind(data.end_description)
        .fetch_one(&self.writer)
        .await?;
        Ok(row.into())
    }

    async fn query_device_mount_actions(
        &self,
        device_id: Self::DeviceId,
        configuration_id: Self::ConfigurationId,
    ) -> Result<Vec<DeviceMountAction<Self>>, Self::Error> {
        let rows = sqlx::query_as::<_, MountRow>(
            r#"
            select
                id, configuration_id, device_id, begin_date, end_date,
                offset_x, offset_y, offset_z, begin_description, end_description
            from
                device_mount_action
            where
                device_id = $1
            and
                configuration_id = $2
            order by
                begin_date, id
            "#,
        )
        .bind(device_id)
        .bind(configuration_id)
        .fetch_all(&self.reader)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
