use crate::{
    Db,
    types::{DynamicLocationRow, StaticLocationRow, TimelineRow},
};
use sms_core::{
    models::{
        DynamicLocationAction, DynamicLocationData, LocationTimeline, StaticLocationAction,
        StaticLocationData,
    },
    ports::LocationActionRepository,
};

impl LocationActionRepository for Db {
    async fn query_location_timelines(
        &self,
        configuration_id: Self::ConfigurationId,
    ) -> Result<Vec<LocationTimeline<Self>>, Self::Error> {
        let rows = sqlx::query_as::<_, TimelineRow>(
            r#"
            select
                'static' as kind, id, begin_date, end_date
            from
                configuration_static_location_begin_action
            where
                configuration_id = $1
            union all
            select
                'dynamic' as kind, id, begin_date, end_date
            from
                configuration_dynamic_location_begin_action
            where
                configuration_id = $1
            order by
                begin_date, kind, id
            "#,
        )
        .bind(configuration_id)
        .fetch_all(&self.reader)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_static_location_action(
        &self,
        data: StaticLocationData<Self>,
    ) -> Result<StaticLocationAction<Self>, Self::Error> {
        let row = sqlx::query_as::<_, StaticLocationRow>(
            r#"
            insert into
                configuration_static_location_begin_action (
                    configuration_id, begin_date, end_date, x, y, z, epsg_code,
                    elevation_datum_name, label, begin_description, end_description
                )
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            returning
                id, configuration_id, begin_date, end_date, x, y, z, epsg_code,
                elevation_datum_name, label, begin_description, end_description
            "#,
        )
        .bind(data.configuration_id)
        .bind(data.begin_date)
        .bind(data.end_date)
        .bind(data.x)
        .bind(data.y)
        .bind(data.z)
        .bind(data.epsg_code)
        .bind(data.elevation_datum_name)
        .bind(data.label)
        .bind(data.begin_description)
        .bind(data.end_description)
        .fetch_one(&self.writer)
        .await?;
        Ok(row.into())
    }

    async fn get_static_location_action(
        &self,
        action_id: Self::LocationActionId,
    ) -> Result<Option<StaticLocationAction<Self>>, Self::Error> {
        let row = sqlx::query_as::<_, StaticLocationRow>(
            r#"
            select
                id, configuration_id, begin_date, end_date, x, y, z, epsg_code,
                elevation_datum_name, label, begin_description, end_description
            from
                configuration_static_location_begin_action
            where
                id = $1
            "#,
        )
        .bind(action_id)
        .fetch_optional(&self.reader)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn update_static_location_action(
        &self,
        action_id: Self::LocationActionId,
        data: StaticLocationData<Self>,
    ) -> Result<Option<StaticLocationAction<Self>>, Self::Error> {
        let row = sqlx::query_as::<_, StaticLocationRow>(
            r#"
            update
                configuration_static_location_begin_action
            set
                configuration_id = $2,
                begin_date = $3,
                end_date = $4,
                x = $5,
                y = $6,
                z = $7,
                epsg_code = $8,
                elevation_datum_name = $9,
                label = $10,
                begin_description = $11,
                end_description = $12
            where
                id = $1
            returning
                id, configuration_id, begin_date, end_date, x, y, z, epsg_code,
                elevation_datum_name, label, begin_description, end_description
            "#,
        )
        .bind(action_id)
        .bind(data.configuration_id)
        .bind(data.begin_date)
        .bind(data.end_date)
        .bind(data.x)
        .bind(data.y)
        .bind(data.z)
        .bind(data.epsg_code)
        .bind(data.elevation_datum_name)
        .bind(data.label)
        .bind(data.begin_description)
        .bind(data.end_description)
        .fetch_optional(&self.writer)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn delete_static_location_action(
        &self,
        action_id: Self::LocationActionId,
    ) -> Result<bool, Self::Error> {
        let result = sqlx::query(
            r#"
            delete from
                configuration_static_location_begin_action
            where
                id = $1
            "#,
        )
        .bind(action_id)
        .execute(&self.writer)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn create_dynamic_location_action(
        &self,
        data: DynamicLocationData<Self>,
    ) -> Result<DynamicLocationAction<Self>, Self::Error> {
        let row = sqlx::query_as::<_, DynamicLocationRow>(
            r#"
            insert into
                configuration_dynamic_location_begin_action (
                    configuration_id, begin_date, end_date, x_property_id, y_property_id,
                    z_property_id, epsg_code, elevation_datum_name, label,
                    begin_description, end_description
                )
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            returning
                id, configuration_id, begin_date, end_date, x_property_id, y_property_id,
                z_property_id, epsg_code, elevation_datum_name, label,
                begin_description, end_description
            "#,
        )
        .bind(data.configuration_id)
        .bind(data.begin_date)
        .bind(data.end_date)
        .bind(data.x_property_id)
        .bind(data.y_property_id)
        .bind(data.z_property_id)
        .bind(data.epsg_code)
        .bind(data.elevation_datum_name)
        .bind(data.label)
        .bind(data.begin_description)
        .bind(data.end_description)
        .fetch_one(&self.writer)
        .await?;
        Ok(row.into())
    }

    async fn get_dynamic_location_action(
        &self,
        action_id: Self::LocationActionId,
    ) -> Result<Option<DynamicLocationAction<Self>>, Self::Error> {
        let row = sqlx::query_as::<_, DynamicLocationRow>(
            r#"
            select
                id, configuration_id, begin_date, end_date, x_property_id, y_property_id,
                z_property_id, epsg_code, elevation_datum_name, label,
                begin_description, end_description
            from
                configuration_dynamic_location_begin_action
            where
                id = $1
            "#,
        )
        .bind(action_id)
        .fetch_optional(&self.reader)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn update_dynamic_location_action(
        &self,
        action_id: Self::LocationActionId,
        data: DynamicLocationData<Self>,
    ) -> Result<Option<DynamicLocationAction<Self>>, Self::Error> {
        let row = sqlx::query_as::<_, DynamicLocationRow>(
            r#"
            update
                configuration_dynamic_location_begin_action
            set
                configuration_id = $2,
                begin_date = $3,
                end_date = $4,
                x_property_id = $5,
                y_property_id = $6,
                z_property_id = $7,
                epsg_code = $8,
                elevation_datum_name = $9,
                label = $10,
                begin_description = $11,
                end_description = $12
            where
                id = $1
            returning
                id, configuration_id, begin_date, end_date, x_property_id, y_property_id,
                z_property_id, epsg_code, elevation_datum_name, label,
                begin_description, end_description
            "#,
        )
        .bind(action_id)
        .bind(data.configuration_id)
        .bind(data.begin_date)
        .bind(data.end_date)
        .bind(data.x_property_id)
        .bind(data.y_property_id)
        .bind(data.z_property_id)
        .bind(data.epsg_code)
        .bind(data.elevation_datum_name)
        .bind(data.label)
        .bind(data.begin_description)
        .bind(data.end_description)
        .fetch_optional(&self.writer)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn delete_dynamic_location_action(
        &self,
        action_id: Self::LocationActionId,
    ) -> Result<bool, Self::Error> {
        let result = sqlx::query(
            r#"
            delete from
                configuration_dynamic_location_begin_action
            where
                id = $1
            "#,
        )
        .bind(action_id)
        .execute(&self.writer)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
