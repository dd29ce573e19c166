use crate::{Db, types::ConfigurationRow};
use sms_core::{models::Configuration, ports::ConfigurationRepository};

impl ConfigurationRepository for Db {
    async fn create_configuration(
        &self,
        label: String,
    ) -> Result<Configuration<Self>, Self::Error> {
        let row = sqlx::query_as::<_, ConfigurationRow>(
            r#"
            insert into
                configuration (label)
            values
                ($1)
            returning
                id, label
            "#,
        )
        .bind(label)
        .fetch_one(&self.writer)
        .await?;
        Ok(row.into())
    }

    async fn get_configuration(
        &self,
        configuration_id: Self::ConfigurationId,
    ) -> Result<Option<Configuration<Self>>, Self::Error> {
        let row = sqlx::query_as::<_, ConfigurationRow>(
            r#"
            select
                id, label
            from
                configuration
            where
                id = $1
            "#,
        )
        .bind(configuration_id)
        .fetch_optional(&self.reader)
        .await?;
        Ok(row.map(Into::into))
    }
}
