use super::affected;
use crate::Db;
use northwind_core::{models::CustomerDemographic, ports::CrudRepository};

#[derive(sqlx::FromRow)]
struct CustomerDemographicRow {
    customer_type_id: String,
    customer_desc: Option<String>,
}

impl From<CustomerDemographicRow> for CustomerDemographic {
    fn from(row: CustomerDemographicRow) -> Self {
        Self {
            customer_type_id: row.customer_type_id,
            customer_desc: row.customer_desc,
        }
    }
}

impl CrudRepository<CustomerDemographic> for Db {
    async fn list_all(&self) -> Result<Vec<CustomerDemographic>, Self::Error> {
        let rows = sqlx::query_as::<_, CustomerDemographicRow>(
            r#"
            select
                CustomerTypeID as customer_type_id,
                CustomerDesc as customer_desc
            from
                CustomerDemographics
            order by
                CustomerTypeID
            "#,
        )
        .fetch_all(&self.reader)
        .await?;

        Ok(rows.into_iter().map(CustomerDemographic::from).collect())
    }

    async fn get_by_key(
        &self,
        customer_type_id: String,
    ) -> Result<Option<CustomerDemographic>, Self::Error> {
        let row = sqlx::query_as::<_, CustomerDemographicRow>(
            r#"
            select
                CustomerTypeID as customer_type_id,
                CustomerDesc as customer_desc
            from
                CustomerDemographics
            where
                CustomerTypeID = $1
            "#,
        )
        .bind(customer_type_id)
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(CustomerDemographic::from))
    }

    async fn insert(
        &self,
        demographic: CustomerDemographic,
    ) -> Result<CustomerDemographic, Self::Error> {
        sqlx::query(
            "insert into CustomerDemographics (CustomerTypeID, CustomerDesc) values ($1, $2)",
        )
        .bind(&demographic.customer_type_id)
        .bind(&demographic.customer_desc)
        .execute(&self.writer)
        .await?;

        Ok(demographic)
    }

    async fn update(
        &self,
        demographic: CustomerDemographic,
    ) -> Result<Option<CustomerDemographic>, Self::Error> {
        let result = sqlx::query(
            "update CustomerDemographics set CustomerDesc = $2 where CustomerTypeID = $1",
        )
        .bind(&demographic.customer_type_id)
        .bind(&demographic.customer_desc)
        .execute(&self.writer)
        .await?;

        Ok(affected(result).then_some(demographic))
    }

    async fn delete(&self, customer_type_id: String) -> Result<bool, Self::Error> {
        let result = sqlx::query("delete from CustomerDemographics where CustomerTypeID = $1")
            .bind(customer_type_id)
            .execute(&self.writer)
            .await?;

        Ok(affected(result))
    }
}
