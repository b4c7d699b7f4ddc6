use super::{affected, order};
use crate::Db;
use northwind_core::{models::Shipper, ports::CrudRepository};
use sqlx::SqliteConnection;

#[derive(sqlx::FromRow)]
struct ShipperRow {
    shipper_id: i64,
    company_name: String,
    phone: Option<String>,
}

impl From<ShipperRow> for Shipper {
    fn from(row: ShipperRow) -> Self {
        Self {
            shipper_id: row.shipper_id,
            company_name: row.company_name,
            phone: row.phone,
            orders: Vec::new(),
        }
    }
}

pub(super) async fn find(
    conn: &mut SqliteConnection,
    shipper_id: i64,
) -> Result<Option<Shipper>, sqlx::Error> {
    let row = sqlx::query_as::<_, ShipperRow>(
        r#"
        select
            ShipperID as shipper_id,
            CompanyName as company_name,
            Phone as phone
        from
            Shippers
        where
            ShipperID = $1
        "#,
    )
    .bind(shipper_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(Shipper::from))
}

impl CrudRepository<Shipper> for Db {
    async fn list_all(&self) -> Result<Vec<Shipper>, Self::Error> {
        let rows = sqlx::query_as::<_, ShipperRow>(
            r#"
            select
                ShipperID as shipper_id,
                CompanyName as company_name,
                Phone as phone
            from
                Shippers
            order by
                CompanyName
            "#,
        )
        .fetch_all(&self.reader)
        .await?;

        Ok(rows.into_iter().map(Shipper::from).collect())
    }

    async fn get_by_key(&self, shipper_id: i64) -> Result<Option<Shipper>, Self::Error> {
        let mut conn = self.reader.acquire().await?;

        let Some(mut shipper) = find(&mut conn, shipper_id).await? else {
            return Ok(None);
        };

        shipper.orders = order::shipped_via(&mut conn, shipper_id).await?;
        Ok(Some(shipper))
    }

    async fn insert(&self, mut shipper: Shipper) -> Result<Shipper, Self::Error> {
        let result = sqlx::query("insert into Shippers (CompanyName, Phone) values ($1, $2)")
            .bind(&shipper.company_name)
            .bind(&shipper.phone)
            .execute(&self.writer)
            .await?;

        shipper.shipper_id = result.last_insert_rowid();
        Ok(shipper)
    }

    async fn update(&self, shipper: Shipper) -> Result<Option<Shipper>, Self::Error> {
        let result =
            sqlx::query("update Shippers set CompanyName = $2, Phone = $3 where ShipperID = $1")
                .bind(shipper.shipper_id)
                .bind(&shipper.company_name)
                .bind(&shipper.phone)
                .execute(&self.writer)
                .await?;

        Ok(affected(result).then_some(shipper))
    }

    async fn delete(&self, shipper_id: i64) -> Result<bool, Self::Error> {
        let result = sqlx::query("delete from Shippers where ShipperID = $1")
            .bind(shipper_id)
            .execute(&self.writer)
            .await?;

        Ok(affected(result))
    }
}
