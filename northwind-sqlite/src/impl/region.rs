use super::{affected, territory};
use crate::Db;
use northwind_core::{models::Region, ports::CrudRepository};
use sqlx::SqliteConnection;

#[derive(sqlx::FromRow)]
struct RegionRow {
    region_id: i64,
    region_description: String,
}

impl From<RegionRow> for Region {
    fn from(row: RegionRow) -> Self {
        Self {
            region_id: row.region_id,
            region_description: row.region_description,
            territories: Vec::new(),
        }
    }
}

pub(super) async fn find(
    conn: &mut SqliteConnection,
    region_id: i64,
) -> Result<Option<Region>, sqlx::Error> {
    let row = sqlx::query_as::<_, RegionRow>(
        r#"
        select
            RegionID as region_id,
            RegionDescription as region_description
        from
            Region
        where
            RegionID = $1
        "#,
    )
    .bind(region_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(Region::from))
}

impl CrudRepository<Region> for Db {
    async fn list_all(&self) -> Result<Vec<Region>, Self::Error> {
        let rows = sqlx::query_as::<_, RegionRow>(
            r#"
            select
                RegionID as region_id,
                RegionDescription as region_description
            from
                Region
            order by
                RegionDescription
            "#,
        )
        .fetch_all(&self.reader)
        .await?;

        Ok(rows.into_iter().map(Region::from).collect())
    }

    async fn get_by_key(&self, region_id: i64) -> Result<Option<Region>, Self::Error> {
        let mut conn = self.reader.acquire().await?;

        let Some(mut region) = find(&mut conn, region_id).await? else {
            return Ok(None);
        };

        region.territories = territory::in_region(&mut conn, region_id).await?;
        Ok(Some(region))
    }

    // RegionID has no identity; the caller's id is stored as given.
    async fn insert(&self, region: Region) -> Result<Region, Self::Error> {
        sqlx::query("insert into Region (RegionID, RegionDescription) values ($1, $2)")
            .bind(region.region_id)
            .bind(&region.region_description)
            .execute(&self.writer)
            .await?;

        Ok(region)
    }

    async fn update(&self, region: Region) -> Result<Option<Region>, Self::Error> {
        let result = sqlx::query("update Region set RegionDescription = $2 where RegionID = $1")
            .bind(region.region_id)
            .bind(&region.region_description)
            .execute(&self.writer)
            .await?;

        Ok(affected(result).then_some(region))
    }

    async fn delete(&self, region_id: i64) -> Result<bool, Self::Error> {
        let result = sqlx::query("delete from Region where RegionID = $1")
            .bind(region_id)
            .execute(&self.writer)
            .await?;

        Ok(affected(result))
    }
}
