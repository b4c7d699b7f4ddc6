use super::affected;
use crate::Db;
use northwind_core::{
    models::{Region, Territory},
    ports::CrudRepository,
};
use sqlx::SqliteConnection;

#[derive(sqlx::FromRow)]
struct TerritoryRow {
    territory_id: String,
    territory_description: String,
    region_id: i64,
}

impl From<TerritoryRow> for Territory {
    fn from(row: TerritoryRow) -> Self {
        Self {
            territory_id: row.territory_id,
            territory_description: row.territory_description,
            region_id: row.region_id,
            region: None,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TerritoryWithRegionRow {
    #[sqlx(flatten)]
    territory: TerritoryRow,
    region_description: Option<String>,
}

impl From<TerritoryWithRegionRow> for Territory {
    fn from(row: TerritoryWithRegionRow) -> Self {
        let mut territory = Territory::from(row.territory);
        territory.region = row.region_description.map(|region_description| Region {
            region_id: territory.region_id,
            region_description,
            territories: Vec::new(),
        });
        territory
    }
}

const SELECT_WITH_REGION: &str = r#"
    select
        t.TerritoryID as territory_id,
        t.TerritoryDescription as territory_description,
        t.RegionID as region_id,
        r.RegionDescription as region_description
    from
        Territories t
        left join Region r on t.RegionID = r.RegionID
"#;

/// Territories of one region, by description.
pub(super) async fn in_region(
    conn: &mut SqliteConnection,
    region_id: i64,
) -> Result<Vec<Territory>, sqlx::Error> {
    let rows = sqlx::query_as::<_, TerritoryRow>(
        r#"
        select
            TerritoryID as territory_id,
            TerritoryDescription as territory_description,
            RegionID as region_id
        from
            Territories
        where
            RegionID = $1
        order by
            TerritoryDescription
        "#,
    )
    .bind(region_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(Territory::from).collect())
}

impl CrudRepository<Territory> for Db {
    async fn list_all(&self) -> Result<Vec<Territory>, Self::Error> {
        let sql = format!("{SELECT_WITH_REGION} order by t.TerritoryDescription");
        let rows = sqlx::query_as::<_, TerritoryWithRegionRow>(&sql)
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(Territory::from).collect())
    }

    async fn get_by_key(&self, territory_id: String) -> Result<Option<Territory>, Self::Error> {
        let sql = format!("{SELECT_WITH_REGION} where t.TerritoryID = $1");
        let row = sqlx::query_as::<_, TerritoryWithRegionRow>(&sql)
            .bind(territory_id)
            .fetch_optional(&self.reader)
            .await?;

        Ok(row.map(Territory::from))
    }

    async fn insert(&self, territory: Territory) -> Result<Territory, Self::Error> {
        sqlx::query(
            r#"
            insert into
                Territories (TerritoryID, TerritoryDescription, RegionID)
            values
                ($1, $2, $3)
            "#,
        )
        .bind(&territory.territory_id)
        .bind(&territory.territory_description)
        .bind(territory.region_id)
        .execute(&self.writer)
        .await?;

        Ok(territory)
    }

    async fn update(&self, territory: Territory) -> Result<Option<Territory>, Self::Error> {
        let result = sqlx::query(
            r#"
            update
                Territories
            set
                TerritoryDescription = $2,
                RegionID = $3
            where
                TerritoryID = $1
            "#,
        )
        .bind(&territory.territory_id)
        .bind(&territory.territory_description)
        .bind(territory.region_id)
        .execute(&self.writer)
        .await?;

        Ok(affected(result).then_some(territory))
    }

    async fn delete(&self, territory_id: String) -> Result<bool, Self::Error> {
        let result = sqlx::query("delete from Territories where TerritoryID = $1")
            .bind(territory_id)
            .execute(&self.writer)
            .await?;

        Ok(affected(result))
    }
}
