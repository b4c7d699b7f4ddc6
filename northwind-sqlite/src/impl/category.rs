use super::{affected, product};
use crate::Db;
use northwind_core::{models::Category, ports::CrudRepository};
use sqlx::SqliteConnection;

#[derive(sqlx::FromRow)]
struct CategoryRow {
    category_id: i64,
    category_name: Option<String>,
    description: Option<String>,
    picture: Option<Vec<u8>>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            category_id: row.category_id,
            category_name: row.category_name,
            description: row.description,
            picture: row.picture,
            products: Vec::new(),
        }
    }
}

pub(super) async fn find(
    conn: &mut SqliteConnection,
    category_id: i64,
) -> Result<Option<Category>, sqlx::Error> {
    let row = sqlx::query_as::<_, CategoryRow>(
        r#"
        select
            CategoryID as category_id,
            CategoryName as category_name,
            Description as description,
            Picture as picture
        from
            Categories
        where
            CategoryID = $1
        "#,
    )
    .bind(category_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(Category::from))
}

impl CrudRepository<Category> for Db {
    async fn list_all(&self) -> Result<Vec<Category>, Self::Error> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            select
                CategoryID as category_id,
                CategoryName as category_name,
                Description as description,
                Picture as picture
            from
                Categories
            order by
                CategoryName
            "#,
        )
        .fetch_all(&self.reader)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn get_by_key(&self, category_id: i64) -> Result<Option<Category>, Self::Error> {
        let mut conn = self.reader.acquire().await?;

        let Some(mut category) = find(&mut conn, category_id).await? else {
            return Ok(None);
        };

        category.products = product::in_category(&mut conn, category_id).await?;

        Ok(Some(category))
    }

    async fn insert(&self, mut category: Category) -> Result<Category, Self::Error> {
        let result = sqlx::query(
            r#"
            insert into
                Categories (CategoryName, Description, Picture)
            values
                ($1, $2, $3)
            "#,
        )
        .bind(&category.category_name)
        .bind(&category.description)
        .bind(&category.picture)
        .execute(&self.writer)
        .await?;

        category.category_id = result.last_insert_rowid();
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Option<Category>, Self::Error> {
        let result = sqlx::query(
            r#"
            update
                Categories
            set
                CategoryName = $2,
                Description = $3,
                Picture = $4
            where
                CategoryID = $1
            "#,
        )
        .bind(category.category_id)
        .bind(&category.category_name)
        .bind(&category.description)
        .bind(&category.picture)
        .execute(&self.writer)
        .await?;

        Ok(affected(result).then_some(category))
    }

    async fn delete(&self, category_id: i64) -> Result<bool, Self::Error> {
        let result = sqlx::query("delete from Categories where CategoryID = $1")
            .bind(category_id)
            .execute(&self.writer)
            .await?;

        Ok(affected(result))
    }
}
