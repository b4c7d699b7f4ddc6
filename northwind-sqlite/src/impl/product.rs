use super::affected;
use crate::Db;
use northwind_core::{
    models::{Category, Product, Supplier},
    ports::CrudRepository,
};
use sqlx::SqliteConnection;

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: i64,
    product_name: String,
    supplier_id: Option<i64>,
    category_id: Option<i64>,
    quantity_per_unit: Option<String>,
    unit_price: Option<f64>,
    units_in_stock: Option<i64>,
    units_on_order: Option<i64>,
    reorder_level: Option<i64>,
    discontinued: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            product_id: row.product_id,
            product_name: row.product_name,
            supplier_id: row.supplier_id,
            category_id: row.category_id,
            quantity_per_unit: row.quantity_per_unit,
            unit_price: row.unit_price,
            units_in_stock: row.units_in_stock,
            units_on_order: row.units_on_order,
            reorder_level: row.reorder_level,
            discontinued: row.discontinued,
            category: None,
            supplier: None,
        }
    }
}

/// A product together with a summary of its category and supplier.
#[derive(sqlx::FromRow)]
struct ProductWithParentsRow {
    #[sqlx(flatten)]
    product: ProductRow,
    category_name: Option<String>,
    category_description: Option<String>,
    category_picture: Option<Vec<u8>>,
    supplier_name: Option<String>,
    supplier_contact: Option<String>,
}

impl From<ProductWithParentsRow> for Product {
    fn from(row: ProductWithParentsRow) -> Self {
        let mut product = Product::from(row.product);
        product.category = product.category_id.map(|category_id| Category {
            category_id,
            category_name: row.category_name,
            description: row.category_description,
            picture: row.category_picture,
            ..Default::default()
        });
        product.supplier = product.supplier_id.map(|supplier_id| Supplier {
            supplier_id,
            company_name: row.supplier_name.unwrap_or_default(),
            contact_name: row.supplier_contact,
            ..Default::default()
        });
        product
    }
}

const SELECT: &str = r#"
    select
        ProductID as product_id,
        ProductName as product_name,
        SupplierID as supplier_id,
        CategoryID as category_id,
        QuantityPerUnit as quantity_per_unit,
        cast(UnitPrice as real) as unit_price,
        UnitsInStock as units_in_stock,
        UnitsOnOrder as units_on_order,
        ReorderLevel as reorder_level,
        coalesce(cast(Discontinued as text), '0') as discontinued
    from
        Products
"#;

/// Products of one category, by name.
pub(super) async fn in_category(
    conn: &mut SqliteConnection,
    category_id: i64,
) -> Result<Vec<Product>, sqlx::Error> {
    let sql = format!("{SELECT} where CategoryID = $1 order by ProductName");
    let rows = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(category_id)
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().map(Product::from).collect())
}

/// Products of one supplier, by name.
pub(super) async fn supplied_by(
    conn: &mut SqliteConnection,
    supplier_id: i64,
) -> Result<Vec<Product>, sqlx::Error> {
    let sql = format!("{SELECT} where SupplierID = $1 order by ProductName");
    let rows = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(supplier_id)
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().map(Product::from).collect())
}

const SELECT_WITH_PARENTS: &str = r#"
    select
        p.ProductID as product_id,
        p.ProductName as product_name,
        p.SupplierID as supplier_id,
        p.CategoryID as category_id,
        p.QuantityPerUnit as quantity_per_unit,
        cast(p.UnitPrice as real) as unit_price,
        p.UnitsInStock as units_in_stock,
        p.UnitsOnOrder as units_on_order,
        p.ReorderLevel as reorder_level,
        coalesce(cast(p.Discontinued as text), '0') as discontinued,
        c.CategoryName as category_name,
        c.Description as category_description,
        c.Picture as category_picture,
        s.CompanyName as supplier_name,
        s.ContactName as supplier_contact
    from
        Products p
        left join Categories c on p.CategoryID = c.CategoryID
        left join Suppliers s on p.SupplierID = s.SupplierID
"#;

impl CrudRepository<Product> for Db {
    async fn list_all(&self) -> Result<Vec<Product>, Self::Error> {
        let sql = format!("{SELECT_WITH_PARENTS} order by p.ProductName");
        let rows = sqlx::query_as::<_, ProductWithParentsRow>(&sql)
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get_by_key(&self, product_id: i64) -> Result<Option<Product>, Self::Error> {
        let sql = format!("{SELECT_WITH_PARENTS} where p.ProductID = $1");
        let row = sqlx::query_as::<_, ProductWithParentsRow>(&sql)
            .bind(product_id)
            .fetch_optional(&self.reader)
            .await?;

        Ok(row.map(Product::from))
    }

    async fn insert(&self, mut product: Product) -> Result<Product, Self::Error> {
        let result = sqlx::query(
            r#"
            insert into
                Products (
                    ProductName, SupplierID, CategoryID, QuantityPerUnit, UnitPrice,
                    UnitsInStock, UnitsOnOrder, ReorderLevel, Discontinued
                )
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&product.product_name)
        .bind(product.supplier_id)
        .bind(product.category_id)
        .bind(&product.quantity_per_unit)
        .bind(product.unit_price)
        .bind(product.units_in_stock)
        .bind(product.units_on_order)
        .bind(product.reorder_level)
        .bind(&product.discontinued)
        .execute(&self.writer)
        .await?;

        product.product_id = result.last_insert_rowid();
        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Option<Product>, Self::Error> {
        let result = sqlx::query(
            r#"
            update
                Products
            set
                ProductName = $2,
                SupplierID = $3,
                CategoryID = $4,
                QuantityPerUnit = $5,
                UnitPrice = $6,
                UnitsInStock = $7,
                UnitsOnOrder = $8,
                ReorderLevel = $9,
                Discontinued = $10
            where
                ProductID = $1
            "#,
        )
        .bind(product.product_id)
        .bind(&product.product_name)
        .bind(product.supplier_id)
        .bind(product.category_id)
        .bind(&product.quantity_per_unit)
        .bind(product.unit_price)
        .bind(product.units_in_stock)
        .bind(product.units_on_order)
        .bind(product.reorder_level)
        .bind(&product.discontinued)
        .execute(&self.writer)
        .await?;

        Ok(affected(result).then_some(product))
    }

    async fn delete(&self, product_id: i64) -> Result<bool, Self::Error> {
        let result = sqlx::query("delete from Products where ProductID = $1")
            .bind(product_id)
            .execute(&self.writer)
            .await?;

        Ok(affected(result))
    }
}
