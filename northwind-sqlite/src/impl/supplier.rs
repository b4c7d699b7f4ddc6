use super::{affected, product};
use crate::Db;
use northwind_core::{models::Supplier, ports::CrudRepository};

#[derive(sqlx::FromRow)]
struct SupplierRow {
    supplier_id: i64,
    company_name: String,
    contact_name: Option<String>,
    contact_title: Option<String>,
    address: Option<String>,
    city: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
    phone: Option<String>,
    fax: Option<String>,
    home_page: Option<String>,
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Self {
            supplier_id: row.supplier_id,
            company_name: row.company_name,
            contact_name: row.contact_name,
            contact_title: row.contact_title,
            address: row.address,
            city: row.city,
            region: row.region,
            postal_code: row.postal_code,
            country: row.country,
            phone: row.phone,
            fax: row.fax,
            home_page: row.home_page,
            products: Vec::new(),
        }
    }
}

const SELECT: &str = r#"
    select
        SupplierID as supplier_id,
        CompanyName as company_name,
        ContactName as contact_name,
        ContactTitle as contact_title,
        Address as address,
        City as city,
        Region as region,
        PostalCode as postal_code,
        Country as country,
        Phone as phone,
        Fax as fax,
        HomePage as home_page
    from
        Suppliers
"#;

impl CrudRepository<Supplier> for Db {
    async fn list_all(&self) -> Result<Vec<Supplier>, Self::Error> {
        let sql = format!("{SELECT} order by CompanyName");
        let rows = sqlx::query_as::<_, SupplierRow>(&sql)
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(Supplier::from).collect())
    }

    async fn get_by_key(&self, supplier_id: i64) -> Result<Option<Supplier>, Self::Error> {
        let mut conn = self.reader.acquire().await?;

        let sql = format!("{SELECT} where SupplierID = $1");
        let Some(row) = sqlx::query_as::<_, SupplierRow>(&sql)
            .bind(supplier_id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        let mut supplier = Supplier::from(row);
        supplier.products = product::supplied_by(&mut conn, supplier_id).await?;
        Ok(Some(supplier))
    }

    async fn insert(&self, mut supplier: Supplier) -> Result<Supplier, Self::Error> {
        let result = sqlx::query(
            r#"
            insert into
                Suppliers (
                    CompanyName, ContactName, ContactTitle, Address, City, Region,
                    PostalCode, Country, Phone, Fax, HomePage
                )
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(&supplier.company_name)
        .bind(&supplier.contact_name)
        .bind(&supplier.contact_title)
        .bind(&supplier.address)
        .bind(&supplier.city)
        .bind(&supplier.region)
        .bind(&supplier.postal_code)
        .bind(&supplier.country)
        .bind(&supplier.phone)
        .bind(&supplier.fax)
        .bind(&supplier.home_page)
        .execute(&self.writer)
        .await?;

        supplier.supplier_id = result.last_insert_rowid();
        Ok(supplier)
    }

    async fn update(&self, supplier: Supplier) -> Result<Option<Supplier>, Self::Error> {
        let result = sqlx::query(
            r#"
            update
                Suppliers
            set
                CompanyName = $2,
                ContactName = $3,
                ContactTitle = $4,
                Address = $5,
                City = $6,
                Region = $7,
                PostalCode = $8,
                Country = $9,
                Phone = $10,
                Fax = $11,
                HomePage = $12
            where
                SupplierID = $1
            "#,
        )
        .bind(supplier.supplier_id)
        .bind(&supplier.company_name)
        .bind(&supplier.contact_name)
        .bind(&supplier.contact_title)
        .bind(&supplier.address)
        .bind(&supplier.city)
        .bind(&supplier.region)
        .bind(&supplier.postal_code)
        .bind(&supplier.country)
        .bind(&supplier.phone)
        .bind(&supplier.fax)
        .bind(&supplier.home_page)
        .execute(&self.writer)
        .await?;

        Ok(affected(result).then_some(supplier))
    }

    async fn delete(&self, supplier_id: i64) -> Result<bool, Self::Error> {
        // Referencing products make this fail with a foreign key violation.
        let result = sqlx::query("delete from Suppliers where SupplierID = $1")
            .bind(supplier_id)
            .execute(&self.writer)
            .await?;

        Ok(affected(result))
    }
}
