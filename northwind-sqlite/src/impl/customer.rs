use super::{affected, order};
use crate::Db;
use northwind_core::{models::Customer, ports::CrudRepository};
use sqlx::SqliteConnection;

#[derive(sqlx::FromRow)]
struct CustomerRow {
    customer_id: String,
    company_name: Option<String>,
    contact_name: Option<String>,
    contact_title: Option<String>,
    address: Option<String>,
    city: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
    phone: Option<String>,
    fax: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            customer_id: row.customer_id,
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
            orders: Vec::new(),
        }
    }
}

const SELECT: &str = r#"
    select
        CustomerID as customer_id,
        CompanyName as company_name,
        ContactName as contact_name,
        ContactTitle as contact_title,
        Address as address,
        City as city,
        Region as region,
        PostalCode as postal_code,
        Country as country,
        Phone as phone,
        Fax as fax
    from
        Customers
"#;

pub(super) async fn find(
    conn: &mut SqliteConnection,
    customer_id: &str,
) -> Result<Option<Customer>, sqlx::Error> {
    let sql = format!("{SELECT} where CustomerID = $1");
    let row = sqlx::query_as::<_, CustomerRow>(&sql)
        .bind(customer_id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(row.map(Customer::from))
}

impl CrudRepository<Customer> for Db {
    async fn list_all(&self) -> Result<Vec<Customer>, Self::Error> {
        let sql = format!("{SELECT} order by CompanyName");
        let rows = sqlx::query_as::<_, CustomerRow>(&sql)
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn get_by_key(&self, customer_id: String) -> Result<Option<Customer>, Self::Error> {
        let mut conn = self.reader.acquire().await?;

        let Some(mut customer) = find(&mut conn, &customer_id).await? else {
            return Ok(None);
        };

        // most recent first
        customer.orders = order::placed_by(&mut conn, &customer_id).await?;
        Ok(Some(customer))
    }

    async fn insert(&self, customer: Customer) -> Result<Customer, Self::Error> {
        sqlx::query(
            r#"
            insert into
                Customers (
                    CustomerID, CompanyName, ContactName, ContactTitle, Address,
                    City, Region, PostalCode, Country, Phone, Fax
                )
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(&customer.customer_id)
        .bind(&customer.company_name)
        .bind(&customer.contact_name)
        .bind(&customer.contact_title)
        .bind(&customer.address)
        .bind(&customer.city)
        .bind(&customer.region)
        .bind(&customer.postal_code)
        .bind(&customer.country)
        .bind(&customer.phone)
        .bind(&customer.fax)
        .execute(&self.writer)
        .await?;

        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> Result<Option<Customer>, Self::Error> {
        let result = sqlx::query(
            r#"
            update
                Customers
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
                Fax = $11
            where
                CustomerID = $1
            "#,
        )
        .bind(&customer.customer_id)
        .bind(&customer.company_name)
        .bind(&customer.contact_name)
        .bind(&customer.contact_title)
        .bind(&customer.address)
        .bind(&customer.city)
        .bind(&customer.region)
        .bind(&customer.postal_code)
        .bind(&customer.country)
        .bind(&customer.phone)
        .bind(&customer.fax)
        .execute(&self.writer)
        .await?;

        Ok(affected(result).then_some(customer))
    }

    async fn delete(&self, customer_id: String) -> Result<bool, Self::Error> {
        let result = sqlx::query("delete from Customers where CustomerID = $1")
            .bind(customer_id)
            .execute(&self.writer)
            .await?;

        Ok(affected(result))
    }
}
