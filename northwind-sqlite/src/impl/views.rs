//! The read-only reporting views. Mutations never get this far.

use crate::{Db, types::DateTime};
use northwind_core::{
    models::{AlphabeticalListOfProduct, Invoice, OrderDetailKey, ProductsByCategory, SalesByYear},
    ports::ViewRepository,
};

#[derive(sqlx::FromRow)]
struct InvoiceRow {
    ship_name: Option<String>,
    ship_address: Option<String>,
    ship_city: Option<String>,
    ship_region: Option<String>,
    ship_postal_code: Option<String>,
    ship_country: Option<String>,
    customer_id: Option<String>,
    customer_name: Option<String>,
    address: Option<String>,
    city: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
    salesperson: Option<String>,
    order_id: i64,
    order_date: Option<DateTime>,
    required_date: Option<DateTime>,
    shipped_date: Option<DateTime>,
    shipper_name: Option<String>,
    product_id: i64,
    product_name: Option<String>,
    unit_price: Option<f64>,
    quantity: Option<i64>,
    discount: Option<f64>,
    extended_price: Option<f64>,
    freight: Option<f64>,
}

impl From<InvoiceRow> for Invoice {
    fn from(row: InvoiceRow) -> Self {
        Self {
            ship_name: row.ship_name,
            ship_address: row.ship_address,
            ship_city: row.ship_city,
            ship_region: row.ship_region,
            ship_postal_code: row.ship_postal_code,
            ship_country: row.ship_country,
            customer_id: row.customer_id,
            customer_name: row.customer_name,
            address: row.address,
            city: row.city,
            region: row.region,
            postal_code: row.postal_code,
            country: row.country,
            salesperson: row.salesperson,
            order_id: row.order_id,
            order_date: row.order_date.map(Into::into),
            required_date: row.required_date.map(Into::into),
            shipped_date: row.shipped_date.map(Into::into),
            shipper_name: row.shipper_name,
            product_id: row.product_id,
            product_name: row.product_name,
            unit_price: row.unit_price,
            quantity: row.quantity,
            discount: row.discount,
            extended_price: row.extended_price,
            freight: row.freight,
        }
    }
}

const INVOICES: &str = r#"
    select
        ShipName as ship_name,
        ShipAddress as ship_address,
        ShipCity as ship_city,
        ShipRegion as ship_region,
        ShipPostalCode as ship_postal_code,
        ShipCountry as ship_country,
        CustomerID as customer_id,
        CustomerName as customer_name,
        Address as address,
        City as city,
        Region as region,
        PostalCode as postal_code,
        Country as country,
        Salesperson as salesperson,
        OrderID as order_id,
        OrderDate as order_date,
        RequiredDate as required_date,
        ShippedDate as shipped_date,
        ShipperName as shipper_name,
        ProductID as product_id,
        ProductName as product_name,
        cast(UnitPrice as real) as unit_price,
        Quantity as quantity,
        cast(Discount as real) as discount,
        cast(ExtendedPrice as real) as extended_price,
        cast(Freight as real) as freight
    from
        Invoices
"#;

impl ViewRepository<Invoice> for Db {
    async fn list_all(&self) -> Result<Vec<Invoice>, Self::Error> {
        let sql = format!("{INVOICES} order by OrderID, ProductID");
        let rows = sqlx::query_as::<_, InvoiceRow>(&sql)
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(Invoice::from).collect())
    }

    async fn get_by_key(&self, key: OrderDetailKey) -> Result<Option<Invoice>, Self::Error> {
        let sql = format!("{INVOICES} where OrderID = $1 and ProductID = $2");
        let row = sqlx::query_as::<_, InvoiceRow>(&sql)
            .bind(key.order_id)
            .bind(key.product_id)
            .fetch_optional(&self.reader)
            .await?;

        Ok(row.map(Invoice::from))
    }
}

#[derive(sqlx::FromRow)]
struct AlphabeticalListOfProductRow {
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
    category_name: Option<String>,
}

impl From<AlphabeticalListOfProductRow> for AlphabeticalListOfProduct {
    fn from(row: AlphabeticalListOfProductRow) -> Self {
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
            category_name: row.category_name,
        }
    }
}

const ALPHABETICAL_LIST_OF_PRODUCTS: &str = r#"
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
        coalesce(cast(Discontinued as text), '0') as discontinued,
        CategoryName as category_name
    from
        [Alphabetical list of products]
"#;

impl ViewRepository<AlphabeticalListOfProduct> for Db {
    async fn list_all(&self) -> Result<Vec<AlphabeticalListOfProduct>, Self::Error> {
        let sql = format!("{ALPHABETICAL_LIST_OF_PRODUCTS} order by ProductName");
        let rows = sqlx::query_as::<_, AlphabeticalListOfProductRow>(&sql)
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(AlphabeticalListOfProduct::from).collect())
    }

    async fn get_by_key(
        &self,
        product_id: i64,
    ) -> Result<Option<AlphabeticalListOfProduct>, Self::Error> {
        let sql = format!("{ALPHABETICAL_LIST_OF_PRODUCTS} where ProductID = $1");
        let row = sqlx::query_as::<_, AlphabeticalListOfProductRow>(&sql)
            .bind(product_id)
            .fetch_optional(&self.reader)
            .await?;

        Ok(row.map(AlphabeticalListOfProduct::from))
    }
}

#[derive(sqlx::FromRow)]
struct ProductsByCategoryRow {
    category_name: Option<String>,
    product_name: Option<String>,
    quantity_per_unit: Option<String>,
    units_in_stock: Option<i64>,
    discontinued: Option<String>,
}

impl From<ProductsByCategoryRow> for ProductsByCategory {
    fn from(row: ProductsByCategoryRow) -> Self {
        Self {
            category_name: row.category_name,
            product_name: row.product_name,
            quantity_per_unit: row.quantity_per_unit,
            units_in_stock: row.units_in_stock,
            discontinued: row.discontinued,
        }
    }
}

const PRODUCTS_BY_CATEGORY: &str = r#"
    select
        CategoryName as category_name,
        ProductName as product_name,
        QuantityPerUnit as quantity_per_unit,
        UnitsInStock as units_in_stock,
        cast(Discontinued as text) as discontinued
    from
        [Products by Category]
"#;

impl ViewRepository<ProductsByCategory> for Db {
    async fn list_all(&self) -> Result<Vec<ProductsByCategory>, Self::Error> {
        let sql = format!("{PRODUCTS_BY_CATEGORY} order by CategoryName, ProductName");
        let rows = sqlx::query_as::<_, ProductsByCategoryRow>(&sql)
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(ProductsByCategory::from).collect())
    }

    async fn get_by_key(
        &self,
        product_name: String,
    ) -> Result<Option<ProductsByCategory>, Self::Error> {
        let sql = format!("{PRODUCTS_BY_CATEGORY} where ProductName = $1 limit 1");
        let row = sqlx::query_as::<_, ProductsByCategoryRow>(&sql)
            .bind(product_name)
            .fetch_optional(&self.reader)
            .await?;

        Ok(row.map(ProductsByCategory::from))
    }
}

#[derive(sqlx::FromRow)]
struct SalesByYearRow {
    shipped_date: Option<DateTime>,
    order_id: i64,
    subtotal: Option<f64>,
}

impl From<SalesByYearRow> for SalesByYear {
    fn from(row: SalesByYearRow) -> Self {
        Self {
            shipped_date: row.shipped_date.map(Into::into),
            order_id: row.order_id,
            subtotal: row.subtotal,
        }
    }
}

const SUMMARY_OF_SALES_BY_YEAR: &str = r#"
    select
        ShippedDate as shipped_date,
        OrderID as order_id,
        cast(Subtotal as real) as subtotal
    from
        [Summary of Sales by Year]
"#;

impl ViewRepository<SalesByYear> for Db {
    async fn list_all(&self) -> Result<Vec<SalesByYear>, Self::Error> {
        let sql = format!("{SUMMARY_OF_SALES_BY_YEAR} order by ShippedDate, OrderID");
        let rows = sqlx::query_as::<_, SalesByYearRow>(&sql)
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(SalesByYear::from).collect())
    }

    async fn get_by_key(&self, order_id: i64) -> Result<Option<SalesByYear>, Self::Error> {
        let sql = format!("{SUMMARY_OF_SALES_BY_YEAR} where OrderID = $1");
        let row = sqlx::query_as::<_, SalesByYearRow>(&sql)
            .bind(order_id)
            .fetch_optional(&self.reader)
            .await?;

        Ok(row.map(SalesByYear::from))
    }
}
