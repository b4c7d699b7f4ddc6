#![allow(dead_code)]

use northwind_core::{
    Gateway,
    models::{Category, Customer, Employee, Order, OrderDetail, Outcome, Product, Shipper, Supplier},
};
use northwind_sqlite::{Db, config::SqliteConfig};
use time::macros::{date, datetime};

/// A gateway over a fresh, private in-memory database.
pub async fn gateway() -> anyhow::Result<Gateway<Db>> {
    let db = Db::open(&SqliteConfig::in_memory()).await?;
    Ok(Gateway::new(db))
}

/// Unwrap a successful outcome, turning failure messages into an error.
pub fn ok<T>(outcome: Outcome<T>) -> anyhow::Result<T> {
    outcome
        .into_result()
        .map_err(|messages| anyhow::anyhow!(messages.join("; ")))
}

/// Ids of the rows created by [`seed_order`].
pub struct Seeded {
    pub customer_id: String,
    pub employee_id: i64,
    pub shipper_id: i64,
    pub category_id: i64,
    pub supplier_id: i64,
    pub product_id: i64,
    pub order_id: i64,
}

/// One shipped order for ALFKI with a single line of Chai.
pub async fn seed_order(gateway: &Gateway<Db>) -> anyhow::Result<Seeded> {
    let customer = ok(gateway
        .insert(Customer {
            customer_id: "ALFKI".into(),
            company_name: Some("Alfreds Futterkiste".into()),
            contact_name: Some("Maria Anders".into()),
            country: Some("Germany".into()),
            ..Default::default()
        })
        .await)?;

    let employee = ok(gateway
        .insert(Employee {
            last_name: Some("Davolio".into()),
            first_name: Some("Nancy".into()),
            title: Some("Sales Representative".into()),
            birth_date: Some(date!(1948-12-08)),
            hire_date: Some(date!(1992-05-01)),
            ..Default::default()
        })
        .await)?;

    let shipper = ok(gateway
        .insert(Shipper {
            company_name: "Speedy Express".into(),
            phone: Some("(503) 555-9831".into()),
            ..Default::default()
        })
        .await)?;

    let category = ok(gateway
        .insert(Category {
            category_name: Some("Beverages".into()),
            description: Some("Soft drinks, coffees, teas, beers, and ales".into()),
            ..Default::default()
        })
        .await)?;

    let supplier = ok(gateway
        .insert(Supplier {
            company_name: "Exotic Liquids".into(),
            contact_name: Some("Charlotte Cooper".into()),
            city: Some("London".into()),
            ..Default::default()
        })
        .await)?;

    let product = ok(gateway
        .insert(Product {
            product_name: "Chai".into(),
            supplier_id: Some(supplier.supplier_id),
            category_id: Some(category.category_id),
            quantity_per_unit: Some("10 boxes x 20 bags".into()),
            unit_price: Some(18.0),
            units_in_stock: Some(39),
            units_on_order: Some(0),
            reorder_level: Some(10),
            discontinued: "0".into(),
            ..Default::default()
        })
        .await)?;

    let order = ok(gateway
        .insert(Order {
            customer_id: Some(customer.customer_id.clone()),
            employee_id: Some(employee.employee_id),
            order_date: Some(datetime!(1996-07-04 0:00)),
            required_date: Some(datetime!(1996-08-01 0:00)),
            shipped_date: Some(datetime!(1996-07-16 0:00)),
            ship_via: Some(shipper.shipper_id),
            freight: Some(32.38),
            ship_name: Some("Alfreds Futterkiste".into()),
            ship_city: Some("Berlin".into()),
            ..Default::default()
        })
        .await)?;

    ok(gateway
        .insert(OrderDetail {
            order_id: order.order_id,
            product_id: product.product_id,
            unit_price: 14.0,
            quantity: 12,
            discount: 0.0,
            ..Default::default()
        })
        .await)?;

    Ok(Seeded {
        customer_id: customer.customer_id,
        employee_id: employee.employee_id,
        shipper_id: shipper.shipper_id,
        category_id: category.category_id,
        supplier_id: supplier.supplier_id,
        product_id: product.product_id,
        order_id: order.order_id,
    })
}
