mod common;

use common::{gateway, ok, seed_order};
use northwind_core::models::{
    Category, Customer, Employee, Order, OrderDetail, OrderDetailKey, Product, Region, Shipper,
    Supplier, Territory,
};
use rstest::rstest;
use time::macros::{date, datetime};

#[tokio::test]
async fn test_customer_orders_most_recent_first() -> anyhow::Result<()> {
    let gateway = gateway().await?;
    let seeded = seed_order(&gateway).await?;

    for order_date in [datetime!(1997-08-25 0:00), datetime!(1998-04-09 0:00)] {
        ok(gateway
            .insert(Order {
                customer_id: Some(seeded.customer_id.clone()),
                order_date: Some(order_date),
                ..Default::default()
            })
            .await)?;
    }

    let customer = ok(gateway.get::<Customer>(seeded.customer_id).await)?;
    let dates: Vec<_> = customer.orders.iter().filter_map(|o| o.order_date).collect();
    assert_eq!(
        dates,
        [
            datetime!(1998-04-09 0:00),
            datetime!(1997-08-25 0:00),
            datetime!(1996-07-04 0:00),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_order_is_fully_hydrated() -> anyhow::Result<()> {
    let gateway = gateway().await?;
    let seeded = seed_order(&gateway).await?;

    let order = ok(gateway.get::<Order>(seeded.order_id).await)?;
    assert_eq!(order.freight, Some(32.38));
    assert_eq!(
        order.customer.and_then(|c| c.company_name).as_deref(),
        Some("Alfreds Futterkiste")
    );
    assert_eq!(order.employee.and_then(|e| e.last_name).as_deref(), Some("Davolio"));
    assert_eq!(order.shipper.map(|s| s.company_name).as_deref(), Some("Speedy Express"));

    assert_eq!(order.order_details.len(), 1);
    let line = &order.order_details[0];
    assert_eq!((line.unit_price, line.quantity), (14.0, 12));
    assert_eq!(
        line.product.as_ref().map(|p| p.product_name.as_str()),
        Some("Chai")
    );

    Ok(())
}

#[tokio::test]
async fn test_list_joins_immediate_parents() -> anyhow::Result<()> {
    let gateway = gateway().await?;
    let seeded = seed_order(&gateway).await?;

    let products = ok(gateway.list::<Product>().await)?;
    assert_eq!(products.len(), 1);
    let category = products[0].category.as_ref();
    assert_eq!(category.map(|c| c.category_id), Some(seeded.category_id));
    assert_eq!(
        category.and_then(|c| c.category_name.as_deref()),
        Some("Beverages")
    );
    let supplier = products[0].supplier.as_ref();
    assert_eq!(supplier.map(|s| s.company_name.as_str()), Some("Exotic Liquids"));
    assert_eq!(
        supplier.and_then(|s| s.contact_name.as_deref()),
        Some("Charlotte Cooper")
    );

    let orders = ok(gateway.list::<Order>().await)?;
    assert_eq!(orders.len(), 1);
    assert_eq!(
        orders[0].shipper.as_ref().map(|s| s.shipper_id),
        Some(seeded.shipper_id)
    );
    assert!(orders[0].order_details.is_empty());

    let details = ok(gateway.list::<OrderDetail>().await)?;
    assert_eq!(
        details[0].order.as_ref().and_then(|o| o.order_date),
        Some(datetime!(1996-07-04 0:00))
    );

    Ok(())
}

#[tokio::test]
async fn test_category_and_supplier_list_their_products() -> anyhow::Result<()> {
    let gateway = gateway().await?;
    let seeded = seed_order(&gateway).await?;

    ok(gateway
        .insert(Product {
            product_name: "Chang".into(),
            category_id: Some(seeded.category_id),
            supplier_id: Some(seeded.supplier_id),
            discontinued: "0".into(),
            ..Default::default()
        })
        .await)?;

    let category = ok(gateway.get::<Category>(seeded.category_id).await)?;
    let names: Vec<_> = category.products.iter().map(|p| p.product_name.as_str()).collect();
    assert_eq!(names, ["Chai", "Chang"]);

    let supplier = ok(gateway.get::<Supplier>(seeded.supplier_id).await)?;
    assert_eq!(supplier.products.len(), 2);

    let shipper = ok(gateway.get::<Shipper>(seeded.shipper_id).await)?;
    assert_eq!(
        shipper.orders.iter().map(|o| o.order_id).collect::<Vec<_>>(),
        [seeded.order_id]
    );

    Ok(())
}

#[tokio::test]
async fn test_employee_dates_and_manager() -> anyhow::Result<()> {
    let gateway = gateway().await?;

    let manager = ok(gateway
        .insert(Employee {
            last_name: Some("Fuller".into()),
            first_name: Some("Andrew".into()),
            ..Default::default()
        })
        .await)?;
    let employee = ok(gateway
        .insert(Employee {
            last_name: Some("Leverling".into()),
            first_name: Some("Janet".into()),
            reports_to: Some(manager.employee_id),
            ..Default::default()
        })
        .await)?;

    // Imported Northwind files carry full timestamps in date-only columns.
    sqlx::query(
        r#"
        update
            Employees
        set
            BirthDate = '1963-08-30T14:25:00.000',
            HireDate = '1992-04-01'
        where
            EmployeeID = $1
        "#,
    )
    .bind(employee.employee_id)
    .execute(&gateway.repository().writer)
    .await?;

    let fetched = ok(gateway.get::<Employee>(employee.employee_id).await)?;
    assert_eq!(fetched.birth_date, Some(date!(1963-08-30)));
    assert_eq!(fetched.hire_date, Some(date!(1992-04-01)));
    assert_eq!(
        fetched.manager.and_then(|m| m.last_name).as_deref(),
        Some("Fuller")
    );

    Ok(())
}

#[tokio::test]
async fn test_region_territories() -> anyhow::Result<()> {
    let gateway = gateway().await?;

    ok(gateway
        .insert(Region {
            region_id: 1,
            region_description: "Eastern".into(),
            ..Default::default()
        })
        .await)?;
    for (id, description) in [("02116", "Boston"), ("01581", "Westboro"), ("06897", "Wilton")] {
        ok(gateway
            .insert(Territory {
                territory_id: id.into(),
                territory_description: description.into(),
                region_id: 1,
                ..Default::default()
            })
            .await)?;
    }

    let region = ok(gateway.get::<Region>(1).await)?;
    let descriptions: Vec<_> = region
        .territories
        .iter()
        .map(|t| t.territory_description.as_str())
        .collect();
    assert_eq!(descriptions, ["Boston", "Westboro", "Wilton"]);

    let territory = ok(gateway.get::<Territory>("01581".into()).await)?;
    assert_eq!(
        territory.region.map(|r| r.region_description).as_deref(),
        Some("Eastern")
    );

    Ok(())
}

#[rstest]
#[case::supplier_with_products("Supplier")]
#[case::category_with_products("Category")]
#[case::order_with_lines("Order")]
#[tokio::test]
async fn test_referenced_rows_cannot_be_deleted(#[case] entity: &str) -> anyhow::Result<()> {
    let gateway = gateway().await?;
    let seeded = seed_order(&gateway).await?;

    let outcome = match entity {
        "Supplier" => gateway.delete::<Supplier>(seeded.supplier_id).await,
        "Category" => gateway.delete::<Category>(seeded.category_id).await,
        _ => gateway.delete::<Order>(seeded.order_id).await,
    };
    assert!(!outcome.is_success());
    assert_eq!(outcome.data(), None);
    assert!(
        outcome
            .error_messages()
            .iter()
            .any(|message| message.contains("FOREIGN KEY constraint failed")),
        "{:?}",
        outcome.error_messages()
    );

    // nothing was removed
    assert!(gateway.get::<Supplier>(seeded.supplier_id).await.is_success());
    assert!(
        gateway
            .get::<OrderDetail>(OrderDetailKey::new(seeded.order_id, seeded.product_id))
            .await
            .is_success()
    );

    Ok(())
}
