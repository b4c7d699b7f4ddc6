use super::affected;
use crate::{Db, types::DateTime};
use northwind_core::{
    models::{Order, OrderDetail, OrderDetailKey, Product},
    ports::CrudRepository,
};
use sqlx::SqliteConnection;

/// A line item with a summary of its product and order.
#[derive(sqlx::FromRow)]
struct OrderDetailRow {
    order_id: i64,
    product_id: i64,
    unit_price: f64,
    quantity: i64,
    discount: f64,
    product_name: Option<String>,
    joined_order_id: Option<i64>,
    order_customer_id: Option<String>,
    order_date: Option<DateTime>,
}

impl From<OrderDetailRow> for OrderDetail {
    fn from(row: OrderDetailRow) -> Self {
        Self {
            order_id: row.order_id,
            product_id: row.product_id,
            unit_price: row.unit_price,
            quantity: row.quantity,
            discount: row.discount,
            product: row.product_name.map(|product_name| Product {
                product_id: row.product_id,
                product_name,
                ..Default::default()
            }),
            order: row.joined_order_id.map(|order_id| Order {
                order_id,
                customer_id: row.order_customer_id,
                order_date: row.order_date.map(Into::into),
                ..Default::default()
            }),
        }
    }
}

const SELECT: &str = r#"
    select
        od.OrderID as order_id,
        od.ProductID as product_id,
        cast(od.UnitPrice as real) as unit_price,
        od.Quantity as quantity,
        cast(od.Discount as real) as discount,
        p.ProductName as product_name,
        o.OrderID as joined_order_id,
        o.CustomerID as order_customer_id,
        o.OrderDate as order_date
    from
        [Order Details] od
        left join Products p on od.ProductID = p.ProductID
        left join Orders o on od.OrderID = o.OrderID
"#;

/// The line items of one order, by product id.
pub(super) async fn of_order(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Vec<OrderDetail>, sqlx::Error> {
    let sql = format!("{SELECT} where od.OrderID = $1 order by od.ProductID");
    let rows = sqlx::query_as::<_, OrderDetailRow>(&sql)
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await?;

    // the order is the parent here; no need to repeat it on every line
    Ok(rows
        .into_iter()
        .map(|row| OrderDetail {
            order: None,
            ..OrderDetail::from(row)
        })
        .collect())
}

impl CrudRepository<OrderDetail> for Db {
    async fn list_all(&self) -> Result<Vec<OrderDetail>, Self::Error> {
        let sql = format!("{SELECT} order by od.OrderID, od.ProductID");
        let rows = sqlx::query_as::<_, OrderDetailRow>(&sql)
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(OrderDetail::from).collect())
    }

    async fn get_by_key(&self, key: OrderDetailKey) -> Result<Option<OrderDetail>, Self::Error> {
        let sql = format!("{SELECT} where od.OrderID = $1 and od.ProductID = $2");
        let row = sqlx::query_as::<_, OrderDetailRow>(&sql)
            .bind(key.order_id)
            .bind(key.product_id)
            .fetch_optional(&self.reader)
            .await?;

        Ok(row.map(OrderDetail::from))
    }

    async fn insert(&self, detail: OrderDetail) -> Result<OrderDetail, Self::Error> {
        sqlx::query(
            r#"
            insert into
                [Order Details] (OrderID, ProductID, UnitPrice, Quantity, Discount)
            values
                ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(detail.order_id)
        .bind(detail.product_id)
        .bind(detail.unit_price)
        .bind(detail.quantity)
        .bind(detail.discount)
        .execute(&self.writer)
        .await?;

        Ok(detail)
    }

    async fn update(&self, detail: OrderDetail) -> Result<Option<OrderDetail>, Self::Error> {
        let result = sqlx::query(
            r#"
            update
                [Order Details]
            set
                UnitPrice = $3,
                Quantity = $4,
                Discount = $5
            where
                OrderID = $1
            and
                ProductID = $2
            "#,
        )
        .bind(detail.order_id)
        .bind(detail.product_id)
        .bind(detail.unit_price)
        .bind(detail.quantity)
        .bind(detail.discount)
        .execute(&self.writer)
        .await?;

        Ok(affected(result).then_some(detail))
    }

    async fn delete(&self, key: OrderDetailKey) -> Result<bool, Self::Error> {
        let result =
            sqlx::query("delete from [Order Details] where OrderID = $1 and ProductID = $2")
                .bind(key.order_id)
                .bind(key.product_id)
                .execute(&self.writer)
                .await?;

        Ok(affected(result))
    }
}
