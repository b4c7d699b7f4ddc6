use super::{affected, customer, employee, order_detail, shipper};
use crate::{Db, types::DateTime};
use northwind_core::{
    models::{Customer, Employee, Order, Shipper},
    ports::CrudRepository,
};
use sqlx::SqliteConnection;

#[derive(sqlx::FromRow)]
struct OrderRow {
    order_id: i64,
    customer_id: Option<String>,
    employee_id: Option<i64>,
    order_date: Option<DateTime>,
    required_date: Option<DateTime>,
    shipped_date: Option<DateTime>,
    ship_via: Option<i64>,
    freight: Option<f64>,
    ship_name: Option<String>,
    ship_address: Option<String>,
    ship_city: Option<String>,
    ship_region: Option<String>,
    ship_postal_code: Option<String>,
    ship_country: Option<String>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            order_id: row.order_id,
            customer_id: row.customer_id,
            employee_id: row.employee_id,
            order_date: row.order_date.map(Into::into),
            required_date: row.required_date.map(Into::into),
            shipped_date: row.shipped_date.map(Into::into),
            ship_via: row.ship_via,
            freight: row.freight,
            ship_name: row.ship_name,
            ship_address: row.ship_address,
            ship_city: row.ship_city,
            ship_region: row.ship_region,
            ship_postal_code: row.ship_postal_code,
            ship_country: row.ship_country,
            ..Default::default()
        }
    }
}

/// An order with the display names of its customer, employee and shipper.
#[derive(sqlx::FromRow)]
struct OrderWithParentsRow {
    #[sqlx(flatten)]
    order: OrderRow,
    customer_company_name: Option<String>,
    employee_first_name: Option<String>,
    employee_last_name: Option<String>,
    shipper_company_name: Option<String>,
}

impl From<OrderWithParentsRow> for Order {
    fn from(row: OrderWithParentsRow) -> Self {
        let mut order = Order::from(row.order);
        order.customer = order.customer_id.clone().map(|customer_id| Customer {
            customer_id,
            company_name: row.customer_company_name,
            ..Default::default()
        });
        order.employee = order.employee_id.map(|employee_id| Employee {
            employee_id,
            first_name: row.employee_first_name,
            last_name: row.employee_last_name,
            ..Default::default()
        });
        order.shipper = order.ship_via.map(|shipper_id| Shipper {
            shipper_id,
            company_name: row.shipper_company_name.unwrap_or_default(),
            ..Default::default()
        });
        order
    }
}

const SELECT: &str = r#"
    select
        OrderID as order_id,
        CustomerID as customer_id,
        EmployeeID as employee_id,
        OrderDate as order_date,
        RequiredDate as required_date,
        ShippedDate as shipped_date,
        ShipVia as ship_via,
        cast(Freight as real) as freight,
        ShipName as ship_name,
        ShipAddress as ship_address,
        ShipCity as ship_city,
        ShipRegion as ship_region,
        ShipPostalCode as ship_postal_code,
        ShipCountry as ship_country
    from
        Orders
"#;

/// Orders of one customer, most recent first.
pub(super) async fn placed_by(
    conn: &mut SqliteConnection,
    customer_id: &str,
) -> Result<Vec<Order>, sqlx::Error> {
    let sql = format!("{SELECT} where CustomerID = $1 order by OrderDate desc, OrderID");
    let rows = sqlx::query_as::<_, OrderRow>(&sql)
        .bind(customer_id)
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().map(Order::from).collect())
}

/// Orders shipped with one shipper, most recent first.
pub(super) async fn shipped_via(
    conn: &mut SqliteConnection,
    shipper_id: i64,
) -> Result<Vec<Order>, sqlx::Error> {
    let sql = format!("{SELECT} where ShipVia = $1 order by OrderDate desc, OrderID");
    let rows = sqlx::query_as::<_, OrderRow>(&sql)
        .bind(shipper_id)
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().map(Order::from).collect())
}

impl CrudRepository<Order> for Db {
    async fn list_all(&self) -> Result<Vec<Order>, Self::Error> {
        let rows = sqlx::query_as::<_, OrderWithParentsRow>(
            r#"
            select
                o.OrderID as order_id,
                o.CustomerID as customer_id,
                o.EmployeeID as employee_id,
                o.OrderDate as order_date,
                o.RequiredDate as required_date,
                o.ShippedDate as shipped_date,
                o.ShipVia as ship_via,
                cast(o.Freight as real) as freight,
                o.ShipName as ship_name,
                o.ShipAddress as ship_address,
                o.ShipCity as ship_city,
                o.ShipRegion as ship_region,
                o.ShipPostalCode as ship_postal_code,
                o.ShipCountry as ship_country,
                c.CompanyName as customer_company_name,
                e.FirstName as employee_first_name,
                e.LastName as employee_last_name,
                s.CompanyName as shipper_company_name
            from
                Orders o
                left join Customers c on o.CustomerID = c.CustomerID
                left join Employees e on o.EmployeeID = e.EmployeeID
                left join Shippers s on o.ShipVia = s.ShipperID
            order by
                o.OrderDate desc,
                o.OrderID
            "#,
        )
        .fetch_all(&self.reader)
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn get_by_key(&self, order_id: i64) -> Result<Option<Order>, Self::Error> {
        let mut conn = self.reader.acquire().await?;

        let sql = format!("{SELECT} where OrderID = $1");
        let Some(row) = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(order_id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };
        let mut order = Order::from(row);

        if let Some(customer_id) = order.customer_id.as_deref() {
            order.customer = customer::find(&mut conn, customer_id).await?;
        }
        if let Some(employee_id) = order.employee_id {
            order.employee = employee::find(&mut conn, employee_id).await?;
        }
        if let Some(shipper_id) = order.ship_via {
            order.shipper = shipper::find(&mut conn, shipper_id).await?;
        }
        order.order_details = order_detail::of_order(&mut conn, order_id).await?;

        Ok(Some(order))
    }

    async fn insert(&self, mut order: Order) -> Result<Order, Self::Error> {
        let result = sqlx::query(
            r#"
            insert into
                Orders (
                    CustomerID, EmployeeID, OrderDate, RequiredDate, ShippedDate,
                    ShipVia, Freight, ShipName, ShipAddress, ShipCity, ShipRegion,
                    ShipPostalCode, ShipCountry
                )
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(&order.customer_id)
        .bind(order.employee_id)
        .bind(order.order_date.map(DateTime::from))
        .bind(order.required_date.map(DateTime::from))
        .bind(order.shipped_date.map(DateTime::from))
        .bind(order.ship_via)
        .bind(order.freight)
        .bind(&order.ship_name)
        .bind(&order.ship_address)
        .bind(&order.ship_city)
        .bind(&order.ship_region)
        .bind(&order.ship_postal_code)
        .bind(&order.ship_country)
        .execute(&self.writer)
        .await?;

        order.order_id = result.last_insert_rowid();
        Ok(order)
    }

    async fn update(&self, order: Order) -> Result<Option<Order>, Self::Error> {
        let result = sqlx::query(
            r#"
            update
                Orders
            set
                CustomerID = $2,
                EmployeeID = $3,
                OrderDate = $4,
                RequiredDate = $5,
                ShippedDate = $6,
                ShipVia = $7,
                Freight = $8,
                ShipName = $9,
                ShipAddress = $10,
                ShipCity = $11,
                ShipRegion = $12,
                ShipPostalCode = $13,
                ShipCountry = $14
            where
                OrderID = $1
            "#,
        )
        .bind(order.order_id)
        .bind(&order.customer_id)
        .bind(order.employee_id)
        .bind(order.order_date.map(DateTime::from))
        .bind(order.required_date.map(DateTime::from))
        .bind(order.shipped_date.map(DateTime::from))
        .bind(order.ship_via)
        .bind(order.freight)
        .bind(&order.ship_name)
        .bind(&order.ship_address)
        .bind(&order.ship_city)
        .bind(&order.ship_region)
        .bind(&order.ship_postal_code)
        .bind(&order.ship_country)
        .execute(&self.writer)
        .await?;

        Ok(affected(result).then_some(order))
    }

    async fn delete(&self, order_id: i64) -> Result<bool, Self::Error> {
        let result = sqlx::query("delete from Orders where OrderID = $1")
            .bind(order_id)
            .execute(&self.writer)
            .await?;

        Ok(affected(result))
    }
}
