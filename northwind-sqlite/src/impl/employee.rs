use super::affected;
use crate::{Db, types::DateTime};
use northwind_core::{models::Employee, ports::CrudRepository};
use sqlx::SqliteConnection;

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    employee_id: i64,
    last_name: Option<String>,
    first_name: Option<String>,
    title: Option<String>,
    title_of_courtesy: Option<String>,
    birth_date: Option<DateTime>,
    hire_date: Option<DateTime>,
    address: Option<String>,
    city: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
    home_phone: Option<String>,
    extension: Option<String>,
    photo: Option<Vec<u8>>,
    notes: Option<String>,
    reports_to: Option<i64>,
    photo_path: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_id: row.employee_id,
            last_name: row.last_name,
            first_name: row.first_name,
            title: row.title,
            title_of_courtesy: row.title_of_courtesy,
            // stored as timestamps; only the calendar date is meaningful
            birth_date: row.birth_date.map(DateTime::date),
            hire_date: row.hire_date.map(DateTime::date),
            address: row.address,
            city: row.city,
            region: row.region,
            postal_code: row.postal_code,
            country: row.country,
            home_phone: row.home_phone,
            extension: row.extension,
            photo: row.photo,
            notes: row.notes,
            reports_to: row.reports_to,
            photo_path: row.photo_path,
            manager: None,
        }
    }
}

const SELECT: &str = r#"
    select
        EmployeeID as employee_id,
        LastName as last_name,
        FirstName as first_name,
        Title as title,
        TitleOfCourtesy as title_of_courtesy,
        BirthDate as birth_date,
        HireDate as hire_date,
        Address as address,
        City as city,
        Region as region,
        PostalCode as postal_code,
        Country as country,
        HomePhone as home_phone,
        Extension as extension,
        Photo as photo,
        Notes as notes,
        ReportsTo as reports_to,
        PhotoPath as photo_path
    from
        Employees
"#;

pub(super) async fn find(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<Employee>, sqlx::Error> {
    let sql = format!("{SELECT} where EmployeeID = $1");
    let row = sqlx::query_as::<_, EmployeeRow>(&sql)
        .bind(employee_id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(row.map(Employee::from))
}

impl CrudRepository<Employee> for Db {
    async fn list_all(&self) -> Result<Vec<Employee>, Self::Error> {
        let sql = format!("{SELECT} order by LastName, FirstName");
        let rows = sqlx::query_as::<_, EmployeeRow>(&sql)
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn get_by_key(&self, employee_id: i64) -> Result<Option<Employee>, Self::Error> {
        let mut conn = self.reader.acquire().await?;

        let Some(mut employee) = find(&mut conn, employee_id).await? else {
            return Ok(None);
        };

        // one level only; the manager's own manager stays unloaded
        if let Some(manager_id) = employee.reports_to {
            employee.manager = find(&mut conn, manager_id).await?.map(Box::new);
        }
        Ok(Some(employee))
    }

    async fn insert(&self, mut employee: Employee) -> Result<Employee, Self::Error> {
        let result = sqlx::query(
            r#"
            insert into
                Employees (
                    LastName, FirstName, Title, TitleOfCourtesy, BirthDate, HireDate,
                    Address, City, Region, PostalCode, Country, HomePhone, Extension,
                    Photo, Notes, ReportsTo, PhotoPath
                )
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(&employee.last_name)
        .bind(&employee.first_name)
        .bind(&employee.title)
        .bind(&employee.title_of_courtesy)
        .bind(employee.birth_date.map(DateTime::from))
        .bind(employee.hire_date.map(DateTime::from))
        .bind(&employee.address)
        .bind(&employee.city)
        .bind(&employee.region)
        .bind(&employee.postal_code)
        .bind(&employee.country)
        .bind(&employee.home_phone)
        .bind(&employee.extension)
        .bind(&employee.photo)
        .bind(&employee.notes)
        .bind(employee.reports_to)
        .bind(&employee.photo_path)
        .execute(&self.writer)
        .await?;

        employee.employee_id = result.last_insert_rowid();
        Ok(employee)
    }

    async fn update(&self, employee: Employee) -> Result<Option<Employee>, Self::Error> {
        let result = sqlx::query(
            r#"
            update
                Employees
            set
                LastName = $2,
                FirstName = $3,
                Title = $4,
                TitleOfCourtesy = $5,
                BirthDate = $6,
                HireDate = $7,
                Address = $8,
                City = $9,
                Region = $10,
                PostalCode = $11,
                Country = $12,
                HomePhone = $13,
                Extension = $14,
                Photo = $15,
                Notes = $16,
                ReportsTo = $17,
                PhotoPath = $18
            where
                EmployeeID = $1
            "#,
        )
        .bind(employee.employee_id)
        .bind(&employee.last_name)
        .bind(&employee.first_name)
        .bind(&employee.title)
        .bind(&employee.title_of_courtesy)
        .bind(employee.birth_date.map(DateTime::from))
        .bind(employee.hire_date.map(DateTime::from))
        .bind(&employee.address)
        .bind(&employee.city)
        .bind(&employee.region)
        .bind(&employee.postal_code)
        .bind(&employee.country)
        .bind(&employee.home_phone)
        .bind(&employee.extension)
        .bind(&employee.photo)
        .bind(&employee.notes)
        .bind(employee.reports_to)
        .bind(&employee.photo_path)
        .execute(&self.writer)
        .await?;

        Ok(affected(result).then_some(employee))
    }

    async fn delete(&self, employee_id: i64) -> Result<bool, Self::Error> {
        let result = sqlx::query("delete from Employees where EmployeeID = $1")
            .bind(employee_id)
            .execute(&self.writer)
            .await?;

        Ok(affected(result))
    }
}
