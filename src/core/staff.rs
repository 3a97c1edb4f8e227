//! Employee records, managed from the admin dashboard.

use crate::{
    entities::{Employee, employee},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates an employee record. Name is required; the joined date defaults to
/// now when not given.
pub async fn create_employee(
    db: &DatabaseConnection,
    name: &str,
    email: Option<String>,
    phone: Option<String>,
    position: Option<String>,
    salary: Option<i32>,
    joined_date: Option<chrono::DateTime<chrono::Utc>>,
) -> Result<employee::Model> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "Employee name is required".to_string(),
        });
    }

    let model = employee::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email),
        phone: Set(phone),
        position: Set(position),
        salary: Set(salary),
        joined_date: Set(joined_date.unwrap_or_else(chrono::Utc::now)),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Retrieves all employees in hiring order.
pub async fn list_employees(db: &DatabaseConnection) -> Result<Vec<employee::Model>> {
    Employee::find()
        .order_by_asc(employee::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Partially updates an employee; `None` fields stay as stored.
pub async fn update_employee(
    db: &DatabaseConnection,
    employee_id: i64,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    position: Option<String>,
    salary: Option<i32>,
) -> Result<employee::Model> {
    let employee = Employee::find_by_id(employee_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Employee",
            id: employee_id,
        })?;

    let mut active: employee::ActiveModel = employee.into();
    if let Some(name) = name {
        active.name = Set(name);
    }
    if email.is_some() {
        active.email = Set(email);
    }
    if phone.is_some() {
        active.phone = Set(phone);
    }
    if position.is_some() {
        active.position = Set(position);
    }
    if salary.is_some() {
        active.salary = Set(salary);
    }

    active.update(db).await.map_err(Into::into)
}

/// Deletes an employee record.
pub async fn delete_employee(db: &DatabaseConnection, employee_id: i64) -> Result<()> {
    let employee = Employee::find_by_id(employee_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Employee",
            id: employee_id,
        })?;

    employee.delete(db).await?;
    Ok(())
}
