use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde_json::Value;
use uuid::Uuid;

use crate::db::EmployeeStore;
use crate::errors::{AppError, MessageResponse};
use crate::models::employee::{Employee, EmployeeUpdate, EmployeeView, NewEmployee};

pub async fn create_employee<S: EmployeeStore>(
    store: web::Data<S>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    let new_employee = new_employee.into_inner();

    // Fast path only; the store re-checks atomically when inserting.
    if store
        .find_by_first_name(&new_employee.first_name)
        .await?
        .is_some()
    {
        warn!("Rejected duplicate employee {:?}", new_employee.first_name);
        return Err(AppError::employee_exists());
    }

    let employee = Employee::new(Uuid::new_v4().to_string(), new_employee);
    let stored = store.insert(&employee).await?;
    info!("Created employee {}", stored.public_id);

    Ok(HttpResponse::Created().json(MessageResponse {
        message: "New employee created!",
    }))
}

pub async fn get_employees<S: EmployeeStore>(
    store: web::Data<S>,
) -> Result<HttpResponse, AppError> {
    let employees: Vec<EmployeeView> = store
        .list_all()
        .await?
        .into_iter()
        .map(EmployeeView::from)
        .collect();

    Ok(HttpResponse::Ok().json(MessageResponse { message: employees }))
}

pub async fn update_employee<S: EmployeeStore>(
    store: web::Data<S>,
    public_id: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let public_id = public_id.into_inner();
    let body = body.into_inner();

    // Decoded by hand so the response can echo the body exactly as sent.
    let updates: EmployeeUpdate = serde_json::from_value(body.clone())
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let mut employee = store
        .find_by_public_id(&public_id)
        .await?
        .ok_or_else(AppError::employee_not_found)?;

    employee.apply(&updates);
    store.update(&employee).await?;
    info!("Updated employee {}", public_id);

    Ok(HttpResponse::Accepted().json(MessageResponse { message: body }))
}

pub async fn delete_employee<S: EmployeeStore>(
    store: web::Data<S>,
    public_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let public_id = public_id.into_inner();

    let employee = store
        .find_by_public_id(&public_id)
        .await?
        .ok_or_else(AppError::employee_not_found)?;

    store.delete(&employee).await?;
    info!("Deleted employee {}", public_id);

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Employee has been deleted",
    }))
}
