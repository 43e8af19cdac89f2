//! Route table shared by the server and the handler tests.

use actix_web::web;

use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::handlers::{employee, healthcheck};

/// Turns body decode failures (missing fields, bad dates, malformed JSON)
/// into a 400 with the usual `{"message": ...}` shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        AppError::BadRequest(err.to_string()).into()
    })
}

pub fn configure<S: EmployeeStore>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource("/healthcheck")
                .route(web::get().to(healthcheck::healthcheck)),
        )
        .service(
            web::resource("/employee")
                .route(web::post().to(employee::create_employee::<S>))
                .route(web::get().to(employee::get_employees::<S>)),
        )
        .service(
            web::resource("/employee/{public_id}")
                .route(web::patch().to(employee::update_employee::<S>))
                .route(web::delete().to(employee::delete_employee::<S>)),
        );
}
