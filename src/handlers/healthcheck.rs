use actix_web::HttpResponse;

use crate::errors::MessageResponse;

pub async fn healthcheck() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "Healthcheck done!",
    })
}
