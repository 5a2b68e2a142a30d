use actix_web::{web, HttpResponse};
use barber_booking_api_structs::{get_service_health, get_service_status};
use barber_booking_infra::BookingContext;

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(get_service_status::APIResponse {
        status: "OK".into(),
        message: "Barber booking service is up".into(),
    })
}

async fn health(ctx: web::Data<BookingContext>) -> HttpResponse {
    let now = ctx.sys.get_timestamp_millis();
    HttpResponse::Ok().json(get_service_health::APIResponse {
        status: "healthy".into(),
        uptime_secs: (now - ctx.sys.booted_at_millis()) / 1000,
        timestamp: now,
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
    cfg.route("/health", web::get().to(health));
}
