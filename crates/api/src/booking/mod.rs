mod create_booking;
mod get_availability;
mod get_booking;
mod get_bookings;
mod get_bookings_by_date;

use actix_web::web;
use create_booking::create_booking_controller;
use get_availability::get_availability_controller;
use get_booking::get_booking_controller;
use get_bookings::get_bookings_controller;
use get_bookings_by_date::get_bookings_by_date_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/orders", web::post().to(create_booking_controller));
    cfg.route("/orders", web::get().to(get_bookings_controller));

    // Must come before `/orders/{date}`
    cfg.route(
        "/orders/availability",
        web::get().to(get_availability_controller),
    );
    cfg.route(
        "/orders/booking/{booking_id}",
        web::get().to(get_booking_controller),
    );
    cfg.route(
        "/orders/{date}",
        web::get().to(get_bookings_by_date_controller),
    );
}
