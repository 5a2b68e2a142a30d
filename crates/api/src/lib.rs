mod booking;
mod customer;
mod error;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use barber_booking_infra::BookingContext;
use error::BookingServiceError;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub use shared::auth::Claims;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    booking::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: BookingContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: BookingContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                    BookingServiceError::BadClientData(err.to_string()).into()
                }))
                .app_data(web::PathConfig::default().error_handler(|err, _req| {
                    BookingServiceError::NotFound(err.to_string()).into()
                }))
                .configure(status::configure_routes)
                .service(web::scope("/api").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
