use barber_booking_api::{Application, Claims};
use barber_booking_domain::{ResourceId, Role};
use barber_booking_infra::{BookingContext, Config};
use barber_booking_sdk::BookingSDK;
use jsonwebtoken::{encode, EncodingKey, Header};

pub struct TestApp {
    pub config: Config,
    pub address: String,
}

impl TestApp {
    /// Token for a staff member, valid for an hour
    pub fn access_token(&self, user_id: &str, role: Role) -> String {
        let exp = chrono::Utc::now().timestamp() as usize + 3600;
        let claims = Claims {
            exp,
            user_id: ResourceId::new(user_id),
            role,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .expect("To encode access token")
    }

    pub fn staff_sdk(&self, user_id: &str, role: Role) -> BookingSDK {
        BookingSDK::with_access_token(self.address.clone(), self.access_token(user_id, role))
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, BookingSDK) {
    let mut ctx = BookingContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.jwt_secret = "integration-test-secret".into();

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = BookingSDK::new(address.clone());
    (TestApp { config, address }, sdk)
}
