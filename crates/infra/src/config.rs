use barber_booking_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret used to verify the HS256 bearer tokens of staff members
    pub jwt_secret: String,
    /// Port for the application to run on
    pub port: usize,
}

impl Config {
    pub fn new() -> Self {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find JWT_SECRET environment variable. Going to create one.");
                info!("Bearer tokens will only validate against the generated secret.");
                create_random_secret(32)
            }
        };
        let default_port = 5000;
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, default_port
                    );
                    default_port
                }
            },
            Err(_) => default_port,
        };
        Self { jwt_secret, port }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
