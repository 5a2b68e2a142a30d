use serde::{Deserialize, Serialize};

pub mod get_service_status {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub status: String,
        pub message: String,
    }
}

pub mod get_service_health {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub status: String,
        pub uptime_secs: i64,
        pub timestamp: i64,
    }
}
