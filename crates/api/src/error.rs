use actix_web::{http::StatusCode, HttpResponse};
use barber_booking_api_structs::APIErrorBody;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingServiceError {
    #[error("Internal server error. Error message: `{0}`")]
    InternalError(String),
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("Invalid services provided, every service must have an id")]
    InvalidServices(Vec<Value>),
    #[error("Unauthorized request. Error message: `{0}`")]
    Unauthorized(String),
    #[error("Forbidden request. Error message: `{0}`")]
    Forbidden(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
}

impl actix_web::error::ResponseError for BookingServiceError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) | Self::InvalidServices(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = APIErrorBody::new(self.to_string());
        if let Self::InvalidServices(services) = self {
            body.invalid_services = Some(services.clone());
        }
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::{body::MessageBody, ResponseError};
    use serde_json::json;

    fn body_of(e: &BookingServiceError) -> Value {
        let bytes = e
            .error_response()
            .into_body()
            .try_into_bytes()
            .expect("Body to be in memory");
        serde_json::from_slice(&bytes).expect("Body to be json")
    }

    #[test]
    fn it_maps_errors_to_status_codes() {
        assert_eq!(
            BookingServiceError::BadClientData("".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BookingServiceError::InvalidServices(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BookingServiceError::Forbidden("".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            BookingServiceError::InternalError("db down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn it_enumerates_invalid_services_in_the_body() {
        let body = body_of(&BookingServiceError::InvalidServices(vec![
            json!({ "name": "Cut" }),
        ]));
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["invalidServices"], json!([{ "name": "Cut" }]));

        let body = body_of(&BookingServiceError::NotFound("gone".into()));
        assert!(body.get("invalidServices").is_none());
        assert!(body["error"].as_str().unwrap().contains("gone"));
    }
}
