use crate::error::BookingServiceError;
use actix_web::HttpRequest;
use barber_booking_domain::{Requester, ResourceId, Role};
use barber_booking_infra::BookingContext;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub user_id: ResourceId,
    pub role: Role,
}

fn parse_authtoken_header(token_header_value: &str) -> &str {
    let token = token_header_value.trim();
    token
        .strip_prefix("Bearer ")
        .or_else(|| token.strip_prefix("bearer "))
        .unwrap_or(token)
        .trim()
}

fn decode_token(secret: &str, token: &str) -> anyhow::Result<Claims> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let claims = decode::<Claims>(token, &decoding_key, &Validation::new(Algorithm::HS256))?.claims;

    Ok(claims)
}

/// Finds the `Requester` from the bearer token of the request
fn auth_requester(req: &HttpRequest, ctx: &BookingContext) -> Result<Requester, BookingServiceError> {
    let token = match req.headers().get("authorization") {
        Some(token) => token.to_str().map_err(|_| {
            BookingServiceError::Unauthorized("Malformed authorization header".into())
        })?,
        None => {
            return Err(BookingServiceError::Unauthorized(
                "Access token required".into(),
            ))
        }
    };

    let claims = decode_token(&ctx.config.jwt_secret, parse_authtoken_header(token))
        .map_err(|e| BookingServiceError::Unauthorized(format!("Invalid token: {}", e)))?;

    Ok(Requester {
        user_id: claims.user_id,
        role: claims.role,
    })
}

/// Only lets staff members through
pub fn protect_staff_route(
    req: &HttpRequest,
    ctx: &BookingContext,
) -> Result<Requester, BookingServiceError> {
    let requester = auth_requester(req, ctx)?;
    if !requester.role.is_staff() {
        return Err(BookingServiceError::Forbidden(format!(
            "Role {:?} is not allowed to read bookings",
            requester.role
        )));
    }

    Ok(requester)
}
