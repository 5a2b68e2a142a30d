use barber_booking_api_structs::APIErrorBody;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

pub(crate) struct BaseClient {
    address: String,
    access_token: Option<String>,
}

#[derive(Debug)]
pub enum APIError {
    Network,
    MalformedResponse,
    /// The server answered with another status than expected. The body is
    /// kept when the server described the error.
    UnexpectedStatusCode(StatusCode, Option<APIErrorBody>),
}
pub type APIResponse<T> = Result<T, APIError>;

impl APIError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatusCode(status, _) => Some(*status),
            _ => None,
        }
    }
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            access_token: None,
        }
    }

    pub fn set_access_token(&mut self, access_token: String) {
        self.access_token = Some(access_token);
    }

    fn get_client(&self, method: Method, path: String) -> RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        let builder = Client::new().request(method, &url);

        match &self.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn handle_api_response<T: DeserializeOwned>(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let status = res.status();
        if status != expected_status_code {
            let body = res.json::<APIErrorBody>().await.ok();
            return Err(APIError::UnexpectedStatusCode(status, body));
        }
        res.json::<T>()
            .await
            .map_err(|_| APIError::MalformedResponse)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = match self.get_client(Method::GET, path).send().await {
            Ok(res) => res,
            Err(_) => return Err(APIError::Network),
        };
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = match self.get_client(Method::POST, path).json(&body).send().await {
            Ok(res) => res,
            Err(_) => return Err(APIError::Network),
        };
        self.handle_api_response(res, expected_status_code).await
    }
}
