use std::time::Duration;

use reqwest::{header::LOCATION, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    client::error::ClientError,
    model::{
        api::{ApiIndexDto, ErrorDto},
        mason::{Control, Envelope},
    },
};

/// Default timeout for HTTP requests
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

static ENTRY_HREF: &str = "/api/";

/// Thin wrapper around reqwest that speaks Mason
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

        Ok(Self { http, base_url })
    }

    fn url(&self, href: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(href)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", href, e)))
    }

    /// Fetches the API entry point, the only URL the client knows up front
    pub async fn entry(&self) -> Result<Envelope<ApiIndexDto>, ClientError> {
        self.get(ENTRY_HREF).await
    }

    /// Fetches the envelope at `href`
    pub async fn get<T: DeserializeOwned>(&self, href: &str) -> Result<Envelope<T>, ClientError> {
        tracing::debug!("GET {}", href);

        let response = self.http.get(self.url(href)?).send().await?;
        let response = Self::check(response).await?;

        Ok(response.json().await?)
    }

    /// Issues the request described by `control`, sending `body` as JSON
    ///
    /// Returns the `Location` header of the response, if any.
    pub async fn submit(
        &self,
        control: &Control,
        body: Option<&Value>,
    ) -> Result<Option<String>, ClientError> {
        let method_name = control.method.as_deref().unwrap_or("GET");
        let method = Method::from_bytes(method_name.as_bytes())
            .map_err(|_| ClientError::InvalidControl(method_name.to_string()))?;

        tracing::debug!("{} {}", method, control.href);

        let mut request = self.http.request(method, self.url(&control.href)?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = Self::check(request.send().await?).await?;

        Ok(response
            .headers()
            .get(LOCATION)
            .and_then(|location| location.to_str().ok())
            .map(str::to_string))
    }

    /// Turns non-success responses into [`ClientError::Api`] using their `@error` block
    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let error = serde_json::from_str::<Envelope<ErrorDto>>(&text)
            .ok()
            .and_then(|envelope| envelope.error);

        let (message, details) = match error {
            Some(error) => (error.message, error.messages),
            None => (
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string(),
                Vec::new(),
            ),
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
            details,
        })
    }
}
