use anyhow::{Context, Result};
use reqwest::{Client, Method};
use std::collections::HashMap;
use std::time::Duration;

use crate::error::FuzzError;
use crate::models::{HttpMethod, RequestResult};

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Option<f64>, verify_tls: bool) -> Result<Self> {
        let mut builder = Client::builder().danger_accept_invalid_certs(!verify_tls);

        if let Some(secs) = timeout {
            let timeout =
                Duration::try_from_secs_f64(secs).context("Invalid timeout value")?;
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;

        Ok(Self { client })
    }

    /// Issue one request and reduce the response to the fields the filter
    /// policy inspects: status, body byte size, body line count.
    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        word: &str,
    ) -> std::result::Result<RequestResult, FuzzError> {
        let mut request = self.client.request(Self::to_reqwest_method(method), url);

        if let Some(headers) = headers {
            for (key, value) in headers {
                request = request.header(key, value);
            }
        }

        let response = request.send().await.map_err(FuzzError::from_request)?;
        let status = response.status().as_u16();

        let bytes = response.bytes().await.map_err(FuzzError::from_request)?;
        let size = bytes.len();
        let text = String::from_utf8_lossy(&bytes);
        let lines = RequestResult::count_lines(&text);

        Ok(RequestResult::new(word.to_string(), status, size, lines))
    }

    fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }
}
