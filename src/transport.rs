//! Ways of reaching a conversion endpoint.

use std::time::Duration;

use futures::future::{self, BoxFuture, FutureExt};

use crate::{color::ColorState, config::ClientConfig, service, service::ConvertRequest, Error};

/// Sends a [`ConvertRequest`] to a conversion endpoint.
pub trait Transport {
    /// Send the request and return the state the endpoint answered with.
    fn convert(&self, request: ConvertRequest) -> BoxFuture<'static, Result<ColorState, Error>>;
}

/// Posts requests to a conversion endpoint over HTTP.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport posting to `endpoint`, giving up on a request after
    /// `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create a transport from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn convert(&self, request: ConvertRequest) -> BoxFuture<'static, Result<ColorState, Error>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        async move {
            let form = request.form()?;
            let response = client.post(&endpoint).form(&form).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::Status(status.as_u16()));
            }

            Ok(response.json::<ColorState>().await?)
        }
        .boxed()
    }
}

/// Runs the conversion service in process.
///
/// Requests are encoded exactly as they would be sent over HTTP, so the local
/// transport exercises the same wire format.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTransport;

impl Transport for LocalTransport {
    fn convert(&self, request: ConvertRequest) -> BoxFuture<'static, Result<ColorState, Error>> {
        let result = request
            .encoded_values()
            .and_then(|values| service::convert(request.source_model.as_str(), &values));
        future::ready(result).boxed()
    }
}
