// Copyright 2026 hetzner-dns-sdk authors
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::utils::request::{DefaultDnsClient, DnsHttpClient, RawResponse};
use crate::zones::Zones;

/// Largest page size the API accepts; `all()`-style aggregation always
/// requests pages of this size.
pub const MAX_ENTITIES_PER_PAGE: u32 = 50;

const DEFAULT_API_URL: &str = "https://api.hetzner.cloud/v1";

/// Entry point to the API.
///
/// Holds the token and base URL and hands out service objects scoped to it.
/// There is no process-global client; everything that issues requests borrows
/// one of these explicitly.
///
/// # Example
/// ```no_run
/// use hetzner_dns_sdk::HetznerDns;
///
/// let client = HetznerDns::new("my-api-token");
/// let zones = client.zones();
/// ```
pub struct HetznerDns<T: DnsHttpClient = DefaultDnsClient> {
    http_client: T,
    api: String,
    api_token: String,
}

impl HetznerDns<DefaultDnsClient> {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self::with_client(DefaultDnsClient::new(), api_token)
    }
}

impl<T: DnsHttpClient> HetznerDns<T> {
    /// Builds a client over a caller-supplied transport.
    pub fn with_client(http_client: T, api_token: impl Into<String>) -> Self {
        Self {
            http_client,
            api: DEFAULT_API_URL.to_string(),
            api_token: api_token.into(),
        }
    }

    /// Overrides the API base URL, e.g. to point at a mock server.
    pub fn with_base_url(mut self, api: impl Into<String>) -> Self {
        let api = api.into();
        self.api = api.trim_end_matches('/').to_string();
        self
    }

    /// The zones collection bound to this client.
    pub fn zones(&self) -> Zones<'_, T> {
        Zones::new(self)
    }

    pub(crate) async fn get(&self, path: &str) -> Result<RawResponse, Error> {
        self.request(Method::GET, path, None).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse, Error> {
        self.request(Method::POST, path, Some(encode_body(body)?))
            .await
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse, Error> {
        self.request(Method::PUT, path, Some(encode_body(body)?))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<RawResponse, Error> {
        self.request(Method::DELETE, path, None).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<RawResponse, Error> {
        let url = format!("{}/{}", self.api, path);
        let headers = self.build_headers()?;

        debug!(%method, path, "issuing API request");
        let resp = self.http_client.request(method, url, headers, body).await?;
        debug!(status = resp.status.as_u16(), path, "API response");

        Ok(resp)
    }

    fn build_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let auth = HeaderValue::from_str(&format!("Bearer {}", self.api_token))
            .map_err(|_| Error::invalid("API token contains invalid header characters"))?;
        headers.insert(AUTHORIZATION, auth);
        Ok(headers)
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String, Error> {
    serde_json::to_string(body).map_err(|e| Error::invalid(format!("unencodable body: {e}")))
}
