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

use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;
use crate::models::{Action, Meta, RRSet, Zone};
use crate::utils::request::RawResponse;

/// Uniform response container.
///
/// Each operation fills the parts its endpoint returns and leaves the rest
/// empty; the original HTTP headers always come along.
#[derive(Debug, Default)]
pub struct ApiResponse {
    pub zone: Option<Zone>,
    pub zones: Vec<Zone>,
    pub rrset: Option<RRSet>,
    pub rrsets: Vec<RRSet>,
    pub action: Option<Action>,
    pub meta: Option<Meta>,
    pub zonefile: Option<String>,
    pub headers: HeaderMap,
}

/// A 2xx response with its body decoded to JSON.
#[derive(Debug)]
pub(crate) struct DecodedResponse {
    pub value: Value,
    pub headers: HeaderMap,
}

/// Turns a raw transport response into decoded JSON, or the typed API error
/// carried by a non-2xx status.
pub(crate) fn decode(resp: RawResponse) -> Result<DecodedResponse, Error> {
    if !resp.status.is_success() {
        return Err(api_error(&resp));
    }
    let value = serde_json::from_str(&resp.body)
        .map_err(|e| Error::malformed(format!("invalid JSON body: {e}")))?;
    Ok(DecodedResponse {
        value,
        headers: resp.headers,
    })
}

fn api_error(resp: &RawResponse) -> Error {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorPayload,
    }
    #[derive(Deserialize)]
    struct ErrorPayload {
        code: String,
        message: String,
    }

    let status = resp.status.as_u16();
    match serde_json::from_str::<ErrorBody>(&resp.body) {
        Ok(body) => Error::Api {
            status,
            code: body.error.code,
            message: body.error.message,
        },
        // Error bodies outside the documented envelope still surface as API
        // errors, with the raw body as the message.
        Err(_) => Error::Api {
            status,
            code: "unknown".to_string(),
            message: resp.body.trim().to_string(),
        },
    }
}

/// Extracts and deserializes one named part of a response body.
pub(crate) fn parse_part<T: DeserializeOwned>(value: &Value, key: &str) -> Result<T, Error> {
    let part = value
        .get(key)
        .ok_or_else(|| Error::malformed(format!("missing `{key}` in response body")))?;
    serde_json::from_value(part.clone()).map_err(|e| Error::malformed(format!("`{key}`: {e}")))
}
