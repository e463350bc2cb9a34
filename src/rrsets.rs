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

//! Operations scoped to one RRSet of a zone.

use std::collections::HashMap;

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::json;

use crate::client::HetznerDns;
use crate::error::Error;
use crate::models::{RRSet, Record};
use crate::response::{ApiResponse, decode, parse_part};
use crate::utils::request::DnsHttpClient;
use crate::zones::{action_response, build_query_string};

/// Filter and pagination parameters for `GET /zones/{id}/rrsets`.
#[derive(Debug, Clone, Default)]
pub struct RRSetRequestOpts {
    pub name: Option<String>,
    pub record_type: Option<String>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub label_selector: Option<String>,
}

impl RRSetRequestOpts {
    pub(crate) fn build_query(&self) -> String {
        let mut params = Vec::new();
        if let Some(name) = &self.name {
            params.push(("name", name.clone()));
        }
        if let Some(record_type) = &self.record_type {
            params.push(("type", record_type.clone()));
        }
        if let Some(label_selector) = &self.label_selector {
            params.push(("label_selector", label_selector.clone()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        build_query_string(params)
    }
}

/// Fields of `PUT /zones/{id}/rrsets/{rrset_id}`; `None` fields stay out of
/// the body. Records are replaced through the `set_records` action instead.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RRSetUpdateOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

/// Operations on one RRSet, addressed by zone id plus the `{name}/{type}`
/// composite id. The id is used verbatim in request paths.
pub struct RRSetRef<'a, T: DnsHttpClient> {
    client: &'a HetznerDns<T>,
    zone_id: u64,
    rrset_id: String,
}

impl<'a, T: DnsHttpClient> RRSetRef<'a, T> {
    pub(crate) fn new(client: &'a HetznerDns<T>, zone_id: u64, rrset_id: String) -> Self {
        Self {
            client,
            zone_id,
            rrset_id,
        }
    }

    pub fn id(&self) -> &str {
        &self.rrset_id
    }

    pub fn zone_id(&self) -> u64 {
        self.zone_id
    }

    fn path(&self) -> String {
        format!("zones/{}/rrsets/{}", self.zone_id, self.rrset_id)
    }

    /// Re-fetches the RRSet; `Ok(None)` if it does not exist.
    pub async fn get(&self) -> Result<Option<RRSet>, Error> {
        let resp = self.client.get(&self.path()).await?;
        if resp.status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let decoded = decode(resp)?;
        Ok(Some(parse_part(&decoded.value, "rrset")?))
    }

    /// Updates RRSet metadata via PUT.
    pub async fn update(&self, opts: &RRSetUpdateOpts) -> Result<ApiResponse, Error> {
        let decoded = decode(self.client.put(&self.path(), opts).await?)?;
        Ok(ApiResponse {
            rrset: Some(parse_part(&decoded.value, "rrset")?),
            headers: decoded.headers,
            ..Default::default()
        })
    }

    /// Deletes the RRSet, returning the `action` tracking the removal.
    pub async fn delete(&self) -> Result<ApiResponse, Error> {
        let decoded = decode(self.client.delete(&self.path()).await?)?;
        action_response(decoded)
    }

    /// Sets the change-protection flag.
    pub async fn change_protection(&self, change: bool) -> Result<ApiResponse, Error> {
        self.action_post("change_protection", &json!({ "change": change }))
            .await
    }

    /// Changes the TTL of the RRSet.
    pub async fn change_ttl(&self, ttl: u64) -> Result<ApiResponse, Error> {
        self.action_post("change_ttl", &json!({ "ttl": ttl })).await
    }

    /// Replaces the whole record list.
    pub async fn set_records(&self, records: &[Record]) -> Result<ApiResponse, Error> {
        self.action_post("set_records", &json!({ "records": records }))
            .await
    }

    /// Appends records; `ttl` travels in the body even when unset, matching
    /// the endpoint contract.
    pub async fn add_records(
        &self,
        records: &[Record],
        ttl: Option<u64>,
    ) -> Result<ApiResponse, Error> {
        self.action_post("add_records", &json!({ "records": records, "ttl": ttl }))
            .await
    }

    /// Removes the given records from the set.
    pub async fn remove_records(&self, records: &[Record]) -> Result<ApiResponse, Error> {
        self.action_post("remove_records", &json!({ "records": records }))
            .await
    }

    async fn action_post<B: Serialize>(
        &self,
        action: &str,
        body: &B,
    ) -> Result<ApiResponse, Error> {
        let decoded = decode(
            self.client
                .post(&format!("{}/actions/{action}", self.path()), body)
                .await?,
        )?;
        action_response(decoded)
    }
}
