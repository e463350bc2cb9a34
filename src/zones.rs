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

//! The zones collection service and zone-scoped operations.

use std::collections::HashMap;

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::json;

use crate::client::{HetznerDns, MAX_ENTITIES_PER_PAGE};
use crate::error::Error;
use crate::models::{PrimaryNameserver, RRSet, RRSetRequest, Record, Zone, ZoneMode};
use crate::response::{ApiResponse, decode, parse_part};
use crate::rrsets::{RRSetRef, RRSetRequestOpts};
use crate::utils::request::DnsHttpClient;
use crate::utils::serde_utils::{map_is_empty, option_str_is_empty, vec_is_empty};

/// Filter and pagination parameters for `GET /zones`.
#[derive(Debug, Clone, Default)]
pub struct ZoneRequestOpts {
    pub name: Option<String>,
    pub mode: Option<ZoneMode>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub label_selector: Option<String>,
}

impl ZoneRequestOpts {
    pub(crate) fn build_query(&self) -> String {
        let mut params = Vec::new();
        if let Some(name) = &self.name {
            params.push(("name", name.clone()));
        }
        if let Some(mode) = self.mode {
            params.push(("mode", mode.to_string()));
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

/// Percent-encodes and joins query parameters; empty input yields no query
/// string at all.
pub(crate) fn build_query_string(params: Vec<(&str, String)>) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        query.append_pair(key, &value);
    }
    format!("?{}", query.finish())
}

/// Optional fields of `POST /zones`. Defaults serialize to a body holding
/// only `name` and `mode`.
#[derive(Debug, Clone, Default)]
pub struct ZoneCreateOpts {
    pub ttl: Option<u64>,
    pub labels: HashMap<String, String>,
    pub primary_nameservers: Vec<PrimaryNameserver>,
    pub rrsets: Vec<RRSetRequest>,
    pub zonefile: Option<String>,
}

/// Fields of `PUT /zones/{id}`; `None` fields stay out of the body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ZoneUpdateOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

#[derive(Serialize)]
struct ZoneCreateBody<'a> {
    name: &'a str,
    mode: ZoneMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u64>,
    #[serde(skip_serializing_if = "map_is_empty")]
    labels: HashMap<String, String>,
    #[serde(skip_serializing_if = "vec_is_empty")]
    rrsets: Vec<RRSetRequest>,
    #[serde(skip_serializing_if = "vec_is_empty")]
    primary_nameservers: Vec<PrimaryNameserver>,
    #[serde(skip_serializing_if = "option_str_is_empty")]
    zonefile: Option<String>,
}

#[derive(Serialize)]
struct RRSetCreateBody<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    record_type: &'a str,
    records: &'a [Record],
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u64>,
    #[serde(skip_serializing_if = "map_is_empty")]
    labels: HashMap<String, String>,
}

/// The zones collection: list, lookup, create, delete.
pub struct Zones<'a, T: DnsHttpClient> {
    client: &'a HetznerDns<T>,
}

impl<'a, T: DnsHttpClient> Zones<'a, T> {
    pub(crate) fn new(client: &'a HetznerDns<T>) -> Self {
        Self { client }
    }

    /// A handle for operations scoped to one zone.
    pub fn zone(&self, zone_id: u64) -> ZoneRef<'a, T> {
        ZoneRef {
            client: self.client,
            zone_id,
        }
    }

    /// Creates a zone. The returned envelope carries the new `zone` and the
    /// `action` tracking the server-side setup.
    ///
    /// A secondary zone must name at least one primary nameserver and a
    /// primary zone must name none; violations fail before any request is
    /// made.
    pub async fn create(
        &self,
        name: &str,
        mode: ZoneMode,
        opts: ZoneCreateOpts,
    ) -> Result<ApiResponse, Error> {
        match mode {
            ZoneMode::Secondary if opts.primary_nameservers.is_empty() => {
                return Err(Error::invalid(
                    "a secondary zone requires at least one primary nameserver",
                ));
            }
            ZoneMode::Primary if !opts.primary_nameservers.is_empty() => {
                return Err(Error::invalid(
                    "a primary zone cannot have primary nameservers",
                ));
            }
            _ => {}
        }

        let body = ZoneCreateBody {
            name,
            mode,
            ttl: opts.ttl,
            labels: opts.labels,
            rrsets: opts.rrsets,
            primary_nameservers: opts.primary_nameservers,
            zonefile: opts.zonefile,
        };
        let decoded = decode(self.client.post("zones", &body).await?)?;

        Ok(ApiResponse {
            zone: Some(parse_part(&decoded.value, "zone")?),
            action: Some(parse_part(&decoded.value, "action")?),
            headers: decoded.headers,
            ..Default::default()
        })
    }

    /// Looks a zone up by id; `Ok(None)` if it does not exist.
    pub async fn get(&self, zone_id: u64) -> Result<Option<Zone>, Error> {
        self.fetch(&zone_id.to_string()).await
    }

    /// Looks a zone up by name; `Ok(None)` if it does not exist.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Zone>, Error> {
        self.fetch(name).await
    }

    async fn fetch(&self, id_or_name: &str) -> Result<Option<Zone>, Error> {
        let resp = self.client.get(&format!("zones/{id_or_name}")).await?;
        if resp.status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let decoded = decode(resp)?;
        Ok(Some(parse_part(&decoded.value, "zone")?))
    }

    /// Fetches exactly one page of zones.
    pub async fn list(&self, opts: &ZoneRequestOpts) -> Result<ApiResponse, Error> {
        let decoded = decode(
            self.client
                .get(&format!("zones{}", opts.build_query()))
                .await?,
        )?;

        Ok(ApiResponse {
            zones: parse_part(&decoded.value, "zones")?,
            meta: Some(parse_part(&decoded.value, "meta")?),
            headers: decoded.headers,
            ..Default::default()
        })
    }

    /// Fetches every zone matching `opts`, walking all pages.
    ///
    /// Pages are requested sequentially at [`MAX_ENTITIES_PER_PAGE`] and
    /// concatenated in server order. The walk ends at `last_page`, or after
    /// the first page when the server reports no total. A failed page fails
    /// the whole call; nothing partial is returned.
    pub async fn all(&self, opts: &ZoneRequestOpts) -> Result<Vec<Zone>, Error> {
        let mut opts = opts.clone();
        opts.per_page = Some(MAX_ENTITIES_PER_PAGE);

        let mut zones = Vec::new();
        let mut page = 1;
        loop {
            opts.page = Some(page);
            let resp = self.list(&opts).await?;
            zones.extend(resp.zones);

            let meta = resp
                .meta
                .ok_or_else(|| Error::malformed("missing `meta` in list response"))?;
            if meta.pagination.is_last_page() {
                break;
            }
            page += 1;
        }

        Ok(zones)
    }

    /// Deletes a zone by id, returning the `action` tracking the removal.
    pub async fn delete_by_id(&self, zone_id: u64) -> Result<ApiResponse, Error> {
        let decoded = decode(self.client.delete(&format!("zones/{zone_id}")).await?)?;
        action_response(decoded)
    }
}

/// Operations on one zone, addressed by id.
pub struct ZoneRef<'a, T: DnsHttpClient> {
    client: &'a HetznerDns<T>,
    zone_id: u64,
}

impl<'a, T: DnsHttpClient> ZoneRef<'a, T> {
    pub fn id(&self) -> u64 {
        self.zone_id
    }

    /// A handle for operations scoped to one RRSet of this zone.
    pub fn rrset(&self, rrset_id: impl Into<String>) -> RRSetRef<'a, T> {
        RRSetRef::new(self.client, self.zone_id, rrset_id.into())
    }

    /// Re-fetches the zone; `Ok(None)` if it no longer exists.
    pub async fn get(&self) -> Result<Option<Zone>, Error> {
        Zones::new(self.client).get(self.zone_id).await
    }

    /// Updates zone metadata via `PUT /zones/{id}`.
    pub async fn update(&self, opts: &ZoneUpdateOpts) -> Result<ApiResponse, Error> {
        let decoded = decode(
            self.client
                .put(&format!("zones/{}", self.zone_id), opts)
                .await?,
        )?;
        Ok(ApiResponse {
            zone: Some(parse_part(&decoded.value, "zone")?),
            headers: decoded.headers,
            ..Default::default()
        })
    }

    /// Deletes the zone, returning the `action` tracking the removal.
    pub async fn delete(&self) -> Result<ApiResponse, Error> {
        let decoded = decode(self.client.delete(&format!("zones/{}", self.zone_id)).await?)?;
        action_response(decoded)
    }

    /// Sets the delete-protection flag.
    pub async fn change_protection(&self, delete: bool) -> Result<ApiResponse, Error> {
        self.action_post("change_protection", &json!({ "delete": delete }))
            .await
    }

    /// Changes the default TTL of the zone.
    pub async fn change_ttl(&self, ttl: u64) -> Result<ApiResponse, Error> {
        self.action_post("change_ttl", &json!({ "ttl": ttl })).await
    }

    /// Replaces the primary nameservers of a secondary zone.
    pub async fn change_primary_nameservers(
        &self,
        primary_nameservers: &[PrimaryNameserver],
    ) -> Result<ApiResponse, Error> {
        self.action_post(
            "change_primary_nameservers",
            &json!({ "primary_nameservers": primary_nameservers }),
        )
        .await
    }

    /// Replaces the zone contents with a zonefile in BIND format.
    pub async fn import_zonefile(&self, zonefile: &str) -> Result<ApiResponse, Error> {
        self.action_post("import_zonefile", &json!({ "zonefile": zonefile }))
            .await
    }

    /// Exports the zone as a zonefile; the envelope carries the text in
    /// `zonefile`.
    pub async fn export_zonefile(&self) -> Result<ApiResponse, Error> {
        let decoded = decode(
            self.client
                .get(&format!("zones/{}/zonefile", self.zone_id))
                .await?,
        )?;
        Ok(ApiResponse {
            zonefile: Some(parse_part(&decoded.value, "zonefile")?),
            headers: decoded.headers,
            ..Default::default()
        })
    }

    /// Fetches exactly one page of this zone's RRSets.
    pub async fn list_rrsets(&self, opts: &RRSetRequestOpts) -> Result<ApiResponse, Error> {
        let decoded = decode(
            self.client
                .get(&format!(
                    "zones/{}/rrsets{}",
                    self.zone_id,
                    opts.build_query()
                ))
                .await?,
        )?;

        Ok(ApiResponse {
            rrsets: parse_part(&decoded.value, "rrsets")?,
            meta: Some(parse_part(&decoded.value, "meta")?),
            headers: decoded.headers,
            ..Default::default()
        })
    }

    /// Fetches every RRSet matching `opts`, walking all pages with the same
    /// termination and failure behavior as [`Zones::all`].
    pub async fn all_rrsets(&self, opts: &RRSetRequestOpts) -> Result<Vec<RRSet>, Error> {
        let mut opts = opts.clone();
        opts.per_page = Some(MAX_ENTITIES_PER_PAGE);

        let mut rrsets = Vec::new();
        let mut page = 1;
        loop {
            opts.page = Some(page);
            let resp = self.list_rrsets(&opts).await?;
            rrsets.extend(resp.rrsets);

            let meta = resp
                .meta
                .ok_or_else(|| Error::malformed("missing `meta` in list response"))?;
            if meta.pagination.is_last_page() {
                break;
            }
            page += 1;
        }

        Ok(rrsets)
    }

    /// Creates an RRSet in this zone. The envelope carries the new `rrset`
    /// and the `action` tracking the change.
    pub async fn create_rrset(
        &self,
        name: &str,
        record_type: &str,
        records: &[Record],
        ttl: Option<u64>,
        labels: HashMap<String, String>,
    ) -> Result<ApiResponse, Error> {
        let body = RRSetCreateBody {
            name,
            record_type,
            records,
            ttl,
            labels,
        };
        let decoded = decode(
            self.client
                .post(&format!("zones/{}/rrsets", self.zone_id), &body)
                .await?,
        )?;

        Ok(ApiResponse {
            rrset: Some(parse_part(&decoded.value, "rrset")?),
            action: Some(parse_part(&decoded.value, "action")?),
            headers: decoded.headers,
            ..Default::default()
        })
    }

    /// Looks an RRSet up by its `{name}/{type}` id; `Ok(None)` if absent.
    pub async fn get_rrset(&self, rrset_id: &str) -> Result<Option<RRSet>, Error> {
        self.rrset(rrset_id).get().await
    }

    async fn action_post<B: Serialize>(
        &self,
        action: &str,
        body: &B,
    ) -> Result<ApiResponse, Error> {
        let decoded = decode(
            self.client
                .post(&format!("zones/{}/actions/{action}", self.zone_id), body)
                .await?,
        )?;
        action_response(decoded)
    }
}

pub(crate) fn action_response(
    decoded: crate::response::DecodedResponse,
) -> Result<ApiResponse, Error> {
    Ok(ApiResponse {
        action: Some(parse_part(&decoded.value, "action")?),
        headers: decoded.headers,
        ..Default::default()
    })
}
