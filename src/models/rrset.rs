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

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::utils::serde_utils::map_is_empty;

/// One resource record: the rdata value plus an optional free-text comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Record {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            comment: None,
        }
    }

    pub fn with_comment(value: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            comment: Some(comment.into()),
        }
    }
}

/// Protection flag of an RRSet; guards `change`-type mutations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RRSetProtection {
    pub change: bool,
}

/// A record set as returned by the API.
///
/// `id` is the composite `{name}/{type}` key, unique within the owning zone
/// and used verbatim in request paths. `zone` is a back-reference by id, not
/// ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RRSet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u64,
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub protection: Option<RRSetProtection>,
    pub zone: u64,
}

impl RRSet {
    /// Projects the caller-settable fields into the shape zone/rrset creation
    /// bodies expect. Server-only fields (`id`, `zone`, `protection`) are
    /// dropped; empty labels are omitted entirely.
    pub fn to_request(&self) -> RRSetRequest {
        RRSetRequest {
            name: self.name.clone(),
            record_type: self.record_type.clone(),
            ttl: self.ttl,
            records: self.records.clone(),
            labels: self.labels.clone(),
        }
    }
}

/// Caller-settable projection of an RRSet, embedded in `POST /zones` bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RRSetRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u64,
    pub records: Vec<Record>,
    #[serde(skip_serializing_if = "map_is_empty")]
    pub labels: HashMap<String, String>,
}

impl RRSetRequest {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        ttl: u64,
        records: Vec<Record>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            ttl,
            records,
            labels: HashMap::new(),
        }
    }
}
