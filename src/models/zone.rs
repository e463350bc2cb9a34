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
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operating mode of a zone: authoritative primary, or secondary mirroring
/// an external primary nameserver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneMode {
    Primary,
    Secondary,
}

impl ZoneMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneMode::Primary => "primary",
            ZoneMode::Secondary => "secondary",
        }
    }
}

impl fmt::Display for ZoneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Protection flags of a zone. Read-only; changed through the
/// `change_protection` action, never by direct mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protection {
    pub delete: bool,
}

/// The nameservers Hetzner serves the zone from, plus the delegation state
/// observed at the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthoritativeNameservers {
    pub assigned: Vec<String>,
    pub delegated: Vec<String>,
    #[serde(default)]
    pub delegation_last_check: Option<DateTime<Utc>>,
    pub delegation_status: String,
}

/// External primary a secondary zone transfers from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryNameserver {
    pub address: String,
    pub port: u16,
}

impl PrimaryNameserver {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }
}

/// A DNS zone as returned by the API.
///
/// Server-owned fields (`id`, `status`, `created`, `record_count`, ...) are
/// never sent back; caller-settable fields travel through the request option
/// types in [`crate::zones`]. `labels` and `primary_nameservers` default to
/// empty when the response omits them, everything else is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub mode: ZoneMode,
    pub created: DateTime<Utc>,
    pub ttl: u64,
    pub record_count: u64,
    pub registrar: String,
    pub protection: Protection,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    pub authoritative_nameservers: AuthoritativeNameservers,
    /// Only populated for zones in [`ZoneMode::Secondary`].
    #[serde(default)]
    pub primary_nameservers: Vec<PrimaryNameserver>,
}
