//! SDK for the Hetzner DNS zone management API
//!
//! Supported features:
//! - Typed models for zones, RRSets, records and actions
//! - Zone and RRSet lifecycle calls, nameserver configuration, zonefile
//!   import/export
//! - Transparent aggregation over paginated listings
//!
//! # Example
//! ```no_run
//! use hetzner_dns_sdk::{HetznerDns, ZoneRequestOpts};
//!
//! # async fn run() -> Result<(), hetzner_dns_sdk::Error> {
//! let client = HetznerDns::new("your-api-token");
//! let zones = client.zones().all(&ZoneRequestOpts::default()).await?;
//! for zone in zones {
//!     println!("{} ({})", zone.name, zone.mode);
//! }
//! # Ok(())
//! # }
//! ```

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

pub mod client;
pub mod error;
pub mod models;
pub mod response;
pub mod rrsets;
pub mod utils;
pub mod zones;

pub use client::{HetznerDns, MAX_ENTITIES_PER_PAGE};
pub use error::Error;
pub use models::{
    Action, ActionError, ActionResource, AuthoritativeNameservers, Meta, Pagination,
    PrimaryNameserver, Protection, RRSet, RRSetProtection, RRSetRequest, Record, Zone, ZoneMode,
};
pub use response::ApiResponse;
pub use rrsets::{RRSetRef, RRSetRequestOpts, RRSetUpdateOpts};
pub use zones::{ZoneCreateOpts, ZoneRef, ZoneRequestOpts, ZoneUpdateOpts, Zones};
