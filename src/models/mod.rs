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

//! Typed resource models mirroring the API's JSON schemas. Parsing is pure;
//! nothing in here issues requests.

pub mod action;
pub mod meta;
pub mod rrset;
pub mod zone;

pub use action::{Action, ActionError, ActionResource};
pub use meta::{Meta, Pagination};
pub use rrset::{RRSet, RRSetProtection, RRSetRequest, Record};
pub use zone::{AuthoritativeNameservers, PrimaryNameserver, Protection, Zone, ZoneMode};
