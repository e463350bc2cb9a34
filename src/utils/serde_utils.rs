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

pub fn vec_is_empty<T>(v: &Vec<T>) -> bool {
    v.is_empty()
}

pub fn map_is_empty<K, V>(m: &HashMap<K, V>) -> bool {
    m.is_empty()
}

pub fn option_str_is_empty(v: &Option<String>) -> bool {
    v.as_deref().is_none_or(str::is_empty)
}
