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

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hetzner_dns_sdk::utils::request::{DnsHttpClient, RawResponse};
use hetzner_dns_sdk::{Error, HetznerDns};
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

pub const BASE_URL: &str = "https://api.example.test/v1";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

/// Transport double: replays queued responses and records every request.
#[derive(Clone, Default)]
pub struct MockDnsClient {
    responses: Arc<Mutex<VecDeque<Result<RawResponse, Error>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockDnsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, status: StatusCode, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse {
                status,
                headers: HeaderMap::new(),
                body: body.to_string(),
            }));
    }

    pub fn push_ok(&self, body: Value) {
        self.push(StatusCode::OK, body);
    }

    pub fn push_err(&self, err: Error) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("no request was issued")
            .clone()
    }
}

#[async_trait]
impl DnsHttpClient for MockDnsClient {
    async fn request(
        &self,
        method: Method,
        url: String,
        _headers: HeaderMap,
        body: Option<String>,
    ) -> Result<RawResponse, Error> {
        let body = body.map(|b| serde_json::from_str(&b).expect("request body is not JSON"));
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.clone(),
            url: url.clone(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no mock response queued for {method} {url}"))
    }
}

pub fn client_with(mock: &MockDnsClient) -> HetznerDns<MockDnsClient> {
    HetznerDns::with_client(mock.clone(), "test-token").with_base_url(BASE_URL)
}

pub fn assert_last_request(mock: &MockDnsClient, method: Method, path: &str) {
    let last = mock.last_request();
    assert_eq!(last.method, method);
    assert_eq!(last.url, format!("{BASE_URL}{path}"));
}

pub fn assert_last_request_body(mock: &MockDnsClient, expected: Value) {
    let last = mock.last_request();
    assert_eq!(last.body, Some(expected));
}

// Fixtures mirror the documented API payloads: zone 4711 `example.com`,
// RRSet `www/A`.

pub fn zone_json() -> Value {
    zone_json_named(4711, "example.com")
}

pub fn zone_json_named(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": "verified",
        "mode": "primary",
        "created": "2016-01-30T23:55:00+00:00",
        "ttl": 10800,
        "record_count": 0,
        "registrar": "hetzner",
        "protection": { "delete": false },
        "labels": {},
        "authoritative_nameservers": {
            "assigned": ["hydrogen.ns.hetzner.com.", "oxygen.ns.hetzner.com."],
            "delegated": ["hydrogen.ns.hetzner.com.", "oxygen.ns.hetzner.com."],
            "delegation_last_check": "2016-01-30T23:55:00+00:00",
            "delegation_status": "valid"
        }
    })
}

pub fn rrset_json() -> Value {
    json!({
        "id": "www/A",
        "name": "www",
        "type": "A",
        "ttl": 3600,
        "records": [
            { "value": "198.51.100.1", "comment": "my webserver" }
        ],
        "labels": {},
        "protection": { "change": false },
        "zone": 4711
    })
}

pub fn action_json(command: &str) -> Value {
    json!({
        "id": 13,
        "command": command,
        "status": "running",
        "progress": 0,
        "started": "2016-01-30T23:55:00+00:00",
        "finished": null,
        "resources": [{ "id": 4711, "type": "zone" }],
        "error": null
    })
}

pub fn meta_json(page: u32, last_page: Option<u32>, total_entries: Option<u64>) -> Value {
    json!({
        "pagination": {
            "page": page,
            "per_page": 50,
            "previous_page": if page > 1 { json!(page - 1) } else { Value::Null },
            "next_page": Value::Null,
            "last_page": last_page,
            "total_entries": total_entries
        }
    })
}

pub fn api_error_json(code: &str, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message } })
}
