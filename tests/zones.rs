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

mod common;

use std::collections::HashMap;

use common::*;
use hetzner_dns_sdk::{
    Error, PrimaryNameserver, RRSetRequest, Record, ZoneCreateOpts, ZoneMode, ZoneRequestOpts,
};
use reqwest::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn create_primary_sends_only_name_and_mode() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({ "zone": zone_json(), "action": action_json("create_zone") }));
    let client = client_with(&mock);

    let resp = client
        .zones()
        .create("example.com", ZoneMode::Primary, ZoneCreateOpts::default())
        .await
        .unwrap();

    let zone = resp.zone.unwrap();
    assert_eq!(zone.id, 4711);
    assert_eq!(zone.name, "example.com");
    assert!(resp.action.is_some());

    assert_last_request(&mock, Method::POST, "/zones");
    assert_last_request_body(&mock, json!({ "name": "example.com", "mode": "primary" }));
}

#[tokio::test]
async fn create_primary_with_all_options() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({ "zone": zone_json(), "action": action_json("create_zone") }));
    let client = client_with(&mock);

    let rrset = RRSetRequest::new(
        "@",
        "A",
        3600,
        vec![Record::with_comment("192.0.2.1", "my comment")],
    );

    client
        .zones()
        .create(
            "example.com",
            ZoneMode::Primary,
            ZoneCreateOpts {
                ttl: Some(10),
                labels: HashMap::from([("key".into(), "value".into())]),
                rrsets: vec![rrset],
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_last_request_body(
        &mock,
        json!({
            "name": "example.com",
            "mode": "primary",
            "ttl": 10,
            "labels": { "key": "value" },
            "rrsets": [{
                "name": "@",
                "type": "A",
                "ttl": 3600,
                "records": [{ "value": "192.0.2.1", "comment": "my comment" }]
            }]
        }),
    );
}

#[tokio::test]
async fn create_secondary_includes_primary_nameservers() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({ "zone": zone_json(), "action": action_json("create_zone") }));
    let client = client_with(&mock);

    client
        .zones()
        .create(
            "example.com",
            ZoneMode::Secondary,
            ZoneCreateOpts {
                ttl: Some(10),
                labels: HashMap::from([("key".into(), "value".into())]),
                primary_nameservers: vec![PrimaryNameserver::new("192.168.178.1", 53)],
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_last_request_body(
        &mock,
        json!({
            "name": "example.com",
            "mode": "secondary",
            "ttl": 10,
            "labels": { "key": "value" },
            "primary_nameservers": [{ "address": "192.168.178.1", "port": 53 }]
        }),
    );
}

#[tokio::test]
async fn create_empty_labels_map_omits_the_key() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({ "zone": zone_json(), "action": action_json("create_zone") }));
    let client = client_with(&mock);

    client
        .zones()
        .create(
            "example.com",
            ZoneMode::Primary,
            ZoneCreateOpts {
                ttl: Some(10),
                labels: HashMap::new(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_last_request_body(
        &mock,
        json!({ "name": "example.com", "mode": "primary", "ttl": 10 }),
    );
}

#[tokio::test]
async fn create_secondary_without_primaries_fails_without_a_request() {
    let mock = MockDnsClient::new();
    let client = client_with(&mock);

    let err = client
        .zones()
        .create("example.com", ZoneMode::Secondary, ZoneCreateOpts::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn create_primary_with_primaries_fails_without_a_request() {
    let mock = MockDnsClient::new();
    let client = client_with(&mock);

    let err = client
        .zones()
        .create(
            "example.com",
            ZoneMode::Primary,
            ZoneCreateOpts {
                primary_nameservers: vec![PrimaryNameserver::new("192.168.178.1", 53)],
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn get_fetches_by_id() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({ "zone": zone_json() }));
    let client = client_with(&mock);

    let zone = client.zones().get(4711).await.unwrap().unwrap();
    assert_eq!(zone.id, 4711);
    assert_eq!(zone.name, "example.com");
    assert_last_request(&mock, Method::GET, "/zones/4711");
}

#[tokio::test]
async fn get_by_name_fetches_by_name() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({ "zone": zone_json() }));
    let client = client_with(&mock);

    let zone = client
        .zones()
        .get_by_name("example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(zone.id, 4711);
    assert_last_request(&mock, Method::GET, "/zones/example.com");
}

#[tokio::test]
async fn get_maps_not_found_to_none() {
    let mock = MockDnsClient::new();
    mock.push(
        StatusCode::NOT_FOUND,
        api_error_json("not_found", "zone not found"),
    );
    let client = client_with(&mock);

    assert!(client.zones().get(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn get_surfaces_other_api_errors() {
    let mock = MockDnsClient::new();
    mock.push(
        StatusCode::FORBIDDEN,
        api_error_json("forbidden", "insufficient permissions"),
    );
    let client = client_with(&mock);

    let err = client.zones().get(4711).await.unwrap_err();
    match err {
        Error::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 403);
            assert_eq!(code, "forbidden");
            assert_eq!(message, "insufficient permissions");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn list_fetches_one_page_with_query_params() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({
        "zones": [zone_json()],
        "meta": meta_json(2, Some(5), Some(230))
    }));
    let client = client_with(&mock);

    let resp = client
        .zones()
        .list(&ZoneRequestOpts {
            label_selector: Some("environment=prod".into()),
            per_page: Some(25),
            page: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(resp.zones.len(), 1);
    let meta = resp.meta.unwrap();
    assert_eq!(meta.pagination.page, 2);
    assert_eq!(meta.pagination.last_page, Some(5));
    assert_eq!(meta.pagination.total_entries, Some(230));
    assert_last_request(
        &mock,
        Method::GET,
        "/zones?label_selector=environment%3Dprod&per_page=25&page=2",
    );
}

#[tokio::test]
async fn all_concatenates_every_page_in_order() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({
        "zones": [zone_json_named(1, "a.example"), zone_json_named(2, "b.example")],
        "meta": meta_json(1, Some(3), Some(5))
    }));
    mock.push_ok(json!({
        "zones": [zone_json_named(3, "c.example"), zone_json_named(4, "d.example")],
        "meta": meta_json(2, Some(3), Some(5))
    }));
    mock.push_ok(json!({
        "zones": [zone_json_named(5, "e.example")],
        "meta": meta_json(3, Some(3), Some(5))
    }));
    let client = client_with(&mock);

    let zones = client
        .zones()
        .all(&ZoneRequestOpts::default())
        .await
        .unwrap();

    assert_eq!(
        zones.iter().map(|z| z.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );

    let requests = mock.requests();
    assert_eq!(requests.len(), 3);
    for (i, request) in requests.iter().enumerate() {
        assert_eq!(
            request.url,
            format!("{BASE_URL}/zones?per_page=50&page={}", i + 1)
        );
    }
}

#[tokio::test]
async fn all_stops_after_one_page_when_last_page_is_null() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({
        "zones": [zone_json()],
        "meta": meta_json(1, None, None)
    }));
    let client = client_with(&mock);

    let zones = client
        .zones()
        .all(&ZoneRequestOpts::default())
        .await
        .unwrap();

    assert_eq!(zones.len(), 1);
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn all_aborts_on_first_failed_page() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({
        "zones": [zone_json_named(1, "a.example")],
        "meta": meta_json(1, Some(3), Some(3))
    }));
    mock.push(
        StatusCode::INTERNAL_SERVER_ERROR,
        api_error_json("unavailable", "please retry later"),
    );
    let client = client_with(&mock);

    let err = client
        .zones()
        .all(&ZoneRequestOpts::default())
        .await
        .unwrap_err();

    assert_eq!(err.api_code(), Some("unavailable"));
    assert_eq!(mock.request_count(), 2);
}

#[tokio::test]
async fn all_forwards_filters_to_every_page() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({
        "zones": [zone_json()],
        "meta": meta_json(1, Some(1), Some(1))
    }));
    let client = client_with(&mock);

    client
        .zones()
        .all(&ZoneRequestOpts {
            mode: Some(ZoneMode::Primary),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_last_request(&mock, Method::GET, "/zones?mode=primary&per_page=50&page=1");
}

#[tokio::test]
async fn delete_by_id_returns_the_action() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({ "action": action_json("delete_zone") }));
    let client = client_with(&mock);

    let resp = client.zones().delete_by_id(4711).await.unwrap();

    let action = resp.action.unwrap();
    assert_eq!(action.command, "delete_zone");
    assert_eq!(action.resources[0].id, 4711);
    assert_eq!(action.resources[0].resource_type, "zone");
    assert_last_request(&mock, Method::DELETE, "/zones/4711");
}

#[tokio::test]
async fn missing_response_part_is_malformed() {
    let mock = MockDnsClient::new();
    mock.push_ok(json!({ "zone": zone_json() }));
    let client = client_with(&mock);

    // create expects both `zone` and `action`
    let err = client
        .zones()
        .create("example.com", ZoneMode::Primary, ZoneCreateOpts::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MalformedResponse(_)));
}
