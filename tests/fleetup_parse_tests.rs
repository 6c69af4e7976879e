// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wire-format parsing properties for the FleetUp API models.

use chrono::{TimeZone, Utc};
use fleetup_collector::models::LocationRecord;
use fleetup_collector::services::fleetup::{LocationsResponse, TokenResponse};
use fleetup_collector::services::Credential;

#[test]
fn token_response_converts_to_credential_with_server_expiry() {
    let response: TokenResponse =
        serde_json::from_str(r#"{"token":"abc123","expireTime":1754300000}"#).unwrap();

    let credential = Credential::try_from(response).unwrap();
    assert_eq!(credential.token, "abc123");
    assert_eq!(
        credential.expires_at,
        Utc.timestamp_opt(1754300000, 0).unwrap(),
        "expiry must come from the server, not the parse time"
    );
}

#[test]
fn out_of_range_expiry_is_an_error() {
    let response = TokenResponse {
        token: "abc123".to_string(),
        expire_time: i64::MAX,
    };
    assert!(Credential::try_from(response).is_err());
}

#[test]
fn token_response_without_token_field_fails_to_parse() {
    let result: Result<TokenResponse, _> = serde_json::from_str(r#"{"expireTime":1754300000}"#);
    assert!(result.is_err());
}

#[test]
fn missing_or_null_data_field_is_an_empty_fleet() {
    let response: LocationsResponse = serde_json::from_str("{}").unwrap();
    assert!(response.into_records().is_empty());

    let response: LocationsResponse = serde_json::from_str(r#"{"data":null}"#).unwrap();
    assert!(response.into_records().is_empty());
}

#[test]
fn data_array_parses_in_order() {
    let response: LocationsResponse = serde_json::from_str(
        r#"{"data":[{"devId":"A1","lat":10.5},{"devId":"B2","lat":-3.25}]}"#,
    )
    .unwrap();

    let records = response.into_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].dev_id.as_deref(), Some("A1"));
    assert_eq!(records[1].dev_id.as_deref(), Some("B2"));
    assert_eq!(records[1].lat, Some(-3.25));
}

#[test]
fn absent_fields_deserialize_to_none_not_zero() {
    let record: LocationRecord = serde_json::from_str(r#"{"devId":"A1","lat":0.0}"#).unwrap();

    assert_eq!(record.lat, Some(0.0), "a literal zero is data");
    assert!(record.lng.is_none());
    assert!(record.speed.is_none());
    assert!(record.direction.is_none());
    assert!(record.rpm.is_none());
    assert!(record.fuel_wear.is_none());
    assert!(record.idling.is_none());
}

#[test]
fn unknown_wire_fields_are_ignored() {
    let record: LocationRecord =
        serde_json::from_str(r#"{"devId":"A1","address":"1 Main St","satellites":7}"#).unwrap();
    assert_eq!(record.dev_id.as_deref(), Some("A1"));
}
