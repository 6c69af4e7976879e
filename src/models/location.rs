// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! FleetUp device location wire model.

use serde::Deserialize;

/// One device's last known position, as returned by the
/// `gpsdata/device-last-location` endpoint.
///
/// Every field is optional on the wire. A field absent from the response
/// deserializes to `None`, so "no data" is never conflated with a literal
/// zero or `false`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    /// Device identifier
    pub dev_id: Option<String>,
    /// Latitude in decimal degrees
    pub lat: Option<f64>,
    /// Longitude in decimal degrees
    pub lng: Option<f64>,
    /// Speed in km/h
    pub speed: Option<f64>,
    /// Heading in degrees from north
    pub direction: Option<f64>,
    /// Engine RPM
    pub rpm: Option<f64>,
    /// Fuel wear indicator (shape varies by device model)
    pub fuel_wear: Option<serde_json::Value>,
    /// Idling flag (usually a boolean)
    pub idling: Option<serde_json::Value>,
}
