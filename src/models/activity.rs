// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity as returned by `PUT /activities/{id}`.

use serde::{Deserialize, Serialize};

/// Detailed activity returned after an update.
///
/// Only the fields the summary needs are modelled; the rest of Strava's
/// payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StravaActivity {
    /// Strava activity ID
    pub id: u64,
    /// Activity name/title
    #[serde(default)]
    pub name: String,
    /// Legacy activity type (Ride, Run, ...)
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    /// Sport type (MountainBikeRide, TrailRun, ...)
    pub sport_type: Option<String>,
    /// Start time in the athlete's local timezone (ISO 8601)
    pub start_date_local: Option<String>,
    /// Distance in meters
    pub distance: Option<f64>,
    /// Elevation gain in meters
    pub total_elevation_gain: Option<f64>,
    pub description: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub commute: bool,
    pub gear_id: Option<String>,
}
