// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Text rendering for activity update results.

use crate::error::AppError;
use crate::models::StravaActivity;
use crate::time_utils::format_local_start;
use std::fmt::Write as _;

const NOT_AVAILABLE: &str = "N/A";

/// Render an activity as a multi-line summary.
///
/// Output depends only on the activity, so the same record always renders
/// to the same text.
pub fn format_activity_summary(activity: &StravaActivity) -> String {
    let mut out = format!("**{}** (ID: {})", activity.name, activity.id);

    let kind = match (
        activity.activity_type.as_deref(),
        activity.sport_type.as_deref(),
    ) {
        (Some(t), Some(s)) => Some(format!("{} ({})", t, s)),
        (Some(t), None) => Some(t.to_string()),
        (None, Some(s)) => Some(s.to_string()),
        (None, None) => None,
    };
    if let Some(kind) = kind {
        let _ = write!(out, "\n   - Type: {}", kind);
    }

    if let Some(start) = activity.start_date_local.as_deref() {
        let _ = write!(out, "\n   - Date: {}", format_local_start(start));
    }

    let distance = nonzero(activity.distance)
        .map(|meters| format!("{:.2} km", meters / 1000.0))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let _ = write!(out, "\n   - Distance: {}", distance);

    let elevation = nonzero(activity.total_elevation_gain)
        .map(|meters| format!("{:.0} m", meters.round()))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let _ = write!(out, "\n   - Elevation Gain: {}", elevation);

    if let Some(description) = activity.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(out, "\n   - Description: {}", description);
    }

    let _ = write!(out, "\n   - Private: {}", yes_no(activity.private));
    let _ = write!(out, "\n   - Commute: {}", yes_no(activity.commute));
    out
}

/// Success text for a completed update.
pub fn format_update_success(activity: &StravaActivity) -> String {
    format!(
        "✅ Successfully updated activity ID {}\n\n{}",
        activity.id,
        format_activity_summary(activity)
    )
}

/// Failure text for an update that Strava (or the transport) rejected.
pub fn describe_update_failure(activity_id: u64, err: &AppError) -> String {
    if err.is_not_found() {
        format!(
            "❌ Activity {} not found or you don't have permission to update it.",
            activity_id
        )
    } else {
        format!("❌ Failed to update activity {}: {}", activity_id, err)
    }
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity() -> StravaActivity {
        StravaActivity {
            id: 12345,
            name: "Updated Test Activity".to_string(),
            activity_type: Some("Ride".to_string()),
            sport_type: Some("MountainBikeRide".to_string()),
            start_date_local: Some("2024-05-18T07:32:10Z".to_string()),
            distance: Some(25_432.7),
            total_elevation_gain: Some(612.5),
            description: Some("Rancho loop".to_string()),
            private: true,
            commute: false,
            gear_id: Some("b123".to_string()),
        }
    }

    #[test]
    fn test_summary_contents() {
        let text = format_activity_summary(&activity());
        assert_eq!(
            text,
            "**Updated Test Activity** (ID: 12345)\n\
             \x20  - Type: Ride (MountainBikeRide)\n\
             \x20  - Date: 2024-05-18 07:32\n\
             \x20  - Distance: 25.43 km\n\
             \x20  - Elevation Gain: 613 m\n\
             \x20  - Description: Rancho loop\n\
             \x20  - Private: Yes\n\
             \x20  - Commute: No"
        );
    }

    #[test]
    fn test_summary_is_deterministic() {
        let a = activity();
        assert_eq!(format_activity_summary(&a), format_activity_summary(&a));
    }

    #[test]
    fn test_zero_and_missing_metrics_render_na() {
        let mut a = activity();
        a.distance = Some(0.0);
        a.total_elevation_gain = None;
        let text = format_activity_summary(&a);
        assert!(text.contains("Distance: N/A"));
        assert!(text.contains("Elevation Gain: N/A"));
    }

    #[test]
    fn test_absent_fields_omitted() {
        let mut a = activity();
        a.activity_type = None;
        a.sport_type = None;
        a.start_date_local = None;
        a.description = Some(String::new());
        let text = format_activity_summary(&a);
        assert!(!text.contains("Type:"));
        assert!(!text.contains("Date:"));
        assert!(!text.contains("Description:"));
    }

    #[test]
    fn test_describe_update_failure() {
        let not_found = AppError::StravaApi("Record Not Found".to_string());
        let text = describe_update_failure(987, &not_found);
        assert!(text.contains("987"));
        assert!(text.contains("not found"));

        let other = AppError::StravaApi("HTTP 500: boom".to_string());
        let text = describe_update_failure(987, &other);
        assert!(text.starts_with("❌ Failed to update activity 987"));
        assert!(text.contains("HTTP 500: boom"));
    }
}
