// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Update request accepted by the tool and the sparse payload sent to Strava.
//!
//! Absent fields are never sent, so Strava leaves them untouched. `gearId`
//! is the only field where an explicit `null` means something (detach the
//! gear), which is why it uses [`Patch`] instead of `Option`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::Validate;

/// Three-state field update: leave alone, clear, or set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unchanged,
    Clear,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unchanged
    }
}

impl<T> Patch<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }
}

// Only called when the key is present; a missing key falls back to
// `Default` through `#[serde(default)]`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            Patch::Unchanged | Patch::Clear => serializer.serialize_none(),
        }
    }
}

/// Deserialize a present key as `Some(value)`, rejecting an explicit null.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Deserialize a non-negative integer id, also accepting whole-number
/// floats such as `12345.0` (hosts built on JavaScript numbers send these).
fn integer_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(id) = number.as_u64() {
        return Ok(id);
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 => Ok(f as u64),
        _ => Err(D::Error::custom(format!(
            "invalid activityId {}, expected a positive integer",
            number
        ))),
    }
}

/// Arguments of the `update-activity` tool.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityInput {
    #[validate(range(min = 1, message = "activityId must be a positive integer"))]
    #[serde(deserialize_with = "integer_id")]
    pub activity_id: u64,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "present")]
    pub activity_type: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub sport_type: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub private: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub commute: Option<bool>,
    #[serde(default)]
    pub gear_id: Patch<String>,
}

impl UpdateActivityInput {
    /// Build the Strava payload from the fields the caller supplied.
    pub fn to_payload(&self) -> UpdatableActivity {
        UpdatableActivity {
            name: self.name.clone(),
            activity_type: self.activity_type.clone(),
            sport_type: self.sport_type.clone(),
            description: self.description.clone(),
            private: self.private,
            commute: self.commute,
            gear_id: self.gear_id.clone(),
        }
    }
}

/// Body of `PUT /activities/{id}`, in Strava's field naming.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatableActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commute: Option<bool>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub gear_id: Patch<String>,
}

impl UpdatableActivity {
    /// Strava field names that will be sent, in serialization order.
    pub fn field_names(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_some()),
            ("type", self.activity_type.is_some()),
            ("sport_type", self.sport_type.is_some()),
            ("description", self.description.is_some()),
            ("private", self.private.is_some()),
            ("commute", self.commute.is_some()),
            ("gear_id", !self.gear_id.is_unchanged()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }
}
