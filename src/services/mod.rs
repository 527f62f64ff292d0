// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod credentials;
pub mod strava;

pub use credentials::{CredentialSource, EnvCredentials, StaticCredentials};
pub use strava::{ActivityUpdater, StravaClient};
