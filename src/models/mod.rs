// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod update;

pub use activity::StravaActivity;
pub use update::{Patch, UpdatableActivity, UpdateActivityInput};
