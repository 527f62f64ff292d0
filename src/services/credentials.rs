// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access token lookup.

/// Environment variable holding the Strava access token.
pub const ACCESS_TOKEN_VAR: &str = "STRAVA_ACCESS_TOKEN";

/// Supplies the Strava access token for one tool invocation.
pub trait CredentialSource: Send + Sync {
    /// Current token, or `None` if none is configured.
    fn access_token(&self) -> Option<String>;
}

/// Reads the token from an environment variable on every call, so a token
/// rotated while the process runs is picked up by the next invocation.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(ACCESS_TOKEN_VAR)
    }
}

impl CredentialSource for EnvCredentials {
    fn access_token(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// Fixed token, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<String>);

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredentials {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}
