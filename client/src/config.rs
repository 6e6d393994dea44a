// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Client configuration.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// How the client presents itself to the dataplane. Both fields default to this crate's name
/// and version.
#[derive(Builder, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    #[builder(setter(into), default = env!("CARGO_PKG_NAME").to_string())]
    pub client_name: String,

    #[builder(setter(into), default = env!("CARGO_PKG_VERSION").to_string())]
    pub client_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_name: env!("CARGO_PKG_NAME").to_string(),
            client_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
