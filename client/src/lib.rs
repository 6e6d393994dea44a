// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Control-plane client of the dpservice dataplane.
//!
//! [`Client`] exposes one operation per dataplane resource action. Each call builds a wire
//! request, issues it over a [`Transport`], classifies the status code of the reply against the
//! codes the caller chose to ignore, and turns the reply back into a record. Failed calls still
//! hand back the record they could build, so that the failure can be attributed to a resource.

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod errors;
pub mod status;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use errors::{ClientError, ClientResult, DpError};
pub use status::{IgnoredCodes, Outcome, classify, codes};
pub use transport::Transport;
