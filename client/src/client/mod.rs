// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The client facade.
//!
//! Operations are grouped by resource kind in the submodules. All of them follow the same steps:
//! build the wire request, issue it, classify the reply status, and convert the reply into a
//! record whose identity is always populated.

mod firewall;
mod interface;
mod loadbalancer;
mod nat;
mod prefix;
mod route;
mod system;
mod vip;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use tracing::{debug, error, warn};

use api::{FormatError, Record};

use crate::config::ClientConfig;
use crate::errors::{ClientError, ClientResult, DpError};
use crate::status::{IgnoredCodes, Outcome, classify};
use crate::transport::Transport;

/// Issues dataplane operations over a [`Transport`].
///
/// Every operation takes the codes the caller does not want reported as errors for that call.
/// A reply with one of those codes yields `Ok` with the identity-only record it produced.
pub struct Client {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl Client {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    #[must_use]
    pub fn with_config(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Report a record according to the status the dataplane gave it.
fn settle<R: Record>(record: R, ignored: Option<&IgnoredCodes>) -> ClientResult<R> {
    match classify(record.status(), ignored) {
        Outcome::Success => Ok(record),
        Outcome::Suppressed => {
            debug!("{}: ignoring {}", R::KIND, record.status());
            Ok(record)
        }
        Outcome::Failure { code, message } => {
            warn!("{}: dataplane refused operation: {}", R::KIND, record.status());
            Err(ClientError::new(
                Some(record),
                DpError::Status { code, message },
            ))
        }
    }
}

/// Report a record built from a successful reply, and the failure to decode part of that reply.
fn converted<R: Record>(record: R, result: Result<(), FormatError>) -> ClientResult<R> {
    match result {
        Ok(()) => Ok(record),
        Err(e) => {
            error!("{}: bad reply from dataplane: {e}", R::KIND);
            Err(ClientError::new(Some(record), e.into()))
        }
    }
}

/// Decode a fetched spec, then complete it with the fields the dataplane assigned. The spec is
/// kept when only the completion fails.
fn fetched<'a, W, S>(
    wire: &'a W,
    decode: impl FnOnce(&'a W) -> Result<S, FormatError>,
    complete: impl FnOnce(&mut S, &'a W) -> Result<(), FormatError>,
) -> (Option<S>, Result<(), FormatError>) {
    match decode(wire) {
        Ok(mut spec) => {
            let result = complete(&mut spec, wire);
            (Some(spec), result)
        }
        Err(e) => (None, Err(e)),
    }
}

fn transport_failure(status: tonic::Status) -> DpError {
    warn!("Dataplane call failed: {status}");
    status.into()
}

fn format_failure(e: FormatError) -> DpError {
    error!("Bad listing from dataplane: {e}");
    e.into()
}
