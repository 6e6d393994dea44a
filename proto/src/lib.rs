// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Wire schema of the dpservice RPC interface.
//!
//! These are the flat protobuf messages exchanged with the dataplane service. Every response
//! carries a [`Status`]; a code of 0 is the only success value. Addresses travel as the bytes of
//! their textual representation, both inside [`IpAddress`] and in the `underlay_route` fields.

#![deny(unsafe_code, clippy::all, clippy::pedantic)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::derive_partial_eq_without_eq)]

mod common;
mod messages;

pub use common::*;
pub use messages::*;

/// Protocol identifier reported by clients built against this schema.
pub const PROTOCOL_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
