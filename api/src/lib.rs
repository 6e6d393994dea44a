// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Domain model of the dataplane resources and its mapping to the dpservice wire schema.
//!
//! Every record returned to a caller is made of three layers: the identity of the resource
//! (`meta`), which is always populated so that failures can be attributed, the resource
//! specification (`spec`), which is only present when the dataplane reported success, and the
//! [`Status`] of the operation that produced the record.

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod converters;
pub mod errors;
pub mod firewall;
pub mod interface;
pub mod loadbalancer;
pub mod nat;
pub mod prefix;
pub mod route;
pub mod status;
pub mod system;
pub mod vip;

mod spelling;

pub use errors::{FormatError, InvalidArgument}; // re-export
pub use status::{Record, Status}; // re-export
