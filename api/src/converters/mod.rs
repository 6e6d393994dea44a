// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Mapping between the domain records and the dpservice wire messages.
//!
//! [`address`] holds the value codec shared by every resource kind. Each other module builds the
//! wire requests for one kind of resource and turns the wire replies back into records.

pub mod address;
pub mod firewall;
pub mod interface;
pub mod loadbalancer;
pub mod nat;
pub mod prefix;
pub mod route;
pub mod system;
pub mod vip;

pub use address::*;
