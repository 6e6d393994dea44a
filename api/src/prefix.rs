// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Alias prefixes routed to an interface.

use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::Status;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefixMeta {
    pub interface_id: String,
    pub prefix: IpNet,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixSpec {
    /// Assigned by the dataplane
    pub underlay_route: Option<IpAddr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefix {
    pub meta: PrefixMeta,
    pub spec: Option<PrefixSpec>,
    pub status: Status,
}

/// Identity of the interface a prefix listing was scoped to
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefixListMeta {
    pub interface_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixList {
    pub meta: PrefixListMeta,
    pub items: Vec<Prefix>,
    pub status: Status,
}
