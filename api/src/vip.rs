// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Virtual (public) IPs of interfaces.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::Status;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VirtualIpMeta {
    pub interface_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualIpSpec {
    pub ip: IpAddr,
    /// Assigned by the dataplane
    pub underlay_route: Option<IpAddr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualIp {
    pub meta: VirtualIpMeta,
    pub spec: Option<VirtualIpSpec>,
    pub status: Status,
}
