// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Routes installed in the routing table of a VNI.

use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::Status;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteMeta {
    pub vni: u32,
    pub prefix: IpNet,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NextHop {
    pub vni: u32,
    pub ip: IpAddr,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub next_hop: NextHop,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub meta: RouteMeta,
    pub spec: Option<RouteSpec>,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteListMeta {
    pub vni: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteList {
    pub meta: RouteListMeta,
    pub items: Vec<Route>,
    pub status: Status,
}
