// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Load balancers, their backend targets and the load balancer prefixes routed to interfaces.

use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::Status;
use crate::prefix::PrefixListMeta;

/// L4 protocol of a load balanced port
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    #[default]
    Undefined,
    Icmp,
    Tcp,
    Udp,
    Icmpv6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LbPort {
    pub protocol: Protocol,
    pub port: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadBalancerMeta {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerSpec {
    pub vni: u32,
    pub vip: IpAddr,
    pub ports: Vec<LbPort>,
    /// Assigned by the dataplane
    pub underlay_route: Option<IpAddr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub meta: LoadBalancerMeta,
    pub spec: Option<LoadBalancerSpec>,
    pub status: Status,
}

/// A backend of a load balancer is fully identified by the balancer and its address.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadBalancerTargetMeta {
    pub load_balancer_id: String,
    pub target_ip: IpAddr,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerTarget {
    pub meta: LoadBalancerTargetMeta,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadBalancerTargetListMeta {
    pub load_balancer_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerTargetList {
    pub meta: LoadBalancerTargetListMeta,
    pub items: Vec<LoadBalancerTarget>,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadBalancerPrefixMeta {
    pub interface_id: String,
    pub prefix: IpNet,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerPrefixSpec {
    /// Assigned by the dataplane
    pub underlay_route: Option<IpAddr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerPrefix {
    pub meta: LoadBalancerPrefixMeta,
    pub spec: Option<LoadBalancerPrefixSpec>,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerPrefixList {
    pub meta: PrefixListMeta,
    pub items: Vec<LoadBalancerPrefix>,
    pub status: Status,
}
