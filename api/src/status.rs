// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Operation status shared by every record.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Outcome of the most recent operation on a resource. Code 0 is success; any other code is a
/// dataplane-specific failure reason.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    pub code: u32,
    pub message: String,
}

impl Status {
    #[must_use]
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[error code {}] {}", self.code, self.message)
    }
}

/// Anything returned to a caller as the result of a remote operation.
pub trait Record {
    /// Name of the kind of resource, as used in logs
    const KIND: &'static str;
    fn status(&self) -> &Status;
}

macro_rules! impl_record {
    ($($record:ty => $kind:literal),* $(,)?) => {
        $(
            impl Record for $record {
                const KIND: &'static str = $kind;
                fn status(&self) -> &Status {
                    &self.status
                }
            }
        )*
    };
}

use crate::firewall::{FirewallRule, FirewallRuleList};
use crate::interface::{Interface, InterfaceList};
use crate::loadbalancer::{
    LoadBalancer, LoadBalancerPrefix, LoadBalancerPrefixList, LoadBalancerTarget,
    LoadBalancerTargetList,
};
use crate::nat::{Nat, NatList, NeighborNat};
use crate::prefix::{Prefix, PrefixList};
use crate::route::{Route, RouteList};
use crate::system::{Initialized, Version, Vni};
use crate::vip::VirtualIp;

impl_record! {
    Interface => "Interface",
    InterfaceList => "InterfaceList",
    LoadBalancer => "LoadBalancer",
    LoadBalancerPrefix => "LoadBalancerPrefix",
    LoadBalancerPrefixList => "LoadBalancerPrefixList",
    LoadBalancerTarget => "LoadBalancerTarget",
    LoadBalancerTargetList => "LoadBalancerTargetList",
    Prefix => "Prefix",
    PrefixList => "PrefixList",
    Route => "Route",
    RouteList => "RouteList",
    VirtualIp => "VirtualIP",
    Nat => "Nat",
    NatList => "NatList",
    NeighborNat => "NeighborNat",
    FirewallRule => "FirewallRule",
    FirewallRuleList => "FirewallRuleList",
    Initialized => "Initialized",
    Vni => "Vni",
    Version => "Version",
}
