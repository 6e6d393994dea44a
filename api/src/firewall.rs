// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Per-interface firewall rules.

use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::spelling::lookup;
use crate::{InvalidArgument, Status};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FirewallAction {
    Drop,
    Accept,
}

impl FromStr for FirewallAction {
    type Err = InvalidArgument;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        const SPELLINGS: &[(&str, FirewallAction)] = &[
            ("accept", FirewallAction::Accept),
            ("allow", FirewallAction::Accept),
            ("1", FirewallAction::Accept),
            ("drop", FirewallAction::Drop),
            ("deny", FirewallAction::Drop),
            ("0", FirewallAction::Drop),
        ];
        lookup(input, SPELLINGS).ok_or_else(|| {
            InvalidArgument::new("firewall action", input, "drop/deny/0|accept/allow/1")
        })
    }
}

impl Display for FirewallAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FirewallAction::Drop => write!(f, "Drop"),
            FirewallAction::Accept => write!(f, "Accept"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TrafficDirection {
    Ingress,
    Egress,
}

impl FromStr for TrafficDirection {
    type Err = InvalidArgument;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        const SPELLINGS: &[(&str, TrafficDirection)] = &[
            ("ingress", TrafficDirection::Ingress),
            ("0", TrafficDirection::Ingress),
            ("egress", TrafficDirection::Egress),
            ("1", TrafficDirection::Egress),
        ];
        lookup(input, SPELLINGS).ok_or_else(|| {
            InvalidArgument::new("traffic direction", input, "Ingress = 0/Egress = 1")
        })
    }
}

impl Display for TrafficDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrafficDirection::Ingress => write!(f, "Ingress"),
            TrafficDirection::Egress => write!(f, "Egress"),
        }
    }
}

macro_rules! string_serde {
    ($($kind:ty),*) => {
        $(
            impl TryFrom<String> for $kind {
                type Error = InvalidArgument;
                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }
            impl From<$kind> for String {
                fn from(value: $kind) -> Self {
                    value.to_string()
                }
            }
        )*
    };
}
string_serde!(FirewallAction, TrafficDirection);

/// Port ranges of a TCP or UDP filter. -1 stands for any port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortFilter {
    pub src_port_lower: i32,
    pub src_port_upper: i32,
    pub dst_port_lower: i32,
    pub dst_port_upper: i32,
}

impl Default for PortFilter {
    fn default() -> Self {
        Self {
            src_port_lower: -1,
            src_port_upper: -1,
            dst_port_lower: -1,
            dst_port_upper: -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolFilter {
    Icmp { icmp_type: i32, icmp_code: i32 },
    Tcp(PortFilter),
    Udp(PortFilter),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FirewallRuleMeta {
    pub interface_id: String,
    pub rule_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRuleSpec {
    pub direction: TrafficDirection,
    pub action: FirewallAction,
    pub priority: u32,
    pub source_prefix: IpNet,
    pub destination_prefix: IpNet,
    pub protocol_filter: Option<ProtocolFilter>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRule {
    pub meta: FirewallRuleMeta,
    pub spec: Option<FirewallRuleSpec>,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FirewallRuleListMeta {
    pub interface_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRuleList {
    pub meta: FirewallRuleListMeta,
    pub items: Vec<FirewallRule>,
    pub status: Status,
}
