// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Interface NAT, neighbor NAT and the NAT entries enumerated for a NAT IP.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::net::IpAddr;
use std::str::FromStr;

use crate::spelling::lookup;
use crate::{InvalidArgument, Status};

/// Which NAT entries a query for a NAT IP is interested in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NatKind {
    /// Local and neighbor entries alike
    #[default]
    Any = 0,
    /// Entries of interfaces attached to this dataplane
    Local = 1,
    /// Entries pointing at another dataplane
    Neighbor = 2,
}

impl FromStr for NatKind {
    type Err = InvalidArgument;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        const SPELLINGS: &[(&str, NatKind)] = &[
            ("any", NatKind::Any),
            ("0", NatKind::Any),
            ("", NatKind::Any),
            ("local", NatKind::Local),
            ("1", NatKind::Local),
            ("neigh", NatKind::Neighbor),
            ("neighbor", NatKind::Neighbor),
            ("2", NatKind::Neighbor),
        ];
        lookup(input, SPELLINGS).ok_or_else(|| {
            InvalidArgument::new("nat type", input, "Any = 0/Local = 1/Neigh(bor) = 2")
        })
    }
}

impl Display for NatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NatKind::Any => write!(f, "Any"),
            NatKind::Local => write!(f, "Local"),
            NatKind::Neighbor => write!(f, "Neighbor"),
        }
    }
}

impl TryFrom<String> for NatKind {
    type Error = InvalidArgument;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NatKind> for String {
    fn from(kind: NatKind) -> Self {
        kind.to_string()
    }
}

/* NAT of an interface */

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NatMeta {
    pub interface_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatSpec {
    pub nat_ip: IpAddr,
    pub min_port: u32,
    pub max_port: u32,
    /// Assigned by the dataplane
    pub underlay_route: Option<IpAddr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nat {
    pub meta: NatMeta,
    pub spec: Option<NatSpec>,
    pub status: Status,
}

/* NAT hosted by a neighboring dataplane */

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeighborNatMeta {
    pub nat_ip: IpAddr,
    pub vni: u32,
    pub min_port: u32,
    pub max_port: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborNatSpec {
    /// Underlay address of the dataplane hosting the NAT
    pub underlay_route: IpAddr,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborNat {
    pub meta: NeighborNatMeta,
    pub spec: Option<NeighborNatSpec>,
    pub status: Status,
}

/* NAT entries */

/// Where the traffic of a NAT entry goes. An entry is either served locally, behind an underlay
/// route of this dataplane, or by a neighbor known through its NAT IP; never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NatTarget {
    Local { underlay_route: IpAddr },
    Neighbor { nat_ip: IpAddr },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatEntry {
    pub target: NatTarget,
    pub min_port: u32,
    pub max_port: u32,
    pub vni: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NatListMeta {
    pub nat_ip: IpAddr,
    pub nat_kind: NatKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatList {
    pub meta: NatListMeta,
    pub items: Vec<NatEntry>,
    pub status: Status,
}
