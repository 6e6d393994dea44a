// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Virtual machine interfaces plugged into the dataplane.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::Status;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceMeta {
    pub id: String,
}

/// Network boot parameters handed to the interface's DHCP client
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pxe {
    pub server: String,
    pub file_name: String,
}

/// The PCI virtual function backing an interface
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualFunction {
    pub name: String,
    pub domain: u32,
    pub bus: u32,
    pub slot: u32,
    pub function: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceSpec {
    pub vni: u32,
    pub device: String,
    pub ipv4: Option<Ipv4Addr>,
    pub ipv6: Option<Ipv6Addr>,
    pub pxe: Option<Pxe>,
    /// Assigned by the dataplane
    pub underlay_route: Option<IpAddr>,
    /// Assigned by the dataplane
    pub virtual_function: Option<VirtualFunction>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub meta: InterfaceMeta,
    pub spec: Option<InterfaceSpec>,
    pub status: Status,
}

impl Interface {
    #[must_use]
    pub fn new(id: &str, spec: InterfaceSpec) -> Self {
        Self {
            meta: InterfaceMeta { id: id.to_owned() },
            spec: Some(spec),
            status: Status::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceList {
    pub items: Vec<Interface>,
    pub status: Status,
}
