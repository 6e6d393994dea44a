// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use std::net::IpAddr;

use super::address::{
    addr_from_wire, addr_to_wire, id_to_wire, optional_underlay_from_wire, required_addr_from_wire,
    underlay_from_wire, underlay_to_wire,
};
use crate::FormatError;
use crate::nat::{NatEntry, NatMeta, NatSpec, NatTarget, NeighborNatMeta, NeighborNatSpec};

/* interface NAT */

pub fn create_request(meta: &NatMeta, spec: &NatSpec) -> proto::CreateNatRequest {
    proto::CreateNatRequest {
        interface_id: id_to_wire(&meta.interface_id),
        nat_ip: Some(addr_to_wire(spec.nat_ip)),
        min_port: spec.min_port,
        max_port: spec.max_port,
    }
}

pub fn complete_create(
    spec: &mut NatSpec,
    response: &proto::CreateNatResponse,
) -> Result<(), FormatError> {
    spec.underlay_route = Some(underlay_from_wire(&response.underlay_route)?);
    Ok(())
}

pub fn get_request(meta: &NatMeta) -> proto::GetNatRequest {
    proto::GetNatRequest {
        interface_id: id_to_wire(&meta.interface_id),
    }
}

pub fn delete_request(meta: &NatMeta) -> proto::DeleteNatRequest {
    proto::DeleteNatRequest {
        interface_id: id_to_wire(&meta.interface_id),
    }
}

/// Decodes the caller-visible fields; the underlay route is left to [`complete_get`].
impl TryFrom<&proto::GetNatResponse> for NatSpec {
    type Error = FormatError;

    fn try_from(response: &proto::GetNatResponse) -> Result<Self, Self::Error> {
        Ok(NatSpec {
            nat_ip: required_addr_from_wire("NAT IP", response.nat_ip.as_ref())?,
            min_port: response.min_port,
            max_port: response.max_port,
            underlay_route: None,
        })
    }
}

pub fn complete_get(
    spec: &mut NatSpec,
    response: &proto::GetNatResponse,
) -> Result<(), FormatError> {
    spec.underlay_route = Some(underlay_from_wire(&response.underlay_route)?);
    Ok(())
}

/* neighbor NAT */

pub fn create_neighbor_request(
    meta: &NeighborNatMeta,
    spec: &NeighborNatSpec,
) -> proto::CreateNeighborNatRequest {
    proto::CreateNeighborNatRequest {
        nat_ip: Some(addr_to_wire(meta.nat_ip)),
        vni: meta.vni,
        min_port: meta.min_port,
        max_port: meta.max_port,
        underlay_route: underlay_to_wire(spec.underlay_route),
    }
}

pub fn delete_neighbor_request(meta: &NeighborNatMeta) -> proto::DeleteNeighborNatRequest {
    proto::DeleteNeighborNatRequest {
        nat_ip: Some(addr_to_wire(meta.nat_ip)),
        vni: meta.vni,
        min_port: meta.min_port,
        max_port: meta.max_port,
    }
}

/* NAT entries */

pub fn list_local_request(nat_ip: IpAddr) -> proto::ListLocalNatsRequest {
    proto::ListLocalNatsRequest {
        nat_ip: Some(addr_to_wire(nat_ip)),
    }
}

pub fn list_neighbor_request(nat_ip: IpAddr) -> proto::ListNeighborNatsRequest {
    proto::ListNeighborNatsRequest {
        nat_ip: Some(addr_to_wire(nat_ip)),
    }
}

/// An entry with an underlay route is served locally; one with only a NAT IP is served by the
/// neighbor owning that IP.
impl TryFrom<&proto::NatEntry> for NatEntry {
    type Error = FormatError;

    fn try_from(entry: &proto::NatEntry) -> Result<Self, Self::Error> {
        let underlay_route = optional_underlay_from_wire(&entry.underlay_route)?;
        let target = if let Some(underlay_route) = underlay_route {
            NatTarget::Local { underlay_route }
        } else if let Some(nat_ip) = &entry.nat_ip {
            NatTarget::Neighbor {
                nat_ip: addr_from_wire("NAT IP", nat_ip)?,
            }
        } else {
            return Err(FormatError::UndecidableNatEntry);
        };
        Ok(NatEntry {
            target,
            min_port: entry.min_port,
            max_port: entry.max_port,
            vni: entry.vni,
        })
    }
}
