// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use super::address::{addr_to_wire, id_to_wire, required_addr_from_wire, underlay_from_wire};
use crate::FormatError;
use crate::vip::{VirtualIpMeta, VirtualIpSpec};

pub fn create_request(meta: &VirtualIpMeta, spec: &VirtualIpSpec) -> proto::CreateVipRequest {
    proto::CreateVipRequest {
        interface_id: id_to_wire(&meta.interface_id),
        vip_ip: Some(addr_to_wire(spec.ip)),
    }
}

pub fn complete_create(
    spec: &mut VirtualIpSpec,
    response: &proto::CreateVipResponse,
) -> Result<(), FormatError> {
    spec.underlay_route = Some(underlay_from_wire(&response.underlay_route)?);
    Ok(())
}

pub fn get_request(meta: &VirtualIpMeta) -> proto::GetVipRequest {
    proto::GetVipRequest {
        interface_id: id_to_wire(&meta.interface_id),
    }
}

pub fn delete_request(meta: &VirtualIpMeta) -> proto::DeleteVipRequest {
    proto::DeleteVipRequest {
        interface_id: id_to_wire(&meta.interface_id),
    }
}

/// Decodes the caller-visible fields; the underlay route is left to [`complete_get`].
impl TryFrom<&proto::GetVipResponse> for VirtualIpSpec {
    type Error = FormatError;

    fn try_from(response: &proto::GetVipResponse) -> Result<Self, Self::Error> {
        Ok(VirtualIpSpec {
            ip: required_addr_from_wire("virtual IP", response.vip_ip.as_ref())?,
            underlay_route: None,
        })
    }
}

pub fn complete_get(
    spec: &mut VirtualIpSpec,
    response: &proto::GetVipResponse,
) -> Result<(), FormatError> {
    spec.underlay_route = Some(underlay_from_wire(&response.underlay_route)?);
    Ok(())
}
