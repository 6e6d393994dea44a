// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use super::address::{
    id_to_wire, optional_underlay_from_wire, prefix_from_wire, prefix_to_wire, underlay_from_wire,
};
use crate::prefix::{Prefix, PrefixListMeta, PrefixMeta, PrefixSpec};
use crate::{FormatError, Status};

pub fn list_request(meta: &PrefixListMeta) -> proto::ListPrefixesRequest {
    proto::ListPrefixesRequest {
        interface_id: id_to_wire(&meta.interface_id),
    }
}

pub fn create_request(meta: &PrefixMeta) -> proto::CreatePrefixRequest {
    proto::CreatePrefixRequest {
        interface_id: id_to_wire(&meta.interface_id),
        prefix: Some(prefix_to_wire(&meta.prefix)),
    }
}

pub fn complete_create(
    spec: &mut PrefixSpec,
    response: &proto::CreatePrefixResponse,
) -> Result<(), FormatError> {
    spec.underlay_route = Some(underlay_from_wire(&response.underlay_route)?);
    Ok(())
}

pub fn delete_request(meta: &PrefixMeta) -> proto::DeletePrefixRequest {
    proto::DeletePrefixRequest {
        interface_id: id_to_wire(&meta.interface_id),
        prefix: Some(prefix_to_wire(&meta.prefix)),
    }
}

/// A listed prefix. The wire entry does not repeat the interface it belongs to.
pub fn prefix_from_list(interface_id: &str, prefix: &proto::Prefix) -> Result<Prefix, FormatError> {
    Ok(Prefix {
        meta: PrefixMeta {
            interface_id: interface_id.to_owned(),
            prefix: prefix_from_wire("prefix", prefix)?,
        },
        spec: Some(PrefixSpec {
            underlay_route: optional_underlay_from_wire(&prefix.underlay_route)?,
        }),
        status: Status::default(),
    })
}
