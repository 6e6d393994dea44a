// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use crate::system::{VersionMeta, VniMeta, VniType};

impl From<VniType> for proto::VniType {
    fn from(vni_type: VniType) -> Self {
        match vni_type {
            VniType::Ipv4 => proto::VniType::VniIpv4,
            VniType::Ipv6 => proto::VniType::VniIpv6,
            VniType::Both => proto::VniType::VniBoth,
        }
    }
}

pub fn check_vni_request(meta: &VniMeta) -> proto::CheckVniInUseRequest {
    proto::CheckVniInUseRequest {
        vni: meta.vni,
        vni_type: proto::VniType::from(meta.vni_type).into(),
    }
}

pub fn reset_vni_request(meta: &VniMeta) -> proto::ResetVniRequest {
    proto::ResetVniRequest {
        vni: meta.vni,
        vni_type: proto::VniType::from(meta.vni_type).into(),
    }
}

pub fn version_request(meta: &VersionMeta) -> proto::GetVersionRequest {
    proto::GetVersionRequest {
        client_protocol: meta.client_protocol.clone(),
        client_name: meta.client_name.clone(),
        client_version: meta.client_version.clone(),
    }
}
