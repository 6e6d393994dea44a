// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Service-wide state: initialization, VNI usage and versions.

use serde::{Deserialize, Serialize};

use crate::Status;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializedSpec {
    /// Identifies the running dataplane instance; changes when the service restarts
    pub uuid: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initialized {
    pub spec: Option<InitializedSpec>,
    pub status: Status,
}

/// Address families a VNI is looked up or reset for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VniType {
    #[default]
    Ipv4,
    Ipv6,
    Both,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VniMeta {
    pub vni: u32,
    pub vni_type: VniType,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VniSpec {
    pub in_use: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vni {
    pub meta: VniMeta,
    pub spec: Option<VniSpec>,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionMeta {
    pub client_protocol: String,
    pub client_name: String,
    pub client_version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSpec {
    pub service_protocol: String,
    pub service_version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub meta: VersionMeta,
    pub spec: Option<VersionSpec>,
    pub status: Status,
}
