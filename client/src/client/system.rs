// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Service-wide operations.

use tracing::instrument;

use api::converters::{status_from_wire, system};
use api::system::{
    Initialized, InitializedSpec, Version, VersionMeta, VersionSpec, Vni, VniMeta, VniSpec,
    VniType,
};

use super::{Client, settle, transport_failure};
use crate::errors::ClientResult;
use crate::status::IgnoredCodes;

impl Client {
    /// Whether the dataplane was initialized, and the identity of the running instance if so.
    #[instrument(level = "debug", skip(self))]
    pub async fn check_initialized(
        &self,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Initialized> {
        let response = self
            .transport
            .check_initialized(proto::CheckInitializedRequest {})
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        let spec = status.is_success().then(|| InitializedSpec {
            uuid: response.uuid,
        });
        settle(Initialized { spec, status }, ignored)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn initialize(&self, ignored: Option<&IgnoredCodes>) -> ClientResult<Initialized> {
        let response = self
            .transport
            .initialize(proto::InitializeRequest {})
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        let spec = status.is_success().then(|| InitializedSpec {
            uuid: response.uuid,
        });
        settle(Initialized { spec, status }, ignored)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn check_vni_in_use(
        &self,
        vni: u32,
        vni_type: VniType,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Vni> {
        let meta = VniMeta { vni, vni_type };
        let response = self
            .transport
            .check_vni_in_use(system::check_vni_request(&meta))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        let spec = status.is_success().then_some(VniSpec {
            in_use: response.in_use,
        });
        settle(Vni { meta, spec, status }, ignored)
    }

    /// Drop every resource the dataplane holds in a VNI.
    #[instrument(level = "debug", skip(self))]
    pub async fn reset_vni(
        &self,
        vni: u32,
        vni_type: VniType,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Vni> {
        let meta = VniMeta { vni, vni_type };
        let response = self
            .transport
            .reset_vni(system::reset_vni_request(&meta))
            .await
            .map_err(transport_failure)?;
        settle(
            Vni {
                meta,
                spec: None,
                status: status_from_wire(response.status.as_ref()),
            },
            ignored,
        )
    }

    /// Exchange versions with the dataplane. The client reports the protocol it was built
    /// against and the name and version from its configuration.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_version(&self, ignored: Option<&IgnoredCodes>) -> ClientResult<Version> {
        let meta = VersionMeta {
            client_protocol: proto::PROTOCOL_VERSION.to_owned(),
            client_name: self.config.client_name.clone(),
            client_version: self.config.client_version.clone(),
        };
        let response = self
            .transport
            .get_version(system::version_request(&meta))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        let spec = status.is_success().then(|| VersionSpec {
            service_protocol: response.service_protocol,
            service_version: response.service_version,
        });
        settle(Version { meta, spec, status }, ignored)
    }
}
