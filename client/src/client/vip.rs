// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use std::net::IpAddr;
use tracing::instrument;

use api::converters::{status_from_wire, vip};
use api::vip::{VirtualIp, VirtualIpMeta, VirtualIpSpec};

use super::{Client, converted, fetched, settle, transport_failure};
use crate::errors::ClientResult;
use crate::status::IgnoredCodes;

impl Client {
    #[instrument(level = "debug", skip(self))]
    pub async fn get_vip(
        &self,
        interface_id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<VirtualIp> {
        let meta = VirtualIpMeta {
            interface_id: interface_id.to_owned(),
        };
        let response = self
            .transport
            .get_vip(vip::get_request(&meta))
            .await
            .map_err(transport_failure)?;
        let mut record = VirtualIp {
            meta,
            spec: None,
            status: status_from_wire(response.status.as_ref()),
        };
        if !record.status.is_success() {
            return settle(record, ignored);
        }
        let (spec, result) = fetched(&response, VirtualIpSpec::try_from, vip::complete_get);
        record.spec = spec;
        converted(record, result)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn create_vip(
        &self,
        interface_id: &str,
        ip: IpAddr,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<VirtualIp> {
        let meta = VirtualIpMeta {
            interface_id: interface_id.to_owned(),
        };
        let mut spec = VirtualIpSpec {
            ip,
            underlay_route: None,
        };
        let response = self
            .transport
            .create_vip(vip::create_request(&meta, &spec))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        if !status.is_success() {
            return settle(
                VirtualIp {
                    meta,
                    spec: None,
                    status,
                },
                ignored,
            );
        }
        let result = vip::complete_create(&mut spec, &response);
        converted(
            VirtualIp {
                meta,
                spec: Some(spec),
                status,
            },
            result,
        )
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete_vip(
        &self,
        interface_id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<VirtualIp> {
        let meta = VirtualIpMeta {
            interface_id: interface_id.to_owned(),
        };
        let response = self
            .transport
            .delete_vip(vip::delete_request(&meta))
            .await
            .map_err(transport_failure)?;
        settle(
            VirtualIp {
                meta,
                spec: None,
                status: status_from_wire(response.status.as_ref()),
            },
            ignored,
        )
    }
}
