// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use ipnet::IpNet;
use tracing::instrument;

use api::converters::{prefix, status_from_wire};
use api::prefix::{Prefix, PrefixList, PrefixListMeta, PrefixMeta, PrefixSpec};

use super::{Client, converted, format_failure, settle, transport_failure};
use crate::errors::ClientResult;
use crate::status::IgnoredCodes;

impl Client {
    /// Alias prefixes routed to an interface, in the order the dataplane returns them.
    #[instrument(level = "debug", skip(self))]
    pub async fn list_prefixes(
        &self,
        interface_id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<PrefixList> {
        let meta = PrefixListMeta {
            interface_id: interface_id.to_owned(),
        };
        let response = self
            .transport
            .list_prefixes(prefix::list_request(&meta))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        if !status.is_success() {
            return settle(
                PrefixList {
                    meta,
                    items: Vec::new(),
                    status,
                },
                ignored,
            );
        }
        let items = response
            .prefixes
            .iter()
            .map(|entry| prefix::prefix_from_list(interface_id, entry))
            .collect::<Result<_, _>>()
            .map_err(format_failure)?;
        Ok(PrefixList {
            meta,
            items,
            status,
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn create_prefix(
        &self,
        interface_id: &str,
        prefix: IpNet,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Prefix> {
        let meta = PrefixMeta {
            interface_id: interface_id.to_owned(),
            prefix,
        };
        let response = self
            .transport
            .create_prefix(prefix::create_request(&meta))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        if !status.is_success() {
            return settle(
                Prefix {
                    meta,
                    spec: None,
                    status,
                },
                ignored,
            );
        }
        let mut spec = PrefixSpec::default();
        let result = prefix::complete_create(&mut spec, &response);
        converted(
            Prefix {
                meta,
                spec: Some(spec),
                status,
            },
            result,
        )
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete_prefix(
        &self,
        interface_id: &str,
        prefix: IpNet,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Prefix> {
        let meta = PrefixMeta {
            interface_id: interface_id.to_owned(),
            prefix,
        };
        let response = self
            .transport
            .delete_prefix(prefix::delete_request(&meta))
            .await
            .map_err(transport_failure)?;
        settle(
            Prefix {
                meta,
                spec: None,
                status: status_from_wire(response.status.as_ref()),
            },
            ignored,
        )
    }
}
