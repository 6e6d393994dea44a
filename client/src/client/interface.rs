// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use tracing::instrument;

use api::FormatError;
use api::converters::{interface, status_from_wire};
use api::interface::{Interface, InterfaceList, InterfaceMeta, InterfaceSpec};

use super::{Client, converted, fetched, format_failure, settle, transport_failure};
use crate::errors::ClientResult;
use crate::status::IgnoredCodes;

impl Client {
    #[instrument(level = "debug", skip(self))]
    pub async fn get_interface(
        &self,
        id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Interface> {
        let meta = InterfaceMeta { id: id.to_owned() };
        let response = self
            .transport
            .get_interface(interface::get_request(&meta))
            .await
            .map_err(transport_failure)?;
        let mut record = Interface {
            meta,
            spec: None,
            status: status_from_wire(response.status.as_ref()),
        };
        if !record.status.is_success() {
            return settle(record, ignored);
        }
        let result = match response.interface.as_ref() {
            Some(iface) => {
                let (spec, result) =
                    fetched(iface, InterfaceSpec::try_from, interface::complete_get);
                record.spec = spec;
                result
            }
            None => Err(FormatError::Missing("interface")),
        };
        converted(record, result)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn list_interfaces(
        &self,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<InterfaceList> {
        let response = self
            .transport
            .list_interfaces(proto::ListInterfacesRequest {})
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        if !status.is_success() {
            return settle(
                InterfaceList {
                    items: Vec::new(),
                    status,
                },
                ignored,
            );
        }
        let items = response
            .interfaces
            .iter()
            .map(Interface::try_from)
            .collect::<Result<_, _>>()
            .map_err(format_failure)?;
        Ok(InterfaceList { items, status })
    }

    /// Plug a virtual interface. On success the record carries the underlay route and the
    /// virtual function the dataplane assigned.
    #[instrument(level = "debug", skip(self))]
    pub async fn create_interface(
        &self,
        id: &str,
        mut spec: InterfaceSpec,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Interface> {
        let meta = InterfaceMeta { id: id.to_owned() };
        let response = self
            .transport
            .create_interface(interface::create_request(&meta, &spec))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        if !status.is_success() {
            return settle(
                Interface {
                    meta,
                    spec: None,
                    status,
                },
                ignored,
            );
        }
        let result = interface::complete_create(&mut spec, &response);
        converted(
            Interface {
                meta,
                spec: Some(spec),
                status,
            },
            result,
        )
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete_interface(
        &self,
        id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Interface> {
        let meta = InterfaceMeta { id: id.to_owned() };
        let response = self
            .transport
            .delete_interface(interface::delete_request(&meta))
            .await
            .map_err(transport_failure)?;
        settle(
            Interface {
                meta,
                spec: None,
                status: status_from_wire(response.status.as_ref()),
            },
            ignored,
        )
    }
}
