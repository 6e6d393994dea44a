// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Interface NAT, neighbor NAT, and the listing of the NAT entries of a NAT IP.

use std::net::IpAddr;
use tracing::instrument;

use api::converters::{nat, status_from_wire};
use api::nat::{
    Nat, NatEntry, NatKind, NatList, NatListMeta, NatMeta, NatSpec, NeighborNat, NeighborNatMeta,
    NeighborNatSpec,
};
use api::Status;

use super::{Client, converted, fetched, format_failure, settle, transport_failure};
use crate::errors::{ClientResult, DpError};
use crate::status::IgnoredCodes;

/// The two enumerations the dataplane offers for the entries of a NAT IP.
#[derive(Clone, Copy, Debug)]
enum NatSource {
    Local,
    Neighbor,
}

impl NatSource {
    fn for_kind(kind: NatKind) -> &'static [NatSource] {
        match kind {
            NatKind::Any => &[NatSource::Local, NatSource::Neighbor],
            NatKind::Local => &[NatSource::Local],
            NatKind::Neighbor => &[NatSource::Neighbor],
        }
    }
}

impl Client {
    #[instrument(level = "debug", skip(self))]
    pub async fn get_nat(
        &self,
        interface_id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Nat> {
        let meta = NatMeta {
            interface_id: interface_id.to_owned(),
        };
        let response = self
            .transport
            .get_nat(nat::get_request(&meta))
            .await
            .map_err(transport_failure)?;
        let mut record = Nat {
            meta,
            spec: None,
            status: status_from_wire(response.status.as_ref()),
        };
        if !record.status.is_success() {
            return settle(record, ignored);
        }
        let (spec, result) = fetched(&response, NatSpec::try_from, nat::complete_get);
        record.spec = spec;
        converted(record, result)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn create_nat(
        &self,
        interface_id: &str,
        nat_ip: IpAddr,
        min_port: u32,
        max_port: u32,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Nat> {
        let meta = NatMeta {
            interface_id: interface_id.to_owned(),
        };
        let mut spec = NatSpec {
            nat_ip,
            min_port,
            max_port,
            underlay_route: None,
        };
        let response = self
            .transport
            .create_nat(nat::create_request(&meta, &spec))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        if !status.is_success() {
            return settle(
                Nat {
                    meta,
                    spec: None,
                    status,
                },
                ignored,
            );
        }
        let result = nat::complete_create(&mut spec, &response);
        converted(
            Nat {
                meta,
                spec: Some(spec),
                status,
            },
            result,
        )
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete_nat(
        &self,
        interface_id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Nat> {
        let meta = NatMeta {
            interface_id: interface_id.to_owned(),
        };
        let response = self
            .transport
            .delete_nat(nat::delete_request(&meta))
            .await
            .map_err(transport_failure)?;
        settle(
            Nat {
                meta,
                spec: None,
                status: status_from_wire(response.status.as_ref()),
            },
            ignored,
        )
    }

    /// Register a NAT port range that another dataplane, reachable through `underlay_route`,
    /// serves for `meta.nat_ip`.
    #[instrument(level = "debug", skip(self))]
    pub async fn create_neighbor_nat(
        &self,
        meta: NeighborNatMeta,
        underlay_route: IpAddr,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<NeighborNat> {
        let spec = NeighborNatSpec { underlay_route };
        let response = self
            .transport
            .create_neighbor_nat(nat::create_neighbor_request(&meta, &spec))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        let spec = status.is_success().then_some(spec);
        settle(NeighborNat { meta, spec, status }, ignored)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete_neighbor_nat(
        &self,
        meta: NeighborNatMeta,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<NeighborNat> {
        let response = self
            .transport
            .delete_neighbor_nat(nat::delete_neighbor_request(&meta))
            .await
            .map_err(transport_failure)?;
        settle(
            NeighborNat {
                meta,
                spec: None,
                status: status_from_wire(response.status.as_ref()),
            },
            ignored,
        )
    }

    /// List the NAT entries of `nat_ip`.
    ///
    /// [`NatKind::Any`] enumerates the local entries, then the neighbor entries, and returns them
    /// in that order. The first enumeration refused with a code that is not ignored ends the
    /// listing, and the second one is not issued. The status of the list is the first status
    /// that is not a success, if any; such an ignored refusal contributes no entries. A single
    /// kind keeps the status of its one enumeration as is.
    #[instrument(level = "debug", skip(self))]
    pub async fn list_nats(
        &self,
        nat_ip: IpAddr,
        nat_kind: NatKind,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<NatList> {
        let meta = NatListMeta { nat_ip, nat_kind };
        let mut items = Vec::new();
        let sources = NatSource::for_kind(nat_kind);
        let mut merged = Status::default();
        for source in sources {
            let (status, entries) = self.enumerate_nats(nat_ip, *source).await?;
            if status.is_success() {
                let entries = entries
                    .iter()
                    .map(NatEntry::try_from)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(format_failure)?;
                items.extend(entries);
            } else {
                let refused = NatList {
                    meta: meta.clone(),
                    items: Vec::new(),
                    status: status.clone(),
                };
                settle(refused, ignored)?;
            }
            if sources.len() == 1 || (merged.is_success() && !status.is_success()) {
                merged = status;
            }
        }
        Ok(NatList {
            meta,
            items,
            status: merged,
        })
    }

    /// Parse the NAT kind from its textual form, then [`list_nats`](Self::list_nats). Nothing is
    /// issued if the kind is not recognized.
    pub async fn list_nats_of_kind(
        &self,
        nat_ip: IpAddr,
        nat_kind: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<NatList> {
        let nat_kind = nat_kind.parse().map_err(DpError::from)?;
        self.list_nats(nat_ip, nat_kind, ignored).await
    }

    pub async fn list_local_nats(
        &self,
        nat_ip: IpAddr,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<NatList> {
        self.list_nats(nat_ip, NatKind::Local, ignored).await
    }

    pub async fn list_neighbor_nats(
        &self,
        nat_ip: IpAddr,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<NatList> {
        self.list_nats(nat_ip, NatKind::Neighbor, ignored).await
    }

    async fn enumerate_nats(
        &self,
        nat_ip: IpAddr,
        source: NatSource,
    ) -> Result<(Status, Vec<proto::NatEntry>), DpError> {
        match source {
            NatSource::Local => {
                let response = self
                    .transport
                    .list_local_nats(nat::list_local_request(nat_ip))
                    .await
                    .map_err(transport_failure)?;
                Ok((
                    status_from_wire(response.status.as_ref()),
                    response.nat_entries,
                ))
            }
            NatSource::Neighbor => {
                let response = self
                    .transport
                    .list_neighbor_nats(nat::list_neighbor_request(nat_ip))
                    .await
                    .map_err(transport_failure)?;
                Ok((
                    status_from_wire(response.status.as_ref()),
                    response.nat_entries,
                ))
            }
        }
    }
}
