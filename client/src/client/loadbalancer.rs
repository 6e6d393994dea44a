// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use ipnet::IpNet;
use std::net::IpAddr;
use tracing::instrument;

use api::converters::{loadbalancer, status_from_wire};
use api::loadbalancer::{
    LoadBalancer, LoadBalancerMeta, LoadBalancerPrefix, LoadBalancerPrefixList,
    LoadBalancerPrefixMeta, LoadBalancerPrefixSpec, LoadBalancerSpec, LoadBalancerTarget,
    LoadBalancerTargetList, LoadBalancerTargetListMeta, LoadBalancerTargetMeta,
};
use api::prefix::PrefixListMeta;

use super::{Client, converted, fetched, format_failure, settle, transport_failure};
use crate::errors::ClientResult;
use crate::status::IgnoredCodes;

/* load balancers */

impl Client {
    #[instrument(level = "debug", skip(self))]
    pub async fn get_load_balancer(
        &self,
        id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<LoadBalancer> {
        let meta = LoadBalancerMeta { id: id.to_owned() };
        let response = self
            .transport
            .get_load_balancer(loadbalancer::get_request(&meta))
            .await
            .map_err(transport_failure)?;
        let mut record = LoadBalancer {
            meta,
            spec: None,
            status: status_from_wire(response.status.as_ref()),
        };
        if !record.status.is_success() {
            return settle(record, ignored);
        }
        let (spec, result) = fetched(
            &response,
            LoadBalancerSpec::try_from,
            loadbalancer::complete_get,
        );
        record.spec = spec;
        converted(record, result)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn create_load_balancer(
        &self,
        id: &str,
        mut spec: LoadBalancerSpec,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<LoadBalancer> {
        let meta = LoadBalancerMeta { id: id.to_owned() };
        let response = self
            .transport
            .create_load_balancer(loadbalancer::create_request(&meta, &spec))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        if !status.is_success() {
            return settle(
                LoadBalancer {
                    meta,
                    spec: None,
                    status,
                },
                ignored,
            );
        }
        let result = loadbalancer::complete_create(&mut spec, &response);
        converted(
            LoadBalancer {
                meta,
                spec: Some(spec),
                status,
            },
            result,
        )
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete_load_balancer(
        &self,
        id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<LoadBalancer> {
        let meta = LoadBalancerMeta { id: id.to_owned() };
        let response = self
            .transport
            .delete_load_balancer(loadbalancer::delete_request(&meta))
            .await
            .map_err(transport_failure)?;
        settle(
            LoadBalancer {
                meta,
                spec: None,
                status: status_from_wire(response.status.as_ref()),
            },
            ignored,
        )
    }
}

/* load balancer prefixes */

impl Client {
    #[instrument(level = "debug", skip(self))]
    pub async fn list_load_balancer_prefixes(
        &self,
        interface_id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<LoadBalancerPrefixList> {
        let meta = PrefixListMeta {
            interface_id: interface_id.to_owned(),
        };
        let response = self
            .transport
            .list_load_balancer_prefixes(loadbalancer::list_prefixes_request(&meta))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        if !status.is_success() {
            return settle(
                LoadBalancerPrefixList {
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
            .map(|entry| loadbalancer::prefix_from_list(interface_id, entry))
            .collect::<Result<_, _>>()
            .map_err(format_failure)?;
        Ok(LoadBalancerPrefixList {
            meta,
            items,
            status,
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn create_load_balancer_prefix(
        &self,
        interface_id: &str,
        prefix: IpNet,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<LoadBalancerPrefix> {
        let meta = LoadBalancerPrefixMeta {
            interface_id: interface_id.to_owned(),
            prefix,
        };
        let response = self
            .transport
            .create_load_balancer_prefix(loadbalancer::create_prefix_request(&meta))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        if !status.is_success() {
            return settle(
                LoadBalancerPrefix {
                    meta,
                    spec: None,
                    status,
                },
                ignored,
            );
        }
        let mut spec = LoadBalancerPrefixSpec::default();
        let result = loadbalancer::complete_create_prefix(&mut spec, &response);
        converted(
            LoadBalancerPrefix {
                meta,
                spec: Some(spec),
                status,
            },
            result,
        )
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete_load_balancer_prefix(
        &self,
        interface_id: &str,
        prefix: IpNet,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<LoadBalancerPrefix> {
        let meta = LoadBalancerPrefixMeta {
            interface_id: interface_id.to_owned(),
            prefix,
        };
        let response = self
            .transport
            .delete_load_balancer_prefix(loadbalancer::delete_prefix_request(&meta))
            .await
            .map_err(transport_failure)?;
        settle(
            LoadBalancerPrefix {
                meta,
                spec: None,
                status: status_from_wire(response.status.as_ref()),
            },
            ignored,
        )
    }
}

/* load balancer targets */

impl Client {
    #[instrument(level = "debug", skip(self))]
    pub async fn list_load_balancer_targets(
        &self,
        load_balancer_id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<LoadBalancerTargetList> {
        let meta = LoadBalancerTargetListMeta {
            load_balancer_id: load_balancer_id.to_owned(),
        };
        let response = self
            .transport
            .list_load_balancer_targets(loadbalancer::list_targets_request(&meta))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        if !status.is_success() {
            return settle(
                LoadBalancerTargetList {
                    meta,
                    items: Vec::new(),
                    status,
                },
                ignored,
            );
        }
        let items = response
            .target_ips
            .iter()
            .map(|target| loadbalancer::target_from_list(load_balancer_id, target))
            .collect::<Result<_, _>>()
            .map_err(format_failure)?;
        Ok(LoadBalancerTargetList {
            meta,
            items,
            status,
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn create_load_balancer_target(
        &self,
        load_balancer_id: &str,
        target_ip: IpAddr,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<LoadBalancerTarget> {
        let meta = LoadBalancerTargetMeta {
            load_balancer_id: load_balancer_id.to_owned(),
            target_ip,
        };
        let response = self
            .transport
            .create_load_balancer_target(loadbalancer::create_target_request(&meta))
            .await
            .map_err(transport_failure)?;
        settle(
            LoadBalancerTarget {
                meta,
                status: status_from_wire(response.status.as_ref()),
            },
            ignored,
        )
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete_load_balancer_target(
        &self,
        load_balancer_id: &str,
        target_ip: IpAddr,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<LoadBalancerTarget> {
        let meta = LoadBalancerTargetMeta {
            load_balancer_id: load_balancer_id.to_owned(),
            target_ip,
        };
        let response = self
            .transport
            .delete_load_balancer_target(loadbalancer::delete_target_request(&meta))
            .await
            .map_err(transport_failure)?;
        settle(
            LoadBalancerTarget {
                meta,
                status: status_from_wire(response.status.as_ref()),
            },
            ignored,
        )
    }
}
