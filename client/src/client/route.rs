// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use ipnet::IpNet;
use tracing::instrument;

use api::converters::{route, status_from_wire};
use api::route::{NextHop, Route, RouteList, RouteListMeta, RouteMeta, RouteSpec};

use super::{Client, format_failure, settle, transport_failure};
use crate::errors::ClientResult;
use crate::status::IgnoredCodes;

impl Client {
    #[instrument(level = "debug", skip(self))]
    pub async fn list_routes(
        &self,
        vni: u32,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<RouteList> {
        let meta = RouteListMeta { vni };
        let response = self
            .transport
            .list_routes(route::list_request(&meta))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        if !status.is_success() {
            return settle(
                RouteList {
                    meta,
                    items: Vec::new(),
                    status,
                },
                ignored,
            );
        }
        let items = response
            .routes
            .iter()
            .map(|entry| route::route_from_list(vni, entry))
            .collect::<Result<_, _>>()
            .map_err(format_failure)?;
        Ok(RouteList {
            meta,
            items,
            status,
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn create_route(
        &self,
        vni: u32,
        prefix: IpNet,
        next_hop: NextHop,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Route> {
        let meta = RouteMeta { vni, prefix };
        let spec = RouteSpec { next_hop };
        let response = self
            .transport
            .create_route(route::create_request(&meta, &spec))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        let spec = status.is_success().then_some(spec);
        settle(Route { meta, spec, status }, ignored)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete_route(
        &self,
        vni: u32,
        prefix: IpNet,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<Route> {
        let meta = RouteMeta { vni, prefix };
        let response = self
            .transport
            .delete_route(route::delete_request(&meta))
            .await
            .map_err(transport_failure)?;
        settle(
            Route {
                meta,
                spec: None,
                status: status_from_wire(response.status.as_ref()),
            },
            ignored,
        )
    }
}
