// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use super::address::{
    addr_to_wire, prefix_to_wire, required_addr_from_wire, required_prefix_from_wire,
};
use crate::route::{NextHop, Route, RouteListMeta, RouteMeta, RouteSpec};
use crate::{FormatError, Status};

/// Weight written on every route; the dataplane does not balance between routes.
pub const ROUTE_WEIGHT: u32 = 100;

fn route_to_wire(meta: &RouteMeta, next_hop: Option<&NextHop>) -> proto::Route {
    proto::Route {
        prefix: Some(prefix_to_wire(&meta.prefix)),
        nexthop_vni: next_hop.map_or(0, |hop| hop.vni),
        nexthop_address: next_hop.map(|hop| addr_to_wire(hop.ip)),
        weight: ROUTE_WEIGHT,
    }
}

pub fn list_request(meta: &RouteListMeta) -> proto::ListRoutesRequest {
    proto::ListRoutesRequest { vni: meta.vni }
}

pub fn create_request(meta: &RouteMeta, spec: &RouteSpec) -> proto::CreateRouteRequest {
    proto::CreateRouteRequest {
        vni: meta.vni,
        route: Some(route_to_wire(meta, Some(&spec.next_hop))),
    }
}

/// Routes are deleted by prefix; the next hop is not part of their identity.
pub fn delete_request(meta: &RouteMeta) -> proto::DeleteRouteRequest {
    proto::DeleteRouteRequest {
        vni: meta.vni,
        route: Some(route_to_wire(meta, None)),
    }
}

pub fn route_from_list(vni: u32, route: &proto::Route) -> Result<Route, FormatError> {
    Ok(Route {
        meta: RouteMeta {
            vni,
            prefix: required_prefix_from_wire("route prefix", route.prefix.as_ref())?,
        },
        spec: Some(RouteSpec {
            next_hop: NextHop {
                vni: route.nexthop_vni,
                ip: required_addr_from_wire("next hop", route.nexthop_address.as_ref())?,
            },
        }),
        status: Status::default(),
    })
}
