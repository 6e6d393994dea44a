// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use ipnet::IpNet;
use pretty_assertions::assert_eq;
use std::net::IpAddr;
use std::sync::Arc;
use tracing_test::traced_test;

use api::Status;
use api::converters::{addr_to_wire, prefix_to_wire, underlay_to_wire};
use api::firewall::{FirewallAction, FirewallRuleSpec, TrafficDirection};
use api::interface::{Interface, InterfaceMeta, InterfaceSpec, VirtualFunction};
use api::loadbalancer::{LbPort, LoadBalancerPrefixSpec, LoadBalancerSpec, Protocol};
use api::nat::{NatEntry, NatKind, NatSpec, NatTarget, NeighborNatMeta, NeighborNatSpec};
use api::route::NextHop;
use api::system::VniType;
use api::vip::VirtualIpSpec;

use crate::config::ClientConfigBuilder;
use crate::errors::DpError;
use crate::status::{IgnoredCodes, codes};
use crate::testing::MockTransport;
use crate::Client;

fn setup() -> (Arc<MockTransport>, Client) {
    let mock = Arc::new(MockTransport::new());
    let client = Client::new(mock.clone());
    (mock, client)
}

fn status(code: u32, message: &str) -> Option<proto::Status> {
    Some(proto::Status {
        code,
        message: message.to_owned(),
    })
}

fn ip(addr: &str) -> IpAddr {
    addr.parse().unwrap()
}

fn local_entry(underlay: &str, min_port: u32, max_port: u32) -> proto::NatEntry {
    proto::NatEntry {
        nat_ip: None,
        min_port,
        max_port,
        underlay_route: underlay_to_wire(ip(underlay)),
        vni: 0,
    }
}

fn neighbor_entry(nat_ip: &str, min_port: u32, max_port: u32, vni: u32) -> proto::NatEntry {
    proto::NatEntry {
        nat_ip: Some(addr_to_wire(ip(nat_ip))),
        min_port,
        max_port,
        underlay_route: Vec::new(),
        vni,
    }
}

/* NAT listing */

#[tokio::test]
async fn test_any_nat_lists_local_then_neighbor() {
    let (mock, client) = setup();
    mock.reply(
        "list_local_nats",
        proto::ListLocalNatsResponse {
            status: None,
            nat_entries: vec![
                local_entry("fc00::1", 100, 200),
                local_entry("fc00::2", 200, 300),
            ],
        },
    );
    mock.reply(
        "list_neighbor_nats",
        proto::ListNeighborNatsResponse {
            status: None,
            nat_entries: vec![neighbor_entry("10.0.0.1", 300, 400, 100)],
        },
    );

    let list = client
        .list_nats(ip("10.0.0.1"), NatKind::Any, None)
        .await
        .unwrap();
    assert_eq!(mock.calls(), vec!["list_local_nats", "list_neighbor_nats"]);
    assert_eq!(list.meta.nat_ip, ip("10.0.0.1"));
    assert_eq!(list.meta.nat_kind, NatKind::Any);
    assert_eq!(list.status, Status::default());
    let ranges: Vec<_> = list
        .items
        .iter()
        .map(|entry| (entry.min_port, entry.max_port))
        .collect();
    assert_eq!(ranges, vec![(100, 200), (200, 300), (300, 400)]);
    assert_eq!(
        list.items[0].target,
        NatTarget::Local {
            underlay_route: ip("fc00::1")
        }
    );
    assert_eq!(
        list.items[2],
        NatEntry {
            target: NatTarget::Neighbor {
                nat_ip: ip("10.0.0.1")
            },
            min_port: 300,
            max_port: 400,
            vni: 100,
        }
    );

    let requests = mock.requests::<proto::ListNeighborNatsRequest>("list_neighbor_nats");
    assert_eq!(requests[0].nat_ip, Some(addr_to_wire(ip("10.0.0.1"))));
}

#[tokio::test]
async fn test_any_nat_stops_at_transport_failure() {
    let (mock, client) = setup();
    mock.fail("list_local_nats", tonic::Status::unavailable("no dataplane"));

    let error = client
        .list_nats(ip("10.0.0.1"), NatKind::Any, None)
        .await
        .unwrap_err();
    assert_eq!(mock.calls(), vec!["list_local_nats"]);
    assert!(matches!(error.error(), DpError::Transport(_)));
    assert!(error.record().is_none());
}

#[tokio::test]
#[traced_test]
async fn test_any_nat_stops_at_refusal() {
    let (mock, client) = setup();
    mock.reply(
        "list_local_nats",
        proto::ListLocalNatsResponse {
            status: status(codes::ITERATOR, "iteration failed"),
            nat_entries: Vec::new(),
        },
    );

    let error = client
        .list_nats(ip("10.0.0.1"), NatKind::Any, None)
        .await
        .unwrap_err();
    assert_eq!(mock.calls(), vec!["list_local_nats"]);
    assert_eq!(error.error().status_code(), Some(codes::ITERATOR));
    let list = error.into_record().unwrap();
    assert_eq!(list.meta.nat_ip, ip("10.0.0.1"));
    assert_eq!(list.status.code, codes::ITERATOR);
    assert!(list.items.is_empty());
    assert!(logs_contain("dataplane refused operation"));
}

#[tokio::test]
#[traced_test]
async fn test_any_nat_keeps_first_ignored_status() {
    let (mock, client) = setup();
    mock.reply(
        "list_local_nats",
        proto::ListLocalNatsResponse {
            status: status(codes::NOT_FOUND, "no local entry"),
            nat_entries: Vec::new(),
        },
    );
    mock.reply(
        "list_neighbor_nats",
        proto::ListNeighborNatsResponse {
            status: None,
            nat_entries: vec![neighbor_entry("10.0.0.1", 1000, 2000, 7)],
        },
    );

    let ignored = IgnoredCodes::from([codes::NOT_FOUND]);
    let list = client
        .list_nats(ip("10.0.0.1"), NatKind::Any, Some(&ignored))
        .await
        .unwrap();
    assert_eq!(mock.calls(), vec!["list_local_nats", "list_neighbor_nats"]);
    assert_eq!(list.status, Status::new(codes::NOT_FOUND, "no local entry"));
    assert_eq!(list.items.len(), 1);
    assert!(logs_contain("ignoring"));
}

#[tokio::test]
async fn test_single_kind_nat_listing() {
    let (mock, client) = setup();
    mock.reply(
        "list_neighbor_nats",
        proto::ListNeighborNatsResponse {
            status: None,
            nat_entries: vec![neighbor_entry("10.0.0.2", 10, 20, 3)],
        },
    );

    let list = client
        .list_neighbor_nats(ip("10.0.0.2"), None)
        .await
        .unwrap();
    assert_eq!(mock.calls(), vec!["list_neighbor_nats"]);
    assert_eq!(list.meta.nat_kind, NatKind::Neighbor);
    assert_eq!(list.items.len(), 1);

    let list = client.list_local_nats(ip("10.0.0.2"), None).await.unwrap();
    assert_eq!(mock.calls(), vec!["list_neighbor_nats", "list_local_nats"]);
    assert!(list.items.is_empty());
}

#[tokio::test]
async fn test_single_kind_nat_keeps_status() {
    let (mock, client) = setup();
    mock.reply(
        "list_local_nats",
        proto::ListLocalNatsResponse {
            status: status(0, "all good"),
            nat_entries: vec![local_entry("fc00::1", 100, 200)],
        },
    );

    let list = client.list_local_nats(ip("10.0.0.1"), None).await.unwrap();
    assert_eq!(
        list.status,
        Status {
            code: 0,
            message: "all good".to_owned()
        }
    );
    assert_eq!(list.items.len(), 1);
}

#[tokio::test]
async fn test_nat_kind_spellings() {
    let (mock, client) = setup();
    let list = client
        .list_nats_of_kind(ip("10.0.0.1"), "NEIGH", None)
        .await
        .unwrap();
    assert_eq!(list.meta.nat_kind, NatKind::Neighbor);
    assert_eq!(mock.calls(), vec!["list_neighbor_nats"]);

    let error = client
        .list_nats_of_kind(ip("10.0.0.1"), "remote", None)
        .await
        .unwrap_err();
    assert!(matches!(error.error(), DpError::InvalidArgument(_)));
    assert!(error.record().is_none());
    assert_eq!(mock.calls(), vec!["list_neighbor_nats"]);
}

#[tokio::test]
async fn test_undecidable_nat_entry_fails_listing() {
    let (mock, client) = setup();
    mock.reply(
        "list_local_nats",
        proto::ListLocalNatsResponse {
            status: None,
            nat_entries: vec![
                local_entry("fc00::1", 1, 2),
                proto::NatEntry {
                    nat_ip: None,
                    min_port: 3,
                    max_port: 4,
                    underlay_route: Vec::new(),
                    vni: 0,
                },
            ],
        },
    );
    let error = client
        .list_local_nats(ip("10.0.0.1"), None)
        .await
        .unwrap_err();
    assert!(matches!(
        error.error(),
        DpError::Format(api::FormatError::UndecidableNatEntry)
    ));
    assert!(error.record().is_none());
}

/* ignored codes */

#[tokio::test]
#[traced_test]
async fn test_delete_missing_interface() {
    let (mock, client) = setup();
    for _ in 0..2 {
        mock.reply(
            "delete_interface",
            proto::DeleteInterfaceResponse {
                status: status(codes::NOT_FOUND, "interface not found"),
            },
        );
    }

    let ignored = IgnoredCodes::from([codes::NOT_FOUND]);
    let record = client
        .delete_interface("vm1", Some(&ignored))
        .await
        .unwrap();
    assert_eq!(record.meta, InterfaceMeta { id: "vm1".to_owned() });
    assert_eq!(record.spec, None);
    assert_eq!(record.status.code, codes::NOT_FOUND);

    let error = client
        .delete_interface("vm1", Some(&IgnoredCodes::new()))
        .await
        .unwrap_err();
    assert!(matches!(
        error.error(),
        DpError::Status { code: codes::NOT_FOUND, .. }
    ));
    let record = error.into_record().unwrap();
    assert_eq!(record.meta.id, "vm1");
    assert_eq!(record.spec, None);
    assert!(logs_contain("ignoring"));
}

#[tokio::test]
async fn test_transport_failure_is_never_ignored() {
    let (mock, client) = setup();
    mock.fail("get_interface", tonic::Status::deadline_exceeded("too slow"));
    let ignored = IgnoredCodes::from([codes::NOT_FOUND]);
    let error = client
        .get_interface("vm1", Some(&ignored))
        .await
        .unwrap_err();
    assert!(matches!(error.error(), DpError::Transport(_)));
    assert!(error.record().is_none());
}

#[tokio::test]
async fn test_failed_listing_keeps_scope() {
    let (mock, client) = setup();
    mock.reply(
        "list_routes",
        proto::ListRoutesResponse {
            status: status(codes::NO_VNI, "no such vni"),
            routes: Vec::new(),
        },
    );
    let error = client.list_routes(42, None).await.unwrap_err();
    let list = error.into_record().unwrap();
    assert_eq!(list.meta.vni, 42);
    assert_eq!(list.status.code, codes::NO_VNI);
}

/* service-assigned values */

#[tokio::test]
#[traced_test]
async fn test_create_interface_with_bad_underlay() {
    let (mock, client) = setup();
    mock.reply(
        "create_interface",
        proto::CreateInterfaceResponse {
            status: None,
            underlay_route: b"not an address".to_vec(),
            vf: Some(proto::VirtualFunction {
                name: "net_tap3".to_owned(),
                domain: 0,
                bus: 0,
                slot: 0,
                function: 0,
            }),
        },
    );
    let spec = InterfaceSpec {
        vni: 100,
        device: "net_tap3".to_owned(),
        ipv4: Some("10.200.1.4".parse().unwrap()),
        ..Default::default()
    };

    let error = client
        .create_interface("vm1", spec, None)
        .await
        .unwrap_err();
    assert!(matches!(error.error(), DpError::Format(_)));
    let record = error.into_record().unwrap();
    assert_eq!(record.meta.id, "vm1");
    assert_eq!(record.status, Status::default());
    let spec = record.spec.unwrap();
    assert_eq!(spec.vni, 100);
    assert_eq!(spec.device, "net_tap3");
    assert_eq!(spec.ipv4, Some("10.200.1.4".parse().unwrap()));
    assert_eq!(spec.underlay_route, None);
    assert_eq!(spec.virtual_function.unwrap().name, "net_tap3");
    assert!(logs_contain("bad reply from dataplane"));
}

#[tokio::test]
async fn test_create_interface_refused() {
    let (mock, client) = setup();
    mock.reply(
        "create_interface",
        proto::CreateInterfaceResponse {
            status: status(codes::ALREADY_EXISTS, "already exists"),
            underlay_route: Vec::new(),
            vf: None,
        },
    );
    let ignored = IgnoredCodes::from([codes::ALREADY_EXISTS]);
    let record = client
        .create_interface("vm1", InterfaceSpec::default(), Some(&ignored))
        .await
        .unwrap();
    assert_eq!(record.meta.id, "vm1");
    assert_eq!(record.spec, None);
}

#[tokio::test]
async fn test_load_balancer_round_trip() {
    let (mock, client) = setup();
    let spec = LoadBalancerSpec {
        vni: 100,
        vip: ip("10.20.30.40"),
        ports: vec![LbPort {
            protocol: Protocol::Tcp,
            port: 80,
        }],
        underlay_route: None,
    };
    mock.reply(
        "create_load_balancer",
        proto::CreateLoadBalancerResponse {
            status: None,
            underlay_route: underlay_to_wire(ip("fc00::40")),
        },
    );
    let created = client
        .create_load_balancer("lb1", spec.clone(), None)
        .await
        .unwrap();

    let request = mock
        .requests::<proto::CreateLoadBalancerRequest>("create_load_balancer")
        .remove(0);
    mock.reply(
        "get_load_balancer",
        proto::GetLoadBalancerResponse {
            status: None,
            vni: request.vni,
            loadbalanced_ip: request.loadbalanced_ip,
            loadbalanced_ports: request.loadbalanced_ports,
            underlay_route: underlay_to_wire(ip("fc00::40")),
        },
    );
    let fetched = client.get_load_balancer("lb1", None).await.unwrap();

    let expected = LoadBalancerSpec {
        underlay_route: Some(ip("fc00::40")),
        ..spec
    };
    assert_eq!(created.spec.as_ref(), Some(&expected));
    assert_eq!(fetched.spec, Some(expected));
    assert_eq!(fetched.meta, created.meta);
}

#[tokio::test]
async fn test_listed_prefixes_keep_dataplane_order() {
    let (mock, client) = setup();
    let prefixes = ["10.0.2.0/24", "10.0.1.0/24", "fd00::/64"];
    mock.reply(
        "list_prefixes",
        proto::ListPrefixesResponse {
            status: None,
            prefixes: prefixes
                .iter()
                .map(|prefix| api::converters::prefix_to_wire(&prefix.parse().unwrap()))
                .collect(),
        },
    );
    let list = client.list_prefixes("vm1", None).await.unwrap();
    assert_eq!(list.meta.interface_id, "vm1");
    let listed: Vec<String> = list
        .items
        .iter()
        .map(|prefix| prefix.meta.prefix.to_string())
        .collect();
    assert_eq!(listed, prefixes);
    assert!(list.items.iter().all(|prefix| prefix.meta.interface_id == "vm1"));
}

#[tokio::test]
async fn test_create_route() {
    let (mock, client) = setup();
    let next_hop = NextHop {
        vni: 0,
        ip: ip("fc00:2::1"),
    };
    let route = client
        .create_route(100, "10.100.0.0/16".parse().unwrap(), next_hop.clone(), None)
        .await
        .unwrap();
    assert_eq!(route.spec.unwrap().next_hop, next_hop);
    let request = mock
        .requests::<proto::CreateRouteRequest>("create_route")
        .remove(0);
    assert_eq!(request.vni, 100);
    assert_eq!(
        request.route.unwrap().weight,
        api::converters::route::ROUTE_WEIGHT
    );
}

/* firewall */

/* service-assigned fields on get */

#[tokio::test]
#[traced_test]
async fn test_get_vip_with_bad_underlay() {
    let (mock, client) = setup();
    mock.reply(
        "get_vip",
        proto::GetVipResponse {
            status: None,
            vip_ip: Some(addr_to_wire(ip("20.0.0.1"))),
            underlay_route: b"garbage".to_vec(),
        },
    );

    let error = client.get_vip("vm1", None).await.unwrap_err();
    assert!(matches!(error.error(), DpError::Format(_)));
    let record = error.into_record().unwrap();
    assert_eq!(record.meta.interface_id, "vm1");
    assert_eq!(
        record.spec,
        Some(VirtualIpSpec {
            ip: ip("20.0.0.1"),
            underlay_route: None,
        })
    );
    assert!(logs_contain("bad reply from dataplane"));
}

#[tokio::test]
async fn test_get_nat_with_bad_underlay() {
    let (mock, client) = setup();
    mock.reply(
        "get_nat",
        proto::GetNatResponse {
            status: None,
            nat_ip: Some(addr_to_wire(ip("10.0.0.1"))),
            min_port: 1000,
            max_port: 2000,
            underlay_route: b"garbage".to_vec(),
        },
    );

    let error = client.get_nat("vm1", None).await.unwrap_err();
    assert!(matches!(error.error(), DpError::Format(_)));
    assert_eq!(
        error.into_record().unwrap().spec,
        Some(NatSpec {
            nat_ip: ip("10.0.0.1"),
            min_port: 1000,
            max_port: 2000,
            underlay_route: None,
        })
    );
}

#[tokio::test]
async fn test_get_load_balancer_with_bad_underlay() {
    let (mock, client) = setup();
    let ports = vec![LbPort {
        protocol: Protocol::Udp,
        port: 53,
    }];
    mock.reply(
        "get_load_balancer",
        proto::GetLoadBalancerResponse {
            status: None,
            vni: 100,
            loadbalanced_ip: Some(addr_to_wire(ip("10.20.30.40"))),
            loadbalanced_ports: ports.iter().map(proto::LbPort::from).collect(),
            underlay_route: b"garbage".to_vec(),
        },
    );

    let error = client.get_load_balancer("lb1", None).await.unwrap_err();
    assert!(matches!(error.error(), DpError::Format(_)));
    assert_eq!(
        error.into_record().unwrap().spec,
        Some(LoadBalancerSpec {
            vni: 100,
            vip: ip("10.20.30.40"),
            ports,
            underlay_route: None,
        })
    );
}

#[tokio::test]
async fn test_get_interface_with_bad_underlay() {
    let (mock, client) = setup();
    mock.reply(
        "get_interface",
        proto::GetInterfaceResponse {
            status: None,
            interface: Some(proto::Interface {
                id: b"vm1".to_vec(),
                vni: 100,
                primary_ipv4: b"10.200.1.4".to_vec(),
                primary_ipv6: Vec::new(),
                underlay_route: b"garbage".to_vec(),
                vf: Some(proto::VirtualFunction {
                    name: "net_tap3".to_owned(),
                    domain: 0,
                    bus: 0,
                    slot: 3,
                    function: 0,
                }),
            }),
        },
    );

    let error = client.get_interface("vm1", None).await.unwrap_err();
    assert!(matches!(error.error(), DpError::Format(_)));
    let expected = Interface::new(
        "vm1",
        InterfaceSpec {
            vni: 100,
            ipv4: Some("10.200.1.4".parse().unwrap()),
            virtual_function: Some(VirtualFunction {
                name: "net_tap3".to_owned(),
                slot: 3,
                ..Default::default()
            }),
            ..Default::default()
        },
    );
    assert_eq!(error.into_record(), Some(expected));
}

/* round trips */

#[tokio::test]
async fn test_vip_round_trip() {
    let (mock, client) = setup();
    mock.reply(
        "create_vip",
        proto::CreateVipResponse {
            status: None,
            underlay_route: underlay_to_wire(ip("fc00::20")),
        },
    );
    let created = client.create_vip("vm1", ip("20.0.0.1"), None).await.unwrap();

    let request = mock
        .requests::<proto::CreateVipRequest>("create_vip")
        .remove(0);
    assert_eq!(request.interface_id, b"vm1".to_vec());
    mock.reply(
        "get_vip",
        proto::GetVipResponse {
            status: None,
            vip_ip: request.vip_ip,
            underlay_route: underlay_to_wire(ip("fc00::20")),
        },
    );
    let fetched = client.get_vip("vm1", None).await.unwrap();

    let expected = VirtualIpSpec {
        ip: ip("20.0.0.1"),
        underlay_route: Some(ip("fc00::20")),
    };
    assert_eq!(created.spec.as_ref(), Some(&expected));
    assert_eq!(fetched.spec, Some(expected));
    assert_eq!(fetched.meta, created.meta);
}

#[tokio::test]
async fn test_nat_round_trip() {
    let (mock, client) = setup();
    mock.reply(
        "create_nat",
        proto::CreateNatResponse {
            status: None,
            underlay_route: underlay_to_wire(ip("fc00::30")),
        },
    );
    let created = client
        .create_nat("vm1", ip("10.0.0.1"), 1000, 2000, None)
        .await
        .unwrap();

    let request = mock
        .requests::<proto::CreateNatRequest>("create_nat")
        .remove(0);
    assert_eq!((request.min_port, request.max_port), (1000, 2000));
    mock.reply(
        "get_nat",
        proto::GetNatResponse {
            status: None,
            nat_ip: request.nat_ip,
            min_port: request.min_port,
            max_port: request.max_port,
            underlay_route: underlay_to_wire(ip("fc00::30")),
        },
    );
    let fetched = client.get_nat("vm1", None).await.unwrap();

    let expected = NatSpec {
        nat_ip: ip("10.0.0.1"),
        min_port: 1000,
        max_port: 2000,
        underlay_route: Some(ip("fc00::30")),
    };
    assert_eq!(created.spec.as_ref(), Some(&expected));
    assert_eq!(fetched.spec, Some(expected));

    mock.reply(
        "delete_nat",
        proto::DeleteNatResponse {
            status: status(codes::NOT_FOUND, "no NAT"),
        },
    );
    let ignored = IgnoredCodes::from([codes::NOT_FOUND]);
    let deleted = client.delete_nat("vm1", Some(&ignored)).await.unwrap();
    assert_eq!(deleted.meta.interface_id, "vm1");
    assert_eq!(deleted.spec, None);
    assert_eq!(deleted.status.code, codes::NOT_FOUND);
}

#[tokio::test]
async fn test_neighbor_nat_round_trip() {
    let (mock, client) = setup();
    let meta = NeighborNatMeta {
        nat_ip: ip("10.0.0.1"),
        vni: 100,
        min_port: 3000,
        max_port: 4000,
    };

    let created = client
        .create_neighbor_nat(meta.clone(), ip("fc00::50"), None)
        .await
        .unwrap();
    assert_eq!(created.meta, meta);
    assert_eq!(
        created.spec,
        Some(NeighborNatSpec {
            underlay_route: ip("fc00::50")
        })
    );
    let request = mock
        .requests::<proto::CreateNeighborNatRequest>("create_neighbor_nat")
        .remove(0);
    assert_eq!(request.nat_ip, Some(addr_to_wire(ip("10.0.0.1"))));
    assert_eq!(request.vni, 100);
    assert_eq!((request.min_port, request.max_port), (3000, 4000));
    assert_eq!(request.underlay_route, underlay_to_wire(ip("fc00::50")));

    mock.reply(
        "delete_neighbor_nat",
        proto::DeleteNeighborNatResponse {
            status: status(codes::NOT_FOUND, "no such range"),
        },
    );
    let error = client
        .delete_neighbor_nat(meta.clone(), None)
        .await
        .unwrap_err();
    assert_eq!(error.error().status_code(), Some(codes::NOT_FOUND));
    assert_eq!(error.record().unwrap().meta, meta);
    let request = mock
        .requests::<proto::DeleteNeighborNatRequest>("delete_neighbor_nat")
        .remove(0);
    assert_eq!((request.min_port, request.max_port), (3000, 4000));
}

#[tokio::test]
async fn test_create_prefix() {
    let (mock, client) = setup();
    let net: IpNet = "10.0.5.0/24".parse().unwrap();
    mock.reply(
        "create_prefix",
        proto::CreatePrefixResponse {
            status: None,
            underlay_route: underlay_to_wire(ip("fc00::60")),
        },
    );

    let prefix = client.create_prefix("vm1", net, None).await.unwrap();
    assert_eq!(prefix.meta.prefix, net);
    assert_eq!(prefix.spec.unwrap().underlay_route, Some(ip("fc00::60")));
    let request = mock
        .requests::<proto::CreatePrefixRequest>("create_prefix")
        .remove(0);
    assert_eq!(request.interface_id, b"vm1".to_vec());
    assert_eq!(request.prefix, Some(prefix_to_wire(&net)));
}

#[tokio::test]
async fn test_load_balancer_prefix_round_trip() {
    let (mock, client) = setup();
    let net: IpNet = "10.30.0.0/16".parse().unwrap();
    mock.reply(
        "create_load_balancer_prefix",
        proto::CreateLoadBalancerPrefixResponse {
            status: None,
            underlay_route: underlay_to_wire(ip("fc00::70")),
        },
    );
    let created = client
        .create_load_balancer_prefix("vm1", net, None)
        .await
        .unwrap();

    let request = mock
        .requests::<proto::CreateLoadBalancerPrefixRequest>("create_load_balancer_prefix")
        .remove(0);
    mock.reply(
        "list_load_balancer_prefixes",
        proto::ListLoadBalancerPrefixesResponse {
            status: None,
            prefixes: vec![proto::Prefix {
                underlay_route: underlay_to_wire(ip("fc00::70")),
                ..request.prefix.unwrap()
            }],
        },
    );
    let list = client
        .list_load_balancer_prefixes("vm1", None)
        .await
        .unwrap();

    assert_eq!(list.meta.interface_id, "vm1");
    assert_eq!(list.items, vec![created]);
    assert_eq!(
        list.items[0].spec,
        Some(LoadBalancerPrefixSpec {
            underlay_route: Some(ip("fc00::70"))
        })
    );
}

#[tokio::test]
async fn test_load_balancer_target_round_trip() {
    let (mock, client) = setup();
    let created = client
        .create_load_balancer_target("lb1", ip("fc00::80"), None)
        .await
        .unwrap();
    assert_eq!(created.meta.load_balancer_id, "lb1");
    assert_eq!(created.meta.target_ip, ip("fc00::80"));

    let request = mock
        .requests::<proto::CreateLoadBalancerTargetRequest>("create_load_balancer_target")
        .remove(0);
    assert_eq!(request.loadbalancer_id, b"lb1".to_vec());
    mock.reply(
        "list_load_balancer_targets",
        proto::ListLoadBalancerTargetsResponse {
            status: None,
            target_ips: vec![request.target_ip.unwrap()],
        },
    );
    let list = client.list_load_balancer_targets("lb1", None).await.unwrap();
    assert_eq!(list.meta.load_balancer_id, "lb1");
    assert_eq!(list.items, vec![created]);
}

fn rule(action: &str) -> Result<FirewallRuleSpec, DpError> {
    Ok(FirewallRuleSpec {
        direction: "ingress".parse()?,
        action: action.parse()?,
        priority: 100,
        source_prefix: "0.0.0.0/0".parse().unwrap(),
        destination_prefix: "0.0.0.0/0".parse().unwrap(),
        protocol_filter: None,
    })
}

#[tokio::test]
async fn test_firewall_action_spellings() {
    let (mock, client) = setup();
    for spelling in ["ALLOW", "1"] {
        let spec = rule(spelling).unwrap();
        assert_eq!(spec.action, FirewallAction::Accept);
        assert_eq!(spec.direction, TrafficDirection::Ingress);
        let record = client
            .create_firewall_rule("vm1", "fw1", spec, None)
            .await
            .unwrap();
        assert_eq!(record.spec.unwrap().action.to_string(), "Accept");
    }
    let requests = mock.requests::<proto::CreateFirewallRuleRequest>("create_firewall_rule");
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert_eq!(
        requests[0].rule.as_ref().unwrap().action,
        i32::from(proto::FirewallAction::Accept)
    );

    let error = rule("maybe").unwrap_err();
    assert!(matches!(error, DpError::InvalidArgument(_)));
    assert_eq!(mock.calls().len(), 2);
}

#[tokio::test]
async fn test_get_firewall_rule() {
    let (mock, client) = setup();
    let spec = rule("drop").unwrap();
    let request = api::converters::firewall::create_request(
        &api::firewall::FirewallRuleMeta {
            interface_id: "vm1".to_owned(),
            rule_id: "fw2".to_owned(),
        },
        &spec,
    );
    mock.reply(
        "get_firewall_rule",
        proto::GetFirewallRuleResponse {
            status: None,
            rule: request.rule,
        },
    );
    let record = client.get_firewall_rule("vm1", "fw2", None).await.unwrap();
    assert_eq!(record.meta.rule_id, "fw2");
    assert_eq!(record.spec, Some(spec));

    // a successful reply without the rule
    let error = client
        .get_firewall_rule("vm1", "fw2", None)
        .await
        .unwrap_err();
    assert!(matches!(
        error.error(),
        DpError::Format(api::FormatError::Missing("firewall rule"))
    ));
    assert_eq!(error.record().unwrap().meta.rule_id, "fw2");
}

/* service state */

#[tokio::test]
async fn test_get_version_reports_client() {
    let mock = Arc::new(MockTransport::new());
    let config = ClientConfigBuilder::default()
        .client_name("metalnet")
        .client_version("0.3.1")
        .build()
        .unwrap();
    let client = Client::with_config(mock.clone(), config);
    mock.reply(
        "get_version",
        proto::GetVersionResponse {
            status: None,
            service_protocol: "v0.1.0".to_owned(),
            service_version: "v1.2.3".to_owned(),
        },
    );
    let version = client.get_version(None).await.unwrap();
    assert_eq!(version.meta.client_name, "metalnet");
    assert_eq!(version.meta.client_version, "0.3.1");
    assert_eq!(version.meta.client_protocol, proto::PROTOCOL_VERSION);
    assert_eq!(version.spec.unwrap().service_version, "v1.2.3");

    let request = mock
        .requests::<proto::GetVersionRequest>("get_version")
        .remove(0);
    assert_eq!(request.client_name, "metalnet");
    assert_eq!(request.client_protocol, proto::PROTOCOL_VERSION);
}

#[tokio::test]
async fn test_vni_in_use() {
    let (mock, client) = setup();
    mock.reply(
        "check_vni_in_use",
        proto::CheckVniInUseResponse {
            status: None,
            in_use: true,
        },
    );
    let vni = client
        .check_vni_in_use(100, VniType::Both, None)
        .await
        .unwrap();
    assert_eq!(vni.meta.vni, 100);
    assert!(vni.spec.unwrap().in_use);
    let request = mock
        .requests::<proto::CheckVniInUseRequest>("check_vni_in_use")
        .remove(0);
    assert_eq!(request.vni_type, i32::from(proto::VniType::VniBoth));

    mock.reply(
        "check_vni_in_use",
        proto::CheckVniInUseResponse {
            status: status(codes::NO_VNI, "unknown vni"),
            in_use: false,
        },
    );
    let error = client
        .check_vni_in_use(101, VniType::Ipv4, None)
        .await
        .unwrap_err();
    let vni = error.into_record().unwrap();
    assert_eq!(vni.meta.vni, 101);
    assert_eq!(vni.spec, None);
}

#[tokio::test]
async fn test_initialize() {
    let (mock, client) = setup();
    mock.reply(
        "initialize",
        proto::InitializeResponse {
            status: None,
            uuid: "2c5b7a9e-2d7e-4a36-9a2c-2f3c6d1e8b10".to_owned(),
        },
    );
    let initialized = client.initialize(None).await.unwrap();
    assert_eq!(
        initialized.spec.unwrap().uuid,
        "2c5b7a9e-2d7e-4a36-9a2c-2f3c6d1e8b10"
    );
    let checked = client.check_initialized(None).await.unwrap();
    assert_eq!(checked.spec.unwrap().uuid, "");
    assert_eq!(mock.calls(), vec!["initialize", "check_initialized"]);
}
