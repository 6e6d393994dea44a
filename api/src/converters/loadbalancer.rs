// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use super::address::{
    addr_from_wire, addr_to_wire, enum_from_wire, id_to_wire, optional_underlay_from_wire,
    prefix_from_wire, prefix_to_wire, required_addr_from_wire, underlay_from_wire,
};
use crate::loadbalancer::{
    LbPort, LoadBalancerMeta, LoadBalancerPrefix, LoadBalancerPrefixMeta, LoadBalancerPrefixSpec,
    LoadBalancerSpec, LoadBalancerTarget, LoadBalancerTargetListMeta, LoadBalancerTargetMeta,
    Protocol,
};
use crate::prefix::PrefixListMeta;
use crate::{FormatError, Status};

impl From<Protocol> for proto::Protocol {
    fn from(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Undefined => proto::Protocol::Undefined,
            Protocol::Icmp => proto::Protocol::Icmp,
            Protocol::Tcp => proto::Protocol::Tcp,
            Protocol::Udp => proto::Protocol::Udp,
            Protocol::Icmpv6 => proto::Protocol::Icmpv6,
        }
    }
}

impl From<proto::Protocol> for Protocol {
    fn from(protocol: proto::Protocol) -> Self {
        match protocol {
            proto::Protocol::Undefined => Protocol::Undefined,
            proto::Protocol::Icmp => Protocol::Icmp,
            proto::Protocol::Tcp => Protocol::Tcp,
            proto::Protocol::Udp => Protocol::Udp,
            proto::Protocol::Icmpv6 => Protocol::Icmpv6,
        }
    }
}

impl From<&LbPort> for proto::LbPort {
    fn from(port: &LbPort) -> Self {
        proto::LbPort {
            port: port.port,
            protocol: proto::Protocol::from(port.protocol).into(),
        }
    }
}

impl TryFrom<&proto::LbPort> for LbPort {
    type Error = FormatError;

    fn try_from(port: &proto::LbPort) -> Result<Self, Self::Error> {
        Ok(LbPort {
            protocol: enum_from_wire::<proto::Protocol>("protocol", port.protocol)?.into(),
            port: port.port,
        })
    }
}

/* load balancers */

pub fn create_request(
    meta: &LoadBalancerMeta,
    spec: &LoadBalancerSpec,
) -> proto::CreateLoadBalancerRequest {
    proto::CreateLoadBalancerRequest {
        loadbalancer_id: id_to_wire(&meta.id),
        vni: spec.vni,
        loadbalanced_ip: Some(addr_to_wire(spec.vip)),
        loadbalanced_ports: spec.ports.iter().map(proto::LbPort::from).collect(),
    }
}

pub fn complete_create(
    spec: &mut LoadBalancerSpec,
    response: &proto::CreateLoadBalancerResponse,
) -> Result<(), FormatError> {
    spec.underlay_route = Some(underlay_from_wire(&response.underlay_route)?);
    Ok(())
}

pub fn get_request(meta: &LoadBalancerMeta) -> proto::GetLoadBalancerRequest {
    proto::GetLoadBalancerRequest {
        loadbalancer_id: id_to_wire(&meta.id),
    }
}

pub fn delete_request(meta: &LoadBalancerMeta) -> proto::DeleteLoadBalancerRequest {
    proto::DeleteLoadBalancerRequest {
        loadbalancer_id: id_to_wire(&meta.id),
    }
}

/// Decodes the caller-visible fields; the underlay route is left to [`complete_get`].
impl TryFrom<&proto::GetLoadBalancerResponse> for LoadBalancerSpec {
    type Error = FormatError;

    fn try_from(response: &proto::GetLoadBalancerResponse) -> Result<Self, Self::Error> {
        Ok(LoadBalancerSpec {
            vni: response.vni,
            vip: required_addr_from_wire("load balanced IP", response.loadbalanced_ip.as_ref())?,
            ports: response
                .loadbalanced_ports
                .iter()
                .map(LbPort::try_from)
                .collect::<Result<_, _>>()?,
            underlay_route: None,
        })
    }
}

pub fn complete_get(
    spec: &mut LoadBalancerSpec,
    response: &proto::GetLoadBalancerResponse,
) -> Result<(), FormatError> {
    spec.underlay_route = Some(underlay_from_wire(&response.underlay_route)?);
    Ok(())
}

/* load balancer targets */

pub fn list_targets_request(
    meta: &LoadBalancerTargetListMeta,
) -> proto::ListLoadBalancerTargetsRequest {
    proto::ListLoadBalancerTargetsRequest {
        loadbalancer_id: id_to_wire(&meta.load_balancer_id),
    }
}

pub fn create_target_request(
    meta: &LoadBalancerTargetMeta,
) -> proto::CreateLoadBalancerTargetRequest {
    proto::CreateLoadBalancerTargetRequest {
        loadbalancer_id: id_to_wire(&meta.load_balancer_id),
        target_ip: Some(addr_to_wire(meta.target_ip)),
    }
}

pub fn delete_target_request(
    meta: &LoadBalancerTargetMeta,
) -> proto::DeleteLoadBalancerTargetRequest {
    proto::DeleteLoadBalancerTargetRequest {
        loadbalancer_id: id_to_wire(&meta.load_balancer_id),
        target_ip: Some(addr_to_wire(meta.target_ip)),
    }
}

pub fn target_from_list(
    load_balancer_id: &str,
    target_ip: &proto::IpAddress,
) -> Result<LoadBalancerTarget, FormatError> {
    Ok(LoadBalancerTarget {
        meta: LoadBalancerTargetMeta {
            load_balancer_id: load_balancer_id.to_owned(),
            target_ip: addr_from_wire("target IP", target_ip)?,
        },
        status: Status::default(),
    })
}

/* load balancer prefixes */

pub fn list_prefixes_request(meta: &PrefixListMeta) -> proto::ListLoadBalancerPrefixesRequest {
    proto::ListLoadBalancerPrefixesRequest {
        interface_id: id_to_wire(&meta.interface_id),
    }
}

pub fn create_prefix_request(
    meta: &LoadBalancerPrefixMeta,
) -> proto::CreateLoadBalancerPrefixRequest {
    proto::CreateLoadBalancerPrefixRequest {
        interface_id: id_to_wire(&meta.interface_id),
        prefix: Some(prefix_to_wire(&meta.prefix)),
    }
}

pub fn complete_create_prefix(
    spec: &mut LoadBalancerPrefixSpec,
    response: &proto::CreateLoadBalancerPrefixResponse,
) -> Result<(), FormatError> {
    spec.underlay_route = Some(underlay_from_wire(&response.underlay_route)?);
    Ok(())
}

pub fn delete_prefix_request(
    meta: &LoadBalancerPrefixMeta,
) -> proto::DeleteLoadBalancerPrefixRequest {
    proto::DeleteLoadBalancerPrefixRequest {
        interface_id: id_to_wire(&meta.interface_id),
        prefix: Some(prefix_to_wire(&meta.prefix)),
    }
}

pub fn prefix_from_list(
    interface_id: &str,
    prefix: &proto::Prefix,
) -> Result<LoadBalancerPrefix, FormatError> {
    Ok(LoadBalancerPrefix {
        meta: LoadBalancerPrefixMeta {
            interface_id: interface_id.to_owned(),
            prefix: prefix_from_wire("load balancer prefix", prefix)?,
        },
        spec: Some(LoadBalancerPrefixSpec {
            underlay_route: optional_underlay_from_wire(&prefix.underlay_route)?,
        }),
        status: Status::default(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spec() -> LoadBalancerSpec {
        LoadBalancerSpec {
            vni: 100,
            vip: "10.20.30.40".parse().unwrap(),
            ports: vec![
                LbPort {
                    protocol: Protocol::Tcp,
                    port: 443,
                },
                LbPort {
                    protocol: Protocol::Udp,
                    port: 53,
                },
            ],
            underlay_route: None,
        }
    }

    #[test]
    fn test_load_balancer_round_trip() {
        let meta = LoadBalancerMeta {
            id: "lb1".to_owned(),
        };
        let request = create_request(&meta, &spec());
        assert_eq!(request.loadbalancer_id, b"lb1".to_vec());
        assert_eq!(request.loadbalanced_ports[0].protocol, 6);
        assert_eq!(request.loadbalanced_ports[1].protocol, 17);

        let response = proto::GetLoadBalancerResponse {
            status: None,
            vni: request.vni,
            loadbalanced_ip: request.loadbalanced_ip.clone(),
            loadbalanced_ports: request.loadbalanced_ports.clone(),
            underlay_route: b"fc00::1:1".to_vec(),
        };
        let mut fetched = LoadBalancerSpec::try_from(&response).unwrap();
        assert_eq!(fetched, spec());
        complete_get(&mut fetched, &response).unwrap();
        let mut expected = spec();
        expected.underlay_route = Some("fc00::1:1".parse().unwrap());
        assert_eq!(fetched, expected);

        let response = proto::GetLoadBalancerResponse {
            underlay_route: b"garbage".to_vec(),
            ..response
        };
        let mut fetched = LoadBalancerSpec::try_from(&response).unwrap();
        assert!(complete_get(&mut fetched, &response).is_err());
        assert_eq!(fetched, spec());
    }

    #[test]
    fn test_unknown_port_protocol() {
        let port = proto::LbPort {
            port: 80,
            protocol: 99,
        };
        assert_eq!(
            LbPort::try_from(&port),
            Err(FormatError::UnknownValue {
                what: "protocol",
                value: 99
            })
        );
    }

    #[test]
    fn test_listed_target() {
        let wire = addr_to_wire("fc00::10".parse().unwrap());
        let target = target_from_list("lb1", &wire).unwrap();
        assert_eq!(target.meta.load_balancer_id, "lb1");
        assert_eq!(target.meta.target_ip, "fc00::10".parse::<std::net::IpAddr>().unwrap());
    }
}
