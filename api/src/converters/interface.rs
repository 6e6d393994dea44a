// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use std::net::{Ipv4Addr, Ipv6Addr};

use super::address::{id_from_wire, id_to_wire, optional_underlay_from_wire, underlay_from_wire};
use crate::FormatError;
use crate::Status;
use crate::interface::{Interface, InterfaceMeta, InterfaceSpec, VirtualFunction};

impl From<&proto::VirtualFunction> for VirtualFunction {
    fn from(vf: &proto::VirtualFunction) -> Self {
        VirtualFunction {
            name: vf.name.clone(),
            domain: vf.domain,
            bus: vf.bus,
            slot: vf.slot,
            function: vf.function,
        }
    }
}

fn ip_config<T: ToString>(addr: Option<T>) -> Option<proto::IpConfig> {
    addr.map(|addr| proto::IpConfig {
        primary_address: addr.to_string().into_bytes(),
    })
}

fn primary_from_wire<T: std::str::FromStr>(
    field: &'static str,
    bytes: &[u8],
) -> Result<Option<T>, FormatError> {
    if bytes.is_empty() {
        return Ok(None);
    }
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|text| text.parse().ok())
        .map(Some)
        .ok_or_else(|| FormatError::BadAddress {
            field,
            value: String::from_utf8_lossy(bytes).into_owned(),
        })
}

/// Interfaces are always plugged as virtual interfaces. The PXE configuration is only sent when
/// it names both a server and a boot file.
pub fn create_request(meta: &InterfaceMeta, spec: &InterfaceSpec) -> proto::CreateInterfaceRequest {
    let pxe_config = spec
        .pxe
        .as_ref()
        .filter(|pxe| !pxe.server.is_empty() && !pxe.file_name.is_empty())
        .map(|pxe| proto::PxeConfig {
            next_server: pxe.server.clone(),
            boot_filename: pxe.file_name.clone(),
        });
    proto::CreateInterfaceRequest {
        interface_type: proto::InterfaceType::Virtual.into(),
        interface_id: id_to_wire(&meta.id),
        vni: spec.vni,
        ipv4_config: ip_config(spec.ipv4),
        ipv6_config: ip_config(spec.ipv6),
        device_name: spec.device.clone(),
        pxe_config,
    }
}

/// Fill in the fields the dataplane assigned to a newly created interface. On error the
/// underlay route is left unset; everything else is kept.
pub fn complete_create(
    spec: &mut InterfaceSpec,
    response: &proto::CreateInterfaceResponse,
) -> Result<(), FormatError> {
    spec.virtual_function = response.vf.as_ref().map(VirtualFunction::from);
    spec.underlay_route = Some(underlay_from_wire(&response.underlay_route)?);
    Ok(())
}

pub fn get_request(meta: &InterfaceMeta) -> proto::GetInterfaceRequest {
    proto::GetInterfaceRequest {
        interface_id: id_to_wire(&meta.id),
    }
}

pub fn delete_request(meta: &InterfaceMeta) -> proto::DeleteInterfaceRequest {
    proto::DeleteInterfaceRequest {
        interface_id: id_to_wire(&meta.id),
    }
}

/// Decodes the caller-visible fields and the virtual function; the underlay route is left to
/// [`complete_get`].
impl TryFrom<&proto::Interface> for InterfaceSpec {
    type Error = FormatError;

    fn try_from(iface: &proto::Interface) -> Result<Self, Self::Error> {
        Ok(InterfaceSpec {
            vni: iface.vni,
            device: String::new(),
            ipv4: primary_from_wire::<Ipv4Addr>("primary IPv4", &iface.primary_ipv4)?,
            ipv6: primary_from_wire::<Ipv6Addr>("primary IPv6", &iface.primary_ipv6)?,
            pxe: None,
            underlay_route: None,
            virtual_function: iface.vf.as_ref().map(VirtualFunction::from),
        })
    }
}

pub fn complete_get(
    spec: &mut InterfaceSpec,
    iface: &proto::Interface,
) -> Result<(), FormatError> {
    spec.underlay_route = optional_underlay_from_wire(&iface.underlay_route)?;
    Ok(())
}

/// Listed interfaces carry their own identity.
impl TryFrom<&proto::Interface> for Interface {
    type Error = FormatError;

    fn try_from(iface: &proto::Interface) -> Result<Self, Self::Error> {
        let mut spec = InterfaceSpec::try_from(iface)?;
        complete_get(&mut spec, iface)?;
        Ok(Interface {
            meta: InterfaceMeta {
                id: id_from_wire("interface id", &iface.id)?,
            },
            spec: Some(spec),
            status: Status::default(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interface::Pxe;
    use pretty_assertions::assert_eq;

    fn spec() -> InterfaceSpec {
        InterfaceSpec {
            vni: 100,
            device: "net_tap2".to_owned(),
            ipv4: Some(Ipv4Addr::new(10, 200, 1, 4)),
            ipv6: Some("2000:200:1::4".parse().unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_request() {
        let meta = InterfaceMeta {
            id: "vm1".to_owned(),
        };
        let request = create_request(&meta, &spec());
        assert_eq!(request.interface_type, i32::from(proto::InterfaceType::Virtual));
        assert_eq!(request.interface_id, b"vm1".to_vec());
        assert_eq!(request.vni, 100);
        assert_eq!(
            request.ipv4_config.unwrap().primary_address,
            b"10.200.1.4".to_vec()
        );
        assert_eq!(
            request.ipv6_config.unwrap().primary_address,
            b"2000:200:1::4".to_vec()
        );
        assert_eq!(request.device_name, "net_tap2");
        assert_eq!(request.pxe_config, None);
    }

    #[test]
    fn test_partial_pxe_config_is_not_sent() {
        let meta = InterfaceMeta::default();
        let mut spec = spec();
        spec.pxe = Some(Pxe {
            server: "192.168.129.1".to_owned(),
            file_name: String::new(),
        });
        assert_eq!(create_request(&meta, &spec).pxe_config, None);

        spec.pxe = Some(Pxe {
            server: "192.168.129.1".to_owned(),
            file_name: "/ipxe/boot6".to_owned(),
        });
        let pxe = create_request(&meta, &spec).pxe_config.unwrap();
        assert_eq!(pxe.next_server, "192.168.129.1");
        assert_eq!(pxe.boot_filename, "/ipxe/boot6");
    }

    #[test]
    fn test_complete_create_keeps_fields_on_bad_underlay() {
        let mut spec = spec();
        let response = proto::CreateInterfaceResponse {
            status: None,
            underlay_route: b"garbage".to_vec(),
            vf: Some(proto::VirtualFunction {
                name: "vf0".to_owned(),
                domain: 0,
                bus: 3,
                slot: 0,
                function: 2,
            }),
        };
        assert!(complete_create(&mut spec, &response).is_err());
        assert_eq!(spec.underlay_route, None);
        assert_eq!(spec.virtual_function.as_ref().unwrap().name, "vf0");
        assert_eq!(spec.vni, 100);
    }

    #[test]
    fn test_listed_interface() {
        let wire = proto::Interface {
            id: b"vm2".to_vec(),
            vni: 200,
            primary_ipv4: b"10.0.0.2".to_vec(),
            primary_ipv6: Vec::new(),
            underlay_route: b"fc00::2".to_vec(),
            vf: None,
        };
        let iface = Interface::try_from(&wire).unwrap();
        assert_eq!(iface.meta.id, "vm2");
        let spec = iface.spec.unwrap();
        assert_eq!(spec.ipv4, Some(Ipv4Addr::new(10, 0, 0, 2)));
        assert_eq!(spec.ipv6, None);
        assert_eq!(spec.underlay_route, Some("fc00::2".parse().unwrap()));

        let wire = proto::Interface {
            primary_ipv4: b"fc00::2".to_vec(),
            ..wire
        };
        assert!(matches!(
            Interface::try_from(&wire),
            Err(FormatError::BadAddress { field: "primary IPv4", .. })
        ));
    }
}
