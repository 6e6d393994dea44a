// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Value codec: addresses, prefixes, underlay routes, identifiers and statuses.
//!
//! Addresses travel as the bytes of their textual form. Nothing is normalized on the way in or
//! out: a prefix keeps its host bits and an address keeps its family.

use ipnet::IpNet;
use std::net::IpAddr;
use std::str::FromStr;

use crate::{FormatError, Status};

pub fn addr_to_wire(addr: IpAddr) -> proto::IpAddress {
    let ipver = match addr {
        IpAddr::V4(_) => proto::IpVersion::Ipv4,
        IpAddr::V6(_) => proto::IpVersion::Ipv6,
    };
    proto::IpAddress {
        ipver: ipver.into(),
        address: addr.to_string().into_bytes(),
    }
}

fn parse_addr(field: &'static str, bytes: &[u8]) -> Result<IpAddr, FormatError> {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|text| IpAddr::from_str(text).ok())
        .ok_or_else(|| FormatError::BadAddress {
            field,
            value: String::from_utf8_lossy(bytes).into_owned(),
        })
}

pub fn addr_from_wire(field: &'static str, addr: &proto::IpAddress) -> Result<IpAddr, FormatError> {
    parse_addr(field, &addr.address)
}

/// Like [`addr_from_wire`], for message fields that may have been left out.
pub fn required_addr_from_wire(
    field: &'static str,
    addr: Option<&proto::IpAddress>,
) -> Result<IpAddr, FormatError> {
    addr_from_wire(field, addr.ok_or(FormatError::Missing(field))?)
}

pub fn prefix_to_wire(prefix: &IpNet) -> proto::Prefix {
    proto::Prefix {
        ip: Some(addr_to_wire(prefix.addr())),
        length: u32::from(prefix.prefix_len()),
        underlay_route: Vec::new(),
    }
}

pub fn prefix_from_wire(field: &'static str, prefix: &proto::Prefix) -> Result<IpNet, FormatError> {
    let addr = required_addr_from_wire(field, prefix.ip.as_ref())?;
    let bad_length = FormatError::BadPrefixLength {
        field,
        addr,
        length: prefix.length,
    };
    let length = u8::try_from(prefix.length).map_err(|_| bad_length.clone())?;
    IpNet::new(addr, length).map_err(|_| bad_length)
}

/// Like [`prefix_from_wire`], for message fields that may have been left out.
pub fn required_prefix_from_wire(
    field: &'static str,
    prefix: Option<&proto::Prefix>,
) -> Result<IpNet, FormatError> {
    prefix_from_wire(field, prefix.ok_or(FormatError::Missing(field))?)
}

pub fn underlay_to_wire(underlay_route: IpAddr) -> Vec<u8> {
    underlay_route.to_string().into_bytes()
}

/// Parse an underlay route assigned by the dataplane. This is the one service-assigned value whose
/// absence on success is an error.
pub fn underlay_from_wire(bytes: &[u8]) -> Result<IpAddr, FormatError> {
    parse_addr("underlay route", bytes)
}

/// Parse an underlay route that the dataplane may leave empty.
pub fn optional_underlay_from_wire(bytes: &[u8]) -> Result<Option<IpAddr>, FormatError> {
    if bytes.is_empty() {
        Ok(None)
    } else {
        underlay_from_wire(bytes).map(Some)
    }
}

pub fn id_to_wire(id: &str) -> Vec<u8> {
    id.as_bytes().to_vec()
}

pub fn id_from_wire(field: &'static str, bytes: &[u8]) -> Result<String, FormatError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| FormatError::NotUtf8(field))
}

/// A reply without a status is treated as successful, the same as a zeroed status.
pub fn status_from_wire(status: Option<&proto::Status>) -> Status {
    status
        .map(|status| Status::new(status.code, status.message.clone()))
        .unwrap_or_default()
}

/// Decode a wire enumeration value, rejecting values this client does not know about.
pub(crate) fn enum_from_wire<T: TryFrom<i32>>(
    what: &'static str,
    value: i32,
) -> Result<T, FormatError> {
    T::try_from(value).map_err(|_| FormatError::UnknownValue { what, value })
}
