// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Failures of the domain model: undecodable remote values and unrecognized caller input.

use std::net::IpAddr;
use thiserror::Error;

/// A value returned by the dataplane that cannot be represented in the domain model.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid {field} '{value}'")]
    BadAddress { field: &'static str, value: String },
    #[error("Invalid prefix length {length} for {field} {addr}")]
    BadPrefixLength {
        field: &'static str,
        addr: IpAddr,
        length: u32,
    },
    #[error("The {0} is not valid UTF-8")]
    NotUtf8(&'static str),
    #[error("Unknown {what} value {value}")]
    UnknownValue { what: &'static str, value: i32 },
    #[error("Missing {0}")]
    Missing(&'static str),
    #[error("NAT entry carries neither an underlay route nor a NAT IP")]
    UndecidableNatEntry,
}

/// A caller-supplied enumerated value that is not one of the recognized spellings.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Invalid {what} '{value}': can be only {expected}")]
pub struct InvalidArgument {
    pub what: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl InvalidArgument {
    pub(crate) fn new(what: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            what,
            value: value.to_owned(),
            expected,
        }
    }
}
