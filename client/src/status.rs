// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Classification of the status codes reported by the dataplane.

use std::collections::BTreeSet;

use api::Status;

/// Status codes reported by the dataplane.
pub mod codes {
    pub const BAD_REQUEST: u32 = 101;
    pub const NOT_FOUND: u32 = 201;
    pub const ALREADY_EXISTS: u32 = 202;
    pub const WRONG_TYPE: u32 = 203;
    pub const BAD_IPVER: u32 = 204;
    pub const NO_VM: u32 = 205;
    pub const NO_VNI: u32 = 206;
    pub const ITERATOR: u32 = 207;
    pub const OUT_OF_MEMORY: u32 = 208;
    pub const LIMIT_REACHED: u32 = 209;
    pub const ALREADY_ACTIVE: u32 = 210;
    pub const NO_BACKIP: u32 = 211;
    pub const NO_LB: u32 = 212;
    pub const NO_DROP_SUPPORT: u32 = 213;
}

/// The status codes a caller expects from a call and does not want reported as errors, such as
/// [`codes::ALREADY_EXISTS`] on a create or [`codes::NOT_FOUND`] on a delete.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnoredCodes(BTreeSet<u32>);

impl IgnoredCodes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    pub fn insert(&mut self, code: u32) -> bool {
        self.0.insert(code)
    }
    #[must_use]
    pub fn contains(&self, code: u32) -> bool {
        self.0.contains(&code)
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u32> for IgnoredCodes {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[u32; N]> for IgnoredCodes {
    fn from(codes: [u32; N]) -> Self {
        codes.into_iter().collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The operation failed with a code the caller chose to ignore
    Suppressed,
    Failure { code: u32, message: String },
}

/// Decide how the status of a reply is reported. Code 0 is a success whatever is ignored.
#[must_use]
pub fn classify(status: &Status, ignored: Option<&IgnoredCodes>) -> Outcome {
    if status.is_success() {
        Outcome::Success
    } else if ignored.is_some_and(|ignored| ignored.contains(status.code)) {
        Outcome::Suppressed
    } else {
        Outcome::Failure {
            code: status.code,
            message: status.message.clone(),
        }
    }
}
