// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Case-insensitive lookup of the names accepted for enumerated values.

pub(crate) fn lookup<T: Copy>(input: &str, spellings: &[(&str, T)]) -> Option<T> {
    spellings
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(input))
        .map(|(_, value)| *value)
}
