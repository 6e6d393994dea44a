// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Errors returned by the client operations.

use std::fmt::{Debug, Display};
use thiserror::Error;

use api::{FormatError, InvalidArgument};

/// Why an operation did not succeed.
#[derive(Debug, Error)]
pub enum DpError {
    /// The remote call itself did not complete
    #[error("Transport failure: {0}")]
    Transport(Box<tonic::Status>),
    /// The dataplane refused the operation
    #[error("[error code {code}] {message}")]
    Status { code: u32, message: String },
    /// The dataplane replied with a value this client cannot represent
    #[error("Bad reply from dataplane: {0}")]
    Format(#[from] FormatError),
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

impl From<tonic::Status> for DpError {
    fn from(status: tonic::Status) -> Self {
        DpError::Transport(Box::new(status))
    }
}

impl DpError {
    /// The dataplane status code, if the dataplane refused the operation.
    #[must_use]
    pub fn status_code(&self) -> Option<u32> {
        match self {
            DpError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the dataplane refused the operation with one of `codes`.
    #[must_use]
    pub fn is_status_code(&self, codes: &[u32]) -> bool {
        self.status_code().is_some_and(|code| codes.contains(&code))
    }
}

/// A failed operation together with the record it produced, if any.
///
/// The record carries at least the identity of the targeted resource and the status reported by
/// the dataplane. There is no record when the call never reached the dataplane, when an argument
/// was rejected before issuing it, or when a listing could not be decoded.
pub struct ClientError<R> {
    record: Option<Box<R>>,
    error: DpError,
}

pub type ClientResult<R> = Result<R, ClientError<R>>;

impl<R> ClientError<R> {
    #[must_use]
    pub fn new(record: Option<R>, error: DpError) -> Self {
        Self {
            record: record.map(Box::new),
            error,
        }
    }
    #[must_use]
    pub fn record(&self) -> Option<&R> {
        self.record.as_deref()
    }
    #[must_use]
    pub fn into_record(self) -> Option<R> {
        self.record.map(|record| *record)
    }
    #[must_use]
    pub fn error(&self) -> &DpError {
        &self.error
    }
    #[must_use]
    pub fn into_error(self) -> DpError {
        self.error
    }

    /// Turn a refusal with one of `codes` into a success, after the fact. Any other failure, or a
    /// refusal that came without a record, is returned unchanged.
    pub fn ignore_codes(self, codes: &[u32]) -> Result<R, Self> {
        match self.record {
            Some(record) if self.error.is_status_code(codes) => Ok(*record),
            record => Err(Self {
                record,
                error: self.error,
            }),
        }
    }
}

impl<R> Debug for ClientError<R>
where
    R: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientError")
            .field("record", &self.record)
            .field("error", &self.error)
            .finish()
    }
}

impl<R> Display for ClientError<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.error, f)
    }
}

impl<R: Debug> std::error::Error for ClientError<R> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.error)
    }
}

/// Failures that leave no record to return.
impl<R> From<DpError> for ClientError<R> {
    fn from(error: DpError) -> Self {
        Self::new(None, error)
    }
}

impl<R> From<ClientError<R>> for DpError {
    fn from(error: ClientError<R>) -> Self {
        error.error
    }
}
