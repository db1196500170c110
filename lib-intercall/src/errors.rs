//! Inter-contract call error types
//!
//! Failed nested calls surface as one of two classified variants, so the
//! calling contract can tell a platform rejection from a failure inside the
//! callee's own logic. Executor faults pass through untouched.

use crate::outcome::status;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Named platform failure codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseErrorKind {
    UnknownFailure,
    ContractNotFound,
    MethodNotFound,
    MethodNotPayable,
    IllegalFormat,
    InvalidParameter,
    InvalidInstance,
    InvalidContainerAccess,
    AccessDenied,
    OutOfStep,
    OutOfBalance,
    Timeout,
    StackOverflow,
    SkipTransaction,
    InvalidPackage,
    /// Code with no assigned name
    Other(u32),
}

impl BaseErrorKind {
    pub fn from_code(code: u32) -> Self {
        match code {
            status::UNKNOWN_FAILURE => Self::UnknownFailure,
            status::CONTRACT_NOT_FOUND => Self::ContractNotFound,
            status::METHOD_NOT_FOUND => Self::MethodNotFound,
            status::METHOD_NOT_PAYABLE => Self::MethodNotPayable,
            status::ILLEGAL_FORMAT => Self::IllegalFormat,
            status::INVALID_PARAMETER => Self::InvalidParameter,
            status::INVALID_INSTANCE => Self::InvalidInstance,
            status::INVALID_CONTAINER_ACCESS => Self::InvalidContainerAccess,
            status::ACCESS_DENIED => Self::AccessDenied,
            status::OUT_OF_STEP => Self::OutOfStep,
            status::OUT_OF_BALANCE => Self::OutOfBalance,
            status::TIMEOUT => Self::Timeout,
            status::STACK_OVERFLOW => Self::StackOverflow,
            status::SKIP_TRANSACTION => Self::SkipTransaction,
            status::INVALID_PACKAGE => Self::InvalidPackage,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for BaseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFailure => write!(f, "UnknownFailure"),
            Self::ContractNotFound => write!(f, "ContractNotFound"),
            Self::MethodNotFound => write!(f, "MethodNotFound"),
            Self::MethodNotPayable => write!(f, "MethodNotPayable"),
            Self::IllegalFormat => write!(f, "IllegalFormat"),
            Self::InvalidParameter => write!(f, "InvalidParameter"),
            Self::InvalidInstance => write!(f, "InvalidInstance"),
            Self::InvalidContainerAccess => write!(f, "InvalidContainerAccess"),
            Self::AccessDenied => write!(f, "AccessDenied"),
            Self::OutOfStep => write!(f, "OutOfStep"),
            Self::OutOfBalance => write!(f, "OutOfBalance"),
            Self::Timeout => write!(f, "Timeout"),
            Self::StackOverflow => write!(f, "StackOverflow"),
            Self::SkipTransaction => write!(f, "SkipTransaction"),
            Self::InvalidPackage => write!(f, "InvalidPackage"),
            Self::Other(code) => write!(f, "Status({})", code),
        }
    }
}

/// Error from a nested contract call
#[derive(Debug, Error)]
pub enum InterCallError {
    /// The platform rejected the call; `code` is the raw executor status
    #[error("call rejected by platform: {} (code={}): {}", base_kind_of(.code), .code, payload_text(.payload))]
    Base { code: u32, payload: Value },

    /// The callee's own logic failed; `code` is relative to `SCORE_ERROR`
    #[error("callee contract failed (code={}): {}", .code, payload_text(.payload))]
    Score { code: u32, payload: Value },

    /// The executor itself failed before producing an outcome
    #[error(transparent)]
    Executor(#[from] anyhow::Error),
}

impl InterCallError {
    /// Machine-readable code, if the failure was classified
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Base { code, .. } | Self::Score { code, .. } => Some(*code),
            Self::Executor(_) => None,
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Base { payload, .. } | Self::Score { payload, .. } => Some(payload),
            Self::Executor(_) => None,
        }
    }

    /// Human-readable message carried by the payload
    pub fn message(&self) -> String {
        match self {
            Self::Base { payload, .. } | Self::Score { payload, .. } => payload_text(payload),
            Self::Executor(e) => e.to_string(),
        }
    }

    pub fn base_kind(&self) -> Option<BaseErrorKind> {
        match self {
            Self::Base { code, .. } => Some(BaseErrorKind::from_code(*code)),
            _ => None,
        }
    }

    pub fn is_base(&self) -> bool {
        matches!(self, Self::Base { .. })
    }

    pub fn is_score(&self) -> bool {
        matches!(self, Self::Score { .. })
    }
}

fn base_kind_of(code: &u32) -> BaseErrorKind {
    BaseErrorKind::from_code(*code)
}

fn payload_text(payload: &Value) -> String {
    match payload {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
