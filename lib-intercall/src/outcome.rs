//! Executor call outcomes
//!
//! The executor reports a raw `(status, step_used, result)` triple. The
//! bridge turns it into a [`CallStatus`] so that the success / base-layer /
//! callee split is decided in one place.

use crate::errors::InterCallError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status codes reported by the executor
///
/// Codes below [`SCORE_ERROR`] are raised by the platform itself. Codes at or
/// above it carry a callee-defined error code offset by [`SCORE_ERROR`].
pub mod status {
    pub const SUCCESS: u32 = 0;
    pub const UNKNOWN_FAILURE: u32 = 1;
    pub const CONTRACT_NOT_FOUND: u32 = 2;
    pub const METHOD_NOT_FOUND: u32 = 3;
    pub const METHOD_NOT_PAYABLE: u32 = 4;
    pub const ILLEGAL_FORMAT: u32 = 5;
    pub const INVALID_PARAMETER: u32 = 6;
    pub const INVALID_INSTANCE: u32 = 7;
    pub const INVALID_CONTAINER_ACCESS: u32 = 8;
    pub const ACCESS_DENIED: u32 = 9;
    pub const OUT_OF_STEP: u32 = 10;
    pub const OUT_OF_BALANCE: u32 = 11;
    pub const TIMEOUT: u32 = 12;
    pub const STACK_OVERFLOW: u32 = 13;
    pub const SKIP_TRANSACTION: u32 = 14;
    pub const INVALID_PACKAGE: u32 = 15;

    /// First status code owned by callee contract logic
    pub const SCORE_ERROR: u32 = 32;
}

/// Raw result of one executor call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallOutcome {
    pub status: u32,
    pub step_used: u64,
    /// Return value on success, error payload otherwise
    pub result: Value,
}

/// Classified call outcome
#[derive(Debug, Clone, PartialEq)]
pub enum CallStatus {
    /// Call returned normally
    Success(Value),
    /// Rejected by the platform; `code` is the raw status
    BaseFailure { code: u32, payload: Value },
    /// Failed inside the callee; `code` is relative to the threshold
    CalleeFailure { code: u32, payload: Value },
}

impl CallOutcome {
    pub fn new(status: u32, step_used: u64, result: Value) -> Self {
        Self {
            status,
            step_used,
            result,
        }
    }

    pub fn success(step_used: u64, result: Value) -> Self {
        Self::new(status::SUCCESS, step_used, result)
    }

    pub fn is_success(&self) -> bool {
        self.status == status::SUCCESS
    }

    /// Split the status space at `score_error_threshold`
    pub fn classify(self, score_error_threshold: u32) -> CallStatus {
        match self.status {
            status::SUCCESS => CallStatus::Success(self.result),
            code if code < score_error_threshold => CallStatus::BaseFailure {
                code,
                payload: self.result,
            },
            code => CallStatus::CalleeFailure {
                code: code - score_error_threshold,
                payload: self.result,
            },
        }
    }
}

impl CallStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, CallStatus::Success(_))
    }

    /// Return value on success, the matching [`InterCallError`] otherwise
    pub fn into_result(self) -> Result<Value, InterCallError> {
        match self {
            CallStatus::Success(value) => Ok(value),
            CallStatus::BaseFailure { code, payload } => {
                Err(InterCallError::Base { code, payload })
            }
            CallStatus::CalleeFailure { code, payload } => {
                Err(InterCallError::Score { code, payload })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_success() {
        let outcome = CallOutcome::success(40, json!("ok"));
        assert!(outcome.is_success());
        assert_eq!(outcome.classify(status::SCORE_ERROR), CallStatus::Success(json!("ok")));
    }

    #[test]
    fn test_classify_base_failure_keeps_raw_code() {
        let outcome = CallOutcome::new(500, 10, json!("insufficient balance"));
        assert_eq!(
            outcome.classify(1000),
            CallStatus::BaseFailure {
                code: 500,
                payload: json!("insufficient balance")
            }
        );
    }

    #[test]
    fn test_classify_callee_failure_is_offset() {
        let outcome = CallOutcome::new(1005, 10, json!("revert: bad input"));
        assert_eq!(
            outcome.classify(1000),
            CallStatus::CalleeFailure {
                code: 5,
                payload: json!("revert: bad input")
            }
        );
    }

    #[test]
    fn test_classify_threshold_boundary() {
        let at = CallOutcome::new(status::SCORE_ERROR, 0, Value::Null);
        assert_eq!(
            at.classify(status::SCORE_ERROR),
            CallStatus::CalleeFailure {
                code: 0,
                payload: Value::Null
            }
        );

        let below = CallOutcome::new(status::SCORE_ERROR - 1, 0, Value::Null);
        assert!(matches!(
            below.classify(status::SCORE_ERROR),
            CallStatus::BaseFailure { code: 31, .. }
        ));
    }

    #[test]
    fn test_classify_out_of_step() {
        let outcome = CallOutcome::new(status::OUT_OF_STEP, 100, json!("out of step"));
        let classified = outcome.classify(status::SCORE_ERROR);
        assert!(!classified.is_success());
        assert!(matches!(
            classified,
            CallStatus::BaseFailure {
                code: status::OUT_OF_STEP,
                ..
            }
        ));
    }

    #[test]
    fn test_into_result_maps_each_tier() {
        let ok = CallOutcome::success(1, json!(7)).classify(status::SCORE_ERROR);
        assert_eq!(ok.into_result().unwrap(), json!(7));

        let base = CallOutcome::new(status::OUT_OF_BALANCE, 1, json!("poor"))
            .classify(status::SCORE_ERROR)
            .into_result()
            .unwrap_err();
        assert!(base.is_base());
        assert_eq!(base.code(), Some(status::OUT_OF_BALANCE));

        let callee = CallOutcome::new(status::SCORE_ERROR + 3, 1, json!("x"))
            .classify(status::SCORE_ERROR)
            .into_result()
            .unwrap_err();
        assert!(callee.is_score());
        assert_eq!(callee.code(), Some(3));
        assert_eq!(callee.message(), "x");
    }
}
