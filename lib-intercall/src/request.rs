//! Nested call representation
//!
//! Captures everything the executor needs for one contract-to-contract
//! invocation: who is calling, who is called, the value moved, the target
//! function and its arguments.

use crate::address::Address;
use crate::params::CallParams;

/// Reserved entry point invoked when no function name is given
pub const FALLBACK_FUNCTION: &str = "fallback";

/// A single nested call
///
/// Built per invocation and dropped once the call returns.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRequest {
    /// Contract issuing the call
    pub from: Address,
    /// Contract or account being called
    pub to: Address,
    /// Native value transferred with the call
    pub amount: u128,
    /// Function to invoke on `to`
    pub func_name: String,
    /// Arguments for `func_name`
    pub params: CallParams,
    /// Set when `func_name` resolved to the fallback in effect at build time
    targets_fallback: bool,
}

impl CallRequest {
    /// Create a call to the fallback function with no arguments
    pub fn new(from: Address, to: Address, amount: u128) -> Self {
        Self {
            from,
            to,
            amount,
            func_name: FALLBACK_FUNCTION.to_string(),
            params: CallParams::default(),
            targets_fallback: true,
        }
    }

    /// Set the target function; `None` keeps the fallback
    pub fn with_function(self, func_name: Option<&str>) -> Self {
        self.with_function_or(func_name, FALLBACK_FUNCTION)
    }

    /// Set the target function, substituting `fallback` for `None`
    ///
    /// `fallback` is remembered as this request's fallback entry point.
    pub fn with_function_or(mut self, func_name: Option<&str>, fallback: &str) -> Self {
        let name = func_name.unwrap_or(fallback);
        self.targets_fallback = name == fallback;
        self.func_name = name.to_string();
        self
    }

    pub fn with_params(mut self, params: CallParams) -> Self {
        self.params = params;
        self
    }

    /// Whether this call targets the fallback entry point it was built with
    pub fn is_fallback(&self) -> bool {
        self.targets_fallback
    }
}
