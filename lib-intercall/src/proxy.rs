//! Executor proxy interface
//!
//! The proxy performs the actual cross-contract invocation and balance
//! lookups on behalf of the bridge. How it reaches the executor is its own
//! business.

use crate::address::Address;
use crate::outcome::CallOutcome;
use crate::params::CallParams;
use anyhow::Result;
use std::sync::Arc;

/// Remote executor used by [`crate::InterCall`]
pub trait ExecutorProxy {
    /// Native balance held by `address`
    fn get_balance(&self, address: &Address) -> Result<u128>;

    /// Invoke `func_name` on `to`, spending at most `limit` steps
    fn call(
        &self,
        to: &Address,
        amount: u128,
        limit: u64,
        func_name: &str,
        params: &CallParams,
    ) -> Result<CallOutcome>;
}

impl<P: ExecutorProxy + ?Sized> ExecutorProxy for &P {
    fn get_balance(&self, address: &Address) -> Result<u128> {
        (**self).get_balance(address)
    }

    fn call(
        &self,
        to: &Address,
        amount: u128,
        limit: u64,
        func_name: &str,
        params: &CallParams,
    ) -> Result<CallOutcome> {
        (**self).call(to, amount, limit, func_name, params)
    }
}

impl<P: ExecutorProxy + ?Sized> ExecutorProxy for Box<P> {
    fn get_balance(&self, address: &Address) -> Result<u128> {
        (**self).get_balance(address)
    }

    fn call(
        &self,
        to: &Address,
        amount: u128,
        limit: u64,
        func_name: &str,
        params: &CallParams,
    ) -> Result<CallOutcome> {
        (**self).call(to, amount, limit, func_name, params)
    }
}

impl<P: ExecutorProxy + ?Sized> ExecutorProxy for Arc<P> {
    fn get_balance(&self, address: &Address) -> Result<u128> {
        (**self).get_balance(address)
    }

    fn call(
        &self,
        to: &Address,
        amount: u128,
        limit: u64,
        func_name: &str,
        params: &CallParams,
    ) -> Result<CallOutcome> {
        (**self).call(to, amount, limit, func_name, params)
    }
}
