//! Metered inter-contract calls
//!
//! Issues nested calls through the bound executor proxy:
//! - Refuses the call when the budget cannot cover the contract-call price
//! - Grants the callee the caller's remaining step budget
//! - Debits the caller exactly once for the steps the callee reports
//! - Maps the executor status onto [`InterCallError`]
//!
//! An executor that reports more steps than it was granted has broken its
//! contract with the bridge; the caller is charged the full grant and the
//! bridge panics.

use crate::address::Address;
use crate::config::{BridgeConfig, ConfigError};
use crate::context::ExecutionContext;
use crate::errors::InterCallError;
use crate::outcome::status;
use crate::params::CallParams;
use crate::proxy::ExecutorProxy;
use crate::request::CallRequest;
use crate::step::{StepTracker, StepType};
use serde_json::{Map, Value};

const TAG: &str = "intercall";

/// Call bridge bound to one executor proxy
///
/// Holds no per-call state; one instance serves the whole process.
#[derive(Debug)]
pub struct InterCall<P> {
    proxy: P,
    config: BridgeConfig,
}

impl<P: ExecutorProxy> InterCall<P> {
    /// Bind the bridge to `proxy` with the default configuration
    pub fn bind(proxy: P) -> Self {
        Self::bind_unchecked(proxy, BridgeConfig::default())
    }

    /// Bind the bridge to `proxy`, rejecting an invalid `config`
    pub fn bind_with_config(proxy: P, config: BridgeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::bind_unchecked(proxy, config))
    }

    fn bind_unchecked(proxy: P, config: BridgeConfig) -> Self {
        tracing::debug!(
            target: TAG,
            threshold = config.score_error_threshold,
            fallback = %config.fallback_function,
            "Executor proxy bound"
        );
        Self { proxy, config }
    }

    pub fn proxy(&self) -> &P {
        &self.proxy
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Native balance of `address`, straight from the executor
    pub fn get_balance(&self, address: &Address) -> anyhow::Result<u128> {
        self.proxy.get_balance(address)
    }

    /// Call `func_name` on `to` on behalf of `from`
    ///
    /// `None` for `func_name` targets the fallback function. Positional
    /// arguments take precedence over named ones; with neither, the call
    /// carries an empty positional set.
    #[allow(clippy::too_many_arguments)]
    pub fn message_call<S: StepTracker>(
        &self,
        context: &mut ExecutionContext<S>,
        from: Address,
        to: Address,
        amount: u128,
        func_name: Option<&str>,
        arg_params: Option<Vec<Value>>,
        kw_params: Option<Map<String, Value>>,
    ) -> Result<Value, InterCallError> {
        let request = CallRequest::new(from, to, amount)
            .with_function_or(func_name, &self.config.fallback_function)
            .with_params(CallParams::resolve(arg_params, kw_params));
        self.call(context, request)
    }

    /// Dispatch an already-normalized call
    ///
    /// Fails with an `OUT_OF_STEP` base error, without dispatching or
    /// charging, when the remaining budget is below the contract-call price.
    ///
    /// # Panics
    /// Panics if the executor reports using more steps than it was granted,
    /// after charging the caller the full grant.
    pub fn call<S: StepTracker>(
        &self,
        context: &mut ExecutionContext<S>,
        request: CallRequest,
    ) -> Result<Value, InterCallError> {
        tracing::info!(
            target: TAG,
            from = %request.from,
            to = %request.to,
            amount = %request.amount,
            func_name = %request.func_name,
            "[InterCall] dispatch"
        );
        if self.config.trace_params {
            tracing::debug!(target: TAG, params = ?request.params, "[InterCall] params");
        }

        let limit = match context.step_counter.check_step_remained(StepType::ContractCall) {
            Ok(remaining) => remaining,
            Err(e) => {
                tracing::warn!(target: TAG, to = %request.to, "[InterCall] {}", e);
                return Err(InterCallError::Base {
                    code: status::OUT_OF_STEP,
                    payload: Value::String(e.to_string()),
                });
            }
        };
        tracing::debug!(target: TAG, limit, "[InterCall] step limit");

        let outcome = self.proxy.call(
            &request.to,
            request.amount,
            limit,
            &request.func_name,
            &request.params,
        )?;
        tracing::info!(
            target: TAG,
            status = outcome.status,
            step_used = outcome.step_used,
            result = %outcome.result,
            "[InterCall] result"
        );

        if outcome.step_used > limit {
            context.step_counter.debit(limit);
            tracing::error!(
                target: TAG,
                step_used = outcome.step_used,
                limit,
                to = %request.to,
                "[InterCall] executor exceeded step limit"
            );
            panic!(
                "used step must not exceed the granted limit: used={}, limit={}",
                outcome.step_used, limit
            );
        }
        context.step_counter.debit(outcome.step_used);

        outcome
            .classify(self.config.score_error_threshold)
            .into_result()
    }
}
