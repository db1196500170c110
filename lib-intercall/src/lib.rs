//! Inter-contract call bridge
//!
//! Lets a running SCORE call another SCORE (or read a native balance) through
//! an external executor proxy, while keeping the caller's step budget honest.
//!
//! # Design Principles
//!
//! 1. **Explicit Binding**: the executor proxy is injected once via
//!    [`InterCall::bind`]; there is no process-global state.
//!
//! 2. **Budgeted Calls**: a nested call is granted exactly the caller's
//!    remaining steps, and the caller is debited once for what the callee used.
//!
//! 3. **Typed Failures**: the executor's status space is split at the
//!    `SCORE_ERROR` threshold into base-layer and callee-logic failures,
//!    surfaced as [`InterCallError`] variants.
//!
//! 4. **Broken Executors Abort**: an executor that reports spending more
//!    steps than it was granted triggers a panic, never an `Err`.
//!
//! # Example
//!
//! ```text
//! let bridge = InterCall::bind(proxy);
//! let ret = bridge.message_call(&mut ctx, from, to, 0, Some("transfer"), Some(args), None)?;
//! ```

pub mod address;
pub mod bridge;
pub mod config;
pub mod context;
pub mod errors;
pub mod outcome;
pub mod params;
pub mod proxy;
pub mod request;
pub mod step;

pub use address::{Address, AddressError, AddressKind};
pub use bridge::InterCall;
pub use config::{BridgeConfig, ConfigError};
pub use context::ExecutionContext;
pub use errors::{BaseErrorKind, InterCallError};
pub use outcome::{status, CallOutcome, CallStatus};
pub use params::CallParams;
pub use proxy::ExecutorProxy;
pub use request::{CallRequest, FALLBACK_FUNCTION};
pub use step::{StepCosts, StepCounter, StepError, StepTracker, StepType};
