//! Execution context handed to the call bridge
//!
//! The context belongs to the surrounding runtime; the bridge only reaches
//! into it for the step tracker.

use crate::address::Address;
use crate::step::{StepCounter, StepTracker};

/// State of the execution that is issuing nested calls
#[derive(Debug, Clone)]
pub struct ExecutionContext<S: StepTracker = StepCounter> {
    /// Transaction sender that started this execution
    pub origin: Address,
    /// Block height at execution time
    pub block_height: u64,
    /// Hash of the transaction being executed
    pub tx_hash: [u8; 32],
    /// Step budget shared by the whole execution
    pub step_counter: S,
}

impl<S: StepTracker> ExecutionContext<S> {
    pub fn new(origin: Address, block_height: u64, tx_hash: [u8; 32], step_counter: S) -> Self {
        Self {
            origin,
            block_height,
            tx_hash,
            step_counter,
        }
    }
}

impl ExecutionContext<StepCounter> {
    /// Context with a fresh default-priced counter of `step_limit` steps
    pub fn with_step_limit(
        origin: Address,
        block_height: u64,
        tx_hash: [u8; 32],
        step_limit: u64,
    ) -> Self {
        Self::new(origin, block_height, tx_hash, StepCounter::new(step_limit))
    }
}
