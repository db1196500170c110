//! Step accounting
//!
//! Steps are the metered unit of execution (analogous to gas). A single
//! counter covers the whole execution, including every nested call made
//! through the bridge.

use std::collections::HashMap;
use thiserror::Error;

/// Budget collaborator used by the call bridge
///
/// The bridge checks the contract-call price and reads the remaining budget
/// before dispatch, then debits the consumed amount afterwards.
pub trait StepTracker {
    /// Steps still available to the current execution
    fn remaining(&self) -> u64;

    /// Charge `amount` steps to the current execution
    fn debit(&mut self, amount: u64);

    /// Price of one unit of `step_type`; refunds price at zero
    fn step_cost(&self, _step_type: StepType) -> u64 {
        0
    }

    /// Ensure one unit of `step_type` still fits in the budget
    ///
    /// Charges nothing. Returns the remaining budget on success.
    fn check_step_remained(&self, step_type: StepType) -> Result<u64, StepError> {
        let remaining = self.remaining();
        let requested = self.step_cost(step_type);
        if requested > remaining {
            return Err(StepError::OutOfStep {
                requested,
                remaining,
            });
        }
        Ok(remaining)
    }
}

impl<T: StepTracker + ?Sized> StepTracker for &mut T {
    fn remaining(&self) -> u64 {
        (**self).remaining()
    }

    fn debit(&mut self, amount: u64) {
        (**self).debit(amount)
    }

    fn step_cost(&self, step_type: StepType) -> u64 {
        (**self).step_cost(step_type)
    }
}

/// Kinds of chargeable work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepType {
    Default,
    ContractCall,
    ContractCreate,
    ContractUpdate,
    ContractDestruct,
    ContractSet,
    Get,
    Set,
    Replace,
    Delete,
    Input,
    EventLog,
    ApiCall,
}

impl StepType {
    pub const ALL: [StepType; 13] = [
        StepType::Default,
        StepType::ContractCall,
        StepType::ContractCreate,
        StepType::ContractUpdate,
        StepType::ContractDestruct,
        StepType::ContractSet,
        StepType::Get,
        StepType::Set,
        StepType::Replace,
        StepType::Delete,
        StepType::Input,
        StepType::EventLog,
        StepType::ApiCall,
    ];
}

/// Per-type step prices
///
/// Negative prices are refunds (e.g. deleting storage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCosts {
    costs: HashMap<StepType, i64>,
}

impl StepCosts {
    /// Table with every type priced at zero
    pub fn zero() -> Self {
        Self {
            costs: StepType::ALL.iter().map(|t| (*t, 0)).collect(),
        }
    }

    pub fn with_cost(mut self, step_type: StepType, cost: i64) -> Self {
        self.costs.insert(step_type, cost);
        self
    }

    pub fn cost(&self, step_type: StepType) -> i64 {
        self.costs.get(&step_type).copied().unwrap_or(0)
    }
}

impl Default for StepCosts {
    fn default() -> Self {
        Self::zero()
            .with_cost(StepType::Default, 100_000)
            .with_cost(StepType::ContractCall, 25_000)
            .with_cost(StepType::ContractCreate, 1_000_000_000)
            .with_cost(StepType::ContractUpdate, 1_600_000_000)
            .with_cost(StepType::ContractDestruct, -70_000)
            .with_cost(StepType::ContractSet, 30_000)
            .with_cost(StepType::Get, 0)
            .with_cost(StepType::Set, 320)
            .with_cost(StepType::Replace, 80)
            .with_cost(StepType::Delete, -240)
            .with_cost(StepType::Input, 200)
            .with_cost(StepType::EventLog, 100)
            .with_cost(StepType::ApiCall, 10_000)
    }
}

/// Step accounting errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    #[error("out of step: requested {requested}, remaining {remaining}")]
    OutOfStep { requested: u64, remaining: u64 },
}

/// Step counter for one execution
#[derive(Debug, Clone)]
pub struct StepCounter {
    limit: u64,
    used: u64,
    costs: StepCosts,
}

impl StepCounter {
    /// Create a counter with the default price table
    pub fn new(limit: u64) -> Self {
        Self::with_costs(limit, StepCosts::default())
    }

    pub fn with_costs(limit: u64, costs: StepCosts) -> Self {
        Self {
            limit,
            used: 0,
            costs,
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn used(&self) -> u64 {
        self.used
    }

    pub fn costs(&self) -> &StepCosts {
        &self.costs
    }
}

impl StepTracker for StepCounter {
    fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.used)
    }

    fn debit(&mut self, amount: u64) {
        self.used = self.used.saturating_add(amount);
    }

    fn step_cost(&self, step_type: StepType) -> u64 {
        u64::try_from(self.costs.cost(step_type)).unwrap_or(0)
    }
}
