//! Shared fixtures for call bridge integration tests

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use lib_intercall::{Address, CallOutcome, CallParams, ExecutorProxy, StepTracker};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// One call as seen by the executor
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchedCall {
    pub to: Address,
    pub amount: u128,
    pub limit: u64,
    pub func_name: String,
    pub params: CallParams,
}

/// Executor that replays scripted outcomes in order
#[derive(Default)]
pub struct MockExecutor {
    outcomes: RefCell<VecDeque<CallOutcome>>,
    balances: HashMap<Address, u128>,
    pub dispatched: RefCell<Vec<DispatchedCall>>,
    pub balance_lookups: RefCell<usize>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(self, outcome: CallOutcome) -> Self {
        self.outcomes.borrow_mut().push_back(outcome);
        self
    }

    pub fn with_balance(mut self, address: Address, balance: u128) -> Self {
        self.balances.insert(address, balance);
        self
    }

    pub fn last_call(&self) -> Option<DispatchedCall> {
        self.dispatched.borrow().last().cloned()
    }
}

impl ExecutorProxy for MockExecutor {
    fn get_balance(&self, address: &Address) -> Result<u128> {
        *self.balance_lookups.borrow_mut() += 1;
        self.balances
            .get(address)
            .copied()
            .ok_or_else(|| anyhow!("unknown account {}", address))
    }

    fn call(
        &self,
        to: &Address,
        amount: u128,
        limit: u64,
        func_name: &str,
        params: &CallParams,
    ) -> Result<CallOutcome> {
        self.dispatched.borrow_mut().push(DispatchedCall {
            to: *to,
            amount,
            limit,
            func_name: func_name.to_string(),
            params: params.clone(),
        });
        self.outcomes
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted outcome for {}", func_name))
    }
}

/// Step tracker that records every debit
#[derive(Debug, Default)]
pub struct RecordingTracker {
    pub remaining: u64,
    pub debits: Vec<u64>,
}

impl RecordingTracker {
    pub fn with_remaining(remaining: u64) -> Self {
        Self {
            remaining,
            ..Default::default()
        }
    }
}

impl StepTracker for RecordingTracker {
    fn remaining(&self) -> u64 {
        self.remaining
    }

    fn debit(&mut self, amount: u64) {
        self.debits.push(amount);
        self.remaining = self.remaining.saturating_sub(amount);
    }
}

pub fn contract(id: u8) -> Address {
    Address::contract([id; 20])
}

pub fn account(id: u8) -> Address {
    Address::eoa([id; 20])
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
