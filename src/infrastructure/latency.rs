//! Per-operation artificial delay

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Store operation kinds that can be delayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    pub fn from_name(name: &str) -> Option<Operation> {
        Operation::ALL.into_iter().find(|op| op.name() == name)
    }
}

/// Milliseconds to wait before each operation. Zero everywhere by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Latency {
    pub list_ms: u64,
    pub get_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
}

impl Latency {
    pub const NONE: Latency = Latency {
        list_ms: 0,
        get_ms: 0,
        create_ms: 0,
        update_ms: 0,
        delete_ms: 0,
    };

    /// Round-trip times of a slow backend, for demos
    pub fn simulated() -> Self {
        Latency {
            list_ms: 500,
            get_ms: 300,
            create_ms: 700,
            update_ms: 600,
            delete_ms: 500,
        }
    }

    pub fn millis(&self, op: Operation) -> u64 {
        match op {
            Operation::List => self.list_ms,
            Operation::Get => self.get_ms,
            Operation::Create => self.create_ms,
            Operation::Update => self.update_ms,
            Operation::Delete => self.delete_ms,
        }
    }

    pub fn set_millis(&mut self, op: Operation, ms: u64) {
        let slot = match op {
            Operation::List => &mut self.list_ms,
            Operation::Get => &mut self.get_ms,
            Operation::Create => &mut self.create_ms,
            Operation::Update => &mut self.update_ms,
            Operation::Delete => &mut self.delete_ms,
        };
        *slot = ms;
    }

    /// Block the current thread for the configured delay of `op`
    pub fn pause(&self, op: Operation) {
        let ms = self.millis(op);
        if ms > 0 {
            tracing::trace!(operation = op.name(), ms, "simulated latency");
            std::thread::sleep(Duration::from_millis(ms));
        }
    }
}
