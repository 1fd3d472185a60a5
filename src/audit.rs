//! Audit trail for administrative actions.
//!
//! Payroll generation and overtime rule changes are recorded through an
//! [`AuditSink`]. The default sink emits structured tracing events; the
//! in-memory sink captures events for assertion in tests.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded administrative action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// What happened, e.g. `payroll.generate` or `rule.update`.
    pub action: String,
    /// The affected entity, e.g. `payroll_run:3/2026` or `rule:4`.
    pub entity: String,
    /// The user who performed the action, when known.
    pub actor: Option<i64>,
    /// Entity state before the action, for mutations of existing rows.
    pub before: Option<Value>,
    /// Entity state after the action.
    pub after: Option<Value>,
}

/// Destination for audit events.
pub trait AuditSink: Send + Sync {
    /// Records one event. Sinks must not fail the calling operation.
    fn record(&self, event: AuditEvent);
}

/// Sink that emits each event as a structured tracing record.
#[derive(Debug, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: AuditEvent) {
        tracing::info!(
            action = %event.action,
            entity = %event.entity,
            actor = ?event.actor,
            "audit event"
        );
    }
}

/// Sink that collects events in memory, for tests.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded events in order.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, event: AuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
