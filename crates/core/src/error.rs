//! Domain error model.

use serde::Serialize;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, ValidationError>;

/// A single field-level constraint failure.
///
/// Both sides are `&'static str`: the constraint set is fixed, so every
/// violation message is a compile-time constant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the offending field (as exposed on the wire, e.g. `"price"`).
    pub field: &'static str,
    /// Human-readable message for that field.
    pub message: &'static str,
}

impl Violation {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Domain-level validation error.
///
/// The only error kind the domain core produces. Carries one or more
/// per-field violations in the deterministic order validation detected them.
/// Infrastructure concerns (storage faults, missing records) belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("validation failed: {}", join_messages(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Build from an ordered, non-empty list of violations.
    pub fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty(), "ValidationError without violations");
        Self { violations }
    }

    /// Violations in the order they were detected.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Messages only, in detection order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.message).collect()
    }

    /// First violation message (validation always reports at least one).
    pub fn first_message(&self) -> Option<&'static str> {
        self.violations.first().map(|v| v.message)
    }
}
