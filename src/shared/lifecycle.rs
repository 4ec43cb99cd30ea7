//! Status state machines shared by campaigns, applications and submissions.

use std::fmt::Display;

use crate::core::error::{AppError, Result};

/// A closed set of statuses with a fixed successor table.
pub trait Lifecycle: Copy + Eq + Display + 'static {
    /// Entity name used in error messages
    const ENTITY: &'static str;

    /// Statuses reachable from `self` in one step
    fn successors(self) -> &'static [Self];

    fn can_transition_to(self, next: Self) -> bool {
        self.successors().contains(&next)
    }

    fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }
}

/// Fail with `InvalidState` unless `from -> to` is in the successor table.
pub fn ensure_transition<S: Lifecycle>(from: S, to: S) -> Result<()> {
    if from.can_transition_to(to) {
        Ok(())
    } else if from.is_terminal() {
        Err(AppError::InvalidState(format!("{} is already {}", S::ENTITY, from)))
    } else {
        Err(AppError::InvalidState(format!(
            "{} cannot move from {} to {}",
            S::ENTITY,
            from,
            to
        )))
    }
}

/// Fail with `InvalidState(message)` unless the current status is `expected`.
pub fn ensure_status<S: Lifecycle>(current: S, expected: S, message: &str) -> Result<()> {
    if current == expected {
        Ok(())
    } else {
        Err(AppError::InvalidState(message.to_string()))
    }
}
