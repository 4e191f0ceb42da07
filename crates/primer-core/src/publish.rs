//! One-shot publication of the built state

use crate::pipeline::InitState;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("state already published")]
    AlreadyPublished,
}

/// Completion barrier for [`InitState`].
///
/// Holds at most one state. Writes made while building the state happen
/// before any read through [`StateCell::get`] that observes it.
#[derive(Debug, Default)]
pub struct StateCell {
    cell: OnceLock<InitState>,
}

impl StateCell {
    pub fn new() -> Self {
        StateCell {
            cell: OnceLock::new(),
        }
    }

    /// Publish `state`. Fails if a state was already published, in which
    /// case `state` is dropped and the first one stays.
    pub fn publish(&self, state: InitState) -> Result<&InitState, PublishError> {
        let mut accepted = false;
        let published = self.cell.get_or_init(|| {
            accepted = true;
            state
        });
        if !accepted {
            tracing::warn!("Rejected second publish");
            return Err(PublishError::AlreadyPublished);
        }
        tracing::debug!("State published");
        Ok(published)
    }

    pub fn get(&self) -> Option<&InitState> {
        self.cell.get()
    }

    pub fn is_published(&self) -> bool {
        self.cell.get().is_some()
    }
}
