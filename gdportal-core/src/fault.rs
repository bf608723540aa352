//! Render-fault capture.
//!
//! [`FaultBoundary`] owns a two-state machine. It starts [`FaultState::Ok`],
//! moves to [`FaultState::Faulted`] on the first captured fault, and stays there
//! until the process is restarted. Later faults never replace the first
//! description.
//!
//! Only failures raised inside the closure handed to [`FaultBoundary::guard`] or
//! [`attempt`] are intercepted. Unwinding panics are converted to
//! [`RenderFault::Panicked`]; on targets built with `panic = "abort"` (the
//! default for `wasm32-unknown-unknown`) a panic still terminates the process.
use crate::catalog::CatalogError;
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderFault {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("render panicked: {0}")]
    Panicked(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FaultState {
    #[default]
    Ok,
    Faulted {
        description: String,
    },
}

/// Outcome of a guarded render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    Rendered(T),
    Recovery { description: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaultBoundary {
    state: FaultState,
}

impl FaultBoundary {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: FaultState::Ok,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &FaultState {
        &self.state
    }

    #[must_use]
    pub const fn is_faulted(&self) -> bool {
        matches!(self.state, FaultState::Faulted { .. })
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match &self.state {
            FaultState::Ok => None,
            FaultState::Faulted { description } => Some(description),
        }
    }

    /// Record `fault`. Returns `true` only for the transition out of `Ok`.
    pub fn capture(&mut self, fault: &RenderFault) -> bool {
        if self.is_faulted() {
            return false;
        }
        self.state = FaultState::Faulted {
            description: fault.to_string(),
        };
        true
    }

    /// Run `render` unless already faulted, capturing any failure it raises.
    pub fn guard<T, F>(&mut self, render: F) -> Guarded<T>
    where
        F: FnOnce() -> Result<T, RenderFault>,
    {
        if let FaultState::Faulted { description } = &self.state {
            return Guarded::Recovery {
                description: description.clone(),
            };
        }

        match attempt(render) {
            Ok(value) => Guarded::Rendered(value),
            Err(fault) => {
                self.capture(&fault);
                Guarded::Recovery {
                    description: fault.to_string(),
                }
            }
        }
    }
}

/// Run `render`, turning an unwinding panic into [`RenderFault::Panicked`].
///
/// # Errors
/// Returns whatever `render` returned as its error, or the converted panic.
pub fn attempt<T, F>(render: F) -> Result<T, RenderFault>
where
    F: FnOnce() -> Result<T, RenderFault>,
{
    catch_unwind(AssertUnwindSafe(render))
        .unwrap_or_else(|payload| Err(RenderFault::Panicked(panic_message(payload.as_ref()))))
}

/// Human-readable text for a panic payload.
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}
