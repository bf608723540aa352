//! GD Portal core
//!
//! Platform-agnostic logic for the GD Portal front-end: the bundled game
//! catalog, path dispatch to views, and the render-fault state machine.
//! This crate has no UI or browser dependencies.

pub mod catalog;
pub mod fault;
pub mod route;

pub use catalog::{Catalog, CatalogError, GameRecord, is_http_locator, lookup};
pub use fault::{FaultBoundary, FaultState, Guarded, RenderFault, attempt, panic_message};
pub use route::{Destination, ViewSelection, dispatch, select_view};
