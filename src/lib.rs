//! # u-ewaste
//!
//! Operations-research models for e-waste logistics: a cost formula, an
//! assignment solver, and a transportation solver. All solvers are
//! synchronous, deterministic, and keep no state between calls.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (cost inputs/results, assignments, allocations)
//! - [`matrix`] — Dense rectangular cost matrix
//! - [`cost`] — Cost formula evaluation
//! - [`assignment`] — Greedy per-row minimum and Hungarian assignment
//! - [`transportation`] — Vogel's Approximation Method
//! - [`workspace`] — Editable problems that drop their solution on every edit
//! - [`input`] — Text-to-number coercion for table cells
//! - [`config`] — Rates, default assignment mode, and solve delay
//! - [`request`] — JSON request/response types for the bindings
//! - `deferred` — Cancellable delayed solve on tokio (feature `runtime`)
//! - `wasm` — Browser bindings (feature `wasm`)
//! - `ffi` — C ABI (feature `ffi`)

pub mod assignment;
pub mod config;
pub mod cost;
pub mod error;
pub mod input;
pub mod matrix;
pub mod models;
pub mod request;
pub mod transportation;
pub mod workspace;

#[cfg(feature = "runtime")]
pub mod deferred;
#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;
