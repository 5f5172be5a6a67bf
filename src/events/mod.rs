//! Lifecycle event model.
//!
//! Raw hypervisor power states, normalized lifecycle transitions, and the
//! static translation between them.

mod state;
mod translation;

pub use state::{LifecycleEvent, LifecycleTransition, PowerState};
