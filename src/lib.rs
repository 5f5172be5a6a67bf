//! # Virtwatch - Hypervisor Instance Lifecycle Event Relay
//!
//! Bridges a hypervisor management layer and an orchestration framework:
//! - Runs the management layer's power-state change listener
//! - Resolves instance names to orchestration-layer identifiers
//! - Republishes raw state changes as normalized lifecycle events
//! - Starts and stops per-instance console-log workers
//!
//! ## Architecture
//!
//! ```text
//!  hypervisor management        InstanceEventHandler        orchestration
//!  ┌───────────────────┐  raw   ┌──────────────────┐ spawn  ┌───────────┐
//!  │ power-state       │ events │ resolve instance │ ─────→ │ lifecycle │
//!  │ change listener   │ ─────→ │ translate state  │        │ callback  │
//!  └───────────────────┘        │ fan out          │ spawn  ├───────────┤
//!                               └──────────────────┘ ─────→ │ console   │
//!                                                           │ workers   │
//!                                                           └───────────┘
//! ```
//!
//! Both outbound edges are fire-and-forget: no result is awaited and no
//! ordering holds between them.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod console;
pub mod events;
pub mod handler;
pub mod types;
pub mod virt;

// Internal utilities
pub mod observability;

pub use events::{LifecycleEvent, LifecycleTransition, PowerState};
pub use handler::{InstanceEventHandler, LifecycleCallback};
pub use types::{Config, Error, ListenerConfig, Result};
