//! Hypervisor management ports.
//!
//! Power-state change detection, its polling and timeout handling, and
//! instance metadata lookups live in the hypervisor management layer.
//! This module defines the seams it plugs into: [`VirtManagement`] for
//! lookups and listener acquisition, [`StateChangeListener`] for the
//! detection loop itself, and [`StateChangeSink`] for the per-event
//! callback the handler registers with the loop.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::events::PowerState;
use crate::types::{InstanceId, Result};

/// Options the power-state change listener is acquired with.
///
/// Passed through to the management layer's detection loop; not
/// interpreted by this crate.
#[derive(Debug, Clone)]
pub struct ListenerOptions {
    /// The timeframe to be checked for instance power state changes.
    pub check_timeframe: Duration,

    /// Instance power state change event polling frequency.
    pub polling_interval: Duration,

    /// States the listener reports. Anything else is dropped at the
    /// source and never reaches the sink.
    pub filtered_states: Vec<PowerState>,
}

/// Per-event sink registered with the listener.
///
/// Implemented by the handler; a separate seam so translation logic stays
/// independent of whatever concurrency primitive runs the loop.
#[async_trait]
pub trait StateChangeSink: Send + Sync {
    /// Handle one raw (instance name, power state) pair.
    async fn process(&self, instance_name: &str, state: PowerState);
}

/// The power-state change detection loop, implemented by the management
/// layer.
#[async_trait]
pub trait StateChangeListener: Send + Sync {
    /// Run the loop, delivering filtered state changes to `sink` until
    /// `cancel` fires.
    async fn run(self: Box<Self>, sink: Arc<dyn StateChangeSink>, cancel: CancellationToken);
}

/// Hypervisor management operations this crate calls into.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VirtManagement: Send + Sync {
    /// Resolve the stable identifier the orchestration layer assigned to
    /// `instance_name`.
    ///
    /// `Ok(None)` means the instance exists but was not created by this
    /// orchestration layer. `Err(Error::InstanceNotFound)` means it was
    /// deleted since the event fired.
    async fn instance_uuid(&self, instance_name: &str) -> Result<Option<InstanceId>>;

    /// Acquire a power-state change listener bound to `options`.
    fn power_state_listener(
        &self,
        options: ListenerOptions,
    ) -> Result<Box<dyn StateChangeListener>>;
}
