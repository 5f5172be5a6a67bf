//! Instance lifecycle event handling.
//!
//! [`InstanceEventHandler`] bridges the hypervisor management layer and
//! the orchestration framework: it runs the management layer's
//! power-state change listener, resolves each reported instance to its
//! stable identifier, and fans out per event into two detached tasks —
//! lifecycle delivery to the orchestration callback, and console-worker
//! toggling. Neither task is awaited and no ordering holds between them,
//! so rapid state flips for the same instance may complete out of order.

use async_trait::async_trait;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tokio_util::sync::CancellationToken;

use crate::console::ConsoleWorkers;
use crate::events::{LifecycleEvent, PowerState};
use crate::types::{Error, InstanceId, ListenerConfig, Result};
use crate::virt::{ListenerOptions, StateChangeListener, StateChangeSink, VirtManagement};

/// Orchestration-side consumer of lifecycle events.
///
/// Delivery is best-effort and asynchronous; the return value is ignored.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LifecycleCallback: Send + Sync {
    async fn lifecycle_event(&self, event: LifecycleEvent);
}

/// Relays hypervisor power-state changes as lifecycle events.
pub struct InstanceEventHandler {
    virt: Arc<dyn VirtManagement>,
    console: Arc<dyn ConsoleWorkers>,
    callback: Option<Arc<dyn LifecycleCallback>>,
    // Taken exactly once, by start_listener.
    listener: Mutex<Option<Box<dyn StateChangeListener>>>,
    cancel: CancellationToken,
}

impl InstanceEventHandler {
    /// Build a handler and acquire its power-state change listener.
    ///
    /// The listener is configured with the lookback timeframe and polling
    /// interval from `config`, filtered to the four mapped states.
    /// Acquisition failure is propagated; nothing runs until
    /// [`start_listener`](Self::start_listener).
    pub fn new(
        virt: Arc<dyn VirtManagement>,
        console: Arc<dyn ConsoleWorkers>,
        callback: Option<Arc<dyn LifecycleCallback>>,
        config: &ListenerConfig,
    ) -> Result<Self> {
        let listener = virt.power_state_listener(ListenerOptions {
            check_timeframe: config.check_timeframe,
            polling_interval: config.polling_interval,
            filtered_states: PowerState::ALL.to_vec(),
        })?;

        Ok(Self {
            virt,
            console,
            callback,
            listener: Mutex::new(Some(listener)),
            cancel: CancellationToken::new(),
        })
    }

    /// Run the listener as a detached task with this handler as its sink.
    ///
    /// Non-blocking; returns as soon as the task is spawned. Fails with
    /// [`Error::Listener`] if the listener was already started.
    pub fn start_listener(self: Arc<Self>) -> Result<()> {
        let listener = self
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or_else(|| Error::listener("listener already started"))?;

        let sink: Arc<dyn StateChangeSink> = self.clone();
        let cancel = self.cancel.clone();
        tokio::spawn(listener.run(sink, cancel));
        Ok(())
    }

    /// Stop the listener task.
    ///
    /// Already-dispatched side-effect tasks are fire-and-forget and run
    /// to completion regardless.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Resolve the orchestration-layer identifier for `instance_name`.
    ///
    /// Unresolvable events are dropped here: a deleted instance is an
    /// expected race, and an instance without an identifier was not
    /// created by this orchestration layer.
    async fn resolve_instance_uuid(&self, instance_name: &str) -> Option<InstanceId> {
        match self.virt.instance_uuid(instance_name).await {
            Ok(Some(uuid)) => Some(uuid),
            Ok(None) => {
                tracing::warn!(
                    "Instance uuid could not be retrieved for instance {}. \
                     Instance state change event will be ignored.",
                    instance_name,
                );
                None
            }
            Err(Error::InstanceNotFound(_)) => {
                // The instance has been deleted.
                tracing::debug!("Instance {} no longer exists, dropping event", instance_name);
                None
            }
            Err(e) => {
                tracing::warn!("Instance uuid lookup failed for {}: {}", instance_name, e);
                None
            }
        }
    }

    /// Fan out one resolved event into its two side effects.
    ///
    /// Both tasks are detached: nothing awaits them, and no ordering holds
    /// between them or across successive raw events.
    fn emit_event(&self, instance_name: &str, instance_uuid: InstanceId, state: PowerState) {
        let event = LifecycleEvent::new(instance_uuid, state);
        match self.callback.clone() {
            Some(callback) => {
                tokio::spawn(async move {
                    callback.lifecycle_event(event).await;
                });
            }
            None => {
                tracing::debug!(
                    "No state change callback registered, dropping {:?} for {}",
                    event.transition,
                    instance_name,
                );
            }
        }

        let console = self.console.clone();
        let name = instance_name.to_string();
        tokio::spawn(async move {
            let result = if state.is_running() {
                console.start_console_handler(&name).await
            } else {
                console.stop_console_handler(&name).await
            };
            if let Err(e) = result {
                tracing::warn!("Console worker toggle failed for {}: {}", name, e);
            }
        });
    }
}

#[async_trait]
impl StateChangeSink for InstanceEventHandler {
    async fn process(&self, instance_name: &str, state: PowerState) {
        // Identifier set by the orchestration layer at creation time. If
        // missing, the instance is foreign and the event is ignored.
        if let Some(uuid) = self.resolve_instance_uuid(instance_name).await {
            self.emit_event(instance_name, uuid, state);
        }
    }
}

impl fmt::Debug for InstanceEventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceEventHandler")
            .field("callback_set", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}
