//! Power states and lifecycle events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::InstanceId;

/// Raw hypervisor-reported VM power state.
///
/// Discriminants are the management layer's enabled-state codes, so raw
/// values decode directly off its reporting interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u16)]
pub enum PowerState {
    Enabled = 2,
    Disabled = 3,
    Paused = 32768,
    Suspended = 32769,
}

impl PowerState {
    /// The four states the listener is configured to report.
    pub const ALL: [PowerState; 4] = [
        PowerState::Enabled,
        PowerState::Disabled,
        PowerState::Paused,
        PowerState::Suspended,
    ];

    /// Decode a raw enabled-state code.
    ///
    /// Unmapped codes yield `None`; the listener filter must drop them
    /// before they reach the translator.
    pub fn from_raw(code: u16) -> Option<PowerState> {
        match code {
            2 => Some(PowerState::Enabled),
            3 => Some(PowerState::Disabled),
            32768 => Some(PowerState::Paused),
            32769 => Some(PowerState::Suspended),
            _ => None,
        }
    }

    /// Raw enabled-state code for this state.
    pub fn as_raw(self) -> u16 {
        self as u16
    }

    /// Whether the instance is actively running. Console logging is only
    /// active in this state; Paused and Suspended count as not running.
    pub fn is_running(self) -> bool {
        self == PowerState::Enabled
    }
}

/// Normalized lifecycle transition kind, one per mapped power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleTransition {
    Started,
    Stopped,
    Paused,
    Suspended,
}

/// Lifecycle event delivered to the orchestration callback.
///
/// Built fresh per incoming raw event; carries no state beyond what the
/// callback needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    /// Stable identifier assigned by the orchestration layer.
    pub instance_uuid: InstanceId,
    /// Normalized transition kind.
    pub transition: LifecycleTransition,
    /// When the event was built from the raw state change.
    pub occurred_at: DateTime<Utc>,
}

impl LifecycleEvent {
    /// Build an event for `instance_uuid` from a raw power state.
    pub fn new(instance_uuid: InstanceId, state: PowerState) -> Self {
        Self {
            instance_uuid,
            transition: state.into(),
            occurred_at: Utc::now(),
        }
    }
}
