//! Power-state translation — raw hypervisor states to lifecycle transitions.
//!
//! Fixed 1:1 mapping, exhaustive over `PowerState`: a new raw state cannot
//! be added without choosing its transition here. No fallback arm;
//! unmapped states are the listener filter's problem.

use super::{LifecycleTransition, PowerState};

impl From<PowerState> for LifecycleTransition {
    fn from(state: PowerState) -> Self {
        match state {
            PowerState::Enabled => LifecycleTransition::Started,
            PowerState::Disabled => LifecycleTransition::Stopped,
            PowerState::Paused => LifecycleTransition::Paused,
            PowerState::Suspended => LifecycleTransition::Suspended,
        }
    }
}
