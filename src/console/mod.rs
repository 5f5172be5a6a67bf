//! Console-log worker port.
//!
//! Serial console output is pumped to per-instance log files by a worker
//! manager owned by the console subsystem. This crate only starts and
//! stops workers as instances come up and go down.

use async_trait::async_trait;

use crate::types::Result;

/// Console-log worker management operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConsoleWorkers: Send + Sync {
    /// Start the console-log worker for `instance_name`.
    async fn start_console_handler(&self, instance_name: &str) -> Result<()>;

    /// Stop the console-log worker for `instance_name`, if one is running.
    async fn stop_console_handler(&self, instance_name: &str) -> Result<()>;
}
