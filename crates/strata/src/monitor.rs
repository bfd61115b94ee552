//! The top-level monitor: the last stop for any fault a command lets through.
use strata_error::{CombinedPolicy, Fault, FaultClass, FaultPolicy, ResultExt, StructuredPolicy, TracingPolicy};
use tracing::error;

use crate::config::MonitorConfig;

/// Fatal: the environment failed (EX_SOFTWARE).
pub const EXIT_FATAL: u8 = 70;
pub const EXIT_UNRECOVERABLE: u8 = 1;
pub const EXIT_RECOVERABLE: u8 = 2;

pub fn exit_code(class: FaultClass) -> u8 {
    match class {
        FaultClass::Fatal => EXIT_FATAL,
        FaultClass::Unrecoverable => EXIT_UNRECOVERABLE,
        FaultClass::Recoverable => EXIT_RECOVERABLE,
    }
}

pub struct Monitor {
    policy: CombinedPolicy,
}

impl Monitor {
    pub fn new(policy: CombinedPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &MonitorConfig) -> Self {
        let mut policy = CombinedPolicy::new().push(TracingPolicy);
        if config.structured {
            policy = policy.push(StructuredPolicy);
        }
        Self::new(policy)
    }

    /// Pass a successful outcome through; emit a fault and map it to an exit code.
    pub fn supervise(&self, outcome: Result<String, Fault>) -> Result<String, u8> {
        outcome.emit_event(&self.policy).map_err(|fault| {
            let class = self.policy.classify(&fault);
            if !class.is_catchable() {
                error!(class = %class, "fatal fault reached the top level, terminating");
            }
            exit_code(class)
        })
    }
}
