//! strata-app: business operations built on the resource gateway.
//!
//! Each operation makes one deliberate decision about the recoverable fault
//! its dependency declares:
//! - [`UseCases::resume_on_fault`] absorbs it and carries on with a default result,
//! - [`UseCases::abort_on_fault`] rewraps it as an unrecoverable business fault,
//! - [`UseCases::scoped_resource`] rewraps it after a failing release was
//!   suppressed on it.
//!
//! The finalizer of the first two runs on every exit path, unwinding included.
pub mod outcome;
pub mod resource;

pub use outcome::OutcomeLog;
pub use resource::{CLOSING_FAILURE, FailingHandle};

use scopeguard::ScopeGuard;
use strata_error::{Fault, FaultKind, Recoverable, Unrecoverable, scoped};
use strata_gateway::ResourceGateway;
use tracing::{debug, error, info, warn};

pub const FROM_TRY: &str = "return from try, ";
pub const FROM_CATCH: &str = "return from catch, ";
pub const FINALLY: &str = "modify result in finally.";
pub const FAIL_CALLING: &str = "fail calling external library";
pub const WRAP_CHECKED: &str = "wrap checked in unchecked";

/// Id the scoped operation feeds its dependency; always rejected.
const SCOPED_ID: i64 = -1;

#[derive(Debug, Clone)]
pub struct UseCases<G> {
    gateway: G,
}

impl<G: ResourceGateway> UseCases<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Never fails: a rejected call yields the fault's message as a default result.
    pub fn resume_on_fault(&self, id: i64) -> OutcomeLog {
        let mut log = OutcomeLog::new();
        {
            let mut log = finally(&mut log);
            info!("call external resource");
            match self.gateway.reject_recoverable(id) {
                Ok(value) => {
                    log.push(format!("{value}, "));
                    info!("after call");
                    log.push(FROM_TRY);
                }
                Err(fault) => {
                    warn!("provide a default result, due to : {}", report(&fault));
                    log.push(format!("{fault}, "));
                    log.push(FROM_CATCH);
                }
            }
        }
        log
    }

    /// Fails with an unrecoverable business fault caused by the rejected call.
    /// The finalizer still runs; its output is dropped together with the log.
    pub fn abort_on_fault(&self, id: i64) -> Result<OutcomeLog, Unrecoverable> {
        let mut log = OutcomeLog::new();
        let outcome = {
            let mut log = finally(&mut log);
            info!("call external resource");
            match self.gateway.reject_recoverable(id) {
                Ok(value) => {
                    log.push(format!("{value}, "));
                    info!("after call");
                    log.push(FROM_TRY);
                    Ok(())
                }
                Err(fault) => {
                    error!("process fails due to : {fault}");
                    log.push(format!("{fault}, "));
                    Err(Unrecoverable::wrapping(
                        FaultKind::BusinessDomain,
                        format!("{FAIL_CALLING} due to : {fault}"),
                        fault,
                    ))
                }
            }
        };
        outcome.map(|()| log)
    }

    /// Always fails. The dependency rejects the call made while a
    /// [`FailingHandle`] is held; the handle's release failure ends up
    /// suppressed on that rejection, which becomes the cause of the returned fault.
    ///
    /// The returned fault's own suppressed list is empty; the single entry is
    /// found at `fault.cause().suppressed()`.
    pub fn scoped_resource(&self) -> Result<String, Unrecoverable> {
        scopeguard::defer! {
            debug!("scoped resources are released on every exit path");
        }

        let outcome: Result<i64, Recoverable> =
            scoped(FailingHandle, |_handle| self.gateway.reject_recoverable(SCOPED_ID));
        match outcome {
            Ok(value) => Ok(value.to_string()),
            Err(primary) => {
                error!("process failed due to {}", report(&primary));
                Err(Unrecoverable::wrapping(
                    FaultKind::BusinessDomain,
                    format!("{WRAP_CHECKED} due to {primary}"),
                    primary,
                ))
            }
        }
    }
}

fn finally<'a>(
    log: &'a mut OutcomeLog,
) -> ScopeGuard<&'a mut OutcomeLog, impl FnOnce(&'a mut OutcomeLog)> {
    scopeguard::guard(log, |log| {
        info!("ensure resources are closed");
        log.push(FINALLY);
    })
}

fn report(fault: &Recoverable) -> String {
    Fault::from(fault.clone()).report().to_string()
}
