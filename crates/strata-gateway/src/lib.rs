//! strata-gateway: the external dependency every layer above builds on.
//!
//! Each operation has a fixed failure contract, visible in its return type:
//!
//! | operation | produces |
//! |-----------|----------|
//! | [`ResourceGateway::accept`] | never fails |
//! | [`ResourceGateway::declare_fatal`] | always [`Fatal`] |
//! | [`ResourceGateway::reject_unrecoverable`] | [`Unrecoverable`] for negative ids |
//! | [`ResourceGateway::reject_recoverable`] | [`Recoverable`] for negative ids |
//!
//! Every call is recorded at DEBUG before it returns, success or not.
use strata_error::{Fatal, FaultKind, Recoverable, Unrecoverable};
use tracing::debug;

pub const OUT_OF_MEMORY: &str = "You called me too much, you are out of memory";

/// Access to the external resource.
///
/// The default bodies carry the contract, so implementors (test doubles
/// included) only override what they need to observe.
pub trait ResourceGateway: Send + Sync {
    /// Returns `id` unchanged.
    fn accept(&self, id: i64) -> i64 {
        debug!(operation = "accept", id, "gateway call returned {id}");
        id
    }

    /// Signals that the environment can no longer run.
    fn declare_fatal(&self, id: i64) -> Result<i64, Fatal> {
        let fault = Fatal::new(FaultKind::OutOfMemory, OUT_OF_MEMORY);
        debug!(operation = "declare_fatal", id, "gateway call raised {fault}");
        Err(fault)
    }

    /// Rejects negative ids as a contract violation.
    fn reject_unrecoverable(&self, id: i64) -> Result<i64, Unrecoverable> {
        if id < 0 {
            let fault = Unrecoverable::new(
                FaultKind::IllegalArgument,
                format!("Negative input[{id}] is illegal"),
            );
            debug!(operation = "reject_unrecoverable", id, "gateway call raised {fault}");
            return Err(fault);
        }
        debug!(operation = "reject_unrecoverable", id, "gateway call returned {id}");
        Ok(id)
    }

    /// Rejects negative ids as a declared, expected failure.
    fn reject_recoverable(&self, id: i64) -> Result<i64, Recoverable> {
        if id < 0 {
            let fault = Recoverable::new(
                FaultKind::InvalidInput,
                format!("Negative input[{id}] is invalid"),
            );
            debug!(operation = "reject_recoverable", id, "gateway call raised {fault}");
            return Err(fault);
        }
        debug!(operation = "reject_recoverable", id, "gateway call returned {id}");
        Ok(id)
    }
}

/// The stock gateway: the contract exactly as declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalResource;

impl ResourceGateway for ExternalResource {}

impl<G: ResourceGateway + ?Sized> ResourceGateway for &G {
    fn accept(&self, id: i64) -> i64 {
        (**self).accept(id)
    }

    fn declare_fatal(&self, id: i64) -> Result<i64, Fatal> {
        (**self).declare_fatal(id)
    }

    fn reject_unrecoverable(&self, id: i64) -> Result<i64, Unrecoverable> {
        (**self).reject_unrecoverable(id)
    }

    fn reject_recoverable(&self, id: i64) -> Result<i64, Recoverable> {
        (**self).reject_recoverable(id)
    }
}

impl<G: ResourceGateway + ?Sized> ResourceGateway for std::sync::Arc<G> {
    fn accept(&self, id: i64) -> i64 {
        (**self).accept(id)
    }

    fn declare_fatal(&self, id: i64) -> Result<i64, Fatal> {
        (**self).declare_fatal(id)
    }

    fn reject_unrecoverable(&self, id: i64) -> Result<i64, Unrecoverable> {
        (**self).reject_unrecoverable(id)
    }

    fn reject_recoverable(&self, id: i64) -> Result<i64, Recoverable> {
        (**self).reject_recoverable(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_error::{Fault, FaultClass};
    use strata_test_utils::{assert_subsequence, capture};

    const IDS: [i64; 6] = [0, 1, 2, 42, 1_000_000, i64::MAX];

    #[test]
    fn accept_returns_the_id() {
        for id in IDS.into_iter().chain([-1, i64::MIN]) {
            assert_eq!(ExternalResource.accept(id), id);
        }
    }

    #[test]
    fn non_negative_ids_pass_both_rejecting_operations() {
        for id in IDS {
            assert_eq!(ExternalResource.reject_recoverable(id), Ok(id));
            assert_eq!(ExternalResource.reject_unrecoverable(id), Ok(id));
        }
    }

    #[test]
    fn negative_ids_raise_the_declared_class() {
        for id in [-1, -2, -99, i64::MIN] {
            let fault = ExternalResource
                .reject_recoverable(id)
                .expect_err("negative id must be rejected");
            assert_eq!(Fault::from(fault.clone()).class(), FaultClass::Recoverable);
            assert!(fault.message().contains(&id.to_string()));
            assert!(fault.message().contains("is invalid"));

            let fault = ExternalResource
                .reject_unrecoverable(id)
                .expect_err("negative id must be rejected");
            assert_eq!(Fault::from(fault.clone()).class(), FaultClass::Unrecoverable);
            assert!(fault.message().contains(&id.to_string()));
            assert!(fault.message().contains("is illegal"));
        }
    }

    #[test]
    fn declare_fatal_always_fails() {
        for id in [-1, 0, 1] {
            let fault = ExternalResource.declare_fatal(id).expect_err("always fatal");
            assert_eq!(fault.kind(), FaultKind::OutOfMemory);
            assert!(fault.message().contains("out of memory"));
        }
    }

    #[test]
    fn exact_messages() {
        assert_eq!(
            ExternalResource.reject_recoverable(-1).unwrap_err().message(),
            "Negative input[-1] is invalid"
        );
        assert_eq!(
            ExternalResource.reject_unrecoverable(-1).unwrap_err().message(),
            "Negative input[-1] is illegal"
        );
    }

    #[test]
    fn every_call_is_recorded() {
        let (_, lines) = capture(|| {
            let _ = ExternalResource.accept(5);
            let _ = ExternalResource.reject_recoverable(-1);
            let _ = ExternalResource.reject_unrecoverable(3);
            let _ = ExternalResource.declare_fatal(1);
        });
        assert_subsequence(
            &lines,
            &[
                r"^DEBUG .*gateway call returned 5 operation=.?accept.? id=5",
                r"^DEBUG .*gateway call raised Negative input\[-1\] is invalid",
                r"^DEBUG .*gateway call returned 3 operation=.?reject_unrecoverable",
                r"^DEBUG .*gateway call raised You called me too much",
            ],
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn shared_handles_delegate() {
        let shared = std::sync::Arc::new(ExternalResource);
        assert_eq!(shared.reject_recoverable(4), Ok(4));
        assert_eq!((&ExternalResource).accept(9), 9);
    }
}
