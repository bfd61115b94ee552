use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicUsize, Ordering};

use strata_app::{CLOSING_FAILURE, UseCases};
use strata_error::{Fault, FaultClass, FaultKind, Recoverable};
use strata_gateway::{ExternalResource, ResourceGateway};
use strata_test_utils::{assert_subsequence, capture};

fn use_cases() -> UseCases<ExternalResource> {
    UseCases::new(ExternalResource)
}

#[test]
fn resume_without_fault_returns_from_try() {
    let (log, lines) = capture(|| use_cases().resume_on_fault(1));
    assert_eq!(log.as_str(), "1, return from try, modify result in finally.");
    assert_subsequence(
        &lines,
        &[
            "^INFO .*call external resource",
            "^INFO .*after call",
            "^INFO .*ensure resources are closed",
        ],
    );
}

#[test]
fn resume_with_fault_returns_from_catch() {
    let (log, lines) = capture(|| use_cases().resume_on_fault(-1));
    assert_eq!(
        log.as_str(),
        "Negative input[-1] is invalid, return from catch, modify result in finally."
    );
    assert_subsequence(
        &lines,
        &[
            "^INFO .*call external resource",
            "^WARN .*provide a default result, due to : InvalidInput: Negative input",
            "^INFO .*ensure resources are closed",
        ],
    );
    assert!(!lines.iter().any(|l| l.contains("after call")));
}

#[test]
fn abort_without_fault_returns_from_try() {
    let (out, lines) = capture(|| use_cases().abort_on_fault(1));
    let log = out.expect("non-negative id must succeed");
    assert_eq!(log.as_str(), "1, return from try, modify result in finally.");
    assert_subsequence(
        &lines,
        &[
            "^INFO .*call external resource",
            "^INFO .*after call",
            "^INFO .*ensure resources are closed",
        ],
    );
}

#[test]
fn abort_with_fault_raises_a_wrapped_business_fault() {
    let (out, lines) = capture(|| use_cases().abort_on_fault(-1));
    let fault = out.expect_err("negative id must abort");

    assert_eq!(fault.kind(), FaultKind::BusinessDomain);
    assert!(
        fault
            .message()
            .contains("fail calling external library due to : Negative input[-1] is invalid")
    );
    let cause = fault.cause().expect("original kept as cause");
    assert_eq!(cause.class(), FaultClass::Recoverable);
    assert_eq!(cause.message(), "Negative input[-1] is invalid");
    assert!(cause.cause().is_none());

    // The finalizer ran before the fault left the operation.
    assert_subsequence(
        &lines,
        &[
            "^INFO .*call external resource",
            "^ERROR .*process fails due to : Negative input\\[-1\\] is invalid$",
            "^INFO .*ensure resources are closed",
        ],
    );
}

#[test]
fn scoped_resource_suppresses_the_release_failure_on_the_original() {
    let (out, lines) = capture(|| use_cases().scoped_resource());
    let fault = out.expect_err("scoped operation always fails");

    assert_eq!(fault.kind(), FaultKind::BusinessDomain);
    assert!(fault.message().contains("wrap checked in unchecked"));
    assert!(fault.message().contains("-1"));
    assert!(fault.message().contains("is invalid"));
    assert!(fault.suppressed().is_empty());

    let cause = fault.cause().expect("original kept as cause");
    assert_eq!(cause.class(), FaultClass::Recoverable);
    assert!(cause.message().contains("-1"));
    assert!(cause.message().contains("is invalid"));
    assert_eq!(cause.suppressed().len(), 1);
    assert_eq!(cause.suppressed()[0].message(), CLOSING_FAILURE);
    assert_eq!(cause.suppressed()[0].kind(), FaultKind::Io);

    assert_subsequence(
        &lines,
        &[
            "^DEBUG .*releasing scoped handle",
            "^ERROR .*process failed due to InvalidInput: Negative input",
            "^\\tSuppressed: Io: error at closing time",
            "^DEBUG .*released on every exit path",
        ],
    );
}

#[test]
fn repeated_calls_give_identical_results() {
    let uc = use_cases();
    for id in [1, -1] {
        assert_eq!(uc.resume_on_fault(id), uc.resume_on_fault(id));
        assert_eq!(uc.abort_on_fault(id), uc.abort_on_fault(id));
    }
    assert_eq!(uc.scoped_resource(), uc.scoped_resource());
}

/// Gateway double that counts calls and otherwise keeps the stock contract.
#[derive(Default)]
struct CountingGateway {
    calls: AtomicUsize,
}

impl ResourceGateway for CountingGateway {
    fn reject_recoverable(&self, id: i64) -> Result<i64, Recoverable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ExternalResource.reject_recoverable(id)
    }
}

#[test]
fn gateway_is_supplied_by_the_caller() {
    let gateway = CountingGateway::default();
    let uc = UseCases::new(&gateway);
    let _ = uc.resume_on_fault(2);
    let _ = uc.abort_on_fault(-2);
    let _ = uc.scoped_resource();
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 3);
}

struct PanickingGateway;

impl ResourceGateway for PanickingGateway {
    fn reject_recoverable(&self, _id: i64) -> Result<i64, Recoverable> {
        panic!("dependency crashed");
    }
}

#[test]
fn finalizer_runs_while_unwinding() {
    let uc = UseCases::new(PanickingGateway);
    let (outcome, lines) = capture(|| catch_unwind(AssertUnwindSafe(|| uc.abort_on_fault(1))));
    assert!(outcome.is_err());
    assert_subsequence(
        &lines,
        &[
            "^INFO .*call external resource",
            "^INFO .*ensure resources are closed",
        ],
    );
}

#[test]
fn wrapped_fault_converts_into_the_union_without_reclassification() {
    let fault: Fault = use_cases().abort_on_fault(-3).unwrap_err().into();
    assert_eq!(fault.class(), FaultClass::Unrecoverable);
    assert_eq!(
        fault.chain().map(Fault::class).collect::<Vec<_>>(),
        vec![FaultClass::Unrecoverable, FaultClass::Recoverable]
    );
}
