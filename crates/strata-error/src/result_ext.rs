use super::{Fault, FaultClass, FaultPolicy};

/// Extension trait for `Result` enabling policy-driven emission without
/// contaminating control flow with side effects.
///
/// Every helper hands a copy of the fault to the policy and returns the
/// result unchanged, so observing a fault never alters it.
///
/// Example
/// ```rust
/// use strata_error::{FaultKind, NoopPolicy, Recoverable, ResultExt};
///
/// fn do_work(policy: &NoopPolicy) -> Result<(), Recoverable> {
///     let r: Result<(), Recoverable> = Err(Recoverable::new(FaultKind::Io, "disk"));
///     r.emit_recoverable(policy)
/// }
/// assert!(do_work(&NoopPolicy).is_err());
/// ```
pub trait ResultExt<T> {
    /// Emit any fault using the provided policy and return the result unchanged
    fn emit_event(self, policy: &impl FaultPolicy) -> Self;

    /// Emit only if the policy classifies the fault as recoverable
    fn emit_recoverable(self, policy: &impl FaultPolicy) -> Self;

    /// Emit only if the policy classifies the fault as unrecoverable
    fn emit_unrecoverable(self, policy: &impl FaultPolicy) -> Self;

    /// Emit only if the policy classifies the fault as fatal
    fn emit_fatal(self, policy: &impl FaultPolicy) -> Self;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Clone + Into<Fault>,
{
    fn emit_event(self, policy: &impl FaultPolicy) -> Self {
        if let Err(ref e) = self {
            policy.emit(&e.clone().into());
        }
        self
    }

    fn emit_recoverable(self, policy: &impl FaultPolicy) -> Self {
        emit_if(self, policy, FaultClass::Recoverable)
    }

    fn emit_unrecoverable(self, policy: &impl FaultPolicy) -> Self {
        emit_if(self, policy, FaultClass::Unrecoverable)
    }

    fn emit_fatal(self, policy: &impl FaultPolicy) -> Self {
        emit_if(self, policy, FaultClass::Fatal)
    }
}

fn emit_if<T, E>(result: Result<T, E>, policy: &impl FaultPolicy, class: FaultClass) -> Result<T, E>
where
    E: Clone + Into<Fault>,
{
    if let Err(ref e) = result {
        let fault: Fault = e.clone().into();
        if policy.classify(&fault) == class {
            policy.emit(&fault);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::tests::RecordingPolicy;
    use crate::{Fatal, FaultKind, Recoverable};

    #[test]
    fn ok_results_emit_nothing() {
        let policy = RecordingPolicy::default();
        let r: Result<u8, Recoverable> = Ok(1);
        assert_eq!(r.emit_event(&policy), Ok(1));
        assert!(policy.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn emission_leaves_the_fault_untouched() {
        let policy = RecordingPolicy::default();
        let original = Recoverable::new(FaultKind::InvalidInput, "bad");
        let r: Result<u8, Recoverable> = Err(original.clone());
        assert_eq!(r.emit_event(&policy), Err(original));
        assert_eq!(*policy.seen.lock().unwrap(), vec!["bad".to_string()]);
    }

    #[test]
    fn class_filters_follow_the_policy_classification() {
        let policy = RecordingPolicy::default();
        let r: Result<u8, Fatal> = Err(Fatal::new(FaultKind::OutOfMemory, "oom"));
        let r = r.emit_recoverable(&policy).emit_unrecoverable(&policy);
        assert!(policy.seen.lock().unwrap().is_empty());
        let _ = r.emit_fatal(&policy);
        assert_eq!(*policy.seen.lock().unwrap(), vec!["oom".to_string()]);
    }

    #[test]
    fn escalating_policy_changes_which_filter_fires() {
        let policy = RecordingPolicy {
            escalate_to: Some(FaultClass::Fatal),
            ..Default::default()
        };
        let r: Result<u8, Fault> = Err(Recoverable::new(FaultKind::Io, "io").into());
        let _ = r.emit_recoverable(&policy).emit_fatal(&policy);
        assert_eq!(*policy.seen.lock().unwrap(), vec!["io".to_string()]);
    }
}
