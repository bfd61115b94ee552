use super::{Fault, FaultClass};

/// A policy for classifying and emitting faults.
///
/// Layers do not decide how a fault is presented; they hand it to whatever
/// policy the process installed. Emission can be anything:
/// - tracing logs
/// - structured fields for log aggregation
/// - custom telemetry
///
/// Example
/// ```rust
/// use strata_error::{Fault, FaultClass, FaultKind, FaultPolicy, Recoverable};
///
/// struct PrintPolicy;
/// impl FaultPolicy for PrintPolicy {
///     fn classify(&self, f: &Fault) -> FaultClass { f.class() }
///     fn emit(&self, f: &Fault) { eprintln!("[{}] {}", self.classify(f), f.report()); }
/// }
///
/// let fault = Fault::from(Recoverable::new(FaultKind::Io, "disk"));
/// PrintPolicy.emit(&fault);
/// ```
pub trait FaultPolicy: Send + Sync {
    /// Classify the fault. Policies may escalate but the producer's class is the floor.
    fn classify(&self, fault: &Fault) -> FaultClass;

    /// Emit the fault according to the policy.
    fn emit(&self, fault: &Fault);
}

/// A policy that classifies by the fault's own class and emits nothing.
#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl FaultPolicy for NoopPolicy {
    fn classify(&self, fault: &Fault) -> FaultClass {
        fault.class()
    }

    fn emit(&self, _fault: &Fault) {}
}

/// Emits through `tracing`: recoverable faults at WARN, everything else at ERROR.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy;

#[cfg(feature = "tracing")]
impl FaultPolicy for TracingPolicy {
    fn classify(&self, fault: &Fault) -> FaultClass {
        fault.class()
    }

    fn emit(&self, fault: &Fault) {
        use tracing::{Level, event};

        let class = fault.class();
        match class {
            FaultClass::Recoverable => {
                event!(Level::WARN, class = %class, "{}", fault.report())
            }
            FaultClass::Unrecoverable | FaultClass::Fatal => {
                event!(Level::ERROR, class = %class, "{}", fault.report())
            }
        }
    }
}

/// Emits the fault's structured fields as a single JSON payload at ERROR.
#[cfg(all(feature = "tracing", feature = "serde"))]
#[derive(Debug, Clone, Default)]
pub struct StructuredPolicy;

#[cfg(all(feature = "tracing", feature = "serde"))]
impl FaultPolicy for StructuredPolicy {
    fn classify(&self, fault: &Fault) -> FaultClass {
        fault.class()
    }

    fn emit(&self, fault: &Fault) {
        use crate::pretty::PrettyDebug;

        fault.emit_tracing(tracing::Level::ERROR, "fault fields");
    }
}

/// A composite policy that delegates to multiple policies.
///
/// Behavior
/// - classify: returns the highest class among inner policies, starting from the fault's own class.
/// - emit: delegates emission to all inner policies in insertion order.
///
/// Example
/// ```rust
/// use strata_error::policy::{CombinedPolicy, NoopPolicy};
/// let policy = CombinedPolicy::new().push(NoopPolicy);
/// // #[cfg(feature = "tracing")] let policy = policy.push(strata_error::policy::TracingPolicy);
/// ```
#[derive(Default)]
pub struct CombinedPolicy {
    policies: Vec<Box<dyn FaultPolicy>>,
}

impl CombinedPolicy {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    /// Add a policy by value. Consumes and returns Self for builder-style chaining.
    pub fn push<P: FaultPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    pub fn add_boxed(mut self, policy: Box<dyn FaultPolicy>) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl FaultPolicy for CombinedPolicy {
    fn classify(&self, fault: &Fault) -> FaultClass {
        self.policies
            .iter()
            .map(|p| p.classify(fault))
            .fold(fault.class(), FaultClass::max)
    }

    fn emit(&self, fault: &Fault) {
        for p in &self.policies {
            p.emit(fault);
        }
    }
}
