use super::*;
use crate::scope::sealed::Sealed;

/// The payload every fault carries, whatever its class.
///
/// Fields are private: a fault is assembled through the builders on its class
/// type and read through accessors afterwards. The cause is owned exclusively
/// by the fault that wraps it, so a chain can never loop back on itself.
///
/// The cause is given at construction; there is no way to swap it later.
///
/// ```compile_fail
/// use strata_error::{FaultKind, Recoverable, Unrecoverable};
///
/// let returned = Unrecoverable::wrapping(
///     FaultKind::BusinessDomain,
///     "fail calling external library",
///     Recoverable::new(FaultKind::InvalidInput, "Negative input[-1] is invalid"),
/// );
/// let _ = returned.caused_by(Recoverable::new(FaultKind::Io, "unrelated"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    kind: FaultKind,
    message: String,
    cause: Option<Box<Fault>>,
    suppressed: Vec<Fault>,
}

impl Detail {
    fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
            suppressed: Vec::new(),
        }
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_deref()
    }

    /// Secondary faults raised while this one was propagating, in the order
    /// they occurred.
    pub fn suppressed(&self) -> &[Fault] {
        &self.suppressed
    }
}

macro_rules! fault_class {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(Detail);

        impl $name {
            pub const CLASS: FaultClass = FaultClass::$name;

            pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
                Self(Detail::new(kind, message))
            }

            /// A fault raised in response to `cause`. The cause is fixed here
            /// and cannot be replaced afterwards.
            pub fn wrapping(
                kind: FaultKind,
                message: impl Into<String>,
                cause: impl Into<Fault>,
            ) -> Self {
                let mut detail = Detail::new(kind, message);
                detail.cause = Some(Box::new(cause.into()));
                Self(detail)
            }

            pub fn detail(&self) -> &Detail {
                &self.0
            }

            pub fn kind(&self) -> FaultKind {
                self.0.kind
            }

            pub fn message(&self) -> &str {
                &self.0.message
            }

            pub fn cause(&self) -> Option<&Fault> {
                self.0.cause()
            }

            pub fn suppressed(&self) -> &[Fault] {
                self.0.suppressed()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0.message)
            }
        }

        impl std::error::Error for $name {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                self.0
                    .cause
                    .as_deref()
                    .map(|cause| cause as &(dyn std::error::Error + 'static))
            }
        }

        impl Sealed for $name {
            fn suppress(mut self, secondary: Fault) -> Self {
                self.0.suppressed.push(secondary);
                self
            }
        }
    };
}

fault_class! {
    /// A declared failure mode of a dependency. The direct caller must absorb
    /// it (and log that it did) or rethrow it wrapped in a higher-level fault.
    Recoverable
}

fault_class! {
    /// A contract violation detected at runtime. Nothing below the boundary
    /// adapter handles it.
    Unrecoverable
}

fault_class! {
    /// The environment can no longer sustain execution. Business code never
    /// handles it; the top-level monitor logs it and the process terminates.
    Fatal
}

/// A fault of any class.
///
/// Operations declare the classes they can produce through their concrete
/// error type; `Fault` is what holds a fault once that precision is no longer
/// needed (a cause, a suppressed entry, the monitor's input).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    #[error(transparent)]
    Recoverable(#[from] Recoverable),
    #[error(transparent)]
    Unrecoverable(#[from] Unrecoverable),
    #[error(transparent)]
    Fatal(#[from] Fatal),
}

impl Fault {
    pub fn class(&self) -> FaultClass {
        match self {
            Fault::Recoverable(_) => FaultClass::Recoverable,
            Fault::Unrecoverable(_) => FaultClass::Unrecoverable,
            Fault::Fatal(_) => FaultClass::Fatal,
        }
    }

    pub fn detail(&self) -> &Detail {
        match self {
            Fault::Recoverable(f) => f.detail(),
            Fault::Unrecoverable(f) => f.detail(),
            Fault::Fatal(f) => f.detail(),
        }
    }

    pub fn kind(&self) -> FaultKind {
        self.detail().kind()
    }

    pub fn message(&self) -> &str {
        self.detail().message()
    }

    pub fn cause(&self) -> Option<&Fault> {
        self.detail().cause()
    }

    pub fn suppressed(&self) -> &[Fault] {
        self.detail().suppressed()
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Fault::Fatal(_))
    }

    /// This fault followed by its causes, outermost first.
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// The innermost cause, or the fault itself when it has none.
    pub fn root_cause(&self) -> &Fault {
        self.chain().last().unwrap_or(self)
    }

    /// Multi-line rendering of the whole chain, suppressed entries included.
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }
}

impl Sealed for Fault {
    fn suppress(self, secondary: Fault) -> Self {
        match self {
            Fault::Recoverable(f) => Fault::Recoverable(f.suppress(secondary)),
            Fault::Unrecoverable(f) => Fault::Unrecoverable(f.suppress(secondary)),
            Fault::Fatal(f) => Fault::Fatal(f.suppress(secondary)),
        }
    }
}

/// Iterator over a fault and its causes.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Fault>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Fault;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.cause();
        Some(current)
    }
}
