//! strata-error: the fault taxonomy shared by every layer.
//!
//! A fault is produced with a class ([`Recoverable`], [`Unrecoverable`] or
//! [`Fatal`]) and keeps it for life. Operations declare what they can produce
//! through their error type; [`Fault`] holds a fault of any class once that
//! precision is no longer needed.
//!
//! Wrapping keeps the original as the cause. Secondary failures raised while
//! a fault unwinds are attached to it as suppressed entries (see [`scoped`]),
//! never allowed to replace it.
pub mod class;
pub mod fault;
pub mod kind;
pub mod policy;
pub mod pretty;
pub mod report;
pub mod result_ext;
pub mod scope;

// public exports
pub use class::FaultClass;
pub use fault::{Chain, Detail, Fatal, Fault, Recoverable, Unrecoverable};
pub use kind::FaultKind;
pub use policy::{CombinedPolicy, FaultPolicy, NoopPolicy};
#[cfg(all(feature = "tracing", feature = "serde"))]
pub use policy::StructuredPolicy;
#[cfg(feature = "tracing")]
pub use policy::TracingPolicy;
#[cfg(feature = "serde")]
pub use pretty::{FaultFields, PrettyDebug};
pub use report::Report;
pub use result_ext::ResultExt;
pub use scope::{Release, Suppress, scoped};

/// Result over a fault of any class.
pub type Result<T, E = Fault> = std::result::Result<T, E>;
