//! Structured, log-friendly views of faults.
//!
//! Gated behind the `serde` feature so consumers that only need the taxonomy
//! do not pull in serialization.

#![cfg(feature = "serde")]

use serde::Serialize;

use super::{Fault, FaultClass, FaultKind};

/// Provide a structured view of a fault for logging and aggregation.
///
/// Implementors expose a lightweight set of serializable fields; callers can
/// choose between the raw fields, a `serde_json::Value`, or a pretty JSON
/// string for human consumption.
pub trait PrettyDebug {
    type Fields<'a>: Serialize + 'a
    where
        Self: 'a;

    fn fields(&self) -> Self::Fields<'_>;

    fn to_value(&self) -> Option<serde_json::Value> {
        serde_json::to_value(self.fields()).ok()
    }

    fn pretty_json(&self) -> Option<String> {
        serde_json::to_string_pretty(&self.fields()).ok()
    }

    /// Emit a tracing event with both the Display string and the compact JSON fields.
    #[cfg(feature = "tracing")]
    fn emit_tracing(&self, level: tracing::Level, message: &str)
    where
        Self: std::fmt::Display,
    {
        let fields = serde_json::to_string(&self.fields()).unwrap_or_default();
        match level {
            tracing::Level::ERROR => {
                tracing::event!(tracing::Level::ERROR, fault = %self, fields = %fields, "{message}")
            }
            tracing::Level::WARN => {
                tracing::event!(tracing::Level::WARN, fault = %self, fields = %fields, "{message}")
            }
            tracing::Level::INFO => {
                tracing::event!(tracing::Level::INFO, fault = %self, fields = %fields, "{message}")
            }
            tracing::Level::DEBUG => {
                tracing::event!(tracing::Level::DEBUG, fault = %self, fields = %fields, "{message}")
            }
            _ => {
                tracing::event!(tracing::Level::TRACE, fault = %self, fields = %fields, "{message}")
            }
        }
    }
}

/// Serializable mirror of a fault and everything it owns.
#[derive(Debug, Serialize)]
pub struct FaultFields<'a> {
    pub class: FaultClass,
    pub kind: FaultKind,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Box<FaultFields<'a>>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suppressed: Vec<FaultFields<'a>>,
}

impl PrettyDebug for Fault {
    type Fields<'a> = FaultFields<'a>;

    fn fields(&self) -> FaultFields<'_> {
        FaultFields {
            class: self.class(),
            kind: self.kind(),
            message: self.message(),
            cause: self.cause().map(|c| Box::new(c.fields())),
            suppressed: self.suppressed().iter().map(Fault::fields).collect(),
        }
    }
}
