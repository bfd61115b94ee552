//! Coarse-grained classification of faults, fixed by the producer.
//!
//! - Recoverable: a declared failure mode of a dependency; its direct caller
//!   absorbs it or rewraps it into a higher-level fault.
//! - Unrecoverable: a contract violation; travels up to the boundary adapter.
//! - Fatal: the environment can no longer sustain execution; only the
//!   top-level monitor observes it, and only to log before terminating.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaultClass {
    Recoverable,
    Unrecoverable,
    Fatal,
}

impl FaultClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultClass::Recoverable => "recoverable",
            FaultClass::Unrecoverable => "unrecoverable",
            FaultClass::Fatal => "fatal",
        }
    }

    /// Whether business code below the boundary is allowed to handle this class.
    pub fn is_catchable(&self) -> bool {
        !matches!(self, FaultClass::Fatal)
    }
}

impl std::fmt::Display for FaultClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fatal_escapes_business_handling() {
        assert!(FaultClass::Recoverable.is_catchable());
        assert!(FaultClass::Unrecoverable.is_catchable());
        assert!(!FaultClass::Fatal.is_catchable());
    }

    #[test]
    fn classes_order_by_severity() {
        assert!(FaultClass::Recoverable < FaultClass::Unrecoverable);
        assert!(FaultClass::Unrecoverable < FaultClass::Fatal);
        assert_eq!(FaultClass::Recoverable.max(FaultClass::Fatal), FaultClass::Fatal);
    }
}
