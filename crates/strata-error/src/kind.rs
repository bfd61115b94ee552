/// Producer-side label for the condition behind a fault.
///
/// The kind never decides the class; it only names what went wrong so that
/// reports read like the layer that raised them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// A dependency refused its input in a way it declares up front.
    InvalidInput,
    /// A caller broke the contract of the operation it invoked.
    IllegalArgument,
    /// The process ran out of a resource it cannot do without.
    OutOfMemory,
    /// Reading, writing or closing a resource failed.
    Io,
    /// A business operation gave up and says why.
    BusinessDomain,
}

impl FaultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultKind::InvalidInput => "InvalidInput",
            FaultKind::IllegalArgument => "IllegalArgument",
            FaultKind::OutOfMemory => "OutOfMemory",
            FaultKind::Io => "Io",
            FaultKind::BusinessDomain => "BusinessDomain",
        }
    }
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
