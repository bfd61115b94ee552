use strata_error::{FaultKind, Recoverable, Release};
use tracing::debug;

pub const CLOSING_FAILURE: &str = "error at closing time";

/// A handle whose release always fails with an I/O fault.
#[derive(Debug, Default)]
pub struct FailingHandle;

impl Release for FailingHandle {
    type Error = Recoverable;

    fn release(self) -> Result<(), Recoverable> {
        debug!("releasing scoped handle");
        Err(Recoverable::new(FaultKind::Io, CLOSING_FAILURE))
    }
}
