//! Scoped acquisition: release on every exit path without losing the primary fault.
//!
//! The body runs first, release runs second, and only then is the outcome
//! assembled. When both fail, the release fault is appended to the primary
//! fault's suppressed list; it never takes the primary's place.
use super::Fault;

pub(crate) mod sealed {
    use crate::Fault;

    /// Unnameable outside this crate, so `suppress` can only be called from here.
    pub trait Sealed: Sized {
        fn suppress(self, secondary: Fault) -> Self;
    }
}

use sealed::Sealed;

/// Fault values that can record a secondary fault raised during their unwind.
///
/// A marker for [`scoped`]'s bound. The recording itself lives on a
/// crate-private trait, so a fault handed to a caller cannot gain entries.
///
/// ```compile_fail
/// use strata_error::{FaultKind, Recoverable, Suppress};
///
/// let fault = Recoverable::new(FaultKind::InvalidInput, "Negative input[-1] is invalid");
/// let _ = fault.suppress(Recoverable::new(FaultKind::Io, "late").into());
/// ```
pub trait Suppress: Sealed {}

impl<T: Sealed> Suppress for T {}

/// A resource that must be released when its scope ends.
pub trait Release {
    type Error: Into<Fault>;

    /// Consumes the resource; it cannot be touched after this call.
    fn release(self) -> Result<(), Self::Error>;
}

/// Run `body` against `resource`, then release it, whatever `body` returned.
///
/// | body | release | outcome |
/// |------|---------|---------|
/// | Ok   | Ok      | body's value |
/// | Ok   | Err     | release fault |
/// | Err  | Ok      | body's fault |
/// | Err  | Err     | body's fault, release fault suppressed on it |
pub fn scoped<R, T, E, F>(mut resource: R, body: F) -> Result<T, E>
where
    R: Release,
    E: Suppress + From<R::Error>,
    F: FnOnce(&mut R) -> Result<T, E>,
{
    let outcome = body(&mut resource);
    let released = resource.release();

    match (outcome, released) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(release_fault)) => Err(E::from(release_fault)),
        (Err(primary), Ok(())) => Err(primary),
        (Err(primary), Err(release_fault)) => Err(primary.suppress(release_fault.into())),
    }
}
