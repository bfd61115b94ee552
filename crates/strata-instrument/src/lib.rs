//! strata-instrument: timing and logging around any fallible operation.
//!
//! The wrapper knows nothing about fault classes. It logs what goes in, what
//! comes out and how long it took, then hands the operation's result back by
//! move, so a fault leaves the wrapper exactly as it entered.
use std::fmt;
use std::time::Instant;

use tracing::{debug, debug_span, error, field, info};

/// Run `f`, logging `operation` and `args` around it.
///
/// - DEBUG before the call,
/// - INFO with the elapsed time and the value on success,
/// - ERROR with the elapsed time and the fault on failure.
///
/// The call runs inside an `instrumented` span whose `duration_ms` field is
/// filled in once `f` returns.
pub fn wrap<A, T, E, F>(operation: &str, args: &A, f: F) -> Result<T, E>
where
    A: fmt::Debug + ?Sized,
    T: fmt::Display,
    E: fmt::Display,
    F: FnOnce() -> Result<T, E>,
{
    let span = debug_span!("instrumented", operation = %operation, duration_ms = field::Empty);
    let _entered = span.enter();

    debug!("receiving request for {operation} with arguments {args:?}");
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed().as_millis() as u64;
    span.record("duration_ms", elapsed);

    match &result {
        Ok(value) => info!(
            "processed request in {elapsed} ms for {operation} with arguments {args:?} returned {value}"
        ),
        Err(fault) => error!(
            "failed request in {elapsed} ms for {operation} with arguments {args:?} throwing {fault}"
        ),
    }
    result
}

/// Higher-order form of [`wrap`]: returns `f` with the same signature, instrumented.
///
/// ```rust
/// let double = strata_instrument::instrumented("double", |n: i64| -> Result<i64, String> {
///     Ok(n * 2)
/// });
/// assert_eq!(double(21), Ok(42));
/// ```
pub fn instrumented<A, T, E, F>(operation: &'static str, f: F) -> impl Fn(A) -> Result<T, E>
where
    A: fmt::Debug,
    T: fmt::Display,
    E: fmt::Display,
    F: Fn(A) -> Result<T, E>,
{
    move |args: A| {
        let shown = Rendered(format!("{args:?}"));
        wrap(operation, &shown, || f(args))
    }
}

/// Arguments already rendered with `Debug`, logged verbatim.
struct Rendered(String);

impl fmt::Debug for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
