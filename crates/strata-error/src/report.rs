//! Chain rendering for logs.
//!
//! A report lists the fault, then each cause on its own `Caused by:` line.
//! Suppressed entries sit one tab deeper than the fault that owns them:
//!
//! ```text
//! BusinessDomain: wrap checked in unchecked due to Negative input[-1] is invalid
//! Caused by: InvalidInput: Negative input[-1] is invalid
//! 	Suppressed: Io: error at closing time
//! ```
use std::fmt;

use super::Fault;

#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    fault: &'a Fault,
}

impl<'a> Report<'a> {
    pub fn new(fault: &'a Fault) -> Self {
        Self { fault }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        render(f, self.fault, 0, "", &mut first)
    }
}

fn render(
    f: &mut fmt::Formatter<'_>,
    fault: &Fault,
    depth: usize,
    lead: &str,
    first: &mut bool,
) -> fmt::Result {
    if !*first {
        f.write_str("\n")?;
    }
    *first = false;
    for _ in 0..depth {
        f.write_str("\t")?;
    }
    write!(f, "{lead}{}: {}", fault.kind(), fault.message())?;

    for secondary in fault.suppressed() {
        render(f, secondary, depth + 1, "Suppressed: ", first)?;
    }
    if let Some(cause) = fault.cause() {
        render(f, cause, depth, "Caused by: ", first)?;
    }
    Ok(())
}
