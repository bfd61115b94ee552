use std::fmt;

use strata_error::Fault;
use tracing::{error, info};

/// The caller-visible rendering of an entry point's outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Ok(String),
    ServerError(String),
}

impl Envelope {
    pub fn status(&self) -> u16 {
        match self {
            Envelope::Ok(_) => 200,
            Envelope::ServerError(_) => 500,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Envelope::Ok(body) | Envelope::ServerError(body) => body,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Envelope::Ok(_))
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Envelope::Ok(body) => write!(f, "200 OK : {body}"),
            Envelope::ServerError(message) => write!(f, "Error 500 due to : {message}"),
        }
    }
}

/// Render any outcome into an envelope; no fault gets past this point.
///
/// This is the one place the rendering rule lives. Entry points that handle
/// their faults by hand and entry points left to a central handler both end
/// up here, so they cannot drift apart.
pub fn respond<T, E>(operation: &str, result: Result<T, E>) -> Envelope
where
    T: fmt::Display,
    E: Into<Fault>,
{
    match result {
        Ok(value) => {
            let envelope = Envelope::Ok(value.to_string());
            info!("{operation} succeeded returns {envelope}");
            envelope
        }
        Err(fault) => {
            let fault: Fault = fault.into();
            error!(class = %fault.class(), "{operation} failed");
            error!("{operation} failed due to :\n{}", fault.report());
            Envelope::ServerError(fault.message().to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_error::{Fatal, FaultKind, Recoverable, Unrecoverable};

    #[test]
    fn success_renders_200() {
        let env = respond::<_, Fault>("op", Ok("body"));
        assert_eq!(env.to_string(), "200 OK : body");
        assert_eq!(env.status(), 200);
        assert!(env.is_ok());
    }

    #[test]
    fn every_class_renders_500_with_the_outer_message() {
        let outer = Unrecoverable::wrapping(
            FaultKind::BusinessDomain,
            "outer",
            Recoverable::new(FaultKind::InvalidInput, "inner"),
        );
        let env = respond::<String, _>("op", Err(outer));
        assert_eq!(env.to_string(), "Error 500 due to : outer");
        assert_eq!(env.status(), 500);
        assert_eq!(env.body(), "outer");

        let env = respond::<String, _>("op", Err(Recoverable::new(FaultKind::Io, "io")));
        assert_eq!(env.to_string(), "Error 500 due to : io");

        let env = respond::<String, _>("op", Err(Fatal::new(FaultKind::OutOfMemory, "oom")));
        assert_eq!(env.to_string(), "Error 500 due to : oom");
    }
}
