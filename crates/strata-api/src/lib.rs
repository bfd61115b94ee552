//! strata-api: the boundary adapter.
//!
//! Entry points here return text and never a fault. A transport binding sits
//! outside this crate and turns the text into its own wire representation.
pub mod envelope;

pub use envelope::{Envelope, respond};

use strata_app::{OutcomeLog, UseCases};
use strata_error::Unrecoverable;
use strata_gateway::ResourceGateway;
use strata_instrument::wrap;
use tracing::debug;

const NO_ARGS: [i64; 0] = [];

#[derive(Debug, Clone)]
pub struct EndPoint<G> {
    use_cases: UseCases<G>,
}

impl<G: ResourceGateway> EndPoint<G> {
    pub fn new(use_cases: UseCases<G>) -> Self {
        Self { use_cases }
    }

    pub fn use_cases(&self) -> &UseCases<G> {
        &self.use_cases
    }

    /// Never fails: the abort-on-fault outcome rendered as an envelope.
    pub fn boundary_handle(&self, id: i64) -> String {
        debug!("start processing boundary_handle");
        respond("boundary_handle", self.use_cases.abort_on_fault(id)).to_string()
    }

    /// Same contract as [`EndPoint::boundary_handle`], with the business call instrumented.
    pub fn boundary_handle_instrumented(&self, id: i64) -> String {
        debug!("start processing boundary_handle_instrumented");
        let result = wrap("abort_on_fault", &id, || self.use_cases.abort_on_fault(id));
        respond("boundary_handle_instrumented", result).to_string()
    }

    /// Never fails: the scoped-resource fault rendered as an envelope.
    pub fn scoped_handle(&self) -> String {
        debug!("start processing scoped_handle");
        respond("scoped_handle", self.use_cases.scoped_resource()).to_string()
    }

    pub fn resume_on_fault(&self, id: i64) -> String {
        self.use_cases.resume_on_fault(id).into_string()
    }

    pub fn abort_on_fault(&self, id: i64) -> Result<String, Unrecoverable> {
        self.use_cases.abort_on_fault(id).map(OutcomeLog::into_string)
    }

    /// Instrumented but unrendered: the fault is left to a central handler,
    /// i.e. [`respond`].
    pub fn fails_handled_by_wrapper(&self) -> Result<String, Unrecoverable> {
        wrap("fails_handled_by_wrapper", &NO_ARGS, || self.abort_on_fault(-1))
    }

    pub fn succeeds_handled_by_wrapper(&self) -> Result<String, Unrecoverable> {
        wrap("succeeds_handled_by_wrapper", &NO_ARGS, || self.abort_on_fault(1))
    }
}
