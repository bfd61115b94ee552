use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strata_api::EndPoint;
use strata_error::Fault;
use strata_gateway::ResourceGateway;

#[derive(Debug, Parser)]
#[command(name = "strata", version, about = "Drive the layered fault-handling operations")]
pub struct Cli {
    /// Configuration file; defaults to `<config_dir>/strata/config.toml`.
    #[arg(long, global = true, env = "STRATA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Resume with a default result when the call is rejected.
    Resume {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Abort with a business fault when the call is rejected.
    Abort {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Render the abort outcome as a response envelope.
    Boundary {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(long)]
        instrumented: bool,
    },
    /// Hold a resource whose release fails while the call is rejected.
    Scoped,
    /// Call the operation that declares the environment unusable.
    Fatal,
    /// Call the operation that rejects negative ids as a contract violation.
    Unrecoverable {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

impl Command {
    /// Run against `endpoint`; whatever fault remains is left to the monitor.
    pub fn run<G: ResourceGateway>(&self, endpoint: &EndPoint<G>) -> Result<String, Fault> {
        let gateway = endpoint.use_cases().gateway();
        match *self {
            Command::Resume { id } => Ok(endpoint.resume_on_fault(id)),
            Command::Abort { id } => Ok(endpoint.abort_on_fault(id)?),
            Command::Boundary { id, instrumented: false } => Ok(endpoint.boundary_handle(id)),
            Command::Boundary { id, instrumented: true } => {
                Ok(endpoint.boundary_handle_instrumented(id))
            }
            Command::Scoped => Ok(endpoint.use_cases().scoped_resource()?),
            Command::Fatal => Ok(gateway.declare_fatal(1)?.to_string()),
            Command::Unrecoverable { id } => Ok(gateway.reject_unrecoverable(id)?.to_string()),
        }
    }
}
