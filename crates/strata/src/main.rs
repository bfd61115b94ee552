use std::process::ExitCode;

fn main() -> color_eyre::Result<ExitCode> {
    strata::try_main()
}
