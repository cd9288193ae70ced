use std::process::ExitCode;

use basel_pi::{Config, approximate_pi};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Fixed filter; the binary reads no environment.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("basel_pi=warn"))
        .with_writer(std::io::stderr)
        .init();

    match approximate_pi::<f64>(&Config::default()) {
        Ok(pi) => {
            println!("{pi}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "pi approximation failed");
            ExitCode::FAILURE
        }
    }
}
