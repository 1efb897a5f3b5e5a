use std::{env, io, process};

use lexical::{config::Config, run};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Logging stays off unless `RUST_LOG` is set, so stdout carries only the report.
fn init_tracing() {
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .with_target(true)
            .init();
    }
}

fn main() {
    init_tracing();

    let result = Config::from_args(env::args().skip(1))
        .and_then(|config| run(&config, &mut io::stdout().lock()));

    if let Err(e) = result {
        error!(kind = e.get_error_name(), "{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
