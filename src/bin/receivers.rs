use std::io::{self, Write};

use receivers::{DemoError, TEXT};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), DemoError> {
    // stdout carries the poem, so logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .try_init()?;

    info!(text = TEXT, "starting walkthrough");
    receivers::run(TEXT)?;
    io::stdout().flush()?;
    Ok(())
}
