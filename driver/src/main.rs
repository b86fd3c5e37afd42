use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[derive(Debug, Parser)]
struct Args {
    /// Event-tape file, or a directory scanned for *.json tapes
    input: PathBuf,

    /// Directory the record files are written into
    #[arg(long, default_value = "records/")]
    out: PathBuf,

    /// Pretty-print the record JSON
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let args = Args::parse();

    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("driver") || meta.target().contains("correlation")
        }));
    tracing::subscriber::set_global_default(registry).unwrap();

    tracing::info!("Starting...");

    match driver::run(&args.input, &args.out, args.pretty) {
        Ok(processed) => {
            tracing::info!(processed, "Done");
        }
        Err(error) => {
            tracing::error!(%error, "Run failed");
            std::process::exit(1);
        }
    }
}
