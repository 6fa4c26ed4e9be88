use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Similarity-based text categorization for XML corpora
#[derive(Parser, Debug)]
#[command(name = "categorix")]
#[command(about = "Categorize XML problem records against a labeled reference corpus", long_about = None)]
struct Args {
    /// Path to the labeled reference XML file
    #[arg(short, long)]
    reference: PathBuf,

    /// Path to the target XML file to categorize
    #[arg(short, long)]
    target: PathBuf,

    /// Directory the annotated result document is written to
    #[arg(short, long, default_value = "./out")]
    output_dir: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting categorix v{}", env!("CARGO_PKG_VERSION"));
    info!("Reference file: {:?}", args.reference);
    info!("Target file: {:?}", args.target);
    info!("Output directory: {:?}", args.output_dir);

    let summary = categorix_engine::run(&args.reference, &args.target, &args.output_dir)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
