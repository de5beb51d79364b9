use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use loglens::LogLens;
use loglens::manager::SystemProfile;
use loglens::server::SearchServer;
use loglens::source;

#[derive(Parser, Clone, Debug)]
#[clap(author, version, about = "In-memory full-text search over Parquet log records", long_about = None)]
struct Args {
    /// Directory containing Parquet files
    #[clap(long, env = "LOGLENS_PARQUET_DIR")]
    parquet_dir: PathBuf,

    #[clap(long, env = "LOGLENS_ADDR", default_value = "0.0.0.0:8080")]
    addr: SocketAddr,

    /// Runtime worker threads (0 = one per core)
    #[clap(long, env = "LOGLENS_WORKERS", default_value = "0")]
    workers: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,loglens=info");
    }
    tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_target(false)
    .with_level(true)
    .init();

    let profile = SystemProfile::detect(args.workers);
    info!("Detected cores: {}, worker threads: {}", profile.logical_cores, profile.worker_threads);

    // Load phase: single writer, before anything is served
    let mut lens = LogLens::new();
    match source::load_directory(&mut lens, &args.parquet_dir) {
        Ok(report) => info!(
            "Loaded {} records from {} files ({} skipped), {} distinct terms",
            report.records, report.files_loaded, report.files_skipped, lens.term_count()
        ),
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }
    let lens = Arc::new(lens);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
    .worker_threads(profile.worker_threads)
    .enable_all()
    .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let server = SearchServer::new(lens);
    let result = runtime.block_on(server.run(args.addr, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutting down.");
    }));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
