use dotenvy::dotenv;
use tracing::{error, info};

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG and the config env overrides are visible to
    // everything below.
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");
    std::panic::set_hook(Box::new(move |info| {
        error!(pid, message = %info, "unhandled panic");
    }));
    info!(pid, version, "site server starting");

    // Size the runtime from config when it parses; a broken config still gets
    // a default runtime so server::run can report the actual error.
    let worker_threads = configs::AppConfig::load_and_validate()
        .map(|cfg| cfg.server.worker_threads)
        .unwrap_or(None)
        .or_else(|| {
            std::env::var("TOKIO_WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
        });

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(n) = worker_threads {
        builder.worker_threads(n);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    // Ctrl+C handling lives inside run(): the listener drains in-flight
    // requests before the process exits.
    match rt.block_on(server::run()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "site server exited with error");
            std::process::ExitCode::FAILURE
        }
    }
}
