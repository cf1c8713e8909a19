use std::process::ExitCode;

use tracing::{error, info};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging();

    // route panics through tracing so JSON log collectors see them
    std::panic::set_hook(Box::new(|info| {
        error!(event = "panic", message = %info, "unhandled panic");
    }));

    let cfg = match server::startup::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "cannot start without a valid configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = cfg.server.worker_threads {
        builder.worker_threads(threads);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        pid = std::process::id(),
        threads = ?cfg.server.worker_threads,
        "gallinapp starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "gallinapp exited with an error");
            ExitCode::FAILURE
        }
    }
}
