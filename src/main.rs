use clap::Parser;
use site_extract::{Batch, handle_request, server};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let batch = match Batch::new(config) {
        Ok(batch) => batch,
        Err(e) => {
            ::log::error!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(addr) = &args.serve {
        return match server::serve(addr, batch).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                ::log::error!("Server error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let body = match args.request_body() {
        Ok(body) => body,
        Err(e) => {
            ::log::error!("Failed to read request: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let start_time = std::time::Instant::now();
    let response = handle_request(&batch, &body).await;
    ::log::info!(
        "Request finished with status {} in {:.2} seconds",
        response.status,
        start_time.elapsed().as_secs_f64()
    );

    println!("{:#}", response.body);

    if response.is_success() {
        ExitCode::SUCCESS
    } else if response.status < 500 {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}
