pub mod commands;
pub mod core;
pub mod providers;
pub mod retriever;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    commands::query::{handle_query, QueryArgs},
    core::config::CatalogConfig,
    providers::catalog::CatalogClient,
    retriever::pipeline::Pipeline,
};

fn log_filter_from_env() -> EnvFilter {
    let level = std::env::var("POKEDEX_LOG").unwrap_or_else(|_| "warn".to_string());
    EnvFilter::try_new(level.to_ascii_lowercase()).unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter_from_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> ExitCode {
    init_logging();
    let args = QueryArgs::parse();

    let config = match CatalogConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };
    let pipeline = Pipeline::new(CatalogClient::new(config));

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("ERROR: failed to start async runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match runtime.block_on(handle_query(&pipeline, &args, &mut stdout)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
