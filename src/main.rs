//! Swagger generator - command-line tool for documenting the models of a project.
//!
//! Reads the structs declared in `<project>/models/*.rs` and writes a Swagger 2.0
//! document with list, create, read, update and delete endpoints for each of them.
//!
//! # Usage
//!
//! ```bash
//! swagger-from-models swagger [PROJECT_PATH] [OUTPUT_FILE] [--yaml]
//! swagger-from-models available
//! ```
//!
//! # Examples
//!
//! Generate JSON documentation:
//! ```bash
//! swagger-from-models swagger ./my-app swagger.json
//! ```
//!
//! Generate YAML documentation with verbose logging:
//! ```bash
//! swagger-from-models swagger ./my-app swagger.yaml -y -v
//! ```

use clap::Parser;
use log::info;
use swagger_from_models::cli;

fn main() {
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Swagger generator starting...");

    if let Err(e) = cli::run(args) {
        println!("{:#}", e);
        std::process::exit(1);
    }
}
