use crate::extractor::{ModelExtractor, DEFAULT_MODELS_DIR};
use crate::serializer::{serialize, write_to_file};
use crate::swagger_builder::SwaggerBuilder;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info, warn};
use serde::Serialize;
use std::path::PathBuf;

pub const SWAGGER_COMMAND: &str = "swagger";
pub const SWAGGER_ALIAS: &str = "s";
pub const SWAGGER_ABOUT: &str = "Tool to generate a swagger file.";
/// Host command under which the `swagger` subcommand is listed
pub const HOST_COMMAND: &str = "generate";

/// Swagger generator - builds CRUD API documentation from the model structs of a project
#[derive(Parser, Debug)]
#[command(name = "swagger-from-models")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = SWAGGER_COMMAND, visible_alias = SWAGGER_ALIAS, about = SWAGGER_ABOUT)]
    Swagger(SwaggerArgs),

    /// Print the commands this tool contributes, as JSON
    Available,
}

#[derive(Args, Debug)]
pub struct SwaggerArgs {
    /// Path to the project directory
    #[arg(value_name = "PROJECT_PATH", default_value = ".")]
    pub project_path: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_path: Option<PathBuf>,

    /// Export as yaml
    #[arg(short = 'y', long = "yaml")]
    pub yaml: bool,

    /// Directory holding the model files, relative to the project path
    #[arg(long = "models-dir", value_name = "DIR", default_value = DEFAULT_MODELS_DIR)]
    pub models_dir: PathBuf,

    /// API title written to the info section
    #[arg(long, default_value = "Generated API")]
    pub title: String,

    /// API version written to the info section
    #[arg(long = "api-version", default_value = "1.0.0")]
    pub api_version: String,

    /// API description written to the info section
    #[arg(long)]
    pub description: Option<String>,

    /// Host serving the API, e.g. api.example.com
    #[arg(long)]
    pub host: Option<String>,

    /// Base path prefixed to every path, e.g. /v1
    #[arg(long = "base-path")]
    pub base_path: Option<String>,
}

/// One entry of the catalog printed by `available`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginCommand {
    pub name: String,
    pub buffalo_command: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

/// The fixed catalog of commands this tool contributes to its host.
pub fn available_commands() -> Vec<PluginCommand> {
    vec![PluginCommand {
        name: SWAGGER_COMMAND.to_string(),
        buffalo_command: HOST_COMMAND.to_string(),
        description: SWAGGER_ABOUT.to_string(),
        aliases: vec![SWAGGER_ALIAS.to_string()],
    }]
}

/// Validate and log already-parsed swagger arguments
pub fn validate_swagger_args(args: &SwaggerArgs) -> Result<()> {
    debug!("Parsed arguments: {:?}", args);

    if !args.project_path.exists() {
        anyhow::bail!(
            "Project path does not exist: {}",
            args.project_path.display()
        );
    }

    if !args.project_path.is_dir() {
        anyhow::bail!(
            "Project path is not a directory: {}",
            args.project_path.display()
        );
    }

    info!("Project path: {}", args.project_path.display());
    info!("Output format: {}", if args.yaml { "yaml" } else { "json" });
    match &args.output_path {
        Some(output) => info!("Output file: {}", output.display()),
        None => info!("Output: stdout"),
    }

    Ok(())
}

/// Run the selected subcommand
pub fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Swagger(swagger_args) => run_swagger(&swagger_args),
        Command::Available => run_available(),
    }
}

/// Extract the models of a project and write the generated document
pub fn run_swagger(args: &SwaggerArgs) -> Result<()> {
    validate_swagger_args(args)?;

    // Step 1: Extract models
    let extractor =
        ModelExtractor::new(args.project_path.clone()).with_models_dir(args.models_dir.clone());
    let extraction = extractor.extract()?;

    for diagnostic in &extraction.diagnostics {
        warn!("{}: {}", diagnostic.file.display(), diagnostic.reason);
    }
    if extraction.definitions.is_empty() {
        warn!("No models found in {}", extractor.models_path().display());
    }

    // Step 2: Build the document
    let mut builder = SwaggerBuilder::new()
        .with_info(
            args.title.clone(),
            args.api_version.clone(),
            args.description.clone(),
        )
        .with_host(args.host.clone())
        .with_base_path(args.base_path.clone());
    for definition in &extraction.definitions {
        builder.add_definition(definition);
    }
    let document = builder.build();

    // Step 3: Serialize and output
    let content = serialize(&document, args.yaml)?;
    match &args.output_path {
        Some(output_path) => {
            write_to_file(&content, output_path)?;
            info!("Wrote Swagger document to {}", output_path.display());
        }
        None => println!("{}", content),
    }

    info!("Summary:");
    info!("  - Models: {}", extraction.definitions.len());
    info!("  - Paths: {}", document.paths.len());
    info!("  - Skipped files: {}", extraction.diagnostics.len());

    Ok(())
}

/// Print the command catalog as a single JSON line
pub fn run_available() -> Result<()> {
    let catalog =
        serde_json::to_string(&available_commands()).context("Failed to serialize command list")?;
    println!("{}", catalog);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).unwrap()
    }

    fn swagger_args(args: &[&str]) -> SwaggerArgs {
        match parse(args).command {
            Command::Swagger(swagger) => swagger,
            other => panic!("expected swagger command, got {:?}", other),
        }
    }

    #[test]
    fn test_swagger_defaults() {
        let args = swagger_args(&["swagger-from-models", "swagger"]);

        assert_eq!(args.project_path, PathBuf::from("."));
        assert_eq!(args.output_path, None);
        assert!(!args.yaml);
        assert_eq!(args.models_dir, PathBuf::from("models"));
        assert_eq!(args.title, "Generated API");
        assert_eq!(args.api_version, "1.0.0");
    }

    #[test]
    fn test_swagger_positional_arguments_and_yaml_flag() {
        let args = swagger_args(&["swagger-from-models", "s", "./shop", "swagger.yaml", "-y"]);

        assert_eq!(args.project_path, PathBuf::from("./shop"));
        assert_eq!(args.output_path, Some(PathBuf::from("swagger.yaml")));
        assert!(args.yaml);
    }

    #[test]
    fn test_verbose_is_global() {
        let args = parse(&["swagger-from-models", "swagger", "--verbose"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_available_command() {
        let args = parse(&["swagger-from-models", "available"]);
        assert!(matches!(args.command, Command::Available));
    }

    #[test]
    fn test_available_catalog_json() {
        let json = serde_json::to_string(&available_commands()).unwrap();

        assert_eq!(
            json,
            r#"[{"name":"swagger","buffalo_command":"generate","description":"Tool to generate a swagger file.","aliases":["s"]}]"#
        );
    }

    #[test]
    fn test_validate_rejects_missing_project() {
        let args = swagger_args(&["swagger-from-models", "swagger", "/nonexistent/project"]);
        let err = validate_swagger_args(&args).unwrap_err();

        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_rejects_file_as_project() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("main.rs");
        fs::write(&file, "fn main() {}").unwrap();

        let args = swagger_args(&["swagger-from-models", "swagger", file.to_str().unwrap()]);
        let err = validate_swagger_args(&args).unwrap_err();

        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_run_swagger_writes_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let models = temp_dir.path().join("models");
        fs::create_dir(&models).unwrap();
        fs::write(models.join("pet.rs"), "pub struct Pet { pub name: String }").unwrap();
        let output = temp_dir.path().join("docs").join("swagger.yaml");

        let args = swagger_args(&[
            "swagger-from-models",
            "swagger",
            temp_dir.path().to_str().unwrap(),
            output.to_str().unwrap(),
            "--yaml",
            "--host",
            "api.example.com",
        ]);
        run_swagger(&args).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("host: api.example.com"));
        assert!(content.contains("operationId: addPet"));
    }
}
