use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::debug;

use clientgen_core::config::{self, CONFIG_FILE_NAME, ClientgenConfig};
use clientgen_core::ir::ApiSpec;
use clientgen_core::{CodeGenerator, output, parse, transform};
use clientgen_postman::PostmanGenerator;
use clientgen_typescript::TypeScriptClientGenerator;

#[derive(Parser)]
#[command(
    name = "clientgen",
    about = "Generate a TypeScript fetch client and Postman collections from an OpenAPI document",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the client tree and the Postman collections
    Generate {
        /// Path to the OpenAPI document (JSON, or YAML by extension)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory for the generated client modules (cleared on every run)
        #[arg(long)]
        client_output: Option<PathBuf>,

        /// Directory for the Postman collections (never cleared)
        #[arg(long)]
        collections_output: Option<PathBuf>,
    },

    /// Print the endpoints grouped by tag
    Inspect {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Write a default .clientgen.yaml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            client_output,
            collections_output,
        } => cmd_generate(input, client_output, collections_output).await,

        Commands::Inspect { input, format } => cmd_inspect(&input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "clientgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load `.clientgen.yaml` from the current directory, or defaults when absent.
fn load_config() -> Result<ClientgenConfig> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let cfg = config::load_config(&config_path)?;
    if cfg.is_none() {
        debug!("no {CONFIG_FILE_NAME} found, using defaults");
    }
    Ok(cfg.unwrap_or_default())
}

fn load_spec(path: &Path) -> Result<ApiSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let document = match ext {
        "yaml" | "yml" => parse::from_yaml(&content),
        _ => parse::from_json(&content),
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(transform::build_api_spec(&document))
}

fn report_written(paths: &[PathBuf]) {
    for path in paths {
        eprintln!("  wrote {}", path.display());
    }
}

async fn cmd_generate(
    input: Option<PathBuf>,
    client_output: Option<PathBuf>,
    collections_output: Option<PathBuf>,
) -> Result<()> {
    let cfg = load_config()?;
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let client_dir = client_output.unwrap_or_else(|| PathBuf::from(&cfg.client_output));
    let collections_dir =
        collections_output.unwrap_or_else(|| PathBuf::from(&cfg.collections_output));

    let api = load_spec(&input)?;

    let client_files = TypeScriptClientGenerator::with_aliases(cfg.naming.aliases.clone())
        .generate(&api)
        .context("failed to render client modules")?;
    let collection_files = PostmanGenerator
        .generate(&api)
        .context("failed to render Postman collections")?;

    eprintln!("Generating client → {}", client_dir.display());
    let written = output::replace_dir(&client_dir, &client_files)?;
    report_written(&written);

    eprintln!("Generating collections → {}", collections_dir.display());
    let written = output::write_all_concurrent(&collections_dir, collection_files).await?;
    report_written(&written);

    eprintln!(
        "Generated {} tag modules ({} endpoints)",
        api.groups.len(),
        api.endpoint_count()
    );
    Ok(())
}

fn cmd_inspect(input: &Path, format: InspectFormat) -> Result<()> {
    let api = load_spec(input)?;

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&api)?;
            print!("{yaml}");
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&api)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
