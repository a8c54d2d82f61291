use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use kali_arsenal_mcp::config::{find_config_file, get_config, load_config, Config, ConfigFile};
use kali_arsenal_mcp::mcp::server::McpServer;
use kali_arsenal_mcp::models::{ReportKind, ScanType};
use kali_arsenal_mcp::{health, render, Catalog};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Kali Arsenal MCP - Bleeding edge cybersecurity tool catalog over MCP
#[derive(Parser, Debug)]
#[command(name = "kali-arsenal-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Bleeding edge Kali Linux tool catalog served over MCP", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show all environment variables
    #[arg(long, global = true)]
    env: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the complete arsenal overview
    #[command(alias = "info")]
    Arsenal,

    /// Show details for one tool category
    #[command(alias = "cat")]
    Category {
        /// Category name (e.g., "Information Gathering")
        name: String,
    },

    /// List all tool categories
    #[command(alias = "ls")]
    Categories {
        /// Show descriptions and enhancement flags
        #[arg(long, short)]
        detailed: bool,
    },

    /// Run a simulated security scan and print the transcript
    Scan {
        /// Scan target (hostname, IP or URL)
        target: String,

        /// Type of scan to simulate
        #[arg(long, short, value_enum, default_value_t = ScanType::Reconnaissance)]
        scan_type: ScanType,
    },

    /// Show bleeding edge repository status
    Status,

    /// Generate a security assessment report
    Report {
        /// Report format to generate
        #[arg(long, short, value_enum, default_value_t = ReportKind::Comprehensive)]
        report_type: ReportKind,
    },

    /// Run the MCP server (for Claude Desktop and other MCP clients)
    Serve {
        /// Run in stdio mode (for MCP clients like Claude Desktop)
        #[arg(long, default_value_t = true)]
        stdio: bool,

        /// Run in HTTP/SSE mode (overrides --stdio)
        #[arg(long)]
        http: bool,

        /// Port for SSE mode (if not using stdio)
        #[arg(long, short)]
        port: Option<u16>,

        /// Host to bind to for SSE mode
        #[arg(long)]
        host: Option<String>,

        /// Port for the standalone /health listener
        #[arg(long)]
        health_port: Option<u16>,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Write a default configuration file
    Init {
        /// Path to write (default: ./kali-arsenal.toml)
        #[arg(long, short)]
        path: Option<PathBuf>,
    },

    /// Show the effective configuration
    Show,
}

/// Print all available environment variables
fn print_env_vars() {
    println!("Kali Arsenal MCP - Environment Variables");
    println!();
    println!("Server Settings:");
    println!("  KALI_ARSENAL_SERVER__HOST         Host for the MCP HTTP/SSE transport (default: 127.0.0.1)");
    println!("  KALI_ARSENAL_SERVER__PORT         Port for the MCP HTTP/SSE transport (default: 7860)");
    println!("  KALI_ARSENAL_SERVER__HEALTH_PORT  Port for the /health listener (default: 7861)");
    println!();
    println!("Bleeding Edge Settings:");
    println!("  KALI_ARSENAL_BLEEDING_EDGE__ENABLED                 Enable bleeding edge enhancement (default: true)");
    println!("  KALI_ARSENAL_BLEEDING_EDGE__PRIORITY                Repository priority label (default: high)");
    println!("  KALI_ARSENAL_BLEEDING_EDGE__ADDITIONAL_TOOLS_COUNT  Experimental tool count (default: 150)");
    println!("  KALI_ARSENAL_BLEEDING_EDGE__UPDATE_FREQUENCY_HOURS  Repository sync interval (default: 4)");
    println!();
    println!("Other Settings:");
    println!("  RUST_LOG                    Rust logging level (e.g., debug, info, warn, error)");
    println!();
    println!("Example:");
    println!("  export KALI_ARSENAL_SERVER__PORT=\"8080\"");
    println!("  export KALI_ARSENAL_BLEEDING_EDGE__PRIORITY=\"normal\"");
    std::process::exit(0);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show environment variables and exit if requested
    if cli.env {
        print_env_vars();
    }

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("kali_arsenal_mcp={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        get_config()
    };

    let catalog = Arc::new(Catalog::new());

    match cli.command {
        Some(Commands::Arsenal) => {
            println!(
                "{}",
                render::arsenal_overview(&catalog, &config.bleeding_edge, &config.platform)
            );
        }

        Some(Commands::Category { name }) => {
            println!("{}", render::category_details(&catalog, &name));
        }

        Some(Commands::Categories { detailed }) => {
            output_categories(&catalog, detailed, cli.output);
        }

        Some(Commands::Scan { target, scan_type }) => {
            println!(
                "{}",
                render::scan_results(
                    &catalog,
                    &config.bleeding_edge,
                    &config.platform,
                    &target,
                    scan_type
                )
            );
        }

        Some(Commands::Status) => {
            println!(
                "{}",
                render::bleeding_edge_status(&config.bleeding_edge, &config.platform)
            );
        }

        Some(Commands::Report { report_type }) => {
            println!(
                "{}",
                render::security_report(
                    &catalog,
                    &config.bleeding_edge,
                    &config.platform,
                    report_type
                )
            );
        }

        Some(Commands::Serve {
            stdio,
            http,
            port,
            host,
            health_port,
        }) => {
            serve(
                catalog,
                &config,
                stdio,
                http,
                port,
                host,
                health_port,
            )
            .await?;
        }

        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { path } => {
                let path = path.unwrap_or_else(|| PathBuf::from("kali-arsenal.toml"));
                let file = ConfigFile::from(&config);
                file.save(&path)?;
                if !cli.quiet {
                    eprintln!("Wrote configuration to {}", path.display());
                }
            }
            ConfigCommands::Show => {
                let path = cli.config.clone().or_else(find_config_file);
                let file = config_file_for_show(path.as_ref(), &config)?;
                println!("{}", toml::to_string_pretty(&file)?);
            }
        },

        None => {
            // No command provided - show help
            println!("No command provided. Use --help for usage information.");
            println!("Common commands:");
            println!("  arsenal          - Show the complete arsenal overview");
            println!("  category <name>  - Show details for one category");
            println!("  scan <target>    - Run a simulated security scan");
            println!("  serve            - Run MCP server");
        }
    }

    Ok(())
}

async fn serve(
    catalog: Arc<Catalog>,
    config: &Config,
    stdio: bool,
    http: bool,
    port: Option<u16>,
    host: Option<String>,
    health_port: Option<u16>,
) -> Result<()> {
    let server = McpServer::new(catalog.clone(), config)?;

    // Use HTTP mode if --http flag is provided, otherwise use --stdio flag
    let use_http = http || !stdio;

    if use_http {
        let host = host.unwrap_or_else(|| config.server.host.clone());
        let port = port.unwrap_or(config.server.port);
        let health_port = health_port.unwrap_or(config.server.health_port);

        let health_addr = format!("{}:{}", host, health_port);
        let (_health_bound, _health_handle) =
            health::serve(&catalog, config, &health_addr).await?;

        let addr = format!("{}:{}", host, port);
        tracing::info!("Running MCP server in HTTP/SSE mode on {}", addr);
        let (bound_addr, handle) = server.run_http(&addr).await?;
        tracing::info!("MCP server listening on {}", bound_addr);

        // Wait for the server to finish
        handle
            .await
            .map_err(|e| anyhow::anyhow!("Server task failed: {}", e))?;
    } else {
        tracing::info!("Running MCP server in stdio mode");
        server.run().await?;
    }

    Ok(())
}

/// Pick what `config show` displays: the file on disk if one exists,
/// otherwise the effective defaults.
fn config_file_for_show(path: Option<&PathBuf>, config: &Config) -> Result<ConfigFile> {
    match path {
        Some(path) => Ok(ConfigFile::load(path)?),
        None => Ok(ConfigFile::from(config)),
    }
}

fn output_categories(catalog: &Catalog, detailed: bool, format: OutputFormat) {
    let actual_format = if format == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        format
    };

    match actual_format {
        OutputFormat::Json => {
            let categories: Vec<_> = catalog.all().collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&categories).unwrap_or_default()
            );
        }
        OutputFormat::Plain => {
            for category in catalog.all() {
                if detailed {
                    println!("{} ({} tools)", category.name, category.count);
                    println!("  {}", category.description);
                } else {
                    println!("{} - {} tools", category.name, category.count);
                }
            }
        }
        OutputFormat::Table => {
            use comfy_table::{Attribute, Cell, Table};
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            if detailed {
                table.set_header(vec!["Category", "Tools", "Bleeding Edge", "Description"]);
            } else {
                table.set_header(vec!["Category", "Tools"]);
            }

            for category in catalog.all() {
                if detailed {
                    table.add_row(vec![
                        Cell::new(&category.name).add_attribute(Attribute::Bold),
                        Cell::new(category.count),
                        Cell::new(if category.bleeding_edge_enhanced {
                            "enhanced"
                        } else {
                            "standard"
                        }),
                        Cell::new(&category.description),
                    ]);
                } else {
                    table.add_row(vec![
                        Cell::new(&category.name).add_attribute(Attribute::Bold),
                        Cell::new(category.count),
                    ]);
                }
            }
            println!("{table}");
        }
        OutputFormat::Auto => unreachable!(),
    }
}
