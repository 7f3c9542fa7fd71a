use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod input;
mod mcp;
mod models;
mod tools;

use config::ApiConfig;
use tools::registry::ToolRegistry;
use tools::transport::HttpTransport;

#[derive(Parser)]
#[command(name = "mcp-quotes")]
#[command(
    version,
    about = "MCP server exposing the They Said So quotes API as tools"
)]
struct Cli {
    #[command(flatten)]
    api: ApiArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct ApiArgs {
    /// Base URL of the quotes API
    #[arg(long, env = "API_BASE_URL", global = true)]
    base_url: Option<String>,
    /// Bearer token sent with every request
    #[arg(long, env = "API_BEARER_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,
    /// JSON config file used for values not given otherwise (default ~/.api/config.json)
    #[arg(long, env = "API_CONFIG", global = true)]
    config: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct CallArgs {
    /// Tool name, as listed by list-tools
    tool: String,
    /// Tool arguments as a JSON object
    #[arg(long)]
    args: Option<String>,
    /// Output the full tool result envelope as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP stdio server
    Serve {
        /// Serve MCP over stdio (NDJSON)
        #[arg(long)]
        stdio: bool,
    },
    /// Print the tool definitions
    ListTools,
    /// Invoke a single tool
    Call(CallArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();

    let registry = build_registry(&cli.api)?;

    match cli.command {
        Commands::Serve { stdio } => {
            if stdio {
                run_stdio_server(&registry)
            } else {
                anyhow::bail!("only --stdio transport is supported")
            }
        }
        Commands::ListTools => {
            let definitions = registry.definitions();
            let output = serde_json::to_string_pretty(&definitions)?;
            println!("{output}");
            Ok(())
        }
        Commands::Call(args) => run_call(&registry, args),
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mcp_quotes=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn build_registry(api: &ApiArgs) -> Result<ToolRegistry> {
    let config_path = api.config.clone().or_else(config::default_config_path);
    let config = ApiConfig::resolve(
        api.base_url.clone(),
        api.token.clone(),
        config_path.as_deref(),
    )
    .context("failed to load API configuration")?;
    let transport = HttpTransport::new().context("failed to build HTTP client")?;
    Ok(ToolRegistry::new(config, Box::new(transport)))
}

fn run_call(registry: &ToolRegistry, args: CallArgs) -> Result<()> {
    let arguments: Value = match &args.args {
        Some(raw) => serde_json::from_str(raw).context("--args must be valid JSON")?,
        None => json!({}),
    };
    let result = registry.call(&args.tool, &arguments);

    if result.is_error() {
        eprintln!("{}", result.text());
        process::exit(1);
    }

    if args.json {
        let output = serde_json::to_string_pretty(&result.into_value(Some(&args.tool)))?;
        println!("{output}");
    } else {
        println!("{}", result.text());
    }
    Ok(())
}

fn run_stdio_server(registry: &ToolRegistry) -> Result<()> {
    tracing::info!(
        tools = registry.tools().len(),
        base_url = %registry.config().base_url,
        authenticated = registry.config().has_token(),
        "starting MCP stdio server"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let reader = stdin.lock().lines();
    let mut writer = io::BufWriter::new(stdout.lock());

    for line in reader {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let request: Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "skipping unparseable request line");
                continue;
            }
        };

        let method = request.get("method").and_then(|value| value.as_str());
        let id = request.get("id").cloned();
        let response = match (method, id) {
            (Some("initialize"), Some(id)) => Some(rpc_result(
                id,
                json!({
                    "protocolVersion": mcp::contracts::PROTOCOL_VERSION,
                    "capabilities": {
                        "tools": {}
                    },
                    "serverInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION")
                    }
                }),
            )),
            (Some("ping"), Some(id)) => Some(rpc_result(id, json!({}))),
            (Some("tools/list"), Some(id)) => Some(rpc_result(
                id,
                json!({
                    "tools": registry.definitions()
                }),
            )),
            (Some("tools/call"), Some(id)) => {
                Some(rpc_result(id, handle_tool_call(registry, &request)))
            }
            (method, Some(id)) => {
                tracing::debug!(?method, "unknown method");
                Some(json!({
                    "jsonrpc": mcp::contracts::JSONRPC_VERSION,
                    "id": id,
                    "error": {
                        "code": mcp::contracts::METHOD_NOT_FOUND,
                        "message": format!("Method not found: {}", method.unwrap_or_default())
                    }
                }))
            }
            (method, None) => {
                tracing::debug!(?method, "ignoring notification");
                None
            }
        };

        if let Some(response) = response {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(writer, "{serialized}").context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }

    Ok(())
}

fn rpc_result(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": mcp::contracts::JSONRPC_VERSION,
        "id": id,
        "result": result
    })
}

fn handle_tool_call(registry: &ToolRegistry, request: &Value) -> Value {
    let params = request.get("params");
    let Some(params) = params.and_then(|value| value.as_object()) else {
        return tools::error_result(mcp::errors::INVALID_INPUT, "params must be an object", None);
    };

    let name = params.get("name").and_then(|value| value.as_str());
    let Some(name) = name else {
        return tools::error_result(
            mcp::errors::INVALID_INPUT,
            "params.name must be a string",
            None,
        );
    };

    let args = params
        .get("arguments")
        .filter(|value| !value.is_null())
        .cloned()
        .unwrap_or_else(|| json!({}));

    registry.call(name, &args).into_value(Some(name))
}
