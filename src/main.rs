/// layer-audit: find where design variables, styles and layer roles are used
///
/// Loads a JSON snapshot of a design document and runs audits against it.
///
/// Commands:
/// - search: one fuzzy (variables/styles) or strict layer-name search
/// - serve: answer JSON-lines requests on stdin, one response per line on stdout
/// - layers: print the layer-role names accepted by strict search
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use layer_audit::handler::AuditHandler;
use layer_audit::report::format_outcome;
use layer_audit::search::SearchMode;
use layer_audit::source::{InMemorySource, SceneDataSource};
use layer_audit::tools::{
    AuditRequest, AuditResponse, FindLayerNamesTool, FindVariablesAndStylesTool,
};
use layer_audit::AuditConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{Level, debug, info};

#[derive(Parser)]
#[command(name = "layer-audit")]
#[command(about = "Audit variable, style and layer-name usage in design documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (TOML); built-in defaults when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Optional log file path for debug logging
    #[arg(short, long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single search against a scene snapshot
    Search {
        /// Scene snapshot (JSON)
        #[arg(short, long)]
        scene: PathBuf,

        /// "fuzzy" (variables and styles) or "layer-name"
        #[arg(short, long, default_value = "fuzzy")]
        mode: String,

        /// Override the snapshot selection with these node IDs
        #[arg(long = "select")]
        select: Vec<String>,

        /// Print the raw JSON response instead of a summary
        #[arg(long)]
        json: bool,

        /// Variable, style or layer name to look for
        query: String,
    },

    /// Answer JSON-lines requests on stdin
    Serve {
        /// Scene snapshot (JSON)
        #[arg(short, long)]
        scene: PathBuf,
    },

    /// List the layer-role names accepted by layer-name search
    Layers,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_ref())?;

    let config = Arc::new(match &cli.config {
        Some(path) => AuditConfig::load(path)?,
        None => AuditConfig::default(),
    });

    match cli.command {
        Commands::Search {
            scene,
            mode,
            select,
            json,
            query,
        } => run_search(config, scene, &mode, select, json, query).await,
        Commands::Serve { scene } => serve(config, scene).await,
        Commands::Layers => {
            for name in &config.layer_names.allowed {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

/// Filter used when RUST_LOG is unset: this crate at `level`, dependencies at warn
fn default_directive(level: Level) -> String {
    format!("warn,layer_audit={}", level.as_str().to_lowercase())
}

/// Directory and file name for the log appender
fn log_file_location(path: &Path) -> (PathBuf, PathBuf) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("layer-audit.log"));
    (dir, file)
}

/// Route tracing to stderr, or to `log_path` with warnings mirrored on stderr
///
/// stdout is reserved for responses.
fn init_logging(log_path: Option<&PathBuf>) -> Result<()> {
    use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

    let (writer, level, ansi) = match log_path {
        Some(path) => {
            let (dir, file) = log_file_location(path);
            let appender = tracing_appender::rolling::never(dir, file);
            let writer = appender.and(std::io::stderr.with_max_level(Level::WARN));
            (BoxMakeWriter::new(writer), Level::DEBUG, false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), Level::WARN, true),
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive(level)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(ansi)
        .with_writer(writer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    if let Some(path) = log_path {
        info!("📝 Logging to {}", path.display());
    }
    Ok(())
}

fn load_source(scene: &Path) -> Result<Arc<InMemorySource>> {
    let source = InMemorySource::from_path(scene)
        .with_context(|| format!("Failed to load scene snapshot {}", scene.display()))?;
    info!(
        "📂 Loaded {} ({} nodes)",
        scene.display(),
        source.scene().len()
    );
    Ok(Arc::new(source))
}

async fn run_search(
    config: Arc<AuditConfig>,
    scene: PathBuf,
    mode: &str,
    select: Vec<String>,
    json: bool,
    query: String,
) -> Result<()> {
    let mode: SearchMode = mode.parse()?;
    let source = load_source(&scene)?;

    if !select.is_empty() {
        let nodes = select
            .iter()
            .map(|id| {
                source
                    .scene()
                    .find(id)
                    .ok_or_else(|| anyhow!("Unknown node id in --select: {}", id))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("Selection overridden with {} nodes", nodes.len());
        source.set_selection(nodes);
    }

    let handler = AuditHandler::new(source, config);
    let request = match mode {
        SearchMode::Fuzzy => AuditRequest::FindVariablesAndStyles(FindVariablesAndStylesTool {
            search_term: query,
        }),
        SearchMode::StrictLayerName => AuditRequest::FindLayerNames(FindLayerNamesTool {
            search_term: query,
        }),
    };

    let response = handler.handle(request).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match response {
        AuditResponse::SearchResults(outcome) => print!("{}", format_outcome(&outcome)),
        AuditResponse::Error { message } => return Err(anyhow!(message)),
        AuditResponse::NodeSelected(_) => {}
    }
    Ok(())
}

async fn serve(config: Arc<AuditConfig>, scene: PathBuf) -> Result<()> {
    let source = load_source(&scene)?;
    let handler = AuditHandler::new(source, config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    info!("🚀 Serving requests on stdin");

    // One request at a time keeps searches strictly serialized
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<AuditRequest>(&line) {
            Ok(request) => handler.handle(request).await,
            Err(e) => AuditResponse::error(format!("Invalid request: {}", e)),
        };

        let mut payload = serde_json::to_string(&response)?;
        payload.push('\n');
        stdout.write_all(payload.as_bytes()).await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
