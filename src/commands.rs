//! CLI command implementations

use primer_bootstrap::{
    BootstrapConfig, ConfigFile, DEFAULT_CONFIG_FILE, DirectoryReport, FsDirectoryEnsurer,
    Overrides, ProcessEnv, ensure_all,
};
use primer_core::{InitState, StateCell, SymbolTable, WeightMap, build_state};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Magnitudes printed by `show`.
const DISPLAY_MAGNITUDES: [u32; 11] = [4, 9, 10, 40, 50, 90, 100, 400, 500, 900, 1000];

/// Global CLI options shared by every command.
pub struct Options {
    pub root: PathBuf,
    pub config: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub workspace: Option<PathBuf>,
}

pub fn show(options: &Options, json: bool) -> anyhow::Result<()> {
    let cell = StateCell::new();
    let state = startup(options, &cell)?;

    if json {
        let output = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "state": state_json(state),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Graph node weights:");
        print!("{}", render_weights(&state.weights));
        println!();
        println!("Numerals:");
        print!("{}", render_numerals(&state.symbols));
    }
    Ok(())
}

pub fn lookup(options: &Options, magnitude: u32) -> anyhow::Result<()> {
    let cell = StateCell::new();
    let state = startup(options, &cell)?;

    match state.symbols.lookup(magnitude) {
        Some(symbol) => println!("{} = {}", magnitude, symbol),
        None => println!("{} has no symbol", magnitude),
    }
    Ok(())
}

pub fn check(options: &Options) -> anyhow::Result<()> {
    let config = load_config(options)?;
    let report = ensure_directories(options, &config);

    println!("Configuration values:");
    println!("User: {}", config.user);
    println!("Home: {}", config.home.display());
    println!("Workspace: {}", config.workspace.display());
    println!();
    println!("Verified directories:");
    print!("{}", render_report(&report));

    if !report.is_complete() {
        tracing::warn!("{} required directories are missing", report.failed.len());
    }
    Ok(())
}

/// Startup sequence: resolve configuration, repair required directories,
/// build the initial state and publish it into `cell`.
fn startup<'a>(options: &Options, cell: &'a StateCell) -> anyhow::Result<&'a InitState> {
    let config = load_config(options)?;
    ensure_directories(options, &config);

    Ok(cell.publish(build_state(&config.graph))?)
}

fn load_config(options: &Options) -> anyhow::Result<BootstrapConfig> {
    let env = match &options.env_file {
        Some(path) => ProcessEnv::with_env_file(path)?,
        None => ProcessEnv::new(),
    };

    let file = match &options.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_or_default(&options.root.join(DEFAULT_CONFIG_FILE))?,
    };

    let overrides = Overrides {
        workspace: options.workspace.clone(),
    };
    Ok(BootstrapConfig::resolve(&env, file, overrides))
}

fn ensure_directories(options: &Options, config: &BootstrapConfig) -> DirectoryReport {
    let paths = config.required_paths(&options.root);
    tracing::debug!("Ensuring {} required directories", paths.len());
    ensure_all(&FsDirectoryEnsurer, &paths)
}

fn render_weights(weights: &WeightMap) -> String {
    let mut out = String::new();
    for (id, weight) in weights.sorted() {
        let _ = writeln!(out, "Node {}: {}", id, weight);
    }
    out
}

fn render_numerals(symbols: &SymbolTable) -> String {
    let mut out = String::new();
    for magnitude in DISPLAY_MAGNITUDES {
        let symbol = symbols.lookup(magnitude).unwrap_or("?");
        let _ = writeln!(out, "{} = {}", magnitude, symbol);
    }
    out
}

fn render_report(report: &DirectoryReport) -> String {
    let mut out = String::new();
    for path in &report.present {
        let _ = writeln!(out, "- {} (exists)", path.display());
    }
    for path in &report.created {
        let _ = writeln!(out, "- {} (created)", path.display());
    }
    for err in &report.failed {
        let _ = writeln!(out, "- {} (missing: {})", err.path().display(), err);
    }
    out
}

fn state_json(state: &InitState) -> serde_json::Value {
    let mut nodes: Vec<_> = state.graph.nodes().collect();
    nodes.sort_unstable_by(|a, b| a.id.cmp(&b.id));

    // Nodes without edges get an empty list; edge sources that are not nodes
    // are listed too.
    let adjacency: serde_json::Map<String, serde_json::Value> = nodes
        .iter()
        .map(|node| node.id.as_str())
        .chain(state.graph.sources())
        .map(|id| (id.to_string(), serde_json::json!(state.graph.targets(id))))
        .collect();

    serde_json::json!({
        "nodes": nodes,
        "edges": adjacency,
        "weights": state.weights,
        "symbols": state.symbols,
    })
}
