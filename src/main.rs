use std::path::{Path, PathBuf};

use clap::Parser;
use graphview::{RenderConfig, Variant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphview", about = "Render a JSON vertex/edge graph as an interactive HTML page")]
struct Cli {
    /// Graph JSON file, relative to --root
    #[arg(default_value = "graph.json")]
    input: PathBuf,

    /// Output HTML file, relative to --root
    #[arg(long, short = 'o', default_value = "vis/graph.html")]
    output: PathBuf,

    /// Directory relative paths are resolved against (defaults to the current directory)
    #[arg(long, env = "GRAPHVIEW_ROOT")]
    root: Option<PathBuf>,

    /// JSON file layered over the selected preset (relative to the working directory)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Base styling preset
    #[arg(long, value_enum, default_value_t = Variant::Styled)]
    variant: Variant,

    /// Log filter, e.g. `debug` or `graphview=trace` (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match run(&cli) {
        Ok(summary) => info!(
            nodes = summary.nodes,
            edges = summary.edges,
            output = %summary.output.display(),
            "done"
        ),
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> graphview::Result<graphview::RenderSummary> {
    let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let input = resolve(&root, &cli.input);
    let output = resolve(&root, &cli.output);
    debug!(root = %root.display(), input = %input.display(), output = %output.display(), "resolved paths");

    let config = match &cli.config {
        Some(path) => RenderConfig::load(path, cli.variant)?,
        None => RenderConfig::preset(cli.variant),
    };
    graphview::render_file(&input, &output, &config)
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
