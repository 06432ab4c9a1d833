#![forbid(unsafe_code)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prospect_viz::config::{self, SiteConfig};
use prospect_viz::{VizResult, build_cmd};

#[derive(Parser, Debug)]
#[command(name = "prospect-viz")]
#[command(about = "Static scatter-plot site generator for prospect release analysis", long_about = None)]
struct Cli {
    /// Path to the analysis dataset JSON
    #[arg(long)]
    data: Option<std::path::PathBuf>,

    /// Output directory for generated documents
    #[arg(long)]
    out: Option<std::path::PathBuf>,

    /// Site title shown on every generated page
    #[arg(long)]
    title: Option<String>,

    /// Optional TOML config file; explicit flags take precedence
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (or set PROSPECT_VIZ_LOG)
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("PROSPECT_VIZ_LOG").unwrap_or_else(|_| {
        if verbose { "prospect_viz=debug".to_string() } else { "prospect_viz=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn resolve_config(cli: &Cli) -> VizResult<SiteConfig> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_site_config(path)?,
        None => SiteConfig::default(),
    };
    if let Some(data) = &cli.data {
        cfg.data = data.clone();
    }
    if let Some(out) = &cli.out {
        cfg.out = out.clone();
    }
    if let Some(title) = &cli.title {
        cfg.title = title.clone();
    }
    Ok(cfg)
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = resolve_config(&cli).and_then(|cfg| build_cmd::run(&cfg));
    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
