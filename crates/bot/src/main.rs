use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use ttd_bot::{config, discord, Dispatcher};
use ttd_dataset::ReferenceDataset;
use ttd_resolver::{process_message, Reply};

/// Dependency modules that flood the log at info level
const NOISY_MODULES: &[&str] = &["serenity", "tracing", "h2", "hyper", "rustls", "tungstenite"];

#[derive(Parser)]
#[command(name = "ttd-bot")]
#[command(about = "Answers %% references with TempleOS documentation links", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Reference data file (symbols and paths)
    #[arg(long, global = true, env = "TTD_BOT_DATA", default_value = "symbol.json")]
    data: PathBuf,

    /// Discord bot token (skips the config file)
    #[arg(long, global = true, env = "TTD_BOT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Config file holding the bot token (default: <config dir>/TTD_bot/config.json)
    #[arg(long, global = true, env = "TTD_BOT_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to Discord and answer references (default)
    Run,

    /// Resolve the references in TEXT offline and print the reply
    Lookup(LookupArgs),

    /// Print how many symbols and paths the data file holds
    Stats(StatsArgs),
}

#[derive(Args)]
struct LookupArgs {
    /// Message text, e.g. "%% Dbg %% /Home"
    text: String,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        None | Some(Commands::Run) => run_bot(&cli.data, cli.token, cli.config).await,
        Some(Commands::Lookup(args)) => run_lookup(&cli.data, args),
        Some(Commands::Stats(args)) => run_stats(&cli.data, args),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    if !verbose {
        for module in NOISY_MODULES {
            builder.filter_module(module, log::LevelFilter::Warn);
        }
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn load_dataset(path: &Path) -> Result<ReferenceDataset> {
    ReferenceDataset::load(path)
        .with_context(|| format!("Failed to load reference data from {}", path.display()))
}

async fn run_bot(data: &Path, token: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let dataset = load_dataset(data)?;

    let config_path = match config_path {
        Some(path) => path,
        None => config::default_config_path().context("Failed to locate config file")?,
    };
    let token = config::resolve_token(token, &config_path, config::prompt_token)
        .context("Failed to obtain bot token")?;

    let dispatcher = Dispatcher::new(Arc::new(dataset));
    discord::run(&token, dispatcher).await
}

fn run_lookup(data: &Path, args: LookupArgs) -> Result<()> {
    let dataset = load_dataset(data)?;
    let Some(reply) = process_message(&args.text, &dataset) else {
        log::debug!("No references in input");
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        print!("{}", render_plain(&reply));
    }
    Ok(())
}

fn run_stats(data: &Path, args: StatsArgs) -> Result<()> {
    let dataset = load_dataset(data)?;
    if args.json {
        let stats = serde_json::json!({
            "symbols": dataset.symbol_count(),
            "paths": dataset.path_count(),
        });
        println!("{stats}");
    } else {
        println!("symbols: {}", dataset.symbol_count());
        println!("paths: {}", dataset.path_count());
    }
    Ok(())
}

fn render_plain(reply: &Reply) -> String {
    let mut out = String::new();
    for field in reply.fields() {
        out.push_str(&field.name);
        out.push('\n');
        for line in field.value.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}
