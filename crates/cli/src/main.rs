use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use lesbar_core::config::Directive;
use lesbar_core::fetch::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, is_url};
use lesbar_core::formatters::{ScoreOutput, TextConfig, format_analysis, format_audit, format_score, to_json};
use lesbar_core::{
    AnalyzerConfig, ConfigLoader, Document, FetchConfig, HixScorer, ProfileKind, SiteAnalyzer, SiteEntry, audit_html,
    audit_url, fetch_file, fetch_stdin, fetch_url, score_legacy,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// German readability scoring, sitemap content analysis and SEO/GEO audits
#[derive(Parser, Debug)]
#[command(name = "lesbar")]
#[command(author = "lesbar contributors")]
#[command(version)]
#[command(about = "German readability scoring and content analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// HTTP timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Custom User-Agent for HTTP requests
    #[arg(long, global = true, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score the readability of a text, file or URL
    Score(ScoreArgs),
    /// Analyse the articles of one or more sites from their sitemaps
    Analyze(AnalyzeArgs),
    /// Run an SEO/GEO audit of one page
    Audit(AuditArgs),
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// URL to fetch, local file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Treat the input as HTML and score its article text (implied for URLs)
    #[arg(long)]
    html: bool,

    /// Scoring profile (heuristic, precise)
    #[arg(long, default_value = "heuristic", value_name = "PROFILE")]
    profile: ProfileKind,

    /// Add the legacy HIX score
    #[arg(long)]
    legacy: bool,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Site configuration file (default: ~/.config/lesbar/sites.txt)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Additional site as NAME=SITEMAP_PATH
    #[arg(long = "site", value_name = "NAME=PATH")]
    sites: Vec<SiteEntry>,

    /// Delay between requests in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Args, Debug)]
struct AuditArgs {
    /// URL to fetch or local HTML file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Page URL to audit a local file as (default: its file:// URL)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    #[command(flatten)]
    out: OutputArgs,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lesbar_core=debug,lesbar=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fetch_config(cli: &Cli) -> FetchConfig {
    FetchConfig {
        timeout: cli.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS),
        user_agent: cli.user_agent.clone().unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
    }
}

fn text_config(verbose: bool) -> TextConfig {
    TextConfig { line_width: 80, include_breakdown: verbose }
}

fn write_output(out: &OutputArgs, output: &str) -> anyhow::Result<()> {
    match &out.output {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => println!("{}", output),
    }
    Ok(())
}

/// Reads the input and reports whether it must be treated as HTML.
async fn read_input(input: &str, fetch: &FetchConfig) -> anyhow::Result<(String, bool)> {
    if input == "-" {
        Ok((fetch_stdin().context("Failed to read from stdin")?, false))
    } else if is_url(input) {
        Ok((fetch_url(input, fetch).await.context("Failed to fetch URL")?, true))
    } else {
        Ok((fetch_file(input).with_context(|| format!("Failed to read file: {}", input))?, false))
    }
}

async fn run_score(cli: &Cli, args: &ScoreArgs) -> anyhow::Result<()> {
    if cli.verbose {
        echo::print_step(1, 2, &format!("Reading {}", args.input.bright_white()));
    }

    let (content, from_url) = read_input(&args.input, &fetch_config(cli)).await?;
    if cli.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(content.len()).bright_white());
    }

    let text = if args.html || from_url { Document::article_text_from_html(&content) } else { content };

    if cli.verbose {
        echo::print_step(2, 2, &format!("Scoring with the {} profile", args.profile.as_str()));
    }

    let profile = args.profile.load().context("Failed to load scoring profile")?;
    let output = ScoreOutput {
        verdict: HixScorer::with_profile(profile).score(&text),
        legacy: args.legacy.then(|| score_legacy(&text)),
    };

    let rendered = match args.out.format {
        OutputFormat::Text => format_score(&output, &text_config(cli.verbose)),
        OutputFormat::Json => to_json(&output, true).context("Failed to serialize score")?,
    };

    write_output(&args.out, &rendered)
}

fn analyzer_config(cli: &Cli, args: &AnalyzeArgs) -> anyhow::Result<AnalyzerConfig> {
    let loader = match &args.config {
        Some(path) => ConfigLoader::builder().path(path).build(),
        None => ConfigLoader::default(),
    };
    let mut config = loader.load().with_context(|| match loader.config_path() {
        Some(path) => format!("Failed to load config: {}", path.display()),
        None => "Failed to load config".to_string(),
    })?;

    for site in &args.sites {
        config.add_directive(Directive::Site(site.name.clone(), site.sitemap.clone()));
    }
    if let Some(timeout) = cli.timeout {
        config.add_directive(Directive::Timeout(timeout));
    }
    if let Some(user_agent) = &cli.user_agent {
        config.add_directive(Directive::UserAgent(user_agent.clone()));
    }
    if let Some(delay) = args.delay_ms {
        config.add_directive(Directive::DelayMs(delay));
    }

    tracing::debug!(sites = config.sites.len(), delay_ms = config.delay_ms, "loaded analyzer config");

    if config.sites.is_empty() {
        bail!("No sites configured: pass --site NAME=PATH or add 'site:' lines to the config file");
    }

    Ok(config)
}

async fn run_analyze(cli: &Cli, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let config = analyzer_config(cli, args)?;

    if cli.verbose {
        echo::print_step(1, 2, &format!("Analysing {} site(s)", config.sites.len()));
        echo::print_info(&format!("Delay between requests: {} ms", config.delay_ms));
    }

    let started = Instant::now();
    let analyzer = SiteAnalyzer::new(config).context("Failed to create analyzer")?;
    let run = analyzer.analyze_all().await;

    if cli.verbose {
        echo::print_step(2, 2, "Writing report");
        echo::print_run_summary(&run);
        echo::print_timing("Analysis", started.elapsed());
    } else {
        for skipped in &run.skipped {
            echo::print_warning(&format!("{} skipped: {}", skipped.name, skipped.reason));
        }
    }

    let rendered = match args.out.format {
        OutputFormat::Text => format_analysis(&run, &text_config(cli.verbose)),
        OutputFormat::Json => to_json(&run, true).context("Failed to serialize analysis")?,
    };

    write_output(&args.out, &rendered)
}

fn file_url(path: &str) -> anyhow::Result<String> {
    let absolute = fs::canonicalize(Path::new(path)).with_context(|| format!("Failed to resolve path: {}", path))?;
    url::Url::from_file_path(&absolute)
        .map(|u| u.to_string())
        .map_err(|_| anyhow::anyhow!("Cannot build a URL for {}", absolute.display()))
}

async fn run_audit(cli: &Cli, args: &AuditArgs) -> anyhow::Result<()> {
    if cli.verbose {
        echo::print_step(1, 1, &format!("Auditing {}", args.input.bright_white()));
    }

    let report = if is_url(&args.input) {
        audit_url(&args.input, &fetch_config(cli)).await.context("Failed to audit URL")?
    } else {
        let html = fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?;
        let url = match &args.url {
            Some(url) => url.clone(),
            None => file_url(&args.input)?,
        };
        audit_html(&url, &html, None).context("Failed to audit page")?
    };

    if cli.verbose {
        echo::print_info(&format!("Score: {}/100 ({})", report.score, report.rating));
    }

    let rendered = match args.out.format {
        OutputFormat::Text => format_audit(&report, &text_config(cli.verbose)),
        OutputFormat::Json => to_json(&report, true).context("Failed to serialize audit")?,
    };

    write_output(&args.out, &rendered)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        echo::print_banner();
    }

    match &cli.command {
        Command::Score(args) => run_score(&cli, args).await,
        Command::Analyze(args) => run_analyze(&cli, args).await,
        Command::Audit(args) => run_audit(&cli, args).await,
    }
}
