//! litdoc CLI - literate source to Markdown documentation tool

mod watch;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use litdoc::config::{Config, LoadRequest};
use litdoc::{run_plan, BatchReport, JobPlan, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "litdoc")]
#[command(version)]
#[command(about = "Turn literate source files into Markdown documentation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every configured source into Markdown
    Build(SourceArgs),

    /// Print the resolved configuration as YAML
    Config(SourceArgs),

    /// Build once, then rebuild sources as they change
    Watch {
        #[command(flatten)]
        sources: SourceArgs,

        /// Debounce delay in milliseconds
        #[arg(long, default_value = "200")]
        debounce: u64,
    },

    /// Print the parsed document model of a source file as JSON
    Dump {
        /// Input source file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

/// Options shared by every command that reads the configuration.
#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Source pair INPUT:OUTPUT (repeatable)
    #[arg(long = "src", value_name = "INPUT:OUTPUT")]
    src: Vec<String>,

    /// Place code blocks directly beneath their prose
    #[arg(long)]
    inline: bool,

    /// Annotate code blocks with starting line numbers
    #[arg(long)]
    linenums: bool,

    /// Tag code blocks with a language hint
    #[arg(long)]
    highlights: bool,

    /// Add a title from the file name when the source has none
    #[arg(long)]
    title: bool,

    /// Emit a table of contents for documents with headings
    #[arg(long)]
    toc: bool,

    /// Configuration file (defaults to ./litdoc.yml)
    #[arg(short, long, value_name = "FILE", env = "LITDOC_CONFIG")]
    config: Option<PathBuf>,
}

impl SourceArgs {
    fn load(&self) -> Result<(Config, PathBuf), Box<dyn std::error::Error>> {
        let cwd = std::env::current_dir()?;
        let request = LoadRequest {
            src: self.src.clone(),
            options: RenderOptions::new()
                .with_inline(self.inline)
                .with_linenums(self.linenums)
                .with_highlights(self.highlights)
                .with_title(self.title)
                .with_toc(self.toc),
            config: self.config.clone(),
            cwd: cwd.clone(),
        };
        Ok((Config::load(&request)?, cwd))
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build(args)) => cmd_build(&args),
        Some(Commands::Config(args)) => cmd_config(&args),
        Some(Commands::Watch { sources, debounce }) => cmd_watch(&sources, debounce),
        Some(Commands::Dump { input, compact }) => cmd_dump(&input, compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: litdoc <build|config|watch|dump> [OPTIONS]".yellow());
            println!("       litdoc --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_build(args: &SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (config, cwd) = args.load()?;
    let report = build(&config.plan(&cwd));
    print_report(&report);

    if !report.is_success() {
        let message = format!(
            "{} of {} conversions failed",
            report.failed.len(),
            report.total()
        );
        return Err(message.into());
    }
    Ok(())
}

/// Run a full build with a progress bar.
fn build(plan: &JobPlan) -> BatchReport {
    let pb = ProgressBar::new(plan.jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let report = run_plan(plan, |job, _| {
        pb.set_message(job.input.display().to_string());
        pb.inc(1);
    });

    pb.finish_and_clear();
    report
}

fn print_report(report: &BatchReport) {
    for result in &report.succeeded {
        println!(
            "  {} {} -> {}",
            "├─".dimmed(),
            result.input.display(),
            result.output.display()
        );
    }
    for failure in &report.failed {
        println!(
            "  {} {} ({}): {}",
            "✗".red(),
            failure.input.display(),
            failure.kind,
            failure.message
        );
    }

    let stats = report.stats();
    println!(
        "\n{} {} converted, {} failed ({} code blocks, {} headings)",
        "Done!".green().bold(),
        report.succeeded.len(),
        report.failed.len(),
        stats.code_segments,
        stats.headings
    );
}

fn cmd_config(args: &SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (config, _) = args.load()?;
    print!("{}", config.to_yaml()?);
    Ok(())
}

fn cmd_watch(args: &SourceArgs, debounce_ms: u64) -> Result<(), Box<dyn std::error::Error>> {
    let (config, cwd) = args.load()?;
    let plan = config.plan(&cwd);
    let report = build(&plan);
    print_report(&report);

    println!(
        "{} {} sources (Ctrl-C to stop)",
        "Watching".cyan().bold(),
        plan.jobs.len()
    );
    watch::watch(&plan.jobs, debounce_ms)?;
    Ok(())
}

fn cmd_dump(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    println!("{}", litdoc::to_json(input, format)?);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "litdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Literate source to Markdown documentation tool");
    println!();
    println!("License: MIT");
}
