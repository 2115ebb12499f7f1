//! blogpost CLI: generate blog posts on fixed income investment strategies.
//!
//! The default invocation assembles one post from a post type and a topic and writes it
//! to stdout or a file. Two helper subcommands inspect the built-in catalog: `list` and
//! `check`.
//!
//! All assembly is delegated to [`blogpost_core::assembler::DocumentAssembler`].

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

const EXAMPLES: &str = "\
Examples:
  blogpost --type introductory --topic bond_investing
  blogpost --type strategy --topic diversification --output my_post.md
  blogpost --type analysis --topic risk_management
  blogpost list";

#[derive(Parser)]
#[command(
    name = "blogpost",
    about = "Generate blog posts on fixed income investment strategies",
    version,
    after_help = EXAMPLES,
    subcommand_negates_reqs = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args)]
struct GenerateArgs {
    /// Type of blog post to generate: introductory, strategy, analysis
    #[arg(long = "type", value_name = "TYPE", required = true)]
    post_type: Option<String>,

    /// Topic for the blog post: bond_investing, diversification, risk_management, market_analysis
    #[arg(long, required = true)]
    topic: Option<String>,

    /// Output file for the blog post (default: stdout)
    #[arg(long, short, env = "BLOGPOST_OUTPUT")]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available post types and topics
    List,

    /// Render every post type with every topic to validate the built-in catalog
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit with 1 like every other failure; --help and --version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize tracing on stderr; stdout carries the generated post.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::List) => commands::list::run(),
        Some(Commands::Check) => commands::check::run(),
        None => {
            let GenerateArgs {
                post_type,
                topic,
                output,
            } = cli.generate;
            let (Some(post_type), Some(topic)) = (post_type, topic) else {
                anyhow::bail!("both --type and --topic are required");
            };
            commands::generate::run(&post_type, &topic, output.as_deref()).await
        }
    }
}
