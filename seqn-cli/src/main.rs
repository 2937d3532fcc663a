use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use seqn_core::{load_config, load_dictionary, load_tree, CoreResult, SeqnError};
use seqn_fprime::adaptation::{Adaptation, InputFormat, OutputFormat, OUTPUT_FORMAT_NAME};
use seqn_fprime::Linter;
use seqn_protocol::diagnostic::{Diagnostic, EditorView};
use seqn_protocol::tree::SyntaxTree;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "seqn-fprime")]
#[command(about = "Convert command sequences between SeqN and FPrime", long_about = None)]
struct Cli {
    /// Log filter, e.g. `debug` or `seqn_fprime=trace`
    #[arg(long, global = true, env = "SEQN_LOG_LEVEL")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite an FPrime sequence as SeqN
    FromFprime {
        /// FPrime file, or `-` for stdin
        input: PathBuf,
    },
    /// Convert a parsed SeqN sequence to FPrime
    ToFprime(ToFprimeArgs),
    /// Report FPrime time tag problems in a parsed SeqN sequence
    Lint(SequenceArgs),
    /// Show version information
    Version,
}

#[derive(Args)]
struct SequenceArgs {
    /// Syntax tree of the sequence, as JSON
    #[arg(long)]
    tree: PathBuf,
    /// SeqN source the tree was parsed from, or `-` for stdin
    #[arg(long)]
    source: PathBuf,
}

#[derive(Args)]
struct ToFprimeArgs {
    #[command(flatten)]
    sequence: SequenceArgs,
    /// Command dictionary (JSON or YAML)
    #[arg(long, env = "SEQN_DICTIONARY")]
    dictionary: Option<PathBuf>,
    /// Sequence name passed to the output format
    #[arg(long)]
    name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config().context("invalid SEQN_* configuration")?;

    let level = cli.log_level.as_deref().or(config.log_level.as_deref());
    seqn_core::logging::init_tracing(level).context("failed to initialise logging")?;
    debug!(
        dictionary = ?config.dictionary_path(),
        sequence_name = %config.sequence_name,
        "configuration loaded"
    );

    let adaptation = Adaptation::fprime();

    match cli.command {
        Commands::FromFprime { input } => {
            let text = read_input(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let sequence = adaptation.input_format.to_input_format(&text).await;
            println!("{}", sequence);
            Ok(ExitCode::SUCCESS)
        }
        Commands::ToFprime(args) => {
            let output = adaptation
                .output(OUTPUT_FORMAT_NAME)
                .ok_or_else(|| anyhow!("output format {OUTPUT_FORMAT_NAME} is not registered"))?;

            let (tree, source) = load_sequence(&args.sequence)?;
            let dictionary = args
                .dictionary
                .as_ref()
                .or(config.dictionary_path())
                .map(load_dictionary)
                .transpose()?;
            let name = args.name.unwrap_or(config.sequence_name);

            info!(sequence = %name, dictionary = dictionary.is_some(), "converting to fprime");
            let text = output
                .to_output_format(&tree, &source, dictionary.as_ref(), &name)
                .await;
            println!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lint(args) => {
            let linter = adaptation
                .input_format
                .linter()
                .ok_or_else(|| anyhow!("input format has no linter"))?;

            let (tree, source) = load_sequence(&args)?;
            let diagnostics =
                linter.lint(Vec::new(), None, &EditorView::new(&source), tree.top_node());

            println!("{}", serde_json::to_string_pretty(&diagnostics)?);
            if has_errors(&diagnostics) {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Version => {
            println!("seqn-fprime v{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Reads a file, or stdin when `path` is `-`.
fn read_input(path: &Path) -> CoreResult<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(fs::read_to_string(path)?)
}

/// Parsed tree and the source text it covers.
fn load_sequence(args: &SequenceArgs) -> Result<(SyntaxTree, String)> {
    let tree = load_tree(&args.tree).map_err(SeqnError::from)?;
    let source = read_input(&args.source)
        .with_context(|| format!("failed to read {}", args.source.display()))?;
    Ok((tree, source))
}

fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}
