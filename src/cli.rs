//! CLI definitions and entry point

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use ruleweave::Grammar;
use ruleweave::output::{OutputMode, ParseReport, RuleList};

/// ruleweave - Parse text with composable grammar rules
#[derive(Parser, Debug)]
#[command(
    name = "ruleweave",
    version,
    about = "Parse text with composable grammar rules",
    long_about = "Load a grammar file of named rules and read text with it.\n\n\
                  Rules reference each other by name. The result is a match tree\n\
                  that can be printed as an indented outline or as JSON."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read input with a grammar and print the match tree
    Parse {
        /// Grammar file (TOML)
        grammar: PathBuf,

        /// Entry rule (defaults to the grammar's entry)
        #[arg(short, long)]
        rule: Option<String>,

        /// Byte offset to start reading at
        #[arg(short, long, default_value_t = 0)]
        start: usize,

        #[command(flatten)]
        input: InputArgs,
    },

    /// List the rules of a grammar
    Rules {
        /// Grammar file (TOML)
        grammar: PathBuf,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Input text
    #[arg(short, long)]
    text: Option<String>,

    /// Read input from a file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl InputArgs {
    fn read(self) -> anyhow::Result<String> {
        match (self.text, self.file) {
            (Some(text), _) => Ok(text),
            (None, Some(path)) => fs::read_to_string(&path)
                .with_context(|| format!("failed to read input file {}", path.display())),
            (None, None) => anyhow::bail!("no input given"),
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Command::Parse {
            grammar,
            rule,
            start,
            input,
        } => parse(&grammar, rule.as_deref(), start, input, output_mode),
        Command::Rules { grammar } => {
            let registry = load(&grammar)?;
            RuleList::new(&registry).render(output_mode);
            Ok(ExitCode::SUCCESS)
        },
    }
}

fn load(path: &Path) -> anyhow::Result<ruleweave::Registry> {
    Grammar::load(path)
        .and_then(|grammar| grammar.to_registry())
        .with_context(|| format!("invalid grammar {}", path.display()))
}

fn parse(
    grammar: &Path,
    rule: Option<&str>,
    start: usize,
    input: InputArgs,
    output_mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let registry = load(grammar)?;
    let text = input.read()?;
    let entry = rule.unwrap_or_else(|| registry.default_entry()).to_string();

    log::debug!("reading {} bytes with {entry} from {start}", text.len());
    let m = registry.read_rule(&text, start, &entry)?;

    let report = ParseReport::new(&registry, &entry, &text, &m);
    report.render(output_mode);

    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
