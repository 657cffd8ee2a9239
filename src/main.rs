use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use memmap2::Mmap;
use rayon::prelude::*;
use sfxi::SuffixIndex;
use sfxi::index::stats;
use sfxi::index::types::{IndexConfig, StartOffset};
use sfxi::output;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sfxi")]
#[command(about = "Compressed suffix-trie text index")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Patterns to locate (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    patterns: Vec<String>,

    #[command(flatten)]
    input: InputArgs,

    /// Print machine-readable JSON
    #[arg(long)]
    json: bool,
}

/// Where the text to index comes from
#[derive(Args)]
struct InputArgs {
    /// Read the text from a file (memory-mapped)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Index a literal text argument
    #[arg(short, long)]
    text: Option<String>,

    /// Suppress the build progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Maximum text size accepted by the builder, in bytes
    #[arg(long)]
    max_size: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all starting positions of one or more patterns
    Positions {
        /// Patterns to locate
        #[arg(required = true)]
        patterns: Vec<String>,

        #[command(flatten)]
        input: InputArgs,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,

        /// Print plain offsets without line context
        #[arg(long)]
        offsets_only: bool,
    },
    /// Check whether a pattern occurs as a substring (exit 1 if absent)
    Contains {
        pattern: String,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Check whether a pattern is a full suffix of the text (exit 1 if not)
    Suffix {
        pattern: String,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the compressed trie's edge list
    Dump {
        #[command(flatten)]
        input: InputArgs,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,

        /// Maximum number of edges printed
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show index statistics
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

/// The original (unfolded) text, kept alive for output context
enum TextSource {
    Mapped(Mmap),
    Inline(String),
}

impl TextSource {
    fn as_bytes(&self) -> &[u8] {
        match self {
            TextSource::Mapped(mmap) => mmap,
            TextSource::Inline(text) => text.as_bytes(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Positions {
            patterns,
            input,
            json,
            offsets_only,
        }) => run_positions(&patterns, &input, json, offsets_only),
        Some(Commands::Contains { pattern, input }) => {
            let (index, _source) = open_index(&input)?;
            let found = index.contains_substring(&pattern);
            println!("{}", found);
            exit_bool(found)
        }
        Some(Commands::Suffix { pattern, input }) => {
            let (index, _source) = open_index(&input)?;
            let found = index.is_suffix(&pattern);
            println!("{}", found);
            exit_bool(found)
        }
        Some(Commands::Dump { input, json, limit }) => {
            let (index, _source) = open_index(&input)?;
            let edges = index.edges();
            if json {
                println!("{}", serde_json::to_string_pretty(&edges)?);
            } else {
                output::print_edges(&edges, limit, !input.no_color)?;
            }
            Ok(())
        }
        Some(Commands::Stats { input, json }) => {
            let (index, _source) = open_index(&input)?;
            if json {
                let report = stats::collect_stats(&index);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                stats::show_stats(&index);
            }
            Ok(())
        }
        None => {
            if cli.patterns.is_empty() {
                bail!("no pattern given; see `sfxi --help`");
            }
            run_positions(&cli.patterns, &cli.input, cli.json, false)
        }
    }
}

/// Load the input text and build the index over it
fn open_index(input: &InputArgs) -> Result<(SuffixIndex, TextSource)> {
    let source = load_text(input)?;
    let text = std::str::from_utf8(source.as_bytes()).context("input is not valid UTF-8")?;

    let mut config = IndexConfig::default();
    if let Some(max_size) = input.max_size {
        config.max_text_len = max_size;
    }

    let index = SuffixIndex::build_with_progress(text, &config, input.quiet)?;
    Ok((index, source))
}

fn load_text(input: &InputArgs) -> Result<TextSource> {
    match (&input.file, &input.text) {
        (Some(_), Some(_)) => bail!("pass either --file or --text, not both"),
        (Some(path), None) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let mmap = unsafe { Mmap::map(&file).context("Failed to map input file")? };
            Ok(TextSource::Mapped(mmap))
        }
        (None, Some(text)) => Ok(TextSource::Inline(text.clone())),
        (None, None) => bail!("no input: pass --file <PATH> or --text <STRING>"),
    }
}

fn run_positions(
    patterns: &[String],
    input: &InputArgs,
    json: bool,
    offsets_only: bool,
) -> Result<()> {
    let (index, source) = open_index(input)?;

    // The index is read-only after construction, so multi-pattern queries
    // fan out across threads without locking.
    let results: Vec<(&String, Vec<StartOffset>)> = if patterns.len() > 1 {
        patterns
            .par_iter()
            .map(|p| (p, index.positions(p)))
            .collect()
    } else {
        patterns.iter().map(|p| (p, index.positions(p))).collect()
    };

    if json {
        let matches: Vec<output::PositionMatch> = results
            .iter()
            .flat_map(|(pattern, offsets)| {
                output::resolve_matches(source.as_bytes(), pattern, offsets)
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    let heading = patterns.len() > 1;
    for (pattern, offsets) in &results {
        if offsets_only {
            output::print_offsets_only(pattern, offsets, !input.no_color)?;
        } else {
            output::print_pattern_matches(
                source.as_bytes(),
                pattern,
                offsets,
                heading,
                !input.no_color,
            )?;
        }
    }

    Ok(())
}

/// Mirror the boolean answer in the process exit status
fn exit_bool(value: bool) -> Result<()> {
    if value {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
