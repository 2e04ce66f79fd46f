use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use shared_ancestry::report::{format_census, format_comparison, format_verdict};
use shared_ancestry::{
    count_parents, logging, parse_pair, AncestorIndex, ParentChildPair, Person,
    ThirdParentPolicy, SAMPLE_PAIRS,
};

const DEFAULT_QUERIES: [(Person, Person); 4] = [(3, 8), (5, 8), (6, 8), (1, 6)];

#[derive(Parser, Debug)]
#[command(name = "shared-ancestry")]
#[command(version)]
#[command(about = "Parent counts and shared-ancestor queries over (parent, child) pairs")]
struct Cli {
    /// A relationship; repeat to build the dataset (defaults to the sample pedigree)
    #[arg(long = "pair", value_name = "PARENT,CHILD", value_parser = parse_pair)]
    pairs: Vec<ParentChildPair>,

    /// Two people to compare; repeatable (defaults to 3,8 5,8 6,8 1,6)
    #[arg(long = "query", value_name = "A,B", value_parser = parse_pair)]
    queries: Vec<(Person, Person)>,

    /// Fail instead of dropping a third parent
    #[arg(long)]
    strict: bool,

    /// Also write the recorded relationships as Graphviz DOT
    #[arg(long, value_name = "PATH")]
    dot: Option<PathBuf>,

    /// Print both ancestor lists before each answer
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging().context("failed to set up logging")?;
    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}

/// Builds the index up front so that a rejected third parent fails before
/// any report is written.
fn run<W: Write>(cli: &Cli, output: &mut W) -> Result<()> {
    let pairs = if cli.pairs.is_empty() {
        SAMPLE_PAIRS.to_vec()
    } else {
        cli.pairs.clone()
    };
    let queries = if cli.queries.is_empty() {
        DEFAULT_QUERIES.to_vec()
    } else {
        cli.queries.clone()
    };
    let policy = if cli.strict {
        ThirdParentPolicy::Reject
    } else {
        ThirdParentPolicy::Drop
    };
    let index = AncestorIndex::from_pairs_with_policy(&pairs, policy)?;

    writeln!(output, "-- Exercise One --")?;
    writeln!(output, "{}", format_census(&count_parents(&pairs)))?;

    writeln!(output, "-- Exercise Two --")?;
    for (first, second) in queries {
        let comparison = index.compare(first, second);
        if cli.verbose {
            writeln!(output, "{}", format_comparison(&comparison))?;
        } else {
            writeln!(output, "{}", format_verdict(&comparison))?;
        }
    }

    if let Some(path) = &cli.dot {
        index
            .to_dot_file(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
