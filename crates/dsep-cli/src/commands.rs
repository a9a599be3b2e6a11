use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use dsep_engine::{find_reachable_nodes, ConditioningSet, Query};
use dsep_graph::{AdjacencyMatrix, LoaderConfig, NodeIndex};
use serde::Serialize;
use tracing::debug;

use crate::cli::*;
use crate::config::CliConfig;

/// How node numbers are written on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Numbering {
    pub one_based: bool,
}

impl Numbering {
    fn node(self, number: usize) -> anyhow::Result<NodeIndex> {
        if !self.one_based {
            return Ok(NodeIndex::new(number));
        }
        match NodeIndex::from_one_based(number) {
            Some(node) => Ok(node),
            None => bail!("node numbers start at 1, got 0 (use --zero-based for 0-based input)"),
        }
    }

    fn given(self, numbers: &[usize]) -> anyhow::Result<ConditioningSet> {
        numbers.iter().map(|&n| self.node(n)).collect()
    }

    fn number(self, node: NodeIndex) -> usize {
        if self.one_based {
            node.one_based()
        } else {
            node.index()
        }
    }

    fn numbers<'a>(self, nodes: impl IntoIterator<Item = &'a NodeIndex>) -> Vec<usize> {
        nodes.into_iter().map(|&n| self.number(n)).collect()
    }
}

/// Result of `dsep check`, in command-line numbering.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub source: usize,
    pub target: usize,
    pub given: Vec<usize>,
    pub separated: bool,
    /// `TRUE` or `FALSE`, as printed in text mode.
    pub verdict: &'static str,
    pub reachable: Vec<usize>,
}

/// Result of `dsep reachable`, in command-line numbering.
#[derive(Debug, Serialize)]
pub struct ReachableReport {
    pub source: usize,
    pub given: Vec<usize>,
    pub reachable: Vec<usize>,
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let numbering = Numbering {
        one_based: config.one_based && !cli.zero_based,
    };
    debug!(?numbering, loader = ?config.loader, "resolved settings");

    match cli.command {
        Command::Check(args) => {
            let report = cmd_check(&args, &config.loader, numbering)?;
            match cli.format {
                OutputFormat::Text => println!("{}", report.verdict),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Command::Reachable(args) => {
            let report = cmd_reachable(&args, &config.loader, numbering)?;
            match cli.format {
                OutputFormat::Text => print_reachable(&report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
    }
    Ok(())
}

fn cmd_check(
    args: &CheckArgs,
    loader: &LoaderConfig,
    numbering: Numbering,
) -> anyhow::Result<CheckReport> {
    let graph = load_graph(&args.graph_file, loader)?;
    let query = Query::new(
        numbering.node(args.source)?,
        numbering.node(args.target)?,
        numbering.given(&args.given)?,
    );
    let outcome = query.run(&graph)?;

    Ok(CheckReport {
        source: args.source,
        target: args.target,
        given: numbering.numbers(&outcome.query.given),
        separated: outcome.separated,
        verdict: outcome.verdict(),
        reachable: numbering.numbers(&outcome.reachable),
    })
}

fn cmd_reachable(
    args: &ReachableArgs,
    loader: &LoaderConfig,
    numbering: Numbering,
) -> anyhow::Result<ReachableReport> {
    let graph = load_graph(&args.graph_file, loader)?;
    let source = numbering.node(args.source)?;
    let given = numbering.given(&args.given)?;
    let reachable = find_reachable_nodes(&graph, source, &given)?;

    Ok(ReachableReport {
        source: args.source,
        given: numbering.numbers(&given),
        reachable: numbering.numbers(&reachable),
    })
}

fn load_graph(path: &Path, loader: &LoaderConfig) -> anyhow::Result<AdjacencyMatrix> {
    AdjacencyMatrix::load(path, loader)
        .with_context(|| format!("loading graph from {}", path.display()))
}

fn print_reachable(report: &ReachableReport) {
    let nodes: Vec<String> = report.reachable.iter().map(|n| n.to_string()).collect();
    println!(
        "Reachable from {}: {}",
        report.source.to_string().bold(),
        if nodes.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            nodes.join(" ").green().to_string()
        }
    );
}
