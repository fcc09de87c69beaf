//! Shortest path command line tool.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Error};
use clap::Parser;
use log::info;

use spath_graph::{check_graph_size, persist, AdjacencyList, Edge, NodeId};
use spath_search::{PathOutcome, RelaxationSink, ShortestPathFinder, INFINITE};

use self::config::Config;

mod config;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let opts: Opts = Opts::parse();
    init_logger(opts.verbose);
    let config = Config::load(opts.config.as_deref())?;

    match opts.cmd {
        Command::Path(args) => find_path(&config, args),
        Command::Tree(args) => search_tree(&config, args),
        Command::New(args) => new_graph(args),
        Command::Check(args) => check_graph(&config, args),
    }
}

/// Build graphs and find shortest paths.
#[derive(Parser)]
#[clap(version, author = "The spath developers")]
struct Opts {
    /// Config file path (default `~/.spath.json`)
    #[clap(long = "config")]
    config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Find the shortest path between two nodes
    Path(PathArgs),
    /// Print the cost of reaching every node from a source
    Tree(TreeArgs),
    /// Build a graph from edges and write it out
    New(NewArgs),
    /// Validate a graph file
    Check(CheckArgs),
}

#[derive(clap::Args)]
struct PathArgs {
    /// Graph file (default taken from the config file)
    #[clap(short = 'g', long = "graph")]
    graph: Option<PathBuf>,

    /// Source node
    #[clap(short = 's', long = "from")]
    from: NodeId,

    /// Destination node
    #[clap(short = 'd', long = "to")]
    to: NodeId,

    /// Print every relaxed edge
    #[clap(long = "trace")]
    trace: bool,
}

#[derive(clap::Args)]
struct TreeArgs {
    /// Graph file (default taken from the config file)
    #[clap(short = 'g', long = "graph")]
    graph: Option<PathBuf>,

    /// Source node
    #[clap(short = 's', long = "from")]
    from: NodeId,
}

#[derive(clap::Args)]
struct NewArgs {
    /// Number of nodes
    #[clap(short = 'n', long = "nodes")]
    nodes: usize,

    /// Edge as `source,destination,weight` (can be repeated)
    #[clap(short = 'e', long = "edge")]
    edges: Vec<EdgeArg>,

    /// Output file (stdout if omitted)
    #[clap(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Graph file (default taken from the config file)
    #[clap(short = 'g', long = "graph")]
    graph: Option<PathBuf>,
}

/// Edge given on the command line.
#[derive(Clone, Debug)]
struct EdgeArg(Edge);

impl FromStr for EdgeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.split(',').map(str::trim).collect::<Vec<_>>();
        if fields.len() != 3 {
            return Err(format!("expected `source,destination,weight`, got `{}`", s));
        }
        let num = |name: &str, field: &str| field.parse::<usize>().map_err(|_| format!("{} `{}` is not a non-negative integer", name, field));
        let source = num("source", fields[0])?;
        let destination = num("destination", fields[1])?;
        let weight = fields[2].parse().map_err(|_| format!("weight `{}` is not a non-negative integer", fields[2]))?;
        Ok(EdgeArg(Edge::new(source, destination, weight)))
    }
}

/// Prints relaxed edges as they happen.
struct TraceSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> RelaxationSink for TraceSink<W> {
    fn on_edge_relaxed(&mut self, source: NodeId, destination: NodeId) {
        if self.error.is_none() {
            if let Err(e) = writeln!(self.out, "relax {} -> {}", source, destination) {
                self.error = Some(e);
            }
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn graph_path<'a>(arg: &'a Option<PathBuf>, config: &'a Config) -> Result<&'a Path, Error> {
    match arg.as_ref().or_else(|| config.graph.as_ref()) {
        Some(path) => Ok(path.as_path()),
        None => bail!("no graph file given, use --graph or set `graph` in the config file"),
    }
}

fn read_graph(path: &Path) -> Result<AdjacencyList, Error> {
    let file = File::open(path).with_context(|| format!("can't open graph file [{}]", path.display()))?;
    let graph = persist::load(BufReader::new(file)).with_context(|| format!("can't load graph file [{}]", path.display()))?;
    info!("loaded [{}]: {} nodes, {} edges", path.display(), graph.node_count(), graph.edge_count());
    Ok(graph)
}

fn find_path(config: &Config, args: PathArgs) -> Result<(), Error> {
    if args.from == args.to {
        bail!("source and destination must be different nodes");
    }
    let graph = read_graph(graph_path(&args.graph, config)?)?;
    let stdout = io::stdout();
    write_path(&graph, args.from, args.to, args.trace || config.trace, config.separator(), stdout.lock())
}

/// Search and print the path, preceded by the relaxed edges if `trace` is set.
fn write_path<W: Write>(graph: &AdjacencyList, from: NodeId, to: NodeId, trace: bool, separator: &str, mut out: W) -> Result<(), Error> {
    let finder = ShortestPathFinder::new(graph);
    let outcome = if trace {
        let mut sink = TraceSink { out: &mut out, error: None };
        let outcome = finder.find_with_sink(from, to, &mut sink)?;
        if let Some(e) = sink.error {
            return Err(e.into());
        }
        outcome
    } else {
        finder.find(from, to)?
    };

    match outcome {
        PathOutcome::Found(path) => writeln!(out, "{} (cost {})", path.join(separator), path.cost())?,
        no_path @ PathOutcome::NoPath { .. } => writeln!(out, "{}", no_path)?,
    }
    Ok(())
}

fn search_tree(config: &Config, args: TreeArgs) -> Result<(), Error> {
    let graph = read_graph(graph_path(&args.graph, config)?)?;
    let stdout = io::stdout();
    write_tree(&graph, args.from, stdout.lock())
}

/// Print `node<TAB>cost<TAB>predecessor` for every node, `-` where there is none.
fn write_tree<W: Write>(graph: &AdjacencyList, from: NodeId, mut out: W) -> Result<(), Error> {
    let run = ShortestPathFinder::new(graph).run(from)?;
    for node in 0..graph.node_count() {
        let cost = run.cost(node);
        let cost = if cost == INFINITE { "-".to_string() } else { cost.to_string() };
        let pred = run.predecessor(node).map_or_else(|| "-".to_string(), |p| p.to_string());
        writeln!(out, "{}\t{}\t{}", node, cost, pred)?;
    }
    Ok(())
}

fn new_graph(args: NewArgs) -> Result<(), Error> {
    let edges = args.edges.into_iter().map(|EdgeArg(edge)| edge).collect::<Vec<_>>();
    let graph = build_graph(args.nodes, &edges)?;

    match args.output {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("can't create [{}]", path.display()))?;
            persist::save(&graph, io::BufWriter::new(file))?;
            info!("graph written to [{}]", path.display());
        }
        None => {
            let stdout = io::stdout();
            persist::save(&graph, stdout.lock())?;
        }
    }
    Ok(())
}

/// Check the graph dimensions, then insert edges in order, stopping at the first rejected one.
fn build_graph(nodes: usize, edges: &[Edge]) -> Result<AdjacencyList, Error> {
    let total = edges.len();
    check_graph_size(nodes, total)?;

    let mut graph = AdjacencyList::new(nodes, total);
    graph.set_observer(move |count: usize| info!("[{} / {}] edges added", count, total));
    for &edge in edges {
        graph
            .insert_edge(edge)
            .with_context(|| format!("can't add edge {},{},{}", edge.source, edge.destination, edge.weight))?;
    }
    graph.clear_observer();
    Ok(graph)
}

fn check_graph(config: &Config, args: CheckArgs) -> Result<(), Error> {
    let graph = read_graph(graph_path(&args.graph, config)?)?;
    println!("nodes: {}, edges: {}", graph.node_count(), graph.edge_count());
    Ok(())
}
