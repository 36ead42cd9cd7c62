use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mapgraph_lib::{
    load_graph, node_roster, plan_route_between, resolve, Graph, NodeId, RenderMode, Resolution,
    RouteAlgorithm, RouteSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Map graph pathfinding utilities")]
struct Cli {
    /// Path to the graph description file.
    #[arg(long, global = true, default_value = "mapgraph.json")]
    graph: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all nodes as (index, name) pairs.
    Nodes,
    /// Compute a route between two node tokens (name or index).
    Route {
        /// Starting node token. The literal "list" prints the roster instead.
        #[arg(long = "from")]
        from: String,
        /// Goal node token. The literal "list" prints the roster instead.
        #[arg(long = "to")]
        to: String,
        /// Pathfinding algorithm to run.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
        /// Output format.
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum AlgorithmArg {
    Dijkstra,
    #[value(name = "a-star")]
    AStar,
    BellmanFord,
    FirstPath,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
            AlgorithmArg::BellmanFord => RouteAlgorithm::BellmanFord,
            AlgorithmArg::FirstPath => RouteAlgorithm::FirstPath,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FormatArg {
    Text,
    Markdown,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Nodes => handle_nodes(&cli.graph),
        Command::Route {
            from,
            to,
            algorithm,
            format,
        } => handle_route(&cli.graph, &from, &to, algorithm.into(), format),
    }
}

fn handle_nodes(graph_path: &Path) -> Result<()> {
    let graph = load(graph_path)?;
    print_roster(&graph);
    Ok(())
}

fn handle_route(
    graph_path: &Path,
    from: &str,
    to: &str,
    algorithm: RouteAlgorithm,
    format: FormatArg,
) -> Result<()> {
    let graph = load(graph_path)?;

    let Some(start) = resolve_endpoint(&graph, from)? else {
        return Ok(());
    };
    let Some(goal) = resolve_endpoint(&graph, to)? else {
        return Ok(());
    };

    let plan = plan_route_between(&graph, algorithm, start, goal)?;
    let summary = RouteSummary::from_plan(&graph, &plan)?;

    match format {
        FormatArg::Text => print!("{}", summary.render(RenderMode::PlainText)),
        FormatArg::Markdown => print!("{}", summary.render(RenderMode::Markdown)),
        FormatArg::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

/// Resolve one endpoint token; a listing request prints the roster and ends
/// the run so the user can retry with a concrete token.
fn resolve_endpoint(graph: &Graph, token: &str) -> Result<Option<NodeId>> {
    match resolve(graph, token)? {
        Resolution::Node(id) => Ok(Some(id)),
        Resolution::ListRequested => {
            print_roster(graph);
            Ok(None)
        }
    }
}

fn print_roster(graph: &Graph) {
    for (id, name) in node_roster(graph) {
        println!("{id}. {name}");
    }
}

fn load(graph_path: &Path) -> Result<Graph> {
    load_graph(graph_path)
        .with_context(|| format!("failed to load graph from {}", graph_path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
