#![recursion_limit = "1024"]

use clap::{Parser, Subcommand};
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod input;
mod stats;
mod traversal;

error_chain! {
    foreign_links {
        Io(std::io::Error);
        ParseInt(std::num::ParseIntError);
        ParseFloat(std::num::ParseFloatError);
        Logger(log::SetLoggerError);
    }

    links {
        Graph(adjgraph::error::Error, adjgraph::error::ErrorKind);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }

        MalformedInput(reason: String) {
            description("the input graph is malformed")
            display("the input graph is malformed: {}", reason)
        }
    }
}

#[derive(Parser)]
#[clap(name = "adjgraph", version = env!("CARGO_PKG_VERSION"))]
pub struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        short,
        long,
        help = "The input graph: a line with the vertex and edge amounts, the vertex labels, and one 'source dest weight' line per edge"
    )]
    pub input: String,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Prints the vertex labels in depth-first preorder, covering the whole graph.")]
    Dfs,
    #[clap(about = "Prints the labels of the vertices reachable from the start vertex in breadth-first order.")]
    Bfs(traversal::BfsCommand),
    #[clap(
        about = "Prints the vertex that discovers the most new vertices in a breadth-first search from the start vertex, and how many."
    )]
    MaxNewChildren(traversal::MaxNewChildrenCommand),
    #[clap(about = "Prints statistics about the input graph.")]
    Stats,
}

// The main is unpacked from an error-chain macro.
// The real main (programmed manually) is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) -> Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;

    info!("Logging initialised successfully");
    Ok(())
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level)?;

    let loaded = input::read_graph_from_file(&options.input)?;

    match &options.subcommand {
        Command::Dfs => traversal::print_dfs(options, &loaded),
        Command::Bfs(subcommand) => traversal::print_bfs(options, subcommand, &loaded),
        Command::MaxNewChildren(subcommand) => {
            traversal::print_max_new_children(options, subcommand, &loaded)
        }
        Command::Stats => stats::print_stats(options, &loaded),
    }?;

    info!("Goodbye");
    Ok(())
}
