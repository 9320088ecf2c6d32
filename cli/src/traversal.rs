use crate::input::LoadedGraph;
use crate::{CliOptions, Error, ErrorKind};
use adjgraph::{ImmutableGraphContainer, VertexIndex};
use clap::Parser;
use log::{error, info};

#[derive(Parser)]
pub struct BfsCommand {
    #[clap(short, long, help = "The label of the vertex to start the search from")]
    pub start: String,
}

#[derive(Parser)]
pub struct MaxNewChildrenCommand {
    #[clap(short, long, help = "The label of the vertex to start the search from")]
    pub start: String,
}

fn find_start(loaded: &LoadedGraph, label: &str) -> crate::Result<VertexIndex<usize>> {
    loaded.graph.find_vertex(&label.to_owned()).ok_or_else(|| {
        error!("Start vertex '{}' does not exist", label);
        Error::from(ErrorKind::Parameter)
    })
}

pub(crate) fn print_dfs(_options: &CliOptions, loaded: &LoadedGraph) -> crate::Result<()> {
    info!("Computing depth-first order of the whole graph...");
    let order = loaded.graph.dfs();
    info!("Visited {} vertices", order.len());
    println!("{}", order.join(" "));
    Ok(())
}

pub(crate) fn print_bfs(
    _options: &CliOptions,
    subcommand: &BfsCommand,
    loaded: &LoadedGraph,
) -> crate::Result<()> {
    let start = find_start(loaded, &subcommand.start)?;
    info!("Computing breadth-first order from '{}'...", subcommand.start);
    let order = loaded.graph.bfs(start);
    info!(
        "Reached {} of {} vertices",
        order.len(),
        loaded.graph.vertex_count()
    );
    println!("{}", order.join(" "));
    Ok(())
}

pub(crate) fn print_max_new_children(
    _options: &CliOptions,
    subcommand: &MaxNewChildrenCommand,
    loaded: &LoadedGraph,
) -> crate::Result<()> {
    info!("Searching the vertex with the most new children from '{}'...", subcommand.start);
    println!("{}", max_new_children_line(loaded, &subcommand.start)?);
    Ok(())
}

/// Formats the vertex with the most new children as `label children`.
fn max_new_children_line(loaded: &LoadedGraph, start: &str) -> crate::Result<String> {
    let start = find_start(loaded, start)?;
    let (children, label) = loaded
        .graph
        .max_new_children(start)
        .ok_or_else(|| Error::from(ErrorKind::Parameter))?;
    Ok(format!("{} {}", label, children))
}

#[cfg(test)]
mod test {
    use crate::input::read_graph;
    use crate::traversal::{find_start, max_new_children_line};
    use crate::ErrorKind;

    #[test]
    fn test_unknown_start_label() {
        let loaded = read_graph(&mut "2 1 a b a b 1".as_bytes()).unwrap();
        assert!(find_start(&loaded, "a").is_ok());

        let error = find_start(&loaded, "c").unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::Parameter));
        let error = max_new_children_line(&loaded, "c").unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::Parameter));
    }

    #[test]
    fn test_max_new_children_line() {
        let mut input = "5 4 r x y z w r x 1 x y 1 x z 1 x w 1".as_bytes();
        let loaded = read_graph(&mut input).unwrap();
        assert_eq!(max_new_children_line(&loaded, "r").unwrap(), "x 3");
        assert_eq!(max_new_children_line(&loaded, "w").unwrap(), "w 0");
    }
}
