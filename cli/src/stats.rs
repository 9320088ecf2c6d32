use crate::input::LoadedGraph;
use crate::CliOptions;
use adjgraph::algo::traversal::PreOrderDfs;
use adjgraph::{Graph, ImmutableGraphContainer, NavigableGraph};
use colored::*;
use log::{info, warn};

pub(crate) fn print_stats(_options: &CliOptions, loaded: &LoadedGraph) -> crate::Result<()> {
    let graph = &loaded.graph;
    info!("");
    info!("=== Statistics ===");
    info!("");

    println!("vertices: {}", graph.vertex_count());
    println!("edges: {}", graph.edge_count());

    let rejected_string = if loaded.rejected_vertices + loaded.rejected_edges == 0 {
        "none".to_string().normal()
    } else {
        format!(
            "{} duplicate vertices, {} edges with missing endpoints",
            loaded.rejected_vertices, loaded.rejected_edges
        )
        .red()
    };
    info!("Rejected input entries: {}", rejected_string);

    if graph.is_empty() {
        warn!("The graph is empty");
        return Ok(());
    }

    let out_degrees: Vec<f64> = graph
        .vertex_indices()
        .map(|vertex_id| graph.out_degree(vertex_id) as f64)
        .collect();
    let sinks = out_degrees.iter().filter(|&&degree| degree == 0.0).count();
    println!("sinks: {}", sinks);
    println!("median out-degree: {}", statistical::median(&out_degrees));
    println!("mean out-degree: {:.2}", statistical::mean(&out_degrees));

    let roots = count_dfs_roots(graph);
    let roots_string = if roots == 1 {
        "all vertices are reachable from the first vertex".to_string().green()
    } else {
        format!("{} depth-first search trees", roots).yellow()
    };
    println!("dfs roots: {} ({})", roots, roots_string);

    Ok(())
}

/// Returns the amount of trees in the depth-first search forest that visits roots in vertex-set order.
fn count_dfs_roots(graph: &Graph<String, f64>) -> usize {
    let mut dfs = PreOrderDfs::new_without_start(graph);
    let mut roots = 0;
    for root in graph.vertex_indices() {
        // Roots reached from an earlier root are rejected here.
        if dfs.continue_traversal_from(root) {
            roots += 1;
            dfs.by_ref().for_each(drop);
        }
    }
    roots
}

#[cfg(test)]
mod test {
    use crate::input::read_graph;
    use crate::stats::count_dfs_roots;

    #[test]
    fn test_count_dfs_roots() {
        let loaded = read_graph(&mut "0 0".as_bytes()).unwrap();
        assert_eq!(count_dfs_roots(&loaded.graph), 0);

        let loaded = read_graph(&mut "3 2 a b c a b 1 b c 1".as_bytes()).unwrap();
        assert_eq!(count_dfs_roots(&loaded.graph), 1);

        // c comes first in vertex-set order, so a and b form a second tree.
        let mut input = "4 2 c a b d a b 1 b c 1".as_bytes();
        let loaded = read_graph(&mut input).unwrap();
        assert_eq!(count_dfs_roots(&loaded.graph), 3);
    }
}
