use adjgraph::algo::predefined_graphs::{create_binary_tree, create_chain, create_random_graph};
use adjgraph::algo::traversal::{bfs, dfs, PreOrderBfs, PreOrderDfs};
use adjgraph::Graph;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_preorder_bfs_traversal_bintree_10(criterion: &mut Criterion) {
    let mut graph = Graph::<usize, ()>::new();
    let root = create_binary_tree(&mut graph, 10).unwrap().unwrap();
    let mut traversal = PreOrderBfs::new(&graph, root);

    criterion.bench_function("bfs_bintree_10", |b| {
        b.iter(|| {
            traversal.reset(root);
            for vertex in &mut traversal {
                black_box(vertex);
            }
        })
    });
}

fn bench_preorder_bfs_traversal_bintree_16(criterion: &mut Criterion) {
    let mut graph = Graph::<usize, ()>::new();
    let root = create_binary_tree(&mut graph, 16).unwrap().unwrap();
    let mut traversal = PreOrderBfs::new(&graph, root);

    criterion.bench_function("bfs_bintree_16", |b| {
        b.iter(|| {
            traversal.reset(root);
            for vertex in &mut traversal {
                black_box(vertex);
            }
        })
    });
}

fn bench_preorder_dfs_traversal_bintree_10(criterion: &mut Criterion) {
    let mut graph = Graph::<usize, ()>::new();
    let root = create_binary_tree(&mut graph, 10).unwrap().unwrap();
    let mut traversal = PreOrderDfs::new(&graph, root);

    criterion.bench_function("dfs_bintree_10", |b| {
        b.iter(|| {
            traversal.reset(root);
            for vertex in &mut traversal {
                black_box(vertex);
            }
        })
    });
}

fn bench_preorder_dfs_traversal_bintree_16(criterion: &mut Criterion) {
    let mut graph = Graph::<usize, ()>::new();
    let root = create_binary_tree(&mut graph, 16).unwrap().unwrap();
    let mut traversal = PreOrderDfs::new(&graph, root);

    criterion.bench_function("dfs_bintree_16", |b| {
        b.iter(|| {
            traversal.reset(root);
            for vertex in &mut traversal {
                black_box(vertex);
            }
        })
    });
}

fn bench_full_dfs_chain_100000(criterion: &mut Criterion) {
    let mut graph = Graph::<usize, ()>::new();
    create_chain(&mut graph, 100_000).unwrap();

    criterion.bench_function("full_dfs_chain_100000", |b| {
        b.iter(|| black_box(dfs(&graph)))
    });
}

fn bench_full_dfs_random_10000(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let mut graph = Graph::<usize, ()>::new();
    create_random_graph(&mut graph, 10_000, 30_000, &mut random).unwrap();

    criterion.bench_function("full_dfs_random_10000", |b| {
        b.iter(|| black_box(dfs(&graph)))
    });
}

fn bench_bfs_random_10000(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let mut graph = Graph::<usize, ()>::new();
    create_random_graph(&mut graph, 10_000, 30_000, &mut random).unwrap();
    let start = graph.vertex_set()[0].index();

    criterion.bench_function("bfs_random_10000", |b| {
        b.iter(|| black_box(bfs(&graph, start)))
    });
}

fn bench_remove_vertices_random_2000(criterion: &mut Criterion) {
    let mut random = StdRng::seed_from_u64(0);
    let mut graph = Graph::<usize, ()>::new();
    create_random_graph(&mut graph, 2_000, 8_000, &mut random).unwrap();

    criterion.bench_function("remove_vertices_random_2000", |b| {
        b.iter(|| {
            let mut graph = graph.clone();
            for vertex in (0..2_000).step_by(7) {
                black_box(graph.remove_vertex(&vertex));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_preorder_bfs_traversal_bintree_10,
    bench_preorder_bfs_traversal_bintree_16,
    bench_preorder_dfs_traversal_bintree_10,
    bench_preorder_dfs_traversal_bintree_16,
    bench_full_dfs_chain_100000,
    bench_full_dfs_random_10000,
    bench_bfs_random_10000,
    bench_remove_vertices_random_2000,
);
criterion_main!(benches);
