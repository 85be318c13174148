//! Performance benchmarks for filestruct

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use filestruct::output::indent_for;
use filestruct::test_utils::TestDir;
use filestruct::{OutputConfig, SiblingOrder, TreeConfig, generate, render_to_string};

/// Root with `dirs` subdirectories holding `files_per_dir` files each.
fn create_wide_tree(dirs: usize, files_per_dir: usize) -> TestDir {
    let dir = TestDir::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            dir.add_file(&format!("dir_{}/file_{}.txt", d, f), "");
        }
    }
    dir
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_to_string");
    let config = OutputConfig::default();

    // Small tree (10 files)
    let small = create_wide_tree(2, 5);
    group.bench_function("small_tree_10_files", |b| {
        b.iter(|| render_to_string(TreeConfig::new(black_box(small.path())), &config))
    });

    // Medium tree (500 files)
    let medium = create_wide_tree(10, 50);
    group.bench_function("medium_tree_500_files", |b| {
        b.iter(|| render_to_string(TreeConfig::new(black_box(medium.path())), &config))
    });
    group.bench_function("medium_tree_500_files_native_order", |b| {
        b.iter(|| {
            render_to_string(
                TreeConfig::new(black_box(medium.path())).with_order(SiblingOrder::Native),
                &config,
            )
        })
    });

    // Deep chain
    let deep = TestDir::new();
    deep.add_chain(64);
    group.bench_function("deep_chain_64_levels", |b| {
        b.iter(|| render_to_string(TreeConfig::new(black_box(deep.path())), &config))
    });

    group.finish();
}

fn bench_generate_file(c: &mut Criterion) {
    let tree = create_wide_tree(10, 50);
    let output = tree.outside("out.txt");

    c.bench_function("generate_500_files", |b| {
        b.iter(|| generate(black_box(tree.path()), black_box(&output)))
    });
}

fn bench_indent(c: &mut Criterion) {
    c.bench_function("indent_for_depth_16", |b| {
        b.iter(|| indent_for(black_box(16), black_box(4)))
    });
}

criterion_group!(benches, bench_render, bench_generate_file, bench_indent);
criterion_main!(benches);
