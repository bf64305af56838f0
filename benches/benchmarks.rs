//! Performance benchmarks for skiptree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use skiptree::test_utils::TestDir;
use skiptree::{TextOutput, TreeWalker, WalkerConfig};

/// Build a tree with `dirs` top-level directories, each holding `files` files
/// and a skipped `node_modules` folder of the same size.
fn create_test_tree(dirs: usize, files: usize) -> TestDir {
    let tree = TestDir::named("bench");
    for d in 0..dirs {
        for f in 0..files {
            tree.add_file(&format!("pkg{}/src/file{}.rs", d, f), "");
            tree.add_file(&format!("pkg{}/node_modules/dep{}/index.js", d, f), "");
        }
    }
    tree
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for (dirs, files) in [(10, 10), (50, 20)] {
        let tree = create_test_tree(dirs, files);
        let walker = TreeWalker::new(WalkerConfig::with_skip_names(["node_modules"])).unwrap();

        group.bench_function(format!("{}x{}", dirs, files), |b| {
            b.iter(|| {
                let mut output = TextOutput::new(Vec::with_capacity(64 * 1024));
                walker
                    .render(black_box(tree.path()), &mut output)
                    .unwrap();
                black_box(output.into_inner())
            })
        });
    }

    group.finish();
}

fn bench_render_unskipped(c: &mut Criterion) {
    let tree = create_test_tree(50, 20);
    let walker = TreeWalker::new(WalkerConfig::default()).unwrap();

    c.bench_function("render_no_skips_50x20", |b| {
        b.iter(|| black_box(walker.render_to_string(black_box(tree.path())).unwrap()))
    });
}

criterion_group!(benches, bench_render, bench_render_unskipped);
criterion_main!(benches);
