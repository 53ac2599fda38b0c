//! Insertion and query throughput of the quadtree at several query coverages

use quadtree::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

/// Random query box whose sides are UP TO max_size, kept inside the 100x100 space
fn random_box<R: Rng>(rng: &mut R, max_size: f64) -> BoundingBox {
    let left = rng.random_range(0.0..(100.0 - max_size));
    let top = rng.random_range(0.0..(100.0 - max_size));
    let width = rng.random_range(0.0..max_size);
    let height = rng.random_range(0.0..max_size);
    BoundingBox::create(left, top, left + width, top + height)
}

fn main() {
    println!("Quadtree Benchmark");
    println!("==================\n");

    let num_items = 1_000_000;
    let num_tests = 1_000;

    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let points: Vec<Point> = (0..num_items)
        .map(|_| Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();

    let config = QuadTreeConfig::new().with_capacity(32).with_max_depth(16);
    let mut tree = QuadTree::with_config(BoundingBox::create(0.0, 0.0, 100.0, 100.0), config);

    let build_start = Instant::now();
    for p in &points {
        tree.add(*p);
    }
    let build_total = build_start.elapsed();
    println!(
        "add {} points: {:>12.2}ms ({} nodes, depth {})",
        num_items,
        build_total.as_secs_f64() * 1000.0,
        tree.node_count(),
        tree.depth()
    );

    // (label, max side) - sqrt(coverage) * 100
    let coverages = [
        ("50%", 0.5_f64.sqrt() * 100.0),
        ("10%", 0.1_f64.sqrt() * 100.0),
        ("1%", 10.0),
        ("0.01%", 1.0),
    ];

    let mut results = Vec::new();
    for (label, max_size) in coverages {
        let boxes: Vec<BoundingBox> = (0..num_tests).map(|_| random_box(&mut rng, max_size)).collect();

        let query_start = Instant::now();
        let mut found = 0;
        for area in &boxes {
            results.clear();
            tree.query(area, &mut results);
            found += results.len();
        }
        let elapsed = query_start.elapsed();
        println!(
            "query ({label:>5} coverage) - {num_tests} queries: {:>12.2}ms, {found} hits",
            elapsed.as_secs_f64() * 1000.0
        );
    }

    let query_start = Instant::now();
    let mut found = 0;
    for _ in 0..num_tests {
        let center = Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
        found += tree.get_in_circle(center, 5.0).len();
    }
    let elapsed = query_start.elapsed();
    println!(
        "get_in_circle (r = 5) - {num_tests} queries: {:>12.2}ms, {found} hits",
        elapsed.as_secs_f64() * 1000.0
    );

    let remove_start = Instant::now();
    for p in points.iter().take(num_tests * 10) {
        tree.remove(p);
    }
    let elapsed = remove_start.elapsed();
    println!(
        "remove {} points: {:>12.2}ms, {} left",
        num_tests * 10,
        elapsed.as_secs_f64() * 1000.0,
        tree.len()
    );
}
