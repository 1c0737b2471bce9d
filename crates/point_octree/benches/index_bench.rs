//! Benchmarks for index construction, point lookup and neighbor queries.
//!
//! All workloads use the same seeded point cloud in a 100^3 volume: a uniform
//! background plus one dense cluster, so the tree has uneven depth.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glam::DVec3;
use point_octree::{Face, SpatialIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WORLD: f64 = 100.0;
const SEED: u64 = 0x5EED;

fn point_cloud(count: usize) -> Vec<DVec3> {
	let mut rng = StdRng::seed_from_u64(SEED);
	let mut points = Vec::with_capacity(count);
	for i in 0..count {
		// Every fourth point falls into a 5^3 cluster.
		let (origin, span) = if i % 4 == 0 {
			(DVec3::splat(60.0), 5.0)
		} else {
			(DVec3::ZERO, WORLD)
		};
		points.push(
			origin
				+ DVec3::new(
					rng.random_range(0.0..span),
					rng.random_range(0.0..span),
					rng.random_range(0.0..span),
				),
		);
	}
	points
}

fn build(points: &[DVec3]) -> SpatialIndex<usize> {
	let mut index = SpatialIndex::new(WORLD, WORLD, WORLD).expect("valid extents");
	for (i, p) in points.iter().enumerate() {
		index.insert_at(i, *p).expect("point inside volume");
	}
	index
}

// ============================================================================
// Insertion
// ============================================================================

fn bench_insert(c: &mut Criterion) {
	let mut group = c.benchmark_group("insert");

	for count in [1_000, 10_000, 100_000] {
		let points = point_cloud(count);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
			b.iter(|| black_box(build(points)).len())
		});
	}

	group.finish();
}

// ============================================================================
// Lookup
// ============================================================================

fn bench_find_node(c: &mut Criterion) {
	let points = point_cloud(100_000);
	let index = build(&points);
	let probes = &points[..10_000];

	let mut group = c.benchmark_group("find_node");
	group.throughput(Throughput::Elements(probes.len() as u64));
	group.bench_function("100k_items", |b| {
		b.iter(|| {
			let mut depth = 0;
			for p in probes {
				depth += index.find_node_at(*p).depth();
			}
			black_box(depth)
		})
	});
	group.finish();
}

// ============================================================================
// Neighbor Queries
// ============================================================================

fn bench_neighbors(c: &mut Criterion) {
	let index = build(&point_cloud(100_000));
	let leaves: Vec<_> = index.leaves().collect();

	let mut group = c.benchmark_group("neighbors");
	group.throughput(Throughput::Elements(leaves.len() as u64));

	group.bench_function("face_right_all_leaves", |b| {
		b.iter(|| {
			let mut found = 0;
			for leaf in &leaves {
				if let Ok(Some(_)) = leaf.find_gteq_neighbor_face(Face::Right) {
					found += 1;
				}
			}
			black_box(found)
		})
	});

	group.bench_function("all_26_all_leaves", |b| {
		b.iter(|| {
			let mut found = 0;
			for leaf in &leaves {
				found += leaf.find_neighbors().map_or(0, |set| set.len());
			}
			black_box(found)
		})
	});

	group.finish();
}

criterion_group!(benches, bench_insert, bench_find_node, bench_neighbors);
criterion_main!(benches);
