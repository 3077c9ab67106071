//! Benchmarks for mesh construction and queries.

use criterion::{criterion_group, criterion_main, Criterion};
use hedra::prelude::*;
use nalgebra::Point3;

fn grid_soup(n: usize) -> (Vec<Point3<f64>>, Vec<Vec<usize>>) {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n);

    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    // Quad grid: one face per cell.
    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push(vec![v00, v10, v11, v01]);
        }
    }

    (vertices, faces)
}

fn bench_build(c: &mut Criterion) {
    let (vertices, faces) = grid_soup(64);

    c.bench_function("build_grid_64x64", |b| {
        b.iter(|| {
            let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &faces).unwrap();
            std::hint::black_box(mesh)
        })
    });
}

fn bench_queries(c: &mut Criterion) {
    let (vertices, faces) = grid_soup(64);
    let mesh: HalfEdgeMesh = build_from_polygons(&vertices, &faces).unwrap();

    c.bench_function("face_normals_grid_64x64", |b| {
        b.iter(|| {
            let sum: f64 = mesh.face_ids().map(|f| mesh.face_normal(f).z).sum();
            std::hint::black_box(sum)
        })
    });

    c.bench_function("edges_grid_64x64", |b| {
        b.iter(|| std::hint::black_box(mesh.edges().len()))
    });

    c.bench_function("validate_grid_64x64", |b| {
        b.iter(|| std::hint::black_box(mesh.is_valid()))
    });
}

criterion_group!(benches, bench_build, bench_queries);
criterion_main!(benches);
