use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ringclip::{
    clip,
    generators::{comb_and_bar, regular_polygon},
    intersect, intersect_with_eps,
    ring::Rings,
    Point,
};

fn comb(c: &mut Criterion) {
    let (comb, bar) = comb_and_bar(50);

    c.bench_function("comb with 50 teeth", |b| {
        b.iter(|| black_box(intersect(comb.iter().copied(), bar.iter().copied())))
    });
}

fn just_the_intersections(c: &mut Criterion) {
    let (comb, bar) = comb_and_bar(50);

    c.bench_function("find intersections", |b| {
        b.iter(|| {
            let mut rings = Rings::default();
            let subject = rings.add_ring(comb.iter().copied()).unwrap();
            let bar = rings.add_ring(bar.iter().copied()).unwrap();
            black_box(clip::find_intersections(&mut rings, subject, bar, 1e-9))
        })
    });
}

fn regular_polygons(c: &mut Criterion) {
    let a = regular_polygon(Point::new(0.0, 0.0), 10.0, 200, 0.0);
    let b = regular_polygon(Point::new(3.0, 1.0), 10.0, 200, 0.01);

    c.bench_function("two 200-gons", |bench| {
        bench.iter(|| black_box(intersect_with_eps(&a, &b, 1e-9)))
    });
}

criterion_group!(benches, comb, just_the_intersections, regular_polygons);
criterion_main!(benches);
