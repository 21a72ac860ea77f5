extern crate vecpath;
#[macro_use]
extern crate criterion;

use criterion::Criterion;
use vecpath::math::{point, Angle};
use vecpath::path::Path;

const N: usize = 100;

const LOGO: &str = "M 60 10 C 35 10 15 30 15 55 S 35 100 60 100 \
    q 20 0 35 -15 t 10 -30 h -25 v 10 h 12 \
    a 22 22 0 1 1 -32 -30 l 8 -8 Z \
    m 70 0 l 30 90 l 30 -90 h -12 l -18 60 l -18 -60 z";

fn parse_and_normalize(bench: &mut Criterion) {
    bench.bench_function("parse and normalize", |b| {
        b.iter(|| {
            for _ in 0..N {
                let path = vecpath::parse(LOGO);
                criterion::black_box(path.is_ok());
            }
        })
    });
}

fn measure_length(bench: &mut Criterion) {
    bench.bench_function("measure length", |b| {
        b.iter(|| {
            for _ in 0..N {
                // A new path measures itself again.
                let path = Path::circle(point(0.0, 0.0), 50.0).rotate(Angle::degrees(10.0));
                criterion::black_box(path.length());
            }
        })
    });
}

fn sample_points(bench: &mut Criterion) {
    let path = match vecpath::parse(LOGO) {
        Ok(path) => path,
        Err(error) => panic!("{}", error),
    };
    path.compute();

    bench.bench_function("sample points along the path", |b| {
        b.iter(|| {
            let mut sum = point(0.0, 0.0);
            for i in 0..N {
                let t = i as f64 / N as f64;
                if let Some(p) = path.point_at(t) {
                    sum += p.to_vector();
                }
                if let Some(curvature) = path.curvature_at(t) {
                    sum.x += curvature;
                }
            }
            criterion::black_box(sum);
        })
    });
}

criterion_group!(measure, parse_and_normalize, measure_length, sample_points);
criterion_main!(measure);
