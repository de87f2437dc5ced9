/// Pipeline Benchmarks
///
/// Measures reading, reshaping, and reducing benchmark output of growing size.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use runstats::config::AnalysisConfig;
use runstats::reader::RecordReader;
use runstats::stats;
use runstats::table::{MeasurementTable, Shape, ShapeMode};

/// Synthetic harness output: `tests` groups of `iterations` lines each
fn synthetic_input(iterations: usize, tests: usize) -> String {
    let mut text = String::with_capacity(iterations * tests * 16);
    for t in 0..tests {
        for i in 0..iterations {
            text.push_str(&format!("test_{}:{}.{}\n", t, 100 + i % 17, i % 10));
        }
    }
    text
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");

    for iterations in [10, 100, 1000] {
        let text = synthetic_input(iterations, 8);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(iterations), &text, |b, text| {
            let reader = RecordReader::default();
            b.iter(|| reader.read(black_box(text)).unwrap());
        });
    }

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for iterations in [10, 100, 1000] {
        let shape = Shape::new(iterations, 8).unwrap();
        let values: Vec<f64> = (0..shape.required()).map(|i| (i % 97) as f64).collect();
        let table = MeasurementTable::from_values(values, shape).unwrap();
        group.throughput(Throughput::Elements(shape.required() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(iterations), &table, |b, table| {
            b.iter(|| stats::reduce(black_box(table)));
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let text = synthetic_input(1000, 8);
    let shape = Shape::new(1000, 8).unwrap();
    let config = AnalysisConfig {
        mode: ShapeMode::Strict,
        ..AnalysisConfig::default()
    };

    c.bench_function("analyze_1000x8", |b| {
        b.iter(|| runstats::analyze(black_box(&text), shape, &config).unwrap());
    });
}

criterion_group!(benches, bench_read, bench_reduce, bench_analyze);
criterion_main!(benches);
