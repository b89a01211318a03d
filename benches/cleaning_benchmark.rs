use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grow_locations::models::{normalize_serial, LocationTable};
use grow_locations::processors::DatasetCleaner;

// Synthetic export with the upstream latitude/longitude swap
fn create_test_table(rows: usize) -> LocationTable {
    let mut table = LocationTable::new(
        ["Type", "Code", "Serial", "Latitude", "Longitude"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    for i in 0..rows {
        let longitude = -6.0 + (i % 70) as f64 * 0.1;
        let latitude = 50.0 + (i % 90) as f64 * 0.1;
        table.push_row(vec![
            "Soil".to_string(),
            format!("C{}", i),
            format!("PI{:08X}/GROW-{}", i, i % 7),
            longitude.to_string(),
            latitude.to_string(),
        ]);
    }

    table
}

fn benchmark_serial_normalization(c: &mut Criterion) {
    c.bench_function("normalize_serial", |b| {
        b.iter(|| black_box(normalize_serial(black_box("PI040298AD5A/GROW-EXTRA"))))
    });
}

fn benchmark_cleaning_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("cleaning_by_size");
    let cleaner = DatasetCleaner::new();

    for &size in &[100, 1_000, 10_000] {
        let table = create_test_table(size);
        group.bench_with_input(BenchmarkId::new("rows", size), &table, |b, table| {
            b.iter(|| {
                let (dataset, _) = cleaner.clean_table(table.clone()).unwrap();
                black_box(dataset.len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_serial_normalization,
    benchmark_cleaning_by_size
);
criterion_main!(benches);
