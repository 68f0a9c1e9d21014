use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use powershot_a5_rs::image_pipeline::raw::{
    BYTE_ORDER_MARK, HEADER_LEN, HEAP_SIGNATURE, HEAP_SIGNATURE_OFFSET, RECORD_LEN, SENSOR_HEIGHT,
};
use powershot_a5_rs::image_pipeline::{
    ConversionConfig, CrwReader, CrwToPpmPipeline, GmcyDebayer, RawImageReader,
};

fn generate_mock_crw_data() -> Vec<u8> {
    let mut data = vec![0u8; HEADER_LEN];
    data[..2].copy_from_slice(BYTE_ORDER_MARK);
    data[HEAP_SIGNATURE_OFFSET..HEAP_SIGNATURE_OFFSET + 8].copy_from_slice(HEAP_SIGNATURE);
    for y in 0..SENSOR_HEIGHT {
        for x in 0..RECORD_LEN {
            data.push(((x * 7 + y * 3) % 251) as u8);
        }
    }
    data
}

fn benchmark_full_conversion(c: &mut Criterion) {
    let mock_data = generate_mock_crw_data();
    let pipeline = CrwToPpmPipeline::new(ConversionConfig::default());

    c.bench_function("crw_to_ppm", |b| {
        b.iter(|| {
            let mut output = Vec::new();
            let _ = pipeline.convert(black_box(&mock_data), &mut output);
        });
    });
}

fn benchmark_refine_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("refine_passes");
    let grid = CrwReader.read_raw(&generate_mock_crw_data()).unwrap();

    for passes in [0usize, 1, 2, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(passes), &grid, |b, grid| {
            let debayer = GmcyDebayer::new(passes);
            b.iter(|| {
                let mut grid = grid.clone();
                debayer.process(black_box(&mut grid)).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_unpack(c: &mut Criterion) {
    let mock_data = generate_mock_crw_data();
    c.bench_function("unpack", |b| {
        b.iter(|| CrwReader.read_raw(black_box(&mock_data)).unwrap());
    });
}

criterion_group!(
    benches,
    benchmark_full_conversion,
    benchmark_refine_passes,
    benchmark_unpack
);
criterion_main!(benches);
