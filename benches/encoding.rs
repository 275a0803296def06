use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use radix64::{AlphabetRegistry, Codec};
use std::hint::black_box;

const SAMPLES: usize = 1000;

fn get_codec(name: &str) -> Codec {
    let config = AlphabetRegistry::load_default().unwrap();
    config.codec(name).unwrap()
}

fn random_buffers(count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let mut buffer = vec![0u8; len];
            rng.fill(&mut buffer[..]);
            buffer
        })
        .collect()
}

fn bench_encode_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_buffer");
    let buffers = random_buffers(SAMPLES, 8);
    group.throughput(Throughput::Elements(SAMPLES as u64));

    for name in ["lexicographic", "base64"] {
        let codec = get_codec(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), &buffers, |b, buffers| {
            b.iter(|| {
                for buffer in buffers {
                    black_box(codec.encode_buffer(black_box(buffer), None).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_decode_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_buffer");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    for name in ["lexicographic", "base64"] {
        let codec = get_codec(name);
        let encoded: Vec<String> = random_buffers(SAMPLES, 8)
            .iter()
            .map(|buffer| codec.encode_buffer(buffer, None).unwrap())
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(name), &encoded, |b, encoded| {
            b.iter(|| {
                for s in encoded {
                    black_box(codec.decode_to_buffer(black_box(s), Some(8)).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_buffer_sizes(c: &mut Criterion) {
    let codec = Codec::new();
    let mut group = c.benchmark_group("buffer_sizes");

    for size in [64, 256, 1024, 4096, 16384] {
        let data: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| codec.encode_buffer(black_box(data), None).unwrap());
        });

        let encoded = codec.encode_buffer(&data, None).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| codec.decode_to_buffer(black_box(encoded), Some(size)).unwrap());
        });
    }
    group.finish();
}

fn bench_int(c: &mut Criterion) {
    let codec = Codec::new();
    let mut rng = rand::rng();
    let ints: Vec<u64> = (0..SAMPLES).map(|_| rng.random_range(0..1u64 << 54)).collect();
    let encoded: Vec<String> = ints
        .iter()
        .map(|&n| codec.encode_int(n, None).unwrap())
        .collect();

    let mut group = c.benchmark_group("int");
    group.throughput(Throughput::Elements(SAMPLES as u64));
    group.bench_function("encode_int", |b| {
        b.iter(|| {
            for &n in &ints {
                black_box(codec.encode_int(black_box(n), None).unwrap());
            }
        });
    });
    group.bench_function("decode_to_int", |b| {
        b.iter(|| {
            for s in &encoded {
                black_box(codec.decode_to_int(black_box(s)).unwrap());
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_encode_buffer,
    bench_decode_buffer,
    bench_buffer_sizes,
    bench_int
);
criterion_main!(benches);
