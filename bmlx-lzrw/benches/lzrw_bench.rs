//! Decode throughput benchmarks for bmlx-lzrw.
//!
//! Measures the sliding-window decoder against token streams with
//! different literal/copy mixes, since copies dominate real BML entries
//! while worst-case streams are all literals.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Build a literal-only stream decoding to `size` bytes.
fn literal_stream(size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size + size / 8 + 2);
    let mut seed: u64 = 0x123456789ABCDEF0;
    let mut emitted = 0;
    while emitted < size {
        let batch = (size - emitted).min(16);
        out.extend_from_slice(&0u16.to_le_bytes());
        for _ in 0..batch {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            out.push((seed >> 32) as u8);
            emitted += 1;
        }
    }
    out
}

/// Build a copy-heavy stream decoding to `size` bytes: 16 seed literals,
/// then maximum-length copies at distance 16.
fn copy_stream(size: usize) -> Vec<u8> {
    assert!(size >= 16 && size % 16 == 0);
    let mut out = Vec::new();
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(b"ABCDEFGHIJKLMNOP");

    let mut emitted = 16;
    while emitted < size {
        // 16 copy decisions per control word
        out.extend_from_slice(&0xFFFFu16.to_le_bytes());
        for _ in 0..16 {
            if emitted >= size {
                break;
            }
            // distance 16, length 16
            let token: u16 = (0x0F << 8) | 0x10;
            out.extend_from_slice(&token.to_le_bytes());
            emitted += 16;
        }
    }
    out
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzrw_decode");

    let streams = [
        ("literals", literal_stream as fn(usize) -> Vec<u8>),
        ("copies", copy_stream as fn(usize) -> Vec<u8>),
    ];

    for (name, generator) in streams {
        for size in [4 * 1024, 64 * 1024, 512 * 1024] {
            let input = generator(size);
            let id = format!("{}/{}kb", name, size / 1024);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &input, |b, input| {
                b.iter(|| {
                    let output = bmlx_lzrw::decompress(black_box(input), size).unwrap();
                    black_box(output);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
