//! Frame codec throughput benchmark.
//!
//! Measures read_frame/write_frame latency across payload sizes using
//! Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use herald::ipc::codec::{read_frame, write_frame, MSG_REQUEST};
use std::io::Cursor;

const MAX_FRAME: u32 = 1024 * 1024;

fn bench_write_frame(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let payload_sizes: &[usize] = &[0, 64, 1024, 65536];

    let mut group = c.benchmark_group("write_frame");
    for &size in payload_sizes {
        let payload = vec![0x5Au8; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, p| {
            b.iter(|| {
                rt.block_on(async {
                    let mut buf = Vec::with_capacity(size + 5);
                    write_frame(&mut buf, MSG_REQUEST, black_box(p)).await.unwrap();
                    buf
                })
            });
        });
    }
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let payload = vec![0x5Au8; 1024];

    c.bench_function("round_trip_1kb", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut buf = Vec::with_capacity(1029);
                write_frame(&mut buf, MSG_REQUEST, black_box(&payload)).await.unwrap();
                let mut cursor = Cursor::new(buf);
                read_frame(&mut cursor, MAX_FRAME).await.unwrap()
            })
        });
    });
}

criterion_group!(benches, bench_write_frame, bench_round_trip);
criterion_main!(benches);
