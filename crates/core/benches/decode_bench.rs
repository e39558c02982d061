#[path = "../tests/common/mod.rs"]
mod common;

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use asef_core::api::{OutputMode, decode, decode_document};
use common::SwatchBuilder;

/// `groups` groups of `per_group` RGB colors, plus one CMYK color each.
fn synthetic_swatch(groups: usize, per_group: usize) -> Vec<u8> {
    let mut builder = SwatchBuilder::new();
    for g in 0..groups {
        builder = builder.group_start(&format!("Group {g}"));
        for i in 0..per_group {
            let v = i as f32 / per_group as f32;
            let name = if i % 4 == 0 { String::new() } else { format!("swatch-{g}-{i}") };
            builder = builder.rgb(&name, v, 1.0 - v, 0.5);
        }
        builder = builder.color("ink", b"CMYK", &[0.1, 0.2, 0.3, 0.4], 1);
        builder = builder.group_end();
    }
    builder.build()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (groups, per_group) in [(1, 16), (8, 64), (32, 256)] {
        let data = synthetic_swatch(groups, per_group);
        let id = format!("{groups}x{per_group}");
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(BenchmarkId::new("document", &id), &data, |b, data| {
            b.iter(|| {
                let doc = decode_document(black_box(data), None).expect("decode");
                black_box(doc.colors.len());
            })
        });

        group.bench_with_input(BenchmarkId::new("json", &id), &data, |b, data| {
            b.iter(|| black_box(decode(black_box(data), Some(OutputMode::Json)).expect("json")))
        });

        group.bench_with_input(BenchmarkId::new("stylesheet", &id), &data, |b, data| {
            b.iter(|| {
                black_box(decode(black_box(data), Some(OutputMode::Stylesheet)).expect("css"))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
