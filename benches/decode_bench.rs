use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[path = "../tests/common/mod.rs"]
mod common;

use common::{sample, Group};

fn large_dictionary(groups: usize) -> Vec<u8> {
    let mut b = sample();
    for i in 0..groups {
        let indices = [1 + (i % 5) as u16, 1 + ((i / 5) % 5) as u16];
        b = b.group(Group::new(&indices, &["你好", "世界", "测试"]));
    }
    b.build()
}

fn bench_decode(c: &mut Criterion) {
    let small = large_dictionary(100);
    let large = large_dictionary(50_000);

    c.bench_function("decode_100_groups", |b| b.iter(|| scel::decode(black_box(&small)).unwrap()));
    c.bench_function("decode_50k_groups", |b| b.iter(|| scel::decode(black_box(&large)).unwrap()));
}

fn bench_export(c: &mut Criterion) {
    let dict = scel::decode(&large_dictionary(10_000)).unwrap();

    c.bench_function("write_records_30k", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            scel::export::write_records(&mut out, black_box(&dict.records)).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_decode, bench_export);
criterion_main!(benches);
