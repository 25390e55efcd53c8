//! Benchmarks for decoding, parsing and page rendering
//!
//! Generates synthetic dialogue scripts so runs do not depend on game files.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spm_core::{codec, render_text_with_tags, Script};
use std::fmt::Write;

/// Build a raw script with `blocks` bubbles of mixed styles
fn generate_raw_script(blocks: usize) -> Vec<u8> {
    const STYLES: [&str; 5] = ["<diary>", "<fairy>", "<system>", "<se 1>", ""];
    let mut text = String::new();

    for index in 0..blocks {
        let style = STYLES[index % STYLES.len()];
        let _ = write!(text, "stg{}_1_{index:03}\0{style}\n", index % 8 + 1);
        if index % 7 == 0 {
            text.push_str("<select 10 -20 300 120>\nYes\nNo\n");
            continue;
        }
        text.push_str("Hello there, <col ff0000>Mario</col>!\n<wait 200>\n");
        text.push_str("<k>\n<center><scale 1.5>Second page</scale></center>\n");
        text.push_str("<icon PAD_A> to continue.\n");
    }

    text.into_bytes()
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for &size in &[10, 100, 1000] {
        let raw = generate_raw_script(size);
        let visible = codec::decode(&raw);
        group.throughput(Throughput::Bytes(raw.len() as u64));

        group.bench_with_input(BenchmarkId::new("decode", size), &raw, |b, raw| {
            b.iter(|| codec::decode(black_box(raw)));
        });
        group.bench_with_input(BenchmarkId::new("parse", size), &visible, |b, text| {
            b.iter(|| Script::parse(black_box(text)));
        });
        group.bench_with_input(BenchmarkId::new("encode", size), &visible, |b, text| {
            b.iter(|| codec::encode(black_box(text)));
        });
    }

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let visible = codec::decode(&generate_raw_script(100));
    let pages: Vec<String> = Script::parse(&visible)
        .into_blocks()
        .into_iter()
        .flat_map(|block| block.pages)
        .collect();

    c.bench_function("render_pages", |b| {
        b.iter(|| {
            for page in &pages {
                black_box(render_text_with_tags(black_box(page), 20, None));
            }
        });
    });
}

criterion_group!(benches, bench_parsing, bench_rendering);
criterion_main!(benches);
