use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ms_formats::load_mod;

/// A 31-instrument, 8-channel module with 64 patterns of noise-ish cells.
fn synthetic_module() -> Vec<u8> {
    let channels = 8;
    let patterns = 64;
    let mut data = vec![0u8; 1084];
    data[..8].copy_from_slice(b"benchmod");
    data[950] = 128;
    for (i, b) in data[952..1080].iter_mut().enumerate() {
        *b = (i % patterns) as u8;
    }
    data[1080..1084].copy_from_slice(b"8CHN");

    let pattern_bytes = patterns * 64 * channels * 4;
    data.extend((0..pattern_bytes as u32).map(|i| (i.wrapping_mul(2654435761) >> 7) as u8));
    data
}

fn bench_decode(c: &mut Criterion) {
    let data = synthetic_module();
    c.bench_function("load_mod_8ch_64pat", |b| {
        b.iter(|| load_mod(black_box(&data)).unwrap())
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
