//! Micro benchmarks for address parsing and byte-codec decoding.
//! Pure CPU, no network or IO.
//!
//! ```bash
//! cargo bench --bench plc_benches
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use omron_fins::codec::DataType;
use omron_fins::{lookup_end_code, parse_address};

const WORD_ADDRESSES: &[&str] = &["D100", "0", "W0", "H0", "A0", "T5", "C5", "E0_100", "EA_200"];
const BIT_ADDRESS: &str = "0.05";

fn bench_parse_address(c: &mut Criterion) {
    for addr in WORD_ADDRESSES {
        assert!(parse_address(addr, 0).is_ok(), "fixture address {addr} must parse");
    }

    c.bench_function("parse_address_word_mix", |b| {
        b.iter(|| {
            for addr in WORD_ADDRESSES {
                let _ = parse_address(std::hint::black_box(addr), 0);
            }
        });
    });

    c.bench_function("parse_address_bit", |b| {
        b.iter(|| parse_address(std::hint::black_box(BIT_ADDRESS), 0));
    });
}

fn bench_decode_int32(c: &mut Criterion) {
    // Word-swapped 32-bit value: low word first, as returned on the wire.
    let data: &[u8] = &[0x00, 0x02, 0x00, 0x01];
    let decoded = DataType::Int32.decode(data).unwrap();
    assert_eq!(format!("{decoded:?}"), "Int32([65538])");

    c.bench_function("decode_int32_single", |b| {
        b.iter(|| DataType::Int32.decode(std::hint::black_box(data)));
    });
}

fn bench_decode_double_bulk(c: &mut Criterion) {
    // 64 doubles, four words each, word-reversed per value.
    let mut data = Vec::with_capacity(64 * 8);
    for i in 0..64u16 {
        let bits = (i as f64).to_bits();
        let words = [
            (bits & 0xFFFF) as u16,
            ((bits >> 16) & 0xFFFF) as u16,
            ((bits >> 32) & 0xFFFF) as u16,
            ((bits >> 48) & 0xFFFF) as u16,
        ];
        for w in words {
            data.extend_from_slice(&w.to_be_bytes());
        }
    }

    c.bench_function("decode_double_64_values", |b| {
        b.iter(|| DataType::Double.decode(std::hint::black_box(&data)));
    });
}

fn bench_lookup_end_code(c: &mut Criterion) {
    assert!(lookup_end_code(0x00, 0x00).is_success);

    c.bench_function("lookup_end_code", |b| {
        b.iter(|| lookup_end_code(std::hint::black_box(0x25), std::hint::black_box(0x03)));
    });
}

criterion_group!(
    plc_benches,
    bench_parse_address,
    bench_decode_int32,
    bench_decode_double_bulk,
    bench_lookup_end_code
);
criterion_main!(plc_benches);
