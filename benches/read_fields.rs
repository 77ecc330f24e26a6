use bitread::BitReader;
use criterion::{Criterion, criterion_group, criterion_main};

fn gen_stream(total_bytes: usize) -> Vec<u8> {
    // Deterministic but non-trivial pattern
    (0..total_bytes).map(|i| (i * 31 % 256) as u8).collect()
}

fn bench_read_fields(c: &mut Criterion) {
    let stream = gen_stream(64 * 1024);

    for &width in &[1u32, 7, 13, 32, 64] {
        let count = stream.len() * 8 / width as usize;

        c.bench_function(&format!("read_{}_bit_fields", width), |b| {
            b.iter(|| {
                let mut src: &[u8] = &stream;
                let mut reader = BitReader::new(&mut src);
                let mut sum = 0u64;
                for _ in 0..count {
                    sum = sum.wrapping_add(reader.read(width).unwrap());
                }
                sum
            })
        });
    }

    let record = [3u32, 5, 12, 1, 33, 10];
    let record_bits: u32 = record.iter().sum();
    let records = stream.len() * 8 / record_bits as usize;

    c.bench_function("read_fields_into_64_bit_record", |b| {
        let mut out = [0u64; 6];
        b.iter(|| {
            let mut src: &[u8] = &stream;
            let mut reader = BitReader::new(&mut src);
            for _ in 0..records {
                reader.read_fields_into(&record, &mut out).unwrap();
            }
            out[0]
        })
    });
}

criterion_group!(benches, bench_read_fields);
criterion_main!(benches);
