use criterion::{Criterion, black_box, criterion_group, criterion_main};

use telparse::PHONE_NUMBER_UTIL;

/// A mix of inputs: national and international forms, IDDs, vanity numbers
/// and national prefix transforms.
fn setup_parsing_data() -> Vec<(&'static str, &'static str)> {
    vec![
        ("0011 54 9 11 8765 4321 ext. 1234", "AU"),
        ("(650) 253-0000", "US"),
        ("+44 20 8765 4321", "GB"),
        ("020 8765 4321", "GB"),
        ("011 15 8765 4321", "AR"),
        ("02 12345678", "IT"),
        ("1-800-FLOWERS", "US"),
        ("tel:253-0000;phone-context=+1-650", "US"),
        ("12345", "DE"),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing");
    group.bench_function("parse()", |b| {
        b.iter(|| {
            for (number, region) in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.parse(black_box(number), black_box(Some(*region)));
            }
        })
    });

    group.bench_function("parse_and_keep_raw_input()", |b| {
        b.iter(|| {
            for (number, region) in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL
                    .parse_and_keep_raw_input(black_box(number), black_box(Some(*region)));
            }
        })
    });

    group.bench_function("parse() + is_valid_number()", |b| {
        b.iter(|| {
            for (number, region) in &numbers_to_parse {
                if let Ok(parsed) = PHONE_NUMBER_UTIL.parse(number, Some(*region)) {
                    black_box(PHONE_NUMBER_UTIL.is_valid_number(&parsed));
                }
            }
        })
    });
    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
