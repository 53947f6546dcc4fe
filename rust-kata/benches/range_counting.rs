use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kata::{count_palindromes_with, CountStrategy};
use std::time::Duration;

fn input_text() -> String {
    // Low-entropy text so palindromes of every length show up.
    (0..2_000u32)
        .map(|i| match (i * 7 + i / 13) % 5 {
            2 => 'b',
            3 => 'c',
            _ => 'a',
        })
        .collect()
}

fn windows() -> (Vec<usize>, Vec<usize>) {
    let lower = vec![1, 2, 5, 10, 50, 1];
    let upper = vec![1, 4, 9, 40, 400, 2_000];
    (lower, upper)
}

fn bench_range_counting(c: &mut Criterion) {
    let text = input_text();
    let (lower, upper) = windows();

    c.bench_function("count_palindromes_centers", |b| {
        b.iter(|| {
            count_palindromes_with(
                CountStrategy::Centers,
                black_box(&text),
                black_box(&lower),
                black_box(&upper),
            )
        });
    });

    // The enumerating strategy is quadratic per window; keep its input short.
    let short: String = text.chars().take(200).collect();
    c.bench_function("count_palindromes_enumerate_200", |b| {
        b.iter(|| {
            count_palindromes_with(
                CountStrategy::Enumerate,
                black_box(&short),
                black_box(&lower),
                black_box(&upper),
            )
        });
    });

    c.bench_function("count_palindromes_centers_200", |b| {
        b.iter(|| {
            count_palindromes_with(
                CountStrategy::Centers,
                black_box(&short),
                black_box(&lower),
                black_box(&upper),
            )
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(10));
    targets = bench_range_counting
}

criterion_main!(benches);
