use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use math_audio_matrix::{Matrix, multiply, row_reduce};

/// Diagonally dominant so every column has a pivot in place
fn dense_matrix(n: usize) -> Matrix {
    let mut m = Matrix::new(n, n + 1).unwrap();
    for i in 0..n {
        for j in 0..=n {
            let value = if i == j {
                6.0 * n as f64
            } else {
                ((i * 7 + j * 3) % 11) as f64 - 5.0
            };
            m.update(i, j, value);
        }
    }
    m
}

fn bench_row_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_reduce");
    for n in [8, 32, 128] {
        let input = dense_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let mut m = input.clone();
                black_box(row_reduce(&mut m));
            })
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let a = dense_matrix(64);
    let b = Matrix::from_rows(
        (0..65)
            .map(|i| (0..64).map(|j| ((i + j) % 5) as f64).collect())
            .collect(),
    )
    .unwrap();

    c.bench_function("multiply_64", |bench| {
        bench.iter(|| black_box(multiply(black_box(&a), black_box(&b)).unwrap()))
    });
}

criterion_group!(benches, bench_row_reduce, bench_multiply);
criterion_main!(benches);
