use criterion::{criterion_group, criterion_main, Criterion};
use errors::RloxErrors;
use parser::{AstPrinter, Parser};

pub fn criterion_benchmark(c: &mut Criterion) {
    let source = (0..500)
        .map(|i| format!("(-{i}.5 * {i} + \"s{i}\" != !true) >= nil"))
        .collect::<Vec<_>>()
        .join(" == ");

    c.bench_function("scan", |b| {
        b.iter(|| {
            let mut errors = RloxErrors::new();
            scanner::scan(&source, &mut errors)
        })
    });

    c.bench_function("scan and parse", |b| {
        b.iter(|| {
            let mut errors = RloxErrors::new();
            let tokens = scanner::scan(&source, &mut errors);
            Parser::new(&tokens).parse_complete().map(|expr| AstPrinter.print(&expr)).unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
