use az_syntax::parsing::Script;
use az_syntax::tokenization::tokenize_string;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn parse(src: &str) -> Script {
    let tokens = tokenize_string(src).expect("bench source must lex cleanly");
    Script::from_tokens(tokens).expect("bench source must parse cleanly")
}

fn bench(c: &mut Criterion) {
    const SIMPLE_SRC: &str = "a + b * c - d / e;\n";
    const FUNCTION_SRC: &str = "Function (a: I32, b: I32) -> I32 { \
        if a < b { a; } else { b; } \
    };\n";

    let mut g = c.benchmark_group("simple");
    g.throughput(Throughput::Bytes(SIMPLE_SRC.as_bytes().len() as u64))
        .bench_function("parse simple", |b| b.iter(|| parse(black_box(SIMPLE_SRC))));
    g.finish();

    let mut g = c.benchmark_group("function");
    g.throughput(Throughput::Bytes(FUNCTION_SRC.as_bytes().len() as u64))
        .bench_function("parse function", |b| b.iter(|| parse(black_box(FUNCTION_SRC))));
    g.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
