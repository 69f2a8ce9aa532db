use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use yamlcheck_linter::{Document, LintConfig, Linter};
use yamlcheck_test_utils::TokenStreamBuilder;
use yamlcheck_types::{Token, TokenKind};

const ENTRIES: usize = 2_000;

/// A flat block mapping of `ENTRIES` keys, with a few trailing spaces and
/// octal values sprinkled in so rules have something to report
fn sample_document() -> (String, Vec<Token>) {
    let mut source = String::from("---\n");
    for i in 0..ENTRIES {
        let value = if i % 50 == 0 { "010" } else { "value" };
        let padding = if i % 70 == 0 { "  " } else { "" };
        source.push_str(&format!("key_{i:05}: {value}{padding}\n"));
    }

    let mut builder = TokenStreamBuilder::new(&source)
        .stream_start()
        .push(TokenKind::DocumentStart, 0..3)
        .push(TokenKind::BlockMappingStart, 4..4);
    let mut offset = 4;
    for line in source.lines().skip(1) {
        let colon = offset + 9;
        let value_start = colon + 2;
        let value_end = offset + line.trim_end().len();
        builder = builder
            .push(TokenKind::Key, offset..offset)
            .plain(offset..colon)
            .push(TokenKind::Value, colon..colon + 1)
            .plain(value_start..value_end);
        offset += line.len() + 1;
    }
    let tokens = builder
        .push(TokenKind::BlockEnd, source.len()..source.len())
        .stream_end()
        .build();
    (source, tokens)
}

fn bench_linter_construction(c: &mut Criterion) {
    let config = LintConfig::all();
    c.bench_function("linter_construction", |b| {
        b.iter(|| black_box(Linter::builtin(&config)));
    });
}

fn bench_lint_recommended(c: &mut Criterion) {
    let (source, tokens) = sample_document();
    let linter = Linter::builtin(&LintConfig::recommended()).unwrap();
    let document = Document::new(&source, &tokens);

    c.bench_function("lint_recommended", |b| {
        b.iter(|| black_box(linter.lint(&document)));
    });
}

fn bench_lint_all(c: &mut Criterion) {
    let (source, tokens) = sample_document();
    let linter = Linter::builtin(&LintConfig::all()).unwrap();

    c.bench_function("lint_all", |b| {
        b.iter_batched(
            // Line records are rebuilt for every run here
            || Document::new(&source, &tokens),
            |document| black_box(linter.lint(&document)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_linter_construction,
    bench_lint_recommended,
    bench_lint_all
);
criterion_main!(benches);
