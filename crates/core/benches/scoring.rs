use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lesbar_core::{Document, HixScorer, ScoringProfile, TextStatistics, analyze_article, assess_complexity, audit_html};

fn article_html() -> String {
    std::fs::read_to_string("../../tests/fixtures/article.html").unwrap()
}

fn bench_statistics(c: &mut Criterion) {
    let text = Document::article_text_from_html(&article_html());
    let profile = ScoringProfile::heuristic();
    let long = text.repeat(20);

    let mut group = c.benchmark_group("statistics");

    group.bench_with_input(BenchmarkId::new("article", "1x"), &text, |b, text| {
        b.iter(|| TextStatistics::compute(black_box(text), &profile))
    });

    group.bench_with_input(BenchmarkId::new("article", "20x"), &long, |b, text| {
        b.iter(|| TextStatistics::compute(black_box(text), &profile))
    });

    group.finish();
}

fn bench_hix(c: &mut Criterion) {
    let text = Document::article_text_from_html(&article_html());
    let scorer = HixScorer::new();

    c.bench_function("hix_score", |b| b.iter(|| scorer.score(black_box(&text))));
}

fn bench_complexity(c: &mut Criterion) {
    let text = Document::article_text_from_html(&article_html());

    c.bench_function("complexity", |b| b.iter(|| assess_complexity(black_box(&text))));
}

fn bench_article(c: &mut Criterion) {
    let html = article_html();
    let profile = ScoringProfile::heuristic();

    c.bench_function("analyze_article", |b| {
        b.iter(|| analyze_article("https://example.de/blog/offene-daten", black_box(&html), "example.de", &profile))
    });
}

fn bench_audit(c: &mut Criterion) {
    let html = article_html();

    c.bench_function("audit", |b| {
        b.iter(|| audit_html("https://example.de/blog/offene-daten", black_box(&html), None))
    });
}

criterion_group!(benches, bench_statistics, bench_hix, bench_complexity, bench_article, bench_audit);
criterion_main!(benches);
