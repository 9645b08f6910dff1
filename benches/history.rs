// benches/history.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use fide_scrape::config::options::RatingKind;
use fide_scrape::period::Window;
use fide_scrape::{report, specs};

fn load_sample(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{name}"))
        .unwrap_or_else(|e| panic!("read tests/fixtures/{name}: {e}"))
}

fn bench_parsers(c: &mut Criterion) {
    let chart = load_sample("profile_chart.html");
    let calc = load_sample("calculations_2026-09.html");

    c.bench_function("history_parse", |b| {
        b.iter(|| {
            let h = specs::history::parse(black_box(&chart)).unwrap();
            black_box(h.map(|h| h.standard.len()))
        })
    });

    let history = specs::history::parse(&chart).unwrap().unwrap();
    let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let window = Window::trailing(today, 12);
    c.bench_function("history_rows", |b| {
        b.iter(|| {
            let rows = report::history_rows(black_box(history.series(RatingKind::Standard)), &window);
            black_box(rows.len())
        })
    });

    c.bench_function("calculations_parse", |b| {
        b.iter(|| {
            let t = specs::calculations::parse(black_box(&calc)).unwrap();
            black_box(t.len())
        })
    });
}

criterion_group!(benches, bench_parsers);
criterion_main!(benches);
