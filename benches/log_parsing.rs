use std::hint::black_box;
use std::io::{self, Write};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use log_level_analyzer::parsers::{load_logs, parse_log_line};
use tempfile::NamedTempFile;

const LEVELS: [&str; 4] = ["INFO", "WARN", "ERROR", "DEBUG"];

/// Generate a synthetic log file with N lines, every 50th one malformed
fn generate_log_file(num_lines: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    for i in 0..num_lines {
        if i % 50 == 49 {
            writeln!(file, "truncated line").unwrap();
            continue;
        }
        writeln!(
            file,
            "2024-01-{:02} {:02}:{:02}:{:02} {} Request {} handled in {} ms",
            (i % 28) + 1,
            (i / 3600) % 24,
            (i / 60) % 60,
            i % 60,
            LEVELS[i % LEVELS.len()],
            i,
            i % 250
        )
        .unwrap();
    }

    file.flush().unwrap();
    file
}

fn bench_parse_line(c: &mut Criterion) {
    let line = "2024-01-01 10:00:00 ERROR Connection to upstream   timed out after 30s";

    c.bench_function("parse_log_line", |b| b.iter(|| parse_log_line(black_box(line))));
}

fn bench_load_logs(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_logs");

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let file = generate_log_file(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| load_logs(black_box(file.path()), &mut io::sink()).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_line, bench_load_logs);
criterion_main!(benches);
