//! Criterion benchmarks for rogger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rogger::prelude::*;
use std::io;
use std::sync::Arc;
use std::thread;

fn discard_logger(formatter: TextFormatter) -> Logger {
    Logger::builder()
        .level(LogLevel::Trace)
        .output(io::sink())
        .formatter(formatter)
        .build()
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_sync_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_logging");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(TextFormatter::new());

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("infof", |b| {
        b.iter(|| {
            logger.infof(format_args!("request {} took {}ms", black_box(42), black_box(17)));
        });
    });

    group.bench_function("error_no_timestamp", |b| {
        let logger = discard_logger(TextFormatter::new().with_disable_timestamp(true));
        b.iter(|| {
            logger.error(black_box("Error message"));
        });
    });

    group.finish();
}

// ============================================================================
// Entry Derivation Benchmarks
// ============================================================================

fn bench_entry_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_derivation");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(TextFormatter::new());
    let base = logger.with_fields([("service", "api"), ("region", "eu-west-1")]);

    group.bench_function("with_field", |b| {
        b.iter(|| black_box(base.with_field("user_id", black_box(12345))));
    });

    group.bench_function("with_fields_5", |b| {
        b.iter(|| {
            black_box(logger.with_fields([
                ("a", 1),
                ("b", 2),
                ("c", 3),
                ("d", 4),
                ("e", 5),
            ]))
        });
    });

    group.bench_function("log_with_fields", |b| {
        b.iter(|| base.with_field("attempt", black_box(3)).warn("retrying"));
    });

    group.bench_function("unsorted", |b| {
        let logger = discard_logger(TextFormatter::new().with_disable_sorting(true));
        let base = logger.with_fields([("service", "api"), ("region", "eu-west-1")]);
        b.iter(|| base.info(black_box("unsorted")));
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(TextFormatter::new());
    logger.set_level(LogLevel::Error);

    group.bench_function("filtered_out", |b| {
        b.iter(|| {
            logger.debug(black_box("Filtered debug message"));
        });
    });

    group.bench_function("filtered_out_printf", |b| {
        b.iter(|| {
            logger.debugf(format_args!("never formatted {}", black_box(1)));
        });
    });

    group.finish();
}

// ============================================================================
// Caller Reporting Benchmarks
// ============================================================================

fn bench_caller_reporting(c: &mut Criterion) {
    let mut group = c.benchmark_group("caller_reporting");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(TextFormatter::new());
    logger.set_report_caller(true);

    group.bench_function("info_with_caller", |b| {
        b.iter(|| logger.info(black_box("located")));
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            let logger = Arc::new(discard_logger(TextFormatter::new()));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let logger = Arc::clone(&logger);
                        thread::spawn(move || {
                            for i in 0..100 {
                                logger.with_field("thread", t).info(i);
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sync_logging,
    bench_entry_derivation,
    bench_level_filtering,
    bench_caller_reporting,
    bench_concurrent_logging,
);
criterion_main!(benches);
