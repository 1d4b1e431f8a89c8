use std::sync::Arc;

use bank_ledger::prelude::*;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use futures::io::Cursor;
use tokio::runtime::Runtime;

/// Seeded ledger plus `extra` empty accounts
fn ledger_with_accounts(extra: u32) -> Ledger<FixedPoint> {
    let mut ledger = Ledger::seeded().unwrap();
    for i in 0..extra {
        ledger.create_account(format!("Account {i}")).unwrap();
    }
    ledger
}

/// Benchmark single deposits as the ledger grows (whole-document load/save)
fn bench_deposit_by_ledger_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("deposit_by_ledger_size");
    let runtime = Runtime::new().unwrap();

    for num_accounts in [2, 100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_accounts),
            &num_accounts,
            |b, &num_accounts| {
                b.to_async(&runtime).iter_batched(
                    || InMemoryBackend::with_ledger(&ledger_with_accounts(num_accounts - 2)).unwrap(),
                    |backend| async move {
                        let store = LedgerStore::<FixedPoint, _>::open(backend).await.unwrap();
                        black_box(
                            store
                                .deposit(1, Some(FixedPoint::from_raw(10_000)))
                                .await
                                .unwrap(),
                        );
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark a sequence of transfers between the seeded accounts
fn bench_transfer_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer_sequence");
    let runtime = Runtime::new().unwrap();

    for num_transfers in [10, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_transfers),
            &num_transfers,
            |b, &num_transfers| {
                b.to_async(&runtime).iter_batched(
                    InMemoryBackend::new,
                    |backend| async move {
                        let store = LedgerStore::<FixedPoint, _>::open(backend).await.unwrap();
                        for i in 0..num_transfers {
                            let (from, to) = if i % 2 == 0 { (2, 1) } else { (1, 2) };
                            black_box(
                                store
                                    .transfer(from, to, Some(FixedPoint::from_raw(10_000)))
                                    .await
                                    .ok(),
                            );
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark contention on the write gate from concurrent tasks
fn bench_concurrent_deposits(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_deposits");
    let runtime = Runtime::new().unwrap();

    for num_tasks in [1, 10, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_tasks),
            &num_tasks,
            |b, &num_tasks| {
                b.to_async(&runtime).iter_batched(
                    InMemoryBackend::new,
                    |backend| async move {
                        let store =
                            Arc::new(LedgerStore::<FixedPoint, _>::open(backend).await.unwrap());

                        let handles: Vec<_> = (0..num_tasks)
                            .map(|i| {
                                let store = Arc::clone(&store);
                                tokio::spawn(async move {
                                    let id = (i % 2) as u32 + 1;
                                    for _ in 0..10 {
                                        black_box(
                                            store
                                                .deposit(id, Some(FixedPoint::from_raw(10_000)))
                                                .await
                                                .ok(),
                                        );
                                    }
                                })
                            })
                            .collect();

                        for handle in handles {
                            handle.await.unwrap();
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark CSV batch application end to end
fn bench_csv_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_batch");
    let runtime = Runtime::new().unwrap();

    for num_commands in [100, 1_000] {
        let mut input = String::from("type,account,to,amount,name\n");
        for i in 0..num_commands {
            match i % 3 {
                0 => input.push_str("deposit,1,,10.5,\n"),
                1 => input.push_str("withdraw,2,,3,\n"),
                _ => input.push_str("transfer,1,2,1,\n"),
            }
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(num_commands),
            &input,
            |b, input| {
                b.to_async(&runtime).iter_batched(
                    || (InMemoryBackend::new(), input.clone().into_bytes()),
                    |(backend, bytes)| async move {
                        let store = LedgerStore::<FixedPoint, _>::open(backend).await.unwrap();
                        let stream = CsvCommandStream::<FixedPoint>::new(Cursor::new(bytes));
                        black_box(
                            ProcessingSession::new(&store, ErrorPolicy::SkipSilently)
                                .process_stream(stream)
                                .await,
                        );
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_deposit_by_ledger_size,
    bench_transfer_sequence,
    bench_concurrent_deposits,
    bench_csv_batch
);
criterion_main!(benches);
