use criterion::{black_box, criterion_group, criterion_main, Criterion};

use convertx_rs::book::{BookProvider, MockBookProvider};
use convertx_rs::engine::types::{AllocationRequest, SortMode};
use convertx_rs::engine::allocate;

// The engine runs on every keystroke of the amount field, so the hot
// path is one full allocation over a realistic pool.
fn bench_allocate(c: &mut Criterion) {
    let mut provider = MockBookProvider::new(42);
    provider.orders_per_side = 500;
    let book = provider.snapshot();

    c.bench_function("acquire_best_price_500_orders", |b| {
        let req = AllocationRequest::acquire(50_000.0, SortMode::BestPrice);
        b.iter(|| allocate(black_box(&book.sell_offers), black_box(&req)))
    });

    c.bench_function("dispose_best_fill_500_orders", |b| {
        let req = AllocationRequest::dispose(50_000.0, SortMode::BestFill);
        b.iter(|| allocate(black_box(&book.buy_offers), black_box(&req)))
    });
}

criterion_group!(benches, bench_allocate);
criterion_main!(benches);
