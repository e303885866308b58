use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use elsewhen::{branch, lazy, Matcher, SyncBranch};
use tokio::runtime::Runtime; // To run async code within Criterion

// Chain whose last clause is the one that matches, so every evaluation scans
// the full depth.
fn build_branch_chain(depth: usize) -> SyncBranch<usize> {
  let mut body = branch().if_(lazy(|| false), 0usize);
  for i in 1..depth {
    let last = i == depth - 1;
    body = body.elseif(lazy(move || last), i);
  }
  body
}

fn bench_sync_branch_eval(c: &mut Criterion) {
  let mut group = c.benchmark_group("sync_branch_eval");
  for depth in [2usize, 8, 32] {
    group.throughput(Throughput::Elements(depth as u64));
    group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
      let body = build_branch_chain(depth);
      b.iter(|| body.else_(usize::MAX));
    });
  }
  group.finish();
}

fn bench_async_branch_eval(c: &mut Criterion) {
  let rt = Runtime::new().expect("tokio runtime");
  let mut group = c.benchmark_group("async_branch_eval");
  for depth in [2usize, 8, 32] {
    group.throughput(Throughput::Elements(depth as u64));
    group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
      let body = build_branch_chain(depth).to_async();
      b.to_async(&rt).iter(|| async { body.else_(usize::MAX).await });
    });
  }
  group.finish();
}

fn bench_match_eval(c: &mut Criterion) {
  let by_value = Matcher::with_comparator(|root: &usize, candidate: &usize| root == candidate);
  let mut group = c.benchmark_group("match_eval");
  for depth in [2usize, 8, 32] {
    group.throughput(Throughput::Elements(depth as u64));
    group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
      // Root matches only the final clause.
      let mut body = by_value.case(depth - 1).when(0, 0usize);
      for i in 1..depth {
        body = body.when(i, i);
      }
      b.iter(|| body.otherwise(usize::MAX));
    });
  }
  group.finish();
}

criterion_group!(
  benches,
  bench_sync_branch_eval,
  bench_async_branch_eval,
  bench_match_eval
);
criterion_main!(benches);
