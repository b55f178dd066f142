#![allow(missing_docs)]
//! Constant-time primitives against their branching baselines.
//!
//! Each operation runs over a pre-generated batch of operands, once random (unpredictable
//! branches) and once ordered (predictable branches). Results are folded into an accumulator
//! that goes through `black_box`. The sample size defaults to 100 and can be changed with
//! `cargo bench --bench ct_ops -- --sample-size <N>`.

#[allow(unused_imports)]
use criterion::{
  criterion_group, criterion_main,
  measurement::{Measurement, WallTime},
  BenchmarkGroup, BenchmarkId, Criterion,
};
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use criterion_cycles_per_byte::CyclesPerByte;
use ctops_primitives::{branching, ct};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const BATCH: usize = 4_096;
const SAMPLE_SIZE: usize = 100;

struct Batch {
  x: Vec<u32>,
  y: Vec<u32>,
  selector: Vec<u32>,
}

fn random_batch(seed: u64) -> Batch {
  let mut rng = StdRng::seed_from_u64(seed);
  Batch {
    x: (0..BATCH).map(|_| rng.random()).collect(),
    y: (0..BATCH).map(|_| rng.random()).collect(),
    selector: (0..BATCH).map(|_| rng.random_range(0..=1)).collect(),
  }
}

// x < y and selector == 1 everywhere, so every branch goes the same way.
fn ordered_batch() -> Batch {
  Batch {
    x: (0..BATCH as u32).collect(),
    y: (0..BATCH as u32).map(|i| i + (1 << 31)).collect(),
    selector: vec![1; BATCH],
  }
}

fn bench_binary<M, F>(group: &mut BenchmarkGroup<'_, M>, name: &str, batches: &[(&str, &Batch)], f: F)
where
  M: Measurement,
  F: Fn(u32, u32) -> u32 + Copy,
{
  for &(label, batch) in batches {
    group.bench_with_input(BenchmarkId::new(name, label), batch, |b, batch| {
      b.iter(|| {
        let mut acc = 0u32;
        for i in 0..BATCH {
          acc = acc.wrapping_add(f(black_box(batch.x[i]), black_box(batch.y[i])));
        }
        black_box(acc)
      })
    });
  }
}

fn bench_select<M, F>(group: &mut BenchmarkGroup<'_, M>, name: &str, batches: &[(&str, &Batch)], f: F)
where
  M: Measurement,
  F: Fn(u32, u32, u32) -> u32 + Copy,
{
  for &(label, batch) in batches {
    group.bench_with_input(BenchmarkId::new(name, label), batch, |b, batch| {
      b.iter(|| {
        let mut acc = 0u32;
        for i in 0..BATCH {
          acc = acc.wrapping_add(f(black_box(batch.selector[i]), batch.x[i], batch.y[i]));
        }
        black_box(acc)
      })
    });
  }
}

pub fn benchmark_ct_ops<T: Measurement + 'static>(c: &mut Criterion<T>) {
  let random = random_batch(0x5eed);
  let ordered = ordered_batch();
  let batches = [("random", &random), ("ordered", &ordered)];

  let mut group = c.benchmark_group(format!(
    "CtOps/{}",
    std::any::type_name::<T>().split(':').next_back().unwrap()
  ));

  // Control: loop and accumulator overhead only.
  bench_binary(&mut group, "nothing", &batches, |x, _| x);

  bench_binary(&mut group, "ct::less_than", &batches, ct::less_than);
  bench_binary(&mut group, "ct::less_than_borrow", &batches, ct::less_than_borrow);
  bench_binary(&mut group, "branching::less_than", &batches, branching::less_than);

  bench_binary(&mut group, "ct::less_or_equal", &batches, ct::less_or_equal);
  bench_binary(&mut group, "branching::less_or_equal", &batches, branching::less_or_equal);

  bench_binary(&mut group, "ct::equal", &batches, ct::equal);
  bench_binary(&mut group, "ct::equal_fold", &batches, ct::equal_fold);
  bench_binary(&mut group, "branching::equal", &batches, branching::equal);

  bench_select(&mut group, "ct::select", &batches, ct::select);
  bench_select(&mut group, "branching::select", &batches, branching::select);

  group.finish();
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
criterion_group!(
  name = benches_cycles;
  config = Criterion::default().with_measurement(CyclesPerByte).sample_size(SAMPLE_SIZE).warm_up_time(std::time::Duration::from_millis(500)).measurement_time(std::time::Duration::from_secs(1));
  targets = benchmark_ct_ops<CyclesPerByte>
);

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
criterion_group!(
  name = benches_cycles;
  config = Criterion::default().sample_size(SAMPLE_SIZE).warm_up_time(std::time::Duration::from_millis(500)).measurement_time(std::time::Duration::from_secs(1));
  targets = benchmark_ct_ops<WallTime>
);

criterion_main!(benches_cycles);
