//! Benchmarks for delegate invocation.
//!
//! Run with: `cargo bench -p the-delegate --bench execute`

use std::{
  ptr::NonNull,
  rc::Rc,
};

use divan::{
  Bencher,
  black_box,
};
use the_delegate::Delegate;

fn main() {
  divan::main();
}

struct Accumulator {
  base: u64,
}

impl Accumulator {
  fn add(&self, value: u64) -> u64 {
    self.base.wrapping_add(value)
  }
}

// Direct calls, as a baseline for the binding overhead.

#[divan::bench]
fn direct_call(bencher: Bencher) {
  let acc = Accumulator { base: 7 };
  bencher.bench_local(|| acc.add(black_box(3)));
}

mod bound {
  use super::*;

  #[divan::bench]
  fn lambda(bencher: Bencher) {
    let delegate = Delegate::<u64, (u64,)>::from_lambda(|v: u64| v.wrapping_add(7));
    bencher.bench_local(|| delegate.execute(black_box(3)));
  }

  #[divan::bench]
  fn raw(bencher: Bencher) {
    let acc = Accumulator { base: 7 };
    let mut delegate = Delegate::<u64, (u64,)>::new();
    unsafe { delegate.bind_object(NonNull::from(&acc), Accumulator::add) };
    bencher.bench_local(|| delegate.execute(black_box(3)));
  }

  #[divan::bench]
  fn weak(bencher: Bencher) {
    let acc = Rc::new(Accumulator { base: 7 });
    let mut delegate = Delegate::<u64, (u64,)>::new();
    delegate.bind_weak_object(&acc, Accumulator::add);
    bencher.bench_local(|| delegate.execute(black_box(3)));
  }

  #[divan::bench]
  fn weak_dropped(bencher: Bencher) {
    let acc = Rc::new(Accumulator { base: 7 });
    let mut delegate = Delegate::<u64, (u64,)>::new();
    delegate.bind_weak_object(&acc, Accumulator::add);
    drop(acc);
    bencher.bench_local(|| delegate.execute(black_box(3)));
  }

  #[divan::bench]
  fn strong(bencher: Bencher) {
    let mut delegate = Delegate::<u64, (u64,)>::new();
    delegate.bind_strong_object(Rc::new(Accumulator { base: 7 }), Accumulator::add);
    bencher.bench_local(|| delegate.execute(black_box(3)));
  }
}

mod rebind {
  use super::*;

  #[divan::bench]
  fn lambda(bencher: Bencher) {
    let mut delegate = Delegate::<u64, (u64,)>::new();
    bencher.bench_local(|| {
      delegate.bind_lambda(|v: u64| v);
      delegate.execute(black_box(1))
    });
  }

  #[divan::bench]
  fn strong(bencher: Bencher) {
    let acc = Rc::new(Accumulator { base: 7 });
    let mut delegate = Delegate::<u64, (u64,)>::new();
    bencher.bench_local(|| {
      delegate.bind_strong_object(Rc::clone(&acc), Accumulator::add);
      delegate.execute(black_box(1))
    });
  }
}
