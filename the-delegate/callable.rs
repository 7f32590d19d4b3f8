//! Signature traits used to accept closures and methods as delegate targets.
//!
//! Arguments travel as a tuple so a single generic `Args` parameter can stand
//! for any parameter list. Both traits are implemented for plain `Fn` types of
//! up to eight arguments.

/// A free callable with signature `Fn(A0, .., An) -> R`, called with the
/// arguments packed as `Args = (A0, .., An)`.
pub trait Callable<Args, R> {
  /// Call with the packed arguments.
  fn call(&self, args: Args) -> R;
}

/// A method-like callable with signature `Fn(&T, A0, .., An) -> R`.
///
/// Method paths such as `Counter::increment` satisfy this directly, as do
/// closures whose first parameter is `&T`.
pub trait Method<T: ?Sized, Args, R> {
  /// Call on `target` with the packed arguments.
  fn call_method(&self, target: &T, args: Args) -> R;
}

/// A method-like callable with signature `Fn(&mut T, A0, .., An) -> R`.
///
/// Only raw bindings hand out `&mut T`; see
/// [`Delegate::bind_object_mut`](crate::Delegate::bind_object_mut).
pub trait MethodMut<T: ?Sized, Args, R> {
  /// Call on `target` with the packed arguments.
  fn call_method_mut(&self, target: &mut T, args: Args) -> R;
}

macro_rules! impl_signature {
  ($( $arg:ident : $ty:ident ),*) => {
    impl<Func, R, $( $ty, )*> Callable<( $( $ty, )* ), R> for Func
    where
      Func: Fn($( $ty ),*) -> R,
    {
      #[inline]
      fn call(&self, ( $( $arg, )* ): ( $( $ty, )* )) -> R {
        (self)($( $arg ),*)
      }
    }

    impl<Func, T, R, $( $ty, )*> Method<T, ( $( $ty, )* ), R> for Func
    where
      T: ?Sized,
      Func: Fn(&T, $( $ty ),*) -> R,
    {
      #[inline]
      fn call_method(&self, target: &T, ( $( $arg, )* ): ( $( $ty, )* )) -> R {
        (self)(target, $( $arg ),*)
      }
    }

    impl<Func, T, R, $( $ty, )*> MethodMut<T, ( $( $ty, )* ), R> for Func
    where
      T: ?Sized,
      Func: Fn(&mut T, $( $ty ),*) -> R,
    {
      #[inline]
      fn call_method_mut(&self, target: &mut T, ( $( $arg, )* ): ( $( $ty, )* )) -> R {
        (self)(target, $( $arg ),*)
      }
    }
  };
}

impl_signature!();
impl_signature!(a0: A0);
impl_signature!(a0: A0, a1: A1);
impl_signature!(a0: A0, a1: A1, a2: A2);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
impl_signature!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  struct Counter {
    hits: Cell<u32>,
  }

  impl Counter {
    fn bump(&self, by: u32) -> u32 {
      self.hits.set(self.hits.get() + by);
      self.hits.get()
    }

    fn reset(&self) {
      self.hits.set(0);
    }
  }

  fn call_packed<Args, R>(f: &impl Callable<Args, R>, args: Args) -> R {
    f.call(args)
  }

  #[test]
  fn callable_unpacks_tuple_arguments() {
    assert_eq!(call_packed(&|| 7, ()), 7);
    assert_eq!(call_packed(&|a: i32| a * 2, (21,)), 42);
    assert_eq!(
      call_packed(&|a: &str, b: usize| a.repeat(b), ("ab", 3)),
      "ababab"
    );
  }

  #[test]
  fn callable_supports_eight_arguments() {
    let sum = |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8| {
      [a, b, c, d, e, f, g, h].iter().map(|v| *v as u32).sum::<u32>()
    };
    assert_eq!(call_packed(&sum, (1, 2, 3, 4, 5, 6, 7, 8)), 36);
  }

  #[test]
  fn method_paths_are_methods() {
    let counter = Counter { hits: Cell::new(0) };
    assert_eq!(Counter::bump.call_method(&counter, (2,)), 2);
    assert_eq!(Counter::bump.call_method(&counter, (3,)), 5);
    Counter::reset.call_method(&counter, ());
    assert_eq!(counter.hits.get(), 0);
  }

  struct Gauge {
    level: i32,
  }

  impl Gauge {
    fn raise(&mut self, by: i32) -> i32 {
      self.level += by;
      self.level
    }
  }

  #[test]
  fn mutable_method_paths_are_mut_methods() {
    let mut gauge = Gauge { level: 1 };
    assert_eq!(Gauge::raise.call_method_mut(&mut gauge, (2,)), 3);
    assert_eq!(Gauge::raise.call_method_mut(&mut gauge, (4,)), 7);
    assert_eq!(gauge.level, 7);
  }

  #[test]
  fn closures_taking_a_reference_are_methods() {
    let counter = Counter { hits: Cell::new(4) };
    let peek = |c: &Counter, extra: u32| c.hits.get() + extra;
    assert_eq!(peek.call_method(&counter, (1,)), 5);
  }
}
