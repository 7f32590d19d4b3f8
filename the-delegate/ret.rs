//! Mapping from a delegate's declared result type to the value returned by
//! invocation.
//!
//! Invocation can fail to reach its target (an unbound delegate, or a weak
//! target that has been dropped), so results are handed back through a
//! wrapper that can express "no value":
//!
//! | declared `R` | `R::Output`  |
//! |--------------|--------------|
//! | `()`         | `()`         |
//! | `Option<T>`  | `Option<T>`  |
//! | anything else| `Option<R>`  |
//!
//! Already-optional results pass through unchanged instead of nesting.
//!
//! Stable Rust cannot express "anything else" directly, so the mapping is
//! implemented for the standard library's types. Types defined in the calling
//! crate opt in with [`delegate_return!`]. The orphan rule keeps types from a
//! third crate (say `serde_json::Value`) out of reach; wrap them in a local
//! newtype, or call `try_execute(..).ok()`, which yields `Option<R>` for
//! every `R` whether or not it implements [`DelegateReturn`].

use std::{
  borrow::Cow,
  cell::{
    Cell,
    RefCell,
  },
  cmp::Ordering,
  collections::{
    BTreeMap,
    BTreeSet,
    BinaryHeap,
    HashMap,
    HashSet,
    LinkedList,
    VecDeque,
  },
  ffi::OsString,
  marker::PhantomData,
  net::{
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
    SocketAddrV4,
    SocketAddrV6,
  },
  num::{
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
    Wrapping,
  },
  ops::{
    Range,
    RangeFrom,
    RangeFull,
    RangeInclusive,
    RangeTo,
    RangeToInclusive,
  },
  path::PathBuf,
  pin::Pin,
  rc::{
    self,
    Rc,
  },
  sync::{
    self,
    Arc,
  },
  time::{
    Duration,
    Instant,
    SystemTime,
  },
};

/// Result type of a delegate, and how it is wrapped on the way out.
pub trait DelegateReturn: Sized {
  /// The wrapper handed back to callers.
  type Output;

  /// Wrap a value produced by the target.
  fn wrap(self) -> Self::Output;

  /// The "no value" form, used when the target could not be reached.
  fn unavailable() -> Self::Output;
}

impl DelegateReturn for () {
  type Output = ();

  #[inline]
  fn wrap(self) -> Self::Output {}

  #[inline]
  fn unavailable() -> Self::Output {}
}

impl<T> DelegateReturn for Option<T> {
  type Output = Option<T>;

  #[inline]
  fn wrap(self) -> Self::Output {
    self
  }

  #[inline]
  fn unavailable() -> Self::Output {
    None
  }
}

/// Implement [`DelegateReturn`] for types that should be wrapped in `Option`.
///
/// Accepts a list of concrete types, or `impl<..> for Type<..>;` items for
/// generic ones. Only types local to the calling crate can be named here;
/// foreign types need a newtype.
///
/// ```
/// use the_delegate::{
///   Delegate,
///   delegate_return,
/// };
///
/// #[derive(Debug, PartialEq)]
/// struct Score(u32);
///
/// delegate_return!(Score);
///
/// let mut delegate = Delegate::<Score>::new();
/// delegate.bind_lambda(|| Score(3));
/// assert_eq!(delegate.execute(), Some(Score(3)));
///
/// #[derive(Debug, PartialEq)]
/// struct Tagged<T>(T);
///
/// delegate_return! {
///   impl<T> for Tagged<T>;
/// }
///
/// let tagged = Delegate::<Tagged<&str>>::from_lambda(|| Tagged("a"));
/// assert_eq!(tagged.execute(), Some(Tagged("a")));
/// ```
#[macro_export]
macro_rules! delegate_return {
  ($( impl<$( $param:ident $( : ?$unsized:ident )? ),+> for $ty:ty; )+) => {
    $(
      impl<$( $param $( : ?$unsized )? ),+> $crate::DelegateReturn for $ty {
        type Output = ::std::option::Option<$ty>;

        #[inline]
        fn wrap(self) -> Self::Output {
          ::std::option::Option::Some(self)
        }

        #[inline]
        fn unavailable() -> Self::Output {
          ::std::option::Option::None
        }
      }
    )+
  };
  ($( $ty:ty ),+ $(,)?) => {
    $(
      impl $crate::DelegateReturn for $ty {
        type Output = ::std::option::Option<$ty>;

        #[inline]
        fn wrap(self) -> Self::Output {
          ::std::option::Option::Some(self)
        }

        #[inline]
        fn unavailable() -> Self::Output {
          ::std::option::Option::None
        }
      }
    )+
  };
}

delegate_return!(
  bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
  OsString, PathBuf, Duration, Instant, SystemTime, Ordering, RangeFull, IpAddr, Ipv4Addr, Ipv6Addr,
  SocketAddr, SocketAddrV4, SocketAddrV6, NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64,
  NonZeroU128, NonZeroUsize, NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128,
  NonZeroIsize
);

delegate_return! {
  impl<T: ?Sized> for Box<T>;
  impl<T: ?Sized> for Rc<T>;
  impl<T: ?Sized> for Arc<T>;
  impl<T> for Vec<T>;
  impl<T> for VecDeque<T>;
  impl<T> for BTreeSet<T>;
  impl<T, S> for HashSet<T, S>;
  impl<K, V> for BTreeMap<K, V>;
  impl<K, V, S> for HashMap<K, V, S>;
  impl<T: ?Sized> for rc::Weak<T>;
  impl<T: ?Sized> for sync::Weak<T>;
  impl<T: ?Sized> for PhantomData<T>;
  impl<P> for Pin<P>;
  impl<T> for Cell<T>;
  impl<T> for RefCell<T>;
  impl<T> for Wrapping<T>;
  impl<T> for LinkedList<T>;
  impl<T> for BinaryHeap<T>;
  impl<T> for Range<T>;
  impl<T> for RangeInclusive<T>;
  impl<T> for RangeFrom<T>;
  impl<T> for RangeTo<T>;
  impl<T> for RangeToInclusive<T>;
  impl<T, E> for Result<T, E>;
  impl<A> for (A,);
  impl<A, B> for (A, B);
  impl<A, B, C> for (A, B, C);
  impl<A, B, C, D> for (A, B, C, D);
  impl<A, B, C, D, E> for (A, B, C, D, E);
  impl<A, B, C, D, E, F> for (A, B, C, D, E, F);
  impl<A, B, C, D, E, F, G> for (A, B, C, D, E, F, G);
  impl<A, B, C, D, E, F, G, H> for (A, B, C, D, E, F, G, H);
}

impl<T, const N: usize> DelegateReturn for [T; N] {
  type Output = Option<[T; N]>;

  #[inline]
  fn wrap(self) -> Self::Output {
    Some(self)
  }

  #[inline]
  fn unavailable() -> Self::Output {
    None
  }
}

impl<'a, T: ?Sized> DelegateReturn for &'a T {
  type Output = Option<&'a T>;

  #[inline]
  fn wrap(self) -> Self::Output {
    Some(self)
  }

  #[inline]
  fn unavailable() -> Self::Output {
    None
  }
}

impl<'a, T: ?Sized> DelegateReturn for &'a mut T {
  type Output = Option<&'a mut T>;

  #[inline]
  fn wrap(self) -> Self::Output {
    Some(self)
  }

  #[inline]
  fn unavailable() -> Self::Output {
    None
  }
}

impl<'a, B> DelegateReturn for Cow<'a, B>
where
  B: ToOwned + ?Sized,
{
  type Output = Option<Cow<'a, B>>;

  #[inline]
  fn wrap(self) -> Self::Output {
    Some(self)
  }

  #[inline]
  fn unavailable() -> Self::Output {
    None
  }
}
