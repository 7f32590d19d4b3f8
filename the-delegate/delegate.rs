use std::{
  any::type_name,
  fmt,
  ptr::NonNull,
  rc::Rc,
};

use thiserror::Error;

use crate::{
  callable::{
    Callable,
    Method,
    MethodMut,
  },
  ret::DelegateReturn,
};

/// Result type for checked invocation.
pub type Result<T> = std::result::Result<T, DelegateError>;

/// Reasons an invocation produced no value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DelegateError {
  #[error("delegate is not bound")]
  Unbound,
  #[error("weakly bound delegate target has been dropped")]
  TargetDropped,
}

/// Which binding strategy currently occupies a delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
  /// An owned closure or function.
  Lambda,
  /// A method called through an unchecked pointer.
  Raw,
  /// A method called through a `Weak` reference.
  Weak,
  /// A method called through an `Rc` the delegate co-owns.
  Strong,
}

enum Target<R, Args> {
  Lambda(Rc<dyn Fn(Args) -> R>),
  Raw(Rc<dyn Fn(Args) -> R>),
  // Yields `None` once the object is gone.
  Weak(Rc<dyn Fn(Args) -> Option<R>>),
  Strong(Rc<dyn Fn(Args) -> R>),
}

impl<R, Args> Target<R, Args> {
  fn kind(&self) -> BindingKind {
    match self {
      Self::Lambda(_) => BindingKind::Lambda,
      Self::Raw(_) => BindingKind::Raw,
      Self::Weak(_) => BindingKind::Weak,
      Self::Strong(_) => BindingKind::Strong,
    }
  }

  #[inline]
  fn invoke(&self, args: Args) -> Option<R> {
    match self {
      Self::Lambda(f) | Self::Raw(f) | Self::Strong(f) => Some(f(args)),
      Self::Weak(f) => f(args),
    }
  }
}

impl<R, Args> Clone for Target<R, Args> {
  fn clone(&self) -> Self {
    match self {
      Self::Lambda(f) => Self::Lambda(Rc::clone(f)),
      Self::Raw(f) => Self::Raw(Rc::clone(f)),
      Self::Weak(f) => Self::Weak(Rc::clone(f)),
      Self::Strong(f) => Self::Strong(Rc::clone(f)),
    }
  }
}

/// A rebindable, single-slot handle to a callable returning `R` and taking
/// the argument tuple `Args`.
///
/// `Delegate<i32>` takes no arguments and returns `i32`;
/// `Delegate<(), (String, usize)>` takes a `String` and a `usize`.
///
/// Binding always replaces the previous target. Invocation hands results back
/// through [`DelegateReturn::Output`], which is `Option<R>` for ordinary
/// types so that "no value" can be reported without panicking.
///
/// Delegates are not thread-safe and are neither `Send` nor `Sync`. Cloning a
/// delegate shares its bound target; a clone of a strongly bound delegate
/// co-owns the object too.
///
/// ```
/// use std::rc::Rc;
///
/// use the_delegate::Delegate;
///
/// struct Doubler;
///
/// impl Doubler {
///   fn apply(&self, value: i32) -> i32 {
///     value * 2
///   }
/// }
///
/// let doubler = Rc::new(Doubler);
/// let mut delegate = Delegate::<i32, (i32,)>::new();
/// assert_eq!(delegate.execute_if_bound(1), None);
///
/// delegate.bind_weak_object(&doubler, Doubler::apply);
/// assert_eq!(delegate.execute(21), Some(42));
///
/// drop(doubler);
/// assert_eq!(delegate.execute(21), None);
/// ```
pub struct Delegate<R = (), Args = ()> {
  target: Option<Target<R, Args>>,
}

impl<R, Args> Delegate<R, Args> {
  /// Create an unbound delegate.
  pub const fn new() -> Self {
    Self { target: None }
  }

  /// Create a delegate bound to `lambda`.
  pub fn from_lambda<F>(lambda: F) -> Self
  where
    F: Callable<Args, R> + 'static,
  {
    let mut delegate = Self::new();
    delegate.bind_lambda(lambda);
    delegate
  }

  /// Bind an owned closure or function.
  pub fn bind_lambda<F>(&mut self, lambda: F)
  where
    F: Callable<Args, R> + 'static,
  {
    let invoke = Rc::new(move |args: Args| lambda.call(args));
    self.replace(Target::Lambda(invoke), type_name::<F>());
  }

  /// Bind `method` on the object behind `object` without tracking its
  /// lifetime.
  ///
  /// # Safety
  ///
  /// `object` must point to a live `T` every time this binding is invoked,
  /// and no mutable reference to it may exist during those invocations. The
  /// delegate performs no check of its own.
  ///
  /// `method` receives `&T`, so a target that mutates uses interior
  /// mutability, or binds a `&mut self` method with
  /// [`Self::bind_object_mut`].
  pub unsafe fn bind_object<T, M>(&mut self, object: NonNull<T>, method: M)
  where
    T: ?Sized + 'static,
    M: Method<T, Args, R> + 'static,
  {
    let invoke = Rc::new(move |args: Args| {
      // SAFETY: upheld by the caller of `bind_object`.
      let object = unsafe { object.as_ref() };
      method.call_method(object, args)
    });
    self.replace(Target::Raw(invoke), type_name::<T>());
  }

  /// Bind a `&mut self` method on the object behind `object` without
  /// tracking its lifetime.
  ///
  /// This is the raw binding for targets that mutate without interior
  /// mutability. The binding reports [`BindingKind::Raw`].
  ///
  /// # Safety
  ///
  /// `object` must point to a live `T` every time this binding is invoked,
  /// and no other reference to it, shared or mutable, may be in use during
  /// those invocations. Neither this delegate nor a clone of it may be
  /// invoked again while an invocation is still running.
  pub unsafe fn bind_object_mut<T, M>(&mut self, object: NonNull<T>, method: M)
  where
    T: ?Sized + 'static,
    M: MethodMut<T, Args, R> + 'static,
  {
    let invoke = Rc::new(move |args: Args| {
      let mut object = object;
      // SAFETY: upheld by the caller of `bind_object_mut`.
      let object = unsafe { object.as_mut() };
      method.call_method_mut(object, args)
    });
    self.replace(Target::Raw(invoke), type_name::<T>());
  }

  /// Bind `method` on `object` without keeping it alive.
  ///
  /// Once every `Rc` to the object is dropped, invocation stops calling
  /// `method` and reports "no value" instead.
  pub fn bind_weak_object<T, M>(&mut self, object: &Rc<T>, method: M)
  where
    T: ?Sized + 'static,
    M: Method<T, Args, R> + 'static,
  {
    let weak = Rc::downgrade(object);
    let invoke = Rc::new(move |args: Args| {
      // The upgraded handle keeps the object alive until the call returns.
      let Some(object) = weak.upgrade() else {
        log::debug!(
          "weakly bound delegate target `{}` has been dropped",
          type_name::<T>()
        );
        return None;
      };
      Some(method.call_method(&*object, args))
    });
    self.replace(Target::Weak(invoke), type_name::<T>());
  }

  /// Bind `method` on `object`, sharing ownership of it until the delegate
  /// is unbound, rebound or dropped.
  pub fn bind_strong_object<T, M>(&mut self, object: Rc<T>, method: M)
  where
    T: ?Sized + 'static,
    M: Method<T, Args, R> + 'static,
  {
    let invoke = Rc::new(move |args: Args| method.call_method(&*object, args));
    self.replace(Target::Strong(invoke), type_name::<T>());
  }

  /// Returns true if any target is bound.
  ///
  /// A weak binding counts as bound even after its object has been dropped.
  #[inline]
  pub fn is_bound(&self) -> bool {
    self.target.is_some()
  }

  /// The binding strategy in use, or `None` if unbound.
  #[inline]
  pub fn kind(&self) -> Option<BindingKind> {
    self.target.as_ref().map(Target::kind)
  }

  /// Clear the binding, releasing anything it owned.
  pub fn unbind(&mut self) {
    if let Some(target) = self.target.take() {
      log::trace!("unbinding {:?} delegate target", target.kind());
    }
  }

  /// Invoke with packed arguments, reporting why no value was produced.
  ///
  /// Unlike [`Self::execute_args`] this distinguishes an unbound delegate
  /// from a dropped weak target, including for `()` results.
  pub fn try_execute_args(&self, args: Args) -> Result<R> {
    let target = self.target.as_ref().ok_or(DelegateError::Unbound)?;
    target.invoke(args).ok_or(DelegateError::TargetDropped)
  }

  fn replace(&mut self, target: Target<R, Args>, name: &'static str) {
    log::trace!("binding {:?} delegate target `{name}`", target.kind());
    self.target = Some(target);
  }
}

impl<R: DelegateReturn, Args> Delegate<R, Args> {
  /// Invoke with packed arguments.
  ///
  /// # Panics
  ///
  /// Panics if the delegate is unbound. Check [`Self::is_bound`] first or
  /// use [`Self::execute_if_bound_args`].
  #[track_caller]
  pub fn execute_args(&self, args: Args) -> R::Output {
    let Some(target) = &self.target else {
      panic!("execute called on an unbound delegate");
    };
    target.invoke(args).map_or_else(R::unavailable, R::wrap)
  }

  /// Invoke with packed arguments if bound, otherwise return the "no value"
  /// form of the result.
  pub fn execute_if_bound_args(&self, args: Args) -> R::Output {
    match &self.target {
      Some(target) => target.invoke(args).map_or_else(R::unavailable, R::wrap),
      None => R::unavailable(),
    }
  }
}

macro_rules! impl_execute {
  ($( $arg:ident : $ty:ident ),*) => {
    impl<R: DelegateReturn, $( $ty, )*> Delegate<R, ( $( $ty, )* )> {
      /// Invoke the bound target.
      ///
      /// # Panics
      ///
      /// Panics if the delegate is unbound.
      #[track_caller]
      #[inline]
      pub fn execute(&self, $( $arg: $ty ),*) -> R::Output {
        self.execute_args(( $( $arg, )* ))
      }

      /// Invoke the bound target, or return the "no value" form of the
      /// result if unbound.
      #[inline]
      pub fn execute_if_bound(&self, $( $arg: $ty ),*) -> R::Output {
        self.execute_if_bound_args(( $( $arg, )* ))
      }
    }

    impl<R, $( $ty, )*> Delegate<R, ( $( $ty, )* )> {
      /// Invoke the bound target, reporting why no value was produced.
      #[inline]
      pub fn try_execute(&self, $( $arg: $ty ),*) -> Result<R> {
        self.try_execute_args(( $( $arg, )* ))
      }
    }
  };
}

impl_execute!();
impl_execute!(a0: A0);
impl_execute!(a0: A0, a1: A1);
impl_execute!(a0: A0, a1: A1, a2: A2);
impl_execute!(a0: A0, a1: A1, a2: A2, a3: A3);
impl_execute!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4);
impl_execute!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
impl_execute!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
impl_execute!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);

impl<R, Args> Default for Delegate<R, Args> {
  fn default() -> Self {
    Self::new()
  }
}

impl<R, Args> Clone for Delegate<R, Args> {
  fn clone(&self) -> Self {
    Self {
      target: self.target.clone(),
    }
  }
}

impl<R, Args> fmt::Debug for Delegate<R, Args> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Delegate")
      .field("signature", &type_name::<fn(Args) -> R>())
      .field("kind", &self.kind())
      .finish()
  }
}
