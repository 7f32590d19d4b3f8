//! # the-delegate
//!
//! Single-slot, rebindable callback handles.
//!
//! A [`Delegate`] holds at most one target matching a fixed signature and can
//! be rebound at any time. Four binding strategies are available:
//!
//! - **Lambda**: an owned closure or function ([`Delegate::bind_lambda`]).
//! - **Raw**: a method called through an unchecked pointer
//!   ([`Delegate::bind_object`], or [`Delegate::bind_object_mut`] for
//!   `&mut self` methods; both `unsafe`).
//! - **Weak**: a method called through a `Weak` reference; once the object is
//!   dropped, invocation returns "no value" instead of calling
//!   ([`Delegate::bind_weak_object`]).
//! - **Strong**: a method called through an `Rc` the delegate co-owns
//!   ([`Delegate::bind_strong_object`]).
//!
//! ## Signatures
//!
//! The first type parameter is the result, the second the argument tuple:
//!
//! ```rust
//! use the_delegate::Delegate;
//!
//! let mut greet = Delegate::<String, (&'static str, usize)>::new();
//! greet.bind_lambda(|name: &'static str, times: usize| name.repeat(times));
//!
//! assert_eq!(greet.execute("hi", 2), Some("hihi".to_string()));
//! ```
//!
//! ## Results
//!
//! Invocation returns [`DelegateReturn::Output`]: `Option<R>` for ordinary
//! results, `Option<T>` unchanged when `R` is already `Option<T>`, and `()`
//! for `()`. An unbound delegate (through `execute_if_bound`) or a dropped
//! weak target produces `None`.
//!
//! ```rust
//! use the_delegate::Delegate;
//!
//! let mut parse = Delegate::<Option<u32>, (String,)>::new();
//! assert_eq!(parse.execute_if_bound("7".to_string()), None);
//!
//! parse.bind_lambda(|text: String| text.parse::<u32>().ok());
//! assert_eq!(parse.execute("7".to_string()), Some(7));
//! assert_eq!(parse.execute("x".to_string()), None);
//! ```
//!
//! For `()` results the "no value" case is silent. Use `try_execute` to tell
//! an unbound delegate or a dropped target apart from a successful call:
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use the_delegate::{
//!   Delegate,
//!   DelegateError,
//! };
//!
//! struct Window;
//!
//! impl Window {
//!   fn redraw(&self) {}
//! }
//!
//! let window = Rc::new(Window);
//! let mut on_resize = Delegate::<()>::new();
//! on_resize.bind_weak_object(&window, Window::redraw);
//! assert_eq!(on_resize.try_execute(), Ok(()));
//!
//! drop(window);
//! on_resize.execute();
//! assert_eq!(on_resize.try_execute(), Err(DelegateError::TargetDropped));
//! ```
//!
//! Wrapping is implemented for the standard library's types. Types defined in
//! your own crate opt in with [`delegate_return!`]; types from other crates
//! need a local newtype. `try_execute(..).ok()` gives an `Option<R>` for any
//! `R`, with or without [`DelegateReturn`]:
//!
//! ```rust
//! use the_delegate::Delegate;
//!
//! struct Foreign(u8);
//!
//! let delegate = Delegate::<Foreign>::from_lambda(|| Foreign(1));
//! assert_eq!(delegate.try_execute().ok().map(|f| f.0), Some(1));
//! ```

mod callable;
mod delegate;
mod ret;

pub use callable::{
  Callable,
  Method,
  MethodMut,
};
pub use delegate::{
  BindingKind,
  Delegate,
  DelegateError,
  Result,
};
pub use ret::DelegateReturn;
