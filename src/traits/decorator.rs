// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Decorators: functions from a callable to a callable.
//!
//! Applying `outer` to the result of applying `inner` to a target yields
//! `outer(inner(target))`. The inner layer runs first on entry and last on
//! exit. A decorator never needs to know whether it receives an original
//! target or another wrapper.

/// A wrapping utility that turns a target into a wrapper.
///
/// `decorate` consumes the decorator, so state owned by it (a call counter,
/// captured arguments) belongs to exactly one wrapper.
pub trait Decorator<C> {
    type Wrapped;

    fn decorate(self, target: C) -> Self::Wrapped;
}

/// Two decorators composed into one: `outer(inner(target))`.
#[derive(Debug, Clone, Copy)]
pub struct Stack<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<C, Outer, Inner> Decorator<C> for Stack<Outer, Inner>
where
    Inner: Decorator<C>,
    Outer: Decorator<Inner::Wrapped>,
{
    type Wrapped = Outer::Wrapped;

    fn decorate(self, target: C) -> Self::Wrapped {
        self.outer.decorate(self.inner.decorate(target))
    }
}

pub trait DecoratorExt: Sized {
    /// Stack `self` on top of `inner`, the way two decorator lines above one
    /// definition compose.
    fn stack<Inner>(self, inner: Inner) -> Stack<Self, Inner> {
        Stack { outer: self, inner }
    }
}

impl<D> DecoratorExt for D {}

pub trait CallableExt: Sized {
    /// Postfix form of `decorator.decorate(self)`.
    fn decorate_with<D: Decorator<Self>>(self, decorator: D) -> D::Wrapped {
        decorator.decorate(self)
    }
}

impl<T> CallableExt for T {}

/// Adapts a plain closure into a [`Decorator`].
#[derive(Copy, Clone)]
pub struct DecoratorFn<F> {
    f: F,
}

pub fn decorator_fn<C, W, F>(f: F) -> DecoratorFn<F>
where
    F: FnOnce(C) -> W,
{
    DecoratorFn { f }
}

impl<C, W, F> Decorator<C> for DecoratorFn<F>
where
    F: FnOnce(C) -> W,
{
    type Wrapped = W;

    fn decorate(self, target: C) -> W {
        (self.f)(target)
    }
}

/// The decorator that returns its target untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

pub fn identity() -> Identity {
    Identity
}

impl<C> Decorator<C> for Identity {
    type Wrapped = C;

    fn decorate(self, target: C) -> C {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_applies_inner_first() {
        let add_inner = decorator_fn(|s: String| format!("{s}+inner"));
        let add_outer = decorator_fn(|s: String| format!("{s}+outer"));

        let stacked = add_outer.stack(add_inner);
        assert_eq!(stacked.decorate("t".to_string()), "t+inner+outer");
    }

    #[test]
    fn test_stack_equals_nested_application() {
        let nested = decorator_fn(|n: i32| n * 10).decorate(decorator_fn(|n: i32| n + 1).decorate(2));
        let stacked = decorator_fn(|n: i32| n * 10).stack(decorator_fn(|n: i32| n + 1)).decorate(2);
        assert_eq!(nested, 30);
        assert_eq!(stacked, nested);
    }

    #[test]
    fn test_identity_and_postfix_form() {
        assert_eq!(7_i32.decorate_with(identity()), 7);
        assert_eq!(3_i32.decorate_with(decorator_fn(|n: i32| n * n)), 9);
    }
}
