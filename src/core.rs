//! Core traits and types for spreadsort.
//!
//! This module defines the three strategies the engine is parameterized over:
//! - [`KeyExtractor`]: turns an element into an ordered, fixed-width unsigned key.
//! - [`RightShift`]: returns an element's key shifted right by a number of bits.
//! - [`Compare`]: the strict weak ordering used by the comparison fallback.
//!
//! Plus [`RadixKey`], the unsigned integer types keys are made of, and the default
//! strategies ([`Natural`], [`KeyShift`], [`KeyOrder`], [`Less`]).

use std::fmt::Debug;
use std::ops::{Shr, Sub};

use crate::config::Tuning;
use crate::float::FloatKey;

/// An unsigned, fixed-width integer usable as a radix key.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
pub trait RadixKey: Copy + Ord + Debug + Shr<u32, Output = Self> + Sub<Output = Self> {
    /// Width of the key in bits.
    const BITS: u32;

    /// Number of significant bits, i.e. `BITS - leading_zeros`.
    fn bit_len(self) -> u32;

    /// Truncating conversion used for bucket indices. Callers only pass values that
    /// fit in a bucket table.
    fn as_index(self) -> usize;
}

macro_rules! radix_key_impl {
    ($($t:ty),* $(,)?) => {$(
        impl RadixKey for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn bit_len(self) -> u32 {
                <$t>::BITS - self.leading_zeros()
            }

            #[inline(always)]
            fn as_index(self) -> usize {
                self as usize
            }
        }
    )*};
}

radix_key_impl!(u8, u16, u32, u64, u128, usize);

/// Converts an element into an ordered unsigned key.
///
/// The key order must agree with the element order: if `a` sorts before `b`, then
/// `extract(a) <= extract(b)`.
///
/// # Examples
///
/// ```
/// use spreadsort::core::KeyExtractor;
///
/// struct Reading {
///     sensor: u16,
///     millis: u32,
/// }
///
/// /// Orders readings by sensor first, then by timestamp.
/// struct BySensorThenTime;
///
/// impl KeyExtractor<Reading> for BySensorThenTime {
///     type Key = u64;
///
///     fn extract(&self, r: &Reading) -> u64 {
///         ((r.sensor as u64) << 32) | r.millis as u64
///     }
/// }
/// ```
pub trait KeyExtractor<T: ?Sized> {
    /// The unsigned key type.
    type Key: RadixKey;

    /// Radix heuristics suited to the key distribution this extractor produces.
    const TUNING: Tuning = Tuning::INTEGER;

    /// Returns the full key of `value`.
    fn extract(&self, value: &T) -> Self::Key;
}

impl<T: ?Sized, E: KeyExtractor<T> + ?Sized> KeyExtractor<T> for &E {
    type Key = E::Key;
    const TUNING: Tuning = E::TUNING;

    #[inline(always)]
    fn extract(&self, value: &T) -> E::Key {
        (**self).extract(value)
    }
}

/// Returns an element's key shifted right by `offset` bits.
///
/// `shift(x, 0)` is the full key. The engine only ever asks for offsets smaller than
/// the key width. Any `Fn(&T, u32) -> K` closure is a `RightShift`:
///
/// ```
/// use spreadsort::spreadsort_by_shift;
///
/// let mut data: Vec<u32> = (0..2000).rev().collect();
/// spreadsort_by_shift(&mut data, |x: &u32, offset: u32| *x >> offset);
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub trait RightShift<T: ?Sized> {
    /// The unsigned key type.
    type Key: RadixKey;

    /// Returns the key of `value` shifted right by `offset` bits.
    fn shift(&self, value: &T, offset: u32) -> Self::Key;
}

impl<T, K, F> RightShift<T> for F
where
    T: ?Sized,
    K: RadixKey,
    F: Fn(&T, u32) -> K,
{
    type Key = K;

    #[inline(always)]
    fn shift(&self, value: &T, offset: u32) -> K {
        self(value, offset)
    }
}

/// A strict weak ordering over `T`.
///
/// Any `Fn(&T, &T) -> bool` closure returning "`a` sorts before `b`" is a `Compare`.
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` sorts strictly before `b`.
    fn is_less(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    #[inline(always)]
    fn is_less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// The `<` operator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Less;

impl<T: PartialOrd + ?Sized> Compare<T> for Less {
    #[inline(always)]
    fn is_less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Adapts a [`KeyExtractor`] into a [`RightShift`].
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyShift<E>(pub E);

impl<T: ?Sized, E: KeyExtractor<T>> RightShift<T> for KeyShift<E> {
    type Key = E::Key;

    #[inline(always)]
    fn shift(&self, value: &T, offset: u32) -> E::Key {
        self.0.extract(value) >> offset
    }
}

/// Orders elements by the keys a [`KeyExtractor`] produces.
///
/// Unlike [`Less`] this is a total order for every extractor, including floats
/// holding NaN.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyOrder<E>(pub E);

impl<T: ?Sized, E: KeyExtractor<T>> Compare<T> for KeyOrder<E> {
    #[inline(always)]
    fn is_less(&self, a: &T, b: &T) -> bool {
        self.0.extract(a) < self.0.extract(b)
    }
}

/// The natural key of primitive types.
///
/// - unsigned integers, `bool` and `char` are used as-is;
/// - signed integers have their sign bit flipped so negatives sort first;
/// - floats go through the total-order cast of [`float_total_order`](crate::float_total_order).
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

macro_rules! natural_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl KeyExtractor<$t> for Natural {
            type Key = $t;

            #[inline(always)]
            fn extract(&self, value: &$t) -> $t {
                *value
            }
        }
    )*};
}

// In two's complement negatives have the top bit set; flipping it moves them below
// every non-negative value without changing the order within either half.
macro_rules! natural_signed {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl KeyExtractor<$t> for Natural {
            type Key = $u;

            #[inline(always)]
            fn extract(&self, value: &$t) -> $u {
                (*value as $u) ^ (1 << (<$u>::BITS - 1))
            }
        }
    )*};
}

natural_unsigned!(u8, u16, u32, u64, u128, usize);

natural_signed! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
}

impl KeyExtractor<bool> for Natural {
    type Key = u8;

    #[inline(always)]
    fn extract(&self, value: &bool) -> u8 {
        *value as u8
    }
}

impl KeyExtractor<char> for Natural {
    type Key = u32;

    #[inline(always)]
    fn extract(&self, value: &char) -> u32 {
        *value as u32
    }
}

impl KeyExtractor<f32> for Natural {
    type Key = u32;
    const TUNING: Tuning = Tuning::FLOAT;

    #[inline(always)]
    fn extract(&self, value: &f32) -> u32 {
        value.total_order_key()
    }
}

impl KeyExtractor<f64> for Natural {
    type Key = u64;
    const TUNING: Tuning = Tuning::FLOAT;

    #[inline(always)]
    fn extract(&self, value: &f64) -> u64 {
        value.total_order_key()
    }
}
