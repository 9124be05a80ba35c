//! IEEE-754 total-order cast.
//!
//! Floats are stored in sign-magnitude form, so reinterpreting their bits as an
//! unsigned integer orders every negative value *after* every positive one, and
//! orders negatives backwards among themselves. The cast below fixes both:
//!
//! ```plaintext
//!   sign = 1 (negative): key = !bits            -> more negative, smaller key
//!   sign = 0 (positive): key = bits | sign_mask -> above every negative key
//! ```
//!
//! For all finite, non-NaN values the unsigned order of the keys equals the numeric
//! order of the floats, with `-0.0` placed immediately before `+0.0`. NaNs get a key
//! too (negative NaNs below `-inf`, positive NaNs above `+inf`), but that placement
//! is an implementation detail and not part of the ordering contract.

use crate::core::RadixKey;

/// A binary IEEE-754 floating-point type with an unsigned integer of the same width.
pub trait FloatKey: Copy + PartialOrd {
    /// Unsigned integer with exactly the width of `Self`.
    type Bits: RadixKey;

    /// Reinterprets the raw bit pattern, without any reordering.
    fn raw_bits(self) -> Self::Bits;

    /// Maps the value onto an unsigned key whose order matches the numeric order.
    fn total_order_key(self) -> Self::Bits;
}

macro_rules! float_key_impl {
    ($($float:ty => $bits:ty),* $(,)?) => {$(
        impl FloatKey for $float {
            type Bits = $bits;

            #[inline(always)]
            fn raw_bits(self) -> $bits {
                self.to_bits()
            }

            #[inline(always)]
            fn total_order_key(self) -> $bits {
                const SIGN: $bits = 1 << (<$bits>::BITS - 1);
                let bits = self.to_bits();
                if bits & SIGN != 0 { !bits } else { bits | SIGN }
            }
        }
    )*};
}

float_key_impl! {
    f32 => u32,
    f64 => u64,
}

/// Reinterprets a float as the unsigned integer of the same width.
///
/// This is the plain bit cast; negative values end up *above* positive ones. Use
/// [`float_total_order`] when the integer has to sort like the float.
///
/// # Examples
///
/// ```
/// use spreadsort::float_mem_cast;
///
/// assert_eq!(float_mem_cast(1.0f32), 0x3F80_0000);
/// assert_eq!(float_mem_cast(-0.0f64), 0x8000_0000_0000_0000);
/// ```
#[inline(always)]
pub fn float_mem_cast<F: FloatKey>(value: F) -> F::Bits {
    value.raw_bits()
}

/// Maps a float to an unsigned key that sorts in the same order as the float.
///
/// # Examples
///
/// ```
/// use spreadsort::float_total_order;
///
/// assert!(float_total_order(-2.25f64) < float_total_order(-0.0));
/// assert!(float_total_order(-0.0f64) < float_total_order(0.0));
/// assert!(float_total_order(0.0f64) < float_total_order(f64::MIN_POSITIVE / 2.0));
/// assert!(float_total_order(1.5f64) < float_total_order(f64::INFINITY));
/// ```
#[inline(always)]
pub fn float_total_order<F: FloatKey>(value: F) -> F::Bits {
    value.total_order_key()
}
