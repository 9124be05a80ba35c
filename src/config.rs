//! Tuning constants for the hybrid radix engine.
//!
//! None of these values affect the *result* of a sort, only how much work is spent
//! bucketing versus comparing. They are fixed at compile time and shared read-only by
//! every sort call.

/// Inputs shorter than this are handed straight to the comparison fallback.
pub const MIN_SORT_SIZE: usize = 1000;

/// Upper bound on the number of bits consumed by a single radix pass.
pub const MAX_SPLITS: u32 = 11;

/// A pass that can finish the remaining key range in one go may consume one bit more
/// than [`MAX_SPLITS`].
pub const MAX_FINISHING_SPLITS: u32 = MAX_SPLITS + 1;

/// Largest number of buckets a single pass can produce.
pub const MAX_BINS: usize = 1 << MAX_FINISHING_SPLITS;

/// Per-key-family heuristics deciding how many bits each pass consumes and when a
/// bucket is small enough to finish with the comparison fallback.
///
/// Integers and floats use different profiles: float keys carry most of their
/// entropy in the exponent, so it pays off to keep radix passes going on much
/// smaller buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tuning {
    /// log2 of the average number of elements per bucket a pass aims for.
    pub log_mean_bin_size: u32,
    /// log2 of the smallest bucket worth splitting again.
    pub log_min_split_count: u32,
    /// log2 of the bucket size below which a pass that finishes the key range
    /// still defers to the comparison fallback.
    pub log_finishing_count: u32,
}

impl Tuning {
    /// Profile for plain integer keys.
    pub const INTEGER: Tuning = Tuning {
        log_mean_bin_size: 2,
        log_min_split_count: 9,
        log_finishing_count: 31,
    };

    /// Profile for keys produced by the float total-order cast.
    pub const FLOAT: Tuning = Tuning {
        log_mean_bin_size: 2,
        log_min_split_count: 8,
        log_finishing_count: 4,
    };

    /// Number of low key bits left unresolved by a pass over `count` elements whose
    /// keys span `log_range` bits.
    ///
    /// The pass produces at most `2^(log_range - log_divisor) + 1` buckets, which is
    /// never more than [`MAX_BINS`]. For `log_range > 0` the result is always
    /// strictly smaller than `log_range`, so every pass makes progress.
    pub fn log_divisor(&self, count: usize, log_range: u32) -> u32 {
        if log_range == 0 {
            return 0;
        }

        let log_count = (usize::BITS - count.leading_zeros()) as i64;
        let log_range = log_range as i64;
        let mut log_divisor = log_range - log_count;

        // Small enough to finish in a single pass.
        if log_divisor <= 0 && log_range <= MAX_FINISHING_SPLITS as i64 {
            return 0;
        }

        log_divisor += self.log_mean_bin_size as i64;
        if log_range - log_divisor > MAX_SPLITS as i64 {
            log_divisor = log_range - MAX_SPLITS as i64;
        }

        log_divisor.clamp(0, log_range - 1) as u32
    }

    /// Smallest bucket that is radix-split again when `log_range` key bits remain;
    /// anything smaller is finished by the comparison fallback.
    ///
    /// Grows roughly with `log_range / MAX_SPLITS`, which bounds the worst case of a
    /// bucket that keeps getting split without ever shrinking much.
    pub fn min_count(&self, log_range: u32) -> usize {
        let min_size = self.log_mean_bin_size + self.log_min_split_count;
        let capped = |log: u32| -> usize {
            if log >= usize::BITS {
                1 << (usize::BITS - 1)
            } else {
                1 << log
            }
        };

        if self.log_finishing_count < min_size
            && log_range <= min_size
            && log_range <= MAX_SPLITS
        {
            if log_range <= self.log_finishing_count {
                return capped(self.log_finishing_count);
            }
            return capped(log_range);
        }

        let base_iterations = MAX_SPLITS.saturating_sub(self.log_min_split_count);
        let base_range = ((base_iterations + 1) * (MAX_SPLITS + self.log_min_split_count)) / 2
            + self.log_mean_bin_size;

        if log_range < base_range {
            let mut result = self.log_min_split_count;
            let mut offset = min_size;
            while offset < log_range {
                result += 1;
                offset += result;
            }
            return capped(result + self.log_mean_bin_size);
        }

        let remainder = log_range - base_range;
        let bit_length = (MAX_SPLITS - 1 + remainder) / MAX_SPLITS + base_iterations + min_size;
        capped(bit_length)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::INTEGER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_divisor_finishes_small_ranges_in_one_pass() {
        // 10 bits of range over 4096 elements: one pass with zero leftover bits.
        assert_eq!(Tuning::INTEGER.log_divisor(4096, 10), 0);
        assert_eq!(Tuning::FLOAT.log_divisor(4096, 12), 0);
    }

    #[test]
    fn test_log_divisor_bounds_bucket_count() {
        for tuning in [Tuning::INTEGER, Tuning::FLOAT] {
            for log_range in 1..=128u32 {
                for count in [1000usize, 4096, 65_536, 1 << 20, 1 << 30] {
                    let divisor = tuning.log_divisor(count, log_range);
                    assert!(divisor < log_range, "no progress at {log_range}/{count}");

                    let bins = if divisor == 0 {
                        1usize << log_range.min(usize::BITS - 1)
                    } else {
                        (1usize << (log_range - divisor)) + 1
                    };
                    if divisor == 0 {
                        assert!(log_range <= MAX_FINISHING_SPLITS);
                    }
                    assert!(bins <= MAX_BINS, "{bins} bins at {log_range}/{count}");
                }
            }
        }
    }

    #[test]
    fn test_min_count_matches_reference_points() {
        assert_eq!(Tuning::INTEGER.min_count(0), 1 << 11);
        assert_eq!(Tuning::INTEGER.min_count(20), 1 << 12);
        assert_eq!(Tuning::FLOAT.min_count(3), 1 << 4);
        assert_eq!(Tuning::FLOAT.min_count(9), 1 << 9);
    }

    #[test]
    fn test_min_count_is_monotonic() {
        for tuning in [Tuning::INTEGER, Tuning::FLOAT] {
            let mut previous = 0;
            for log_range in 0..=128 {
                let count = tuning.min_count(log_range);
                assert!(count >= previous);
                previous = count;
            }
        }
    }
}
