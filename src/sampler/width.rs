//! Entropy sample width.

/// Number of entropy bytes consumed per draw for a pool of `pool_len`.
///
/// This is the smallest `b` with `256^b >= pool_len`, i.e. enough bytes
/// to represent `pool_len - 1`, and never less than one byte.
pub fn byte_width(pool_len: usize) -> usize {
    let highest_index = pool_len.saturating_sub(1);
    let bits = (usize::BITS - highest_index.leading_zeros()).max(1) as usize;
    (bits + 7) / 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_pool_uses_one_byte() {
        assert_eq!(byte_width(1), 1);
    }

    #[test]
    fn test_byte_boundaries() {
        assert_eq!(byte_width(2), 1);
        assert_eq!(byte_width(255), 1);
        assert_eq!(byte_width(256), 1);
        assert_eq!(byte_width(257), 2);
        assert_eq!(byte_width(65_536), 2);
        assert_eq!(byte_width(65_537), 3);
    }

    #[test]
    fn test_largest_pool_fits_u64() {
        assert_eq!(byte_width(usize::MAX), std::mem::size_of::<usize>());
    }
}
