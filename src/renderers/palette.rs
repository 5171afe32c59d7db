//! Categorical color palette for the k-diagonal bands.
//!
//! The 20 entries of the tab20 palette, cycled when more colors are asked
//! for than the table holds.

use super::canvas::Color;

pub const TAB20: [Color; 20] = [
    Color(0x1f, 0x77, 0xb4),
    Color(0xae, 0xc7, 0xe8),
    Color(0xff, 0x7f, 0x0e),
    Color(0xff, 0xbb, 0x78),
    Color(0x2c, 0xa0, 0x2c),
    Color(0x98, 0xdf, 0x8a),
    Color(0xd6, 0x27, 0x28),
    Color(0xff, 0x98, 0x96),
    Color(0x94, 0x67, 0xbd),
    Color(0xc5, 0xb0, 0xd5),
    Color(0x8c, 0x56, 0x4b),
    Color(0xc4, 0x9c, 0x94),
    Color(0xe3, 0x77, 0xc2),
    Color(0xf7, 0xb6, 0xd2),
    Color(0x7f, 0x7f, 0x7f),
    Color(0xc7, 0xc7, 0xc7),
    Color(0xbc, 0xbd, 0x22),
    Color(0xdb, 0xdb, 0x8d),
    Color(0x17, 0xbe, 0xcf),
    Color(0x9e, 0xda, 0xe5),
];

/// n colors from the cyclic categorical palette, indexed position-wise.
pub fn categorical(n: usize) -> Vec<Color> {
    (0..n).map(|i| TAB20[i % TAB20.len()]).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorical_len() {
        assert_eq!(categorical(0).len(), 0);
        assert_eq!(categorical(14).len(), 14);
        assert_eq!(categorical(25).len(), 25);
    }

    #[test]
    fn test_categorical_cycles() {
        let colors = categorical(25);
        assert_eq!(colors[0], TAB20[0]);
        assert_eq!(colors[20], TAB20[0]);
        assert_eq!(colors[24], TAB20[4]);
    }

    #[test]
    fn test_adjacent_distinct() {
        let colors = categorical(20);
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
