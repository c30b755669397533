//! Nucleotide composition statistics.

/// Percentage composition of a DNA sequence.
///
/// Each field is in the range 0.0 to 100.0. For a sequence containing only
/// the four bases, `a + c + g + t` sums to 100 within floating-point
/// rounding. `cg` is the combined C+G percentage (CG content).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SequenceStats {
    pub a: f64,
    pub c: f64,
    pub g: f64,
    pub t: f64,
    pub cg: f64,
}

impl SequenceStats {
    /// Computes the composition of `sequence`.
    ///
    /// Counting is case-sensitive and exact: bytes other than `A`, `C`, `G`
    /// and `T` are excluded from the four counts but still included in the
    /// length divisor. An empty sequence yields all-zero percentages.
    pub fn from_sequence(sequence: &[u8]) -> Self {
        let total = sequence.len();
        if total == 0 {
            return Self::default();
        }

        let (mut a, mut c, mut g, mut t) = (0usize, 0usize, 0usize, 0usize);
        for &base in sequence {
            match base {
                b'A' => a += 1,
                b'C' => c += 1,
                b'G' => g += 1,
                b'T' => t += 1,
                _ => {}
            }
        }

        let percent = |count: usize| (count as f64 / total as f64) * 100.0;

        Self {
            a: percent(a),
            c: percent(c),
            g: percent(g),
            t: percent(t),
            cg: percent(c + g),
        }
    }
}
