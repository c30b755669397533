use rand::Rng;
use rand::prelude::IndexedRandom;

/// The four DNA bases a generated sequence is drawn from.
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Generates a random DNA sequence of the given length.
///
/// Each base is drawn independently and uniformly from [`NUCLEOTIDES`].
///
/// # Arguments
/// * `length` - Number of bases to generate (already validated by the caller)
/// * `rng` - Random number generator
///
/// # Returns
/// A byte vector of exactly `length` bases
pub fn generate_sequence<R: Rng>(length: usize, rng: &mut R) -> Vec<u8> {
    (0..length)
        .map(|_| *NUCLEOTIDES.choose(rng).unwrap())
        .collect()
}

/// Splices a name into a sequence at a uniformly random position.
///
/// The insertion index is drawn from the inclusive range `[0, sequence.len()]`,
/// so the name may land before the first base or after the last one. An empty
/// sequence returns the name bytes unchanged. The name itself is not
/// validated; it may be empty or contain arbitrary characters.
///
/// # Arguments
/// * `sequence` - Sequence to insert into
/// * `name` - Text to insert
/// * `rng` - Random number generator
///
/// # Returns
/// A new byte vector of length `sequence.len() + name.len()`
pub fn insert_name<R: Rng>(sequence: &[u8], name: &str, rng: &mut R) -> Vec<u8> {
    if sequence.is_empty() {
        return name.as_bytes().to_vec();
    }

    let position = rng.random_range(0..=sequence.len());

    let mut result = Vec::with_capacity(sequence.len() + name.len());
    result.extend_from_slice(&sequence[..position]);
    result.extend_from_slice(name.as_bytes());
    result.extend_from_slice(&sequence[position..]);
    result
}
