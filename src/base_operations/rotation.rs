//! Rotations cost nothing once a word is decomposed: they are a relabeling of its bits.
//! Bits are in little endian order, so a rotation to the right by `r` moves bit `i + r` to
//! position `i`.

/// Rotates little endian bits to the right by `rotation` positions.
pub fn rotate_right<T: Clone>(bits: &[T], rotation: usize) -> Vec<T> {
    let rotation = rotation % bits.len().max(1);
    bits[rotation..].iter().chain(&bits[..rotation]).cloned().collect()
}

/// Rotates little endian bits to the left by `rotation` positions.
pub fn rotate_left<T: Clone>(bits: &[T], rotation: usize) -> Vec<T> {
    let rotation = rotation % bits.len().max(1);
    rotate_right(bits, bits.len() - rotation)
}
