//! XOR parity over equal-length blocks.

use crate::layout::block::Block;


/// `xor` folds an ordered set of equal-length blocks into their byte-wise XOR.
///
/// # Arguments
/// * `blocks` - The blocks to combine; at least one, all the same length.
///
/// # Returns
/// A new block of the common length.
///
/// # Panics
/// Panics if `blocks` is empty or the lengths differ.
pub fn xor<B: AsRef<[u8]>>(blocks: &[B]) -> Block {
    assert!(!blocks.is_empty(), "parity needs at least one block.");
    let mut acc = Block::from(blocks[0].as_ref());
    for b in &blocks[1..] {
        acc.xor_in_place(b.as_ref());
    }
    acc
}
