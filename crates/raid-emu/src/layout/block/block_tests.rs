use super::*;

#[test]
fn zero_works_for_various_sizes() {
    for len in [1usize, 4, 512, 4096] {
        let b = Block::zero(len);
        assert_eq!(b.len(), len);
        assert!(b.is_zero(), "len {len}");
    }
    assert!(Block::zero(0).is_empty());
}

#[test]
fn as_bytes_and_as_bytes_mut_expose_backing_storage() {
    let mut b = Block::zero(4);
    assert_eq!(b.as_bytes(), &[0, 0, 0, 0]);

    let raw = b.as_bytes_mut();
    raw[1] = 0xAB;
    raw[3] = 0xCD;
    assert_eq!(b.as_bytes(), &[0, 0xAB, 0, 0xCD]);
    assert!(!b.is_zero());
    assert_eq!(b.into_vec(), vec![0, 0xAB, 0, 0xCD]);
}

#[test]
fn xor_owned_and_assign_variants() {
    let left = Block::from(vec![0xFF, 0x00, 0xAA, 0x55]);
    let right = Block::from(vec![0x0F, 0x0F, 0xF0, 0xF0]);
    let expected = [0xF0, 0x0F, 0x5A, 0xA5];

    let combined = left.clone() ^ &right;
    assert_eq!(combined.as_bytes(), &expected);

    let mut accumulator = left.clone();
    accumulator ^= &right;
    assert_eq!(accumulator.as_bytes(), &expected);

    let mut self_xor = left.clone();
    self_xor ^= left;
    assert!(self_xor.is_zero());
}

#[test]
fn compares_against_raw_bytes() {
    let b = Block::from(&b"abcd"[..]);
    assert!(b == *b"abcd".as_slice());
    assert!(b == b"abcd".to_vec());
    assert_eq!(b.as_ref(), b"abcd");
}

#[test]
#[should_panic(expected = "XOR operands must be 4 bytes.")]
fn xor_panics_on_length_mismatch() {
    let mut b = Block::zero(4);
    b.xor_in_place(&[1, 2, 3]);
}
