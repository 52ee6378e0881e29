//! Page encoding and decoding properties

use judecca_spec::*;
use proptest::prelude::*;

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_decode_all_zero_page() {
    let page = decode_page(&[0u8; PAGE_BYTES]);
    assert!(page.iter().all(|op| *op == Opcode::Inc));
}

#[test]
fn test_decode_all_ones_page() {
    let page = decode_page(&[0xFFu8; PAGE_BYTES]);
    assert!(page.iter().all(|op| op.is_nop()));
}

#[test]
fn test_decode_every_nibble_pair() {
    // 0x01, 0x23, ..., 0xEF covers each nibble once in order
    let mut raw = [0u8; PAGE_BYTES];
    for (i, byte) in raw.iter_mut().enumerate().take(8) {
        *byte = ((2 * i as u8) << 4) | (2 * i as u8 + 1);
    }
    let page = decode_page(&raw);
    assert_eq!(&page[..16], &Opcode::ALL[..]);
}

// ============================================================================
// Page derivation
// ============================================================================

#[test]
fn test_page_is_pure_function() {
    let seed = derive_seed_with_iterations(b"judecca", 4);
    let first = generate_page(b"judecca", &seed, 1234);
    let second = generate_page(b"judecca", &seed, 1234);
    assert_eq!(first, second);
}

#[test]
fn test_page_depends_on_seed() {
    let a = Seed::from_bytes([0; 32]);
    let b = Seed::from_bytes([1; 32]);
    assert_ne!(generate_page(b"", &a, 0), generate_page(b"", &b, 0));
}

#[test]
fn test_seed_is_deterministic() {
    assert_eq!(
        derive_seed_with_iterations(b"abc", 100),
        derive_seed_with_iterations(b"abc", 100)
    );
    assert_ne!(
        derive_seed_with_iterations(b"abc", 100),
        derive_seed_with_iterations(b"abc", 101)
    );
}

// ============================================================================
// Properties
// ============================================================================

fn arb_raw_page() -> impl Strategy<Value = RawPage> {
    prop::array::uniform32(any::<u8>())
}

fn arb_page() -> impl Strategy<Value = Page> {
    prop::collection::vec(0u8..16, PAGE_SIZE).prop_map(|nibbles| {
        let mut page = [Opcode::Inc; PAGE_SIZE];
        for (slot, nibble) in page.iter_mut().zip(nibbles) {
            *slot = Opcode::from_nibble(nibble);
        }
        page
    })
}

proptest! {
    #[test]
    fn test_decode_is_total(raw in arb_raw_page()) {
        let page = decode_page(&raw);
        prop_assert_eq!(page.len(), PAGE_SIZE);
    }

    #[test]
    fn test_raw_roundtrip(raw in arb_raw_page()) {
        prop_assert_eq!(encode_page(&decode_page(&raw)), raw);
    }

    #[test]
    fn test_opcode_roundtrip(page in arb_page()) {
        prop_assert_eq!(decode_page(&encode_page(&page)), page);
    }

    #[test]
    fn test_page_index_encoding_groups(index in any::<u64>()) {
        let bytes = encode_page_index(u128::from(index));
        prop_assert_eq!(bytes.len(), 8);
        prop_assert_eq!(&bytes[..], &index.to_le_bytes()[..]);
    }

    #[test]
    fn test_wide_page_index_uses_two_groups(high in 1u64.., low in any::<u64>()) {
        let index = (u128::from(high) << 64) | u128::from(low);
        prop_assert_eq!(encode_page_index(index).len(), 16);
    }
}
