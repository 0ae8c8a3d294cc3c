//! Property-based tests for the OID codec.
//!
//! Round-trip and minimality laws for the base-128 groups and the
//! dotted-text conversion.

use oidkit::oid::{decode_arcs, decode_oid, encode_arcs, encode_oid};
use oidkit::utils::{decode_varint, varint_bytes};
use oidkit::{pad_bytes, trim_padding, CodecError, ObjectIdentifier, PadSide};
use proptest::prelude::*;

// Leading pair that fits the single lead byte and decodes back unchanged
fn arb_leading_arcs() -> impl Strategy<Value = (u64, u64)> {
    prop_oneof![(0u64..=1, 0u64..40), (Just(2u64), 0u64..40)]
}

fn arb_arc() -> impl Strategy<Value = u64> {
    prop_oneof![0u64..128, 128u64..1 << 21, any::<u64>()]
}

fn arb_oid_text() -> impl Strategy<Value = String> {
    (arb_leading_arcs(), prop::collection::vec(arb_arc(), 0..12)).prop_map(|((a, b), tail)| {
        std::iter::once(a)
            .chain(std::iter::once(b))
            .chain(tail)
            .map(|arc| arc.to_string())
            .collect::<Vec<_>>()
            .join(".")
    })
}

fn arb_side() -> impl Strategy<Value = PadSide> {
    prop_oneof![Just(PadSide::Front), Just(PadSide::End)]
}

proptest! {
    #[test]
    fn varint_round_trips(value in any::<u64>()) {
        let bytes = varint_bytes(value);
        prop_assert_eq!(decode_varint(&bytes, 0), Ok((value, bytes.len())));
    }

    #[test]
    fn varint_is_minimal(value in any::<u64>()) {
        let bytes = varint_bytes(value);
        prop_assert!(bytes.len() == 1 || bytes[0] != 0x80);
        let (last, leading) = bytes.split_last().unwrap();
        prop_assert!(last & 0x80 == 0);
        prop_assert!(leading.iter().all(|b| b & 0x80 != 0));
    }

    #[test]
    fn text_round_trips(text in arb_oid_text()) {
        let bytes = encode_oid(&text).unwrap();
        prop_assert_eq!(decode_oid(&bytes).unwrap(), text);
    }

    #[test]
    fn bytes_round_trip(text in arb_oid_text()) {
        let bytes = encode_oid(&text).unwrap();
        let again = encode_oid(&decode_oid(&bytes).unwrap()).unwrap();
        prop_assert_eq!(again, bytes);
    }

    #[test]
    fn encoded_arcs_decode_to_same_arcs(
        (a, b) in arb_leading_arcs(),
        tail in prop::collection::vec(arb_arc(), 0..8),
    ) {
        let mut arcs = vec![a, b];
        arcs.extend(tail);
        prop_assert_eq!(decode_arcs(&encode_arcs(&arcs).unwrap()).unwrap(), arcs);
    }

    #[test]
    fn truncating_a_group_never_yields_a_value(
        text in arb_oid_text(),
        big in 128u64..,
    ) {
        let mut bytes = encode_oid(&text).unwrap();
        bytes.extend(varint_bytes(big));
        bytes.pop();
        prop_assert!(matches!(
            decode_oid(&bytes),
            Err(CodecError::MalformedVarint { .. })
        ), "expected MalformedVarint error");
    }

    #[test]
    fn leading_pair_is_accepted_only_when_it_decodes_back(
        first in 0u64..8,
        second in 0u64..200,
        tail in prop::collection::vec(arb_arc(), 0..4),
    ) {
        let mut arcs = vec![first, second];
        arcs.extend(tail);
        match ObjectIdentifier::new(arcs.clone()) {
            Ok(oid) => {
                prop_assert!(second < 40);
                prop_assert_eq!(ObjectIdentifier::from_der(&oid.to_der()).unwrap(), oid);
            }
            Err(err) => {
                prop_assert!(matches!(err, CodecError::InvalidOidFormat(_)));
                prop_assert!(second >= 40 || first * 40 + second > 0xFF);
                prop_assert!(encode_arcs(&arcs).is_err());
            }
        }
    }

    #[test]
    fn decoder_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let _ = decode_oid(&bytes);
    }

    #[test]
    fn pad_then_trim_restores_input(
        input in prop::collection::vec(1u8..=0xFE, 0..16),
        extra in 0usize..16,
        side in arb_side(),
    ) {
        let padded = pad_bytes(&input, input.len() + extra, 0x00, side);
        prop_assert_eq!(padded.len(), input.len() + extra);
        prop_assert_eq!(trim_padding(&padded, 0x00, side), input);
    }
}
