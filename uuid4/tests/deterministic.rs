use pretty_assertions::assert_eq;
use proptest::prelude::*;
use uuid4::{
    entropy::testing::{FailingEntropy, FixedEntropy},
    EntropyErrorDetail, Uuid,
};

const RAW: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];

#[test]
fn known_entropy_renders_expected_string() {
    let uuid = Uuid::new_v4_from(FixedEntropy(RAW)).unwrap();

    assert_eq!(
        uuid.to_canonical_string(),
        "00112233-4455-4677-4899-aabbccddeeff"
    );
}

#[test]
fn variant_byte_clears_top_bit_and_sets_next() {
    for (raw, patched) in [(0x88, 0x48), (0x00, 0x40), (0xff, 0x7f), (0xc3, 0x43)] {
        let mut bytes = RAW;
        bytes[8] = raw;
        let uuid = Uuid::new_v4_from(FixedEntropy(bytes)).unwrap();
        assert_eq!(uuid.to_bytes()[8], patched, "byte 8 from {:#04x}", raw);
    }
}

#[test]
fn entropy_failure_propagates() {
    let err = Uuid::new_v4_from(FailingEntropy).unwrap_err();

    assert_eq!(err.backend(), FailingEntropy::BACKEND);
    match err.detail() {
        EntropyErrorDetail::SourceFailed(e) => assert_eq!(e.code, FailingEntropy::CODE),
    }
}

#[test]
fn borrowed_sources_are_sources() {
    let source = FixedEntropy([0x5a; 16]);
    let a = Uuid::new_v4_from(&source).unwrap();
    let b = Uuid::new_v4_from(&source).unwrap();
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn any_entropy_yields_patched_uuid(raw in any::<[u8; 16]>()) {
        let uuid = Uuid::new_v4_from(FixedEntropy(raw)).unwrap();
        let bytes = uuid.to_bytes();

        prop_assert_eq!(bytes[6], (raw[6] & 0x0f) | 0x40);
        prop_assert_eq!(bytes[8], (raw[8] & 0x7f) | 0x40);
        for i in (0..16).filter(|i| *i != 6 && *i != 8) {
            prop_assert_eq!(bytes[i], raw[i]);
        }

        let text = uuid.to_canonical_string();
        prop_assert_eq!(text.as_bytes()[14], b'4');
        prop_assert!(matches!(text.as_bytes()[19], b'4' | b'5' | b'6' | b'7'));
    }

    #[test]
    fn each_byte_renders_as_two_hex_digits(raw in any::<[u8; 16]>()) {
        let uuid = Uuid::new_v4_from(FixedEntropy(raw)).unwrap();
        let hex: String = uuid.to_canonical_string().chars().filter(|c| *c != '-').collect();

        for (i, b) in uuid.to_bytes().iter().enumerate() {
            prop_assert_eq!(&hex[i * 2..i * 2 + 2], format!("{:02x}", b));
        }
    }
}
