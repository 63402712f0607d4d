use interlace::{
    decode_header, decode_header_with_limits, encode_header, event_id, EventHeader,
    InterlaceError, Limits,
};

fn encoded_sample() -> Vec<u8> {
    let parent_base = EventHeader {
        epoch: 3,
        ..EventHeader::default()
    };
    let h = EventHeader {
        version: 1,
        epoch: 3,
        seq: 300,
        frame: 2,
        lamport: 70_000,
        gas_power_left: 1 << 33,
        gas_power_used: 12,
        claimed_time: 1_650_000_000,
        median_time: 1_650_000_001,
        is_root: true,
        parents: vec![
            event_id(&parent_base),
            event_id(&EventHeader {
                seq: 1,
                ..parent_base.clone()
            }),
        ],
        extra: vec![1, 2, 3, 4, 5],
        ..EventHeader::default()
    };
    let mut buf = Vec::new();
    encode_header(&h, &mut buf);
    buf
}

#[test]
fn every_strict_prefix_fails_truncated() {
    let buf = encoded_sample();
    for len in 0..buf.len() {
        match decode_header(&buf[..len], 0) {
            Err(InterlaceError::TruncatedInput { .. }) => {}
            other => panic!("prefix of {len} bytes: expected TruncatedInput, got {other:?}"),
        }
    }
    assert!(decode_header(&buf, 0).is_ok());
}

#[test]
fn trailing_bytes_are_left_alone() {
    let mut buf = encoded_sample();
    let record_len = buf.len();
    buf.extend_from_slice(&[0xAA, 0xBB, 0xCC]);
    let (_, used) = decode_header(&buf, 0).unwrap();
    assert_eq!(used, record_len);
}

#[test]
fn decode_at_offset_streams_records() {
    let first = encoded_sample();
    let mut stream = first.clone();
    let second = EventHeader {
        seq: 9,
        ..EventHeader::default()
    };
    encode_header(&second, &mut stream);

    let (a, used_a) = decode_header(&stream, 0).unwrap();
    let (b, used_b) = decode_header(&stream, used_a).unwrap();
    let (expected_a, _) = decode_header(&first, 0).unwrap();
    assert_eq!(a, expected_a);
    assert_eq!(b, second);
    assert_eq!(used_a + used_b, stream.len());
}

#[test]
fn nonzero_root_byte_decodes_true() {
    let h = EventHeader::default();
    let mut buf = Vec::new();
    encode_header(&h, &mut buf);
    // The root flag sits after the descriptors, the nine one-byte integers
    // and the 84 fixed bytes.
    let flag_at = 4 + 9 + 84;
    assert_eq!(buf[flag_at], 0);
    buf[flag_at] = 0xAA;
    let (decoded, _) = decode_header(&buf, 0).unwrap();
    assert!(decoded.is_root);
}

#[test]
fn absurd_parents_count_rejected() {
    let mut buf = Vec::new();
    encode_header(&EventHeader::default(), &mut buf);
    let count_at = 4 + 9 + 84 + 1;
    buf[count_at..count_at + 4].copy_from_slice(&u32::MAX.to_le_bytes());
    assert_eq!(
        decode_header(&buf, 0),
        Err(InterlaceError::InvalidCount {
            field: "parents",
            value: u32::MAX,
            limit: Limits::default().max_parents,
        })
    );
}

#[test]
fn absurd_extra_len_rejected() {
    let mut buf = Vec::new();
    encode_header(&EventHeader::default(), &mut buf);
    let len_at = buf.len() - 4;
    buf[len_at..].copy_from_slice(&(1u32 << 30).to_le_bytes());
    assert_eq!(
        decode_header(&buf, 0),
        Err(InterlaceError::InvalidCount {
            field: "extra",
            value: 1 << 30,
            limit: Limits::default().max_extra_len,
        })
    );
}

#[test]
fn custom_limits_apply() {
    let h = EventHeader {
        extra: vec![0; 10],
        ..EventHeader::default()
    };
    let mut buf = Vec::new();
    encode_header(&h, &mut buf);
    let tight = Limits {
        max_extra_len: 9,
        ..Limits::default()
    };
    assert_eq!(
        decode_header_with_limits(&buf, 0, &tight),
        Err(InterlaceError::InvalidCount {
            field: "extra",
            value: 10,
            limit: 9,
        })
    );
    assert!(decode_header(&buf, 0).is_ok());
}

#[test]
fn truncation_error_carries_shortfall() {
    let buf = encoded_sample();
    let cut = buf.len() - 2;
    match decode_header(&buf[..cut], 0) {
        Err(InterlaceError::TruncatedInput {
            offset,
            needed,
            available,
        }) => {
            assert!(offset <= cut);
            assert!(needed > available);
        }
        other => panic!("expected TruncatedInput, got {other:?}"),
    }
}
