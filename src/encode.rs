//! Event header serialization.

use crate::error::InterlaceError;
use crate::types::{EventHeader, ADDRESS_LEN, EPOCH_PREFIX_LEN, HASH_LEN};
use crate::widths::FieldWidths;

const PARENT_SUFFIX_LEN: usize = HASH_LEN - EPOCH_PREFIX_LEN;

/// Upper bound on the encoded size of `h`, cheap enough to call before
/// every encode. Useful for pre-sizing buffers shared across many headers.
pub fn encoded_len_bound(h: &EventHeader) -> usize {
    // Four descriptor bytes, five 32-bit fields at up to 4 bytes, four
    // 64-bit fields at up to 8 bytes, the fixed creator/hash fields, the
    // root flag and the two count fields.
    let fixed = 4 + 5 * 4 + 4 * 8 + ADDRESS_LEN + 2 * HASH_LEN + 1 + 4 + 4;
    let parents = if h.parents.is_empty() {
        0
    } else {
        EPOCH_PREFIX_LEN + h.parents.len() * PARENT_SUFFIX_LEN
    };
    fixed + parents + h.extra.len()
}

fn put_uint(out: &mut Vec<u8>, v: u64, width: u8) {
    out.extend_from_slice(&v.to_le_bytes()[..width as usize]);
}

/// Serialize `h` into `out`. Appends exactly the encoded bytes, nothing
/// else; the total length depends on the field magnitudes and is returned
/// implicitly by the growth of `out`.
///
/// The parent list is written as one shared 4-byte epoch prefix followed by
/// the 28-byte suffix of every entry. The encoder trusts that all parents
/// share the prefix; call [`check_parents_prefix`] first when the header
/// comes from an untrusted producer, because a violating list encodes
/// without any error and decodes to different hashes.
pub fn encode_header(h: &EventHeader, out: &mut Vec<u8>) {
    out.reserve(encoded_len_bound(h));
    let w = FieldWidths::measure(h);

    out.push(w.descriptor_a());
    put_uint(out, h.version.into(), w.version);
    put_uint(out, h.epoch.into(), w.epoch);
    put_uint(out, h.seq.into(), w.seq);
    put_uint(out, h.frame.into(), w.frame);

    out.push(w.descriptor_b());
    put_uint(out, h.lamport.into(), w.lamport);

    out.push(w.descriptor_c());
    put_uint(out, h.gas_power_left, w.gas_power_left);
    put_uint(out, h.gas_power_used, w.gas_power_used);

    out.push(w.descriptor_d());
    put_uint(out, h.claimed_time as u64, w.claimed_time);
    put_uint(out, h.median_time as u64, w.median_time);

    out.extend_from_slice(h.creator.bytes());
    out.extend_from_slice(h.prev_epoch_hash.bytes());
    out.extend_from_slice(h.tx_hash.bytes());

    out.push(h.is_root as u8);

    out.extend_from_slice(&(h.parents.len() as u32).to_le_bytes());
    if let Some(first) = h.parents.first() {
        out.extend_from_slice(&first.bytes()[..EPOCH_PREFIX_LEN]);
    }
    for parent in &h.parents {
        out.extend_from_slice(&parent.bytes()[EPOCH_PREFIX_LEN..]);
    }

    out.extend_from_slice(&(h.extra.len() as u32).to_le_bytes());
    out.extend_from_slice(&h.extra);
}

/// Verify that every parent shares the first parent's epoch prefix.
///
/// Empty parent lists pass. Fails with the index of the first entry whose
/// prefix differs.
pub fn check_parents_prefix(h: &EventHeader) -> Result<(), InterlaceError> {
    let Some(first) = h.parents.first() else {
        return Ok(());
    };
    let prefix = &first.bytes()[..EPOCH_PREFIX_LEN];
    for (index, parent) in h.parents.iter().enumerate().skip(1) {
        if &parent.bytes()[..EPOCH_PREFIX_LEN] != prefix {
            return Err(InterlaceError::ParentPrefixMismatch { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventHash;

    fn hash_with_prefix(prefix: [u8; 4], fill: u8) -> EventHash {
        let mut bytes = [fill; HASH_LEN];
        bytes[..4].copy_from_slice(&prefix);
        EventHash::from_bytes(bytes)
    }

    #[test]
    fn prefix_check_accepts_uniform_parents() {
        let h = EventHeader {
            parents: vec![
                hash_with_prefix([9, 9, 9, 9], 1),
                hash_with_prefix([9, 9, 9, 9], 2),
            ],
            ..EventHeader::default()
        };
        assert_eq!(check_parents_prefix(&h), Ok(()));
    }

    #[test]
    fn prefix_check_reports_first_violation() {
        let h = EventHeader {
            parents: vec![
                hash_with_prefix([9, 9, 9, 9], 1),
                hash_with_prefix([9, 9, 9, 8], 2),
                hash_with_prefix([0, 0, 0, 0], 3),
            ],
            ..EventHeader::default()
        };
        assert_eq!(
            check_parents_prefix(&h),
            Err(InterlaceError::ParentPrefixMismatch { index: 1 })
        );
    }

    #[test]
    fn len_bound_covers_actual_encoding() {
        let h = EventHeader {
            version: u32::MAX,
            gas_power_left: u64::MAX,
            claimed_time: -1,
            parents: vec![hash_with_prefix([1, 2, 3, 4], 5); 3],
            extra: vec![0xAB; 100],
            ..EventHeader::default()
        };
        let mut out = Vec::new();
        encode_header(&h, &mut out);
        assert!(out.len() <= encoded_len_bound(&h));
    }
}
