//! Event id derivation.
//!
//! An event's id is the SHA-256 of its encoded header with the epoch number
//! written big-endian over the first four bytes. Every event of one epoch
//! therefore shares a 4-byte id prefix, which is the invariant that lets
//! the codec store a header's parent prefix once.

use sha2::{Digest, Sha256};

use crate::encode::{encode_header, encoded_len_bound};
use crate::types::{EventHash, EventHeader, EPOCH_PREFIX_LEN};

/// Derive the id of `h` from its serialized form.
pub fn event_id(h: &EventHeader) -> EventHash {
    let mut buf = Vec::with_capacity(encoded_len_bound(h));
    encode_header(h, &mut buf);
    let mut id: [u8; 32] = Sha256::digest(&buf).into();
    id[..EPOCH_PREFIX_LEN].copy_from_slice(&h.epoch.to_be_bytes());
    EventHash::from_bytes(id)
}
