//! Value types for the event header record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Consensus epoch number.
pub type Epoch = u32;
/// Per-creator event sequence number.
pub type EventSeq = u32;
/// Consensus frame number.
pub type Frame = u32;
/// Lamport logical clock value.
pub type Lamport = u32;
/// Creator-asserted or network-median time, in nanoseconds.
pub type Timestamp = i64;

/// Length of an event or content hash in bytes.
pub const HASH_LEN: usize = 32;
/// Length of a creator address in bytes.
pub const ADDRESS_LEN: usize = 20;
/// Leading hash bytes that carry the epoch-derived prefix.
pub const EPOCH_PREFIX_LEN: usize = 4;

/// 32-byte event or content hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EventHash(pub [u8; HASH_LEN]);

impl EventHash {
    pub fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// The first four bytes, shared by every event of one epoch.
    pub fn epoch_prefix(&self) -> [u8; EPOCH_PREFIX_LEN] {
        let mut p = [0u8; EPOCH_PREFIX_LEN];
        p.copy_from_slice(&self.0[..EPOCH_PREFIX_LEN]);
        p
    }

    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; HASH_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for EventHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for EventHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventHash({})", hex::encode(self.0))
    }
}

/// 20-byte creator identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(self.0))
    }
}

/// Metadata record for one node of the consensus DAG, excluding its
/// transaction payload.
///
/// The integer fields are stored on the wire in as few bytes as their values
/// need; see the crate docs for the exact layout. `parents` must all share
/// their first four bytes (the epoch prefix stamped into every event id by
/// [`crate::ident::event_id`]). The codec stores that prefix once and cannot
/// represent a parent list that violates it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventHeader {
    /// Protocol/format version.
    pub version: u32,
    /// Epoch this event belongs to.
    pub epoch: Epoch,
    /// Sequence number of this event among its creator's events.
    pub seq: EventSeq,
    /// Consensus frame the event was assigned to.
    pub frame: Frame,
    /// Lamport time of the event.
    pub lamport: Lamport,
    /// Gas power remaining after this event.
    pub gas_power_left: u64,
    /// Gas power spent on this event.
    pub gas_power_used: u64,
    /// Creation time as claimed by the creator.
    pub claimed_time: Timestamp,
    /// Median of the times claimed by the event's ancestors.
    pub median_time: Timestamp,
    /// Address of the validator that created the event.
    pub creator: Address,
    /// Hash of the previous epoch's state.
    pub prev_epoch_hash: EventHash,
    /// Merkle hash of the event's transactions.
    pub tx_hash: EventHash,
    /// Whether the event is a root of its frame.
    pub is_root: bool,
    /// Ids of the events this one observes directly. All entries share the
    /// same epoch prefix.
    pub parents: Vec<EventHash>,
    /// Opaque payload carried verbatim.
    pub extra: Vec<u8>,
}
