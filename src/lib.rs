//! Compact binary codec for DAG consensus event headers.
//!
//! Event headers are broadcast and persisted at very high volume, so every
//! integer field is written in the fewest bytes that hold its value. The
//! chosen widths are packed into shared descriptor bytes, and the parent
//! hashes are stored as one shared 4-byte epoch prefix plus a 28-byte
//! suffix per entry.
//!
//! Encoded layout (all integers little-endian, no padding):
//!
//! ```text
//! [DescA:1][Version:b1][Epoch:b2][Seq:b3][Frame:b4]
//! [DescB:1][Lamport:b5]
//! [DescC:1][GasPowerLeft:b6][GasPowerUsed:b7]
//! [DescD:1][ClaimedTime:b8][MedianTime:b9]
//! [Creator:20][PrevEpochHash:32][TxHash:32]
//! [IsRoot:1]
//! [ParentsCount:4]{ [EpochPrefix:4][Parent1Suffix:28]...[ParentNSuffix:28] }
//! [ExtraLen:4][Extra:ExtraLen]
//! ```
//!
//! `b1..b9` are the per-field widths recorded in the descriptor bytes, each
//! in `1..=8` (`1..=4` for the 32-bit fields). See [`widths`] for the exact
//! descriptor bit layout.
//!
//! The codec is stateless. Encoding never fails; decoding fails with a
//! typed [`InterlaceError`] on truncated input or absurd count fields and
//! never returns a partially decoded header.

pub mod decode;
pub mod encode;
pub mod error;
pub mod ident;
pub mod limits;
pub mod types;
pub mod widths;

pub use decode::{decode_header, decode_header_with_limits};
pub use encode::{check_parents_prefix, encode_header, encoded_len_bound};
pub use error::InterlaceError;
pub use ident::event_id;
pub use limits::Limits;
pub use types::{
    Address, Epoch, EventHash, EventHeader, EventSeq, Frame, Lamport, Timestamp, ADDRESS_LEN,
    EPOCH_PREFIX_LEN, HASH_LEN,
};
