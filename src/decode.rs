//! Event header deserialization.

use crate::error::InterlaceError;
use crate::limits::Limits;
use crate::types::{Address, EventHash, EventHeader, ADDRESS_LEN, EPOCH_PREFIX_LEN, HASH_LEN};
use crate::widths::FieldWidths;

const PARENT_SUFFIX_LEN: usize = HASH_LEN - EPOCH_PREFIX_LEN;

/// Byte-level cursor used for header decoding.
struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(data: &'a [u8], offset: usize) -> Self {
        Self { data, pos: offset }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], InterlaceError> {
        let available = self.data.len().saturating_sub(self.pos);
        if n > available {
            return Err(InterlaceError::TruncatedInput {
                offset: self.pos,
                needed: n,
                available,
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_byte(&mut self) -> Result<u8, InterlaceError> {
        Ok(self.take(1)?[0])
    }

    /// Read `width` little-endian bytes and zero-extend them to a u64.
    fn take_uint(&mut self, width: u8) -> Result<u64, InterlaceError> {
        let mut buf = [0u8; 8];
        buf[..width as usize].copy_from_slice(self.take(width as usize)?);
        Ok(u64::from_le_bytes(buf))
    }

    fn take_count(&mut self) -> Result<u32, InterlaceError> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(buf))
    }

    fn pos(&self) -> usize {
        self.pos
    }
}

/// Decode one header from `buf` starting at `offset`, with the default
/// [`Limits`].
///
/// Returns the header and the total number of bytes consumed, so a caller
/// holding several records back to back can advance its cursor. Trailing
/// bytes past the record are left untouched. Fails with
/// [`InterlaceError::TruncatedInput`] if any field would read past the end
/// of `buf`; a failed decode yields no header at all.
pub fn decode_header(buf: &[u8], offset: usize) -> Result<(EventHeader, usize), InterlaceError> {
    decode_header_with_limits(buf, offset, &Limits::default())
}

/// Decode one header, rejecting count fields above `limits` before any
/// allocation is sized from them.
pub fn decode_header_with_limits(
    buf: &[u8],
    offset: usize,
    limits: &Limits,
) -> Result<(EventHeader, usize), InterlaceError> {
    let mut r = ByteReader::new(buf, offset);
    let mut w = FieldWidths::default();
    let mut h = EventHeader::default();

    w.set_descriptor_a(r.take_byte()?);
    h.version = r.take_uint(w.version)? as u32;
    h.epoch = r.take_uint(w.epoch)? as u32;
    h.seq = r.take_uint(w.seq)? as u32;
    h.frame = r.take_uint(w.frame)? as u32;

    w.set_descriptor_b(r.take_byte()?);
    h.lamport = r.take_uint(w.lamport)? as u32;

    w.set_descriptor_c(r.take_byte()?);
    h.gas_power_left = r.take_uint(w.gas_power_left)?;
    h.gas_power_used = r.take_uint(w.gas_power_used)?;

    w.set_descriptor_d(r.take_byte()?);
    h.claimed_time = r.take_uint(w.claimed_time)? as i64;
    h.median_time = r.take_uint(w.median_time)? as i64;

    let mut creator = [0u8; ADDRESS_LEN];
    creator.copy_from_slice(r.take(ADDRESS_LEN)?);
    h.creator = Address::from_bytes(creator);

    let mut hash = [0u8; HASH_LEN];
    hash.copy_from_slice(r.take(HASH_LEN)?);
    h.prev_epoch_hash = EventHash::from_bytes(hash);
    hash.copy_from_slice(r.take(HASH_LEN)?);
    h.tx_hash = EventHash::from_bytes(hash);

    h.is_root = r.take_byte()? != 0;

    let parents_count = r.take_count()?;
    if parents_count > limits.max_parents {
        return Err(InterlaceError::InvalidCount {
            field: "parents",
            value: parents_count,
            limit: limits.max_parents,
        });
    }
    if parents_count > 0 {
        let mut full = [0u8; HASH_LEN];
        full[..EPOCH_PREFIX_LEN].copy_from_slice(r.take(EPOCH_PREFIX_LEN)?);
        h.parents = Vec::with_capacity(parents_count as usize);
        for _ in 0..parents_count {
            full[EPOCH_PREFIX_LEN..].copy_from_slice(r.take(PARENT_SUFFIX_LEN)?);
            h.parents.push(EventHash::from_bytes(full));
        }
    }

    let extra_len = r.take_count()?;
    if extra_len > limits.max_extra_len {
        return Err(InterlaceError::InvalidCount {
            field: "extra",
            value: extra_len,
            limit: limits.max_extra_len,
        });
    }
    h.extra = r.take(extra_len as usize)?.to_vec();

    Ok((h, r.pos() - offset))
}
