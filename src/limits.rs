/// Caps on the decoder's two count fields, checked before any allocation is
/// sized from them.
///
/// The wire format stores both counts as full 32-bit integers, so a
/// corrupted or malicious input can declare lengths in the gigabytes. The
/// defaults sit far above anything the consensus layer produces.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum accepted number of parent references.
    pub max_parents: u32,
    /// Maximum accepted extra payload length in bytes.
    pub max_extra_len: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_parents: 4096,
            max_extra_len: 1 << 20,
        }
    }
}
