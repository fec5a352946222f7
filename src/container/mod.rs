//! Decoder for the compressed container framing Firefox wraps around its
//! session-store and bookmark-backup JSON (`.jsonlz4`/`.mozlz4` files).
//!
//! The framing is an 8-byte magic tag, a little-endian u32 giving the size of
//! the decompressed payload, and an LZ4 block holding the rest of the file.

use lz4_flex::block::decompress_into;

use crate::error::{Error, Result};

/// Magic tag at the front of every compressed container.
pub const MAGIC: &[u8; 8] = b"mozLz40\0";

/// Bytes occupied by the magic tag and the declared-size field.
const HEADER_LEN: usize = MAGIC.len() + 4;

/// Decode a compressed container into its JSON byte payload.
///
/// The returned buffer is exactly the length declared in the header. The
/// decoder does not inspect the JSON itself.
///
/// # Errors
///
/// Returns an error if:
/// - The input is shorter than the header or the magic tag does not match
///   ([`Error::Format`])
/// - The declared size exceeds `i32::MAX`, rejected before any allocation
///   ([`Error::Format`])
/// - Decompression fails or produces a length other than the declared size
///   ([`Error::CorruptData`], carrying the decompressor's report)
pub fn decode_container(raw: &[u8]) -> Result<Vec<u8>> {
    if raw.len() < HEADER_LEN {
        return Err(Error::Format(format!(
            "container too short: {} bytes, need at least {HEADER_LEN}",
            raw.len()
        )));
    }

    let (magic, rest) = raw.split_at(MAGIC.len());
    if magic != MAGIC {
        return Err(Error::Format("bad magic in container header".to_string()));
    }

    let mut size_bytes = [0u8; 4];
    size_bytes.copy_from_slice(&rest[..4]);
    let declared_size = u32::from_le_bytes(size_bytes);
    if declared_size > i32::MAX as u32 {
        return Err(Error::Format(format!("invalid size in header: {declared_size:#x}")));
    }

    let mut output = vec![0u8; declared_size as usize];
    let written = decompress_into(&rest[4..], &mut output)
        .map_err(|e| Error::CorruptData(e.to_string()))?;
    if written != output.len() {
        return Err(Error::CorruptData(format!(
            "decompressed {written} bytes, header declared {}",
            output.len()
        )));
    }

    Ok(output)
}
