//! Packing and unpacking text in the (annoying) GSM 7-bit encoding ([GSM
//! 03.38](https://en.wikipedia.org/wiki/GSM_03.38)).
//!
//! The scheme crams 8 characters into every 7 octets: septet *i* starts at bit 7*i* of the
//! output stream, so each octet holds the tail of one septet and the head of the next, and
//! every 8th septet disappears entirely into the spare bits of the 7 octets before it.
//!
//! Text here is assumed to be plain ASCII (which coincides with the useful part of the GSM
//! default alphabet); anything above 0x7F gets its high bit masked off, as there is no
//! extended-alphabet or UCS-2 handling in this crate.

use crate::errors::*;

/// Maximum number of septets in a single (non-concatenated) SMS.
pub const MAX_SEPTETS: usize = 160;

/// How many octets `septets` septets occupy once packed: `ceil(septets * 7 / 8)`.
pub fn packed_len(septets: usize) -> usize {
    (septets * 7 + 7) / 8
}

/// Packs a buffer of septets (one per byte, high bit ignored) into GSM 7-bit form.
///
/// Checks the required output size against `capacity` up front, and fails with
/// `BufferTooSmall` before writing anything if it doesn't fit.
pub fn pack_7bit(orig: &[u8], capacity: usize) -> PduResult<Vec<u8>> {
    let needed = packed_len(orig.len());
    if needed > capacity {
        return Err(PduError::BufferTooSmall);
    }
    let mut ret = Vec::with_capacity(needed);
    // Number of bits in the current octet that come from the current septet.
    let mut bits_cur = 7;
    for (i, data) in orig.iter().enumerate() {
        if bits_cur == 0 {
            // This septet was wholly absorbed into the previous 7 octets.
            bits_cur = 7;
            continue;
        }
        let mut cur = (*data & 0b0111_1111) >> (7 - bits_cur);
        if let Some(n) = orig.get(i + 1) {
            cur |= *n << bits_cur;
        }
        ret.push(cur);
        bits_cur -= 1;
    }
    Ok(ret)
}

/// Unpacks GSM 7-bit data into a buffer of septets (one per byte).
///
/// `len` is the septet count (the TP-UDL value), which is needed to decide whether the
/// leftover high bits of the final octet are an 8th septet or just padding.
pub fn unpack_7bit(orig: &[u8], len: usize) -> Vec<u8> {
    let mut ret = vec![0];
    // Number of bits in the current octet that come from the current septet.
    let mut bits_cur = 7;
    let mut i = 0;
    for (j, data) in orig.iter().enumerate() {
        if bits_cur == 0 {
            bits_cur = 7;
            ret.push(0);
            i += 1;
        }
        let next = data >> bits_cur;
        let cur = ((data << (8 - bits_cur)) >> (8 - bits_cur)) << (7 - bits_cur);
        ret[i] |= cur;
        if j + 1 < orig.len() || ret.len() < len {
            ret.push(next);
        }
        bits_cur -= 1;
        i += 1;
    }
    ret.truncate(len);
    ret
}

/// Encodes ASCII `text` into packed GSM 7-bit form, bounds-checked against `capacity`.
pub fn encode_text(text: &str, capacity: usize) -> PduResult<Vec<u8>> {
    let septets = text.bytes()
        .map(|b| b & 0b0111_1111)
        .collect::<Vec<_>>();
    pack_7bit(&septets, capacity)
}

/// Decodes `len` septets of packed GSM 7-bit data back into a string.
pub fn decode_text(orig: &[u8], len: usize) -> String {
    unpack_7bit(orig, len)
        .into_iter()
        .map(|b| b as char)
        .collect()
}
