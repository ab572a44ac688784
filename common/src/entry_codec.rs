//! Decimal entry encoding shared with the off-chain encoder.
//!
//! An entry is a single integer whose decimal digits read `C P1 P2 .. Pc`: one digit with the
//! number of picks, followed by every pick as two digits. `[3, 7, 42]` encodes as `3030742`.
//! The ledger stores entries opaquely; these helpers exist for the backend and for auditors
//! replaying `batch_committed` events.
//!
//! Inside `batch_committed` events a batch travels packed: every entry as an 8-byte big-endian
//! word, the whole batch base64 encoded. A full batch of 1000 entries then stays within the
//! 16 KiB log budget of a receipt.

use thiserror::Error;

use crate::types::MAX_PICK_COUNT;

const PICK_BASE: u64 = 100;
const PACKED_ENTRY_LEN: usize = 8;
const MAX_PICK_VALUE: u8 = 99;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryCodecError {
    #[error("an entry carries between 1 and 9 picks, got {0}")]
    InvalidPickCount(usize),
    #[error("pick {value} at position {index} does not fit in two digits")]
    PickOutOfRange { index: usize, value: u8 },
    #[error("{0} is not a valid entry encoding")]
    Malformed(u64),
    #[error("packed batch of {0} bytes is not a whole number of entries")]
    TruncatedBatch(usize),
}

pub fn encode_entry(picks: &[u8]) -> Result<u64, EntryCodecError> {
    if picks.is_empty() || picks.len() > MAX_PICK_COUNT as usize {
        return Err(EntryCodecError::InvalidPickCount(picks.len()));
    }

    let mut entry = picks.len() as u64;
    for (index, &value) in picks.iter().enumerate() {
        if value > MAX_PICK_VALUE {
            return Err(EntryCodecError::PickOutOfRange { index, value });
        }
        entry = entry * PICK_BASE + value as u64;
    }

    Ok(entry)
}

pub fn decode_entry(entry: u64) -> Result<Vec<u8>, EntryCodecError> {
    let digits = entry.to_string();
    let count = (digits.as_bytes()[0] - b'0') as usize;

    if entry == 0 || count > MAX_PICK_COUNT as usize || digits.len() != 1 + 2 * count {
        return Err(EntryCodecError::Malformed(entry));
    }

    let mut picks = Vec::with_capacity(count);
    let mut rest = entry;
    for _ in 0..count {
        picks.push((rest % PICK_BASE) as u8);
        rest /= PICK_BASE;
    }
    picks.reverse();

    Ok(picks)
}

pub fn pack_entries(entries: &[u64]) -> Vec<u8> {
    entries.iter().flat_map(|entry| entry.to_be_bytes()).collect()
}

pub fn unpack_entries(packed: &[u8]) -> Result<Vec<u64>, EntryCodecError> {
    if packed.len() % PACKED_ENTRY_LEN != 0 {
        return Err(EntryCodecError::TruncatedBatch(packed.len()));
    }

    Ok(packed
        .chunks_exact(PACKED_ENTRY_LEN)
        .map(|chunk| {
            let mut word = [0u8; PACKED_ENTRY_LEN];
            word.copy_from_slice(chunk);
            u64::from_be_bytes(word)
        })
        .collect())
}
