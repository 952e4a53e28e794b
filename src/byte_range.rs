use crate::patterns::RE_BYTE_RANGE;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Range, RangeInclusive};

/// The four offsets of a `/ByteRange` array: `[start1 length1 start2 length2]`.
///
/// The bytes between the two spans hold the signature value (`/Contents`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteRange {
    pub start1: u64,
    pub length1: u64,
    pub start2: u64,
    pub length2: u64,
}

impl ByteRange {
    /// Find the first `/ByteRange [n n n n]` in `bytes`.
    ///
    /// Only the first occurrence is used, even when the document is signed more than once.
    /// `Err` when one of the integers does not fit in a `u64`.
    pub(crate) fn find_first(bytes: &[u8]) -> Result<Option<ByteRange>, Error> {
        let caps = match RE_BYTE_RANGE.captures(bytes) {
            Some(caps) => caps,
            None => return Ok(None),
        };
        let mut values = [0u64; 4];
        for (index, value) in values.iter_mut().enumerate() {
            // Captures are ASCII digits only.
            let digits = String::from_utf8_lossy(&caps[index + 1]);
            *value = digits.parse().map_err(|err| {
                Error::from(format!("ByteRange value `{}` is out of range: {}", digits, err))
            })?;
        }
        let byte_range = ByteRange {
            start1: values[0],
            length1: values[1],
            start2: values[2],
            length2: values[3],
        };
        log::trace!("Found ByteRange {}", byte_range);
        Ok(Some(byte_range))
    }

    /// Inclusive byte range of the first (`0`) or second (`1`) span.
    /// `None` for an empty span or an other index.
    pub fn range(&self, range_pair_index: usize) -> Option<RangeInclusive<u64>> {
        let (start, length) = match range_pair_index {
            0 => (self.start1, self.length1),
            1 => (self.start2, self.length2),
            _ => return None,
        };
        if length == 0 {
            return None;
        }
        let end = start.checked_add(length - 1)?;
        Some(start..=end)
    }

    /// Amount of bytes covered by the signature digest.
    pub fn signed_len(&self) -> u64 {
        self.length1.saturating_add(self.length2)
    }

    /// The excluded span between the two ranges, where the signature value lives.
    pub fn gap(&self) -> Option<Range<u64>> {
        let gap_start = self.start1.checked_add(self.length1)?;
        if gap_start > self.start2 {
            return None;
        }
        Some(gap_start..self.start2)
    }

    /// Structural check that the ranges cover a document of `document_len` bytes
    /// except for the signature value. No digest is computed.
    pub fn covers_document(&self, document_len: u64) -> bool {
        if self.start1 != 0 || self.gap().is_none() {
            return false;
        }
        self.start2.checked_add(self.length2) == Some(document_len)
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {} {}]",
            self.start1, self.length1, self.start2, self.length2
        )
    }
}
