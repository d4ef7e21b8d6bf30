//! Cell coordinates and rectangular ranges.
//!
//! Indices are 0-based. The `A1` string form exists only for the file codecs.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Extent used by whole-row and whole-column selections.
pub const UNBOUNDED: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellAddress {
    pub row: u32,
    pub column: u32,
}

impl CellAddress {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Offset by a signed delta, saturating at 0 and at [`UNBOUNDED`] - 1.
    pub fn offset(self, rows: i64, columns: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, i64::from(UNBOUNDED) - 1) as u32;
        Self {
            row: clamp(i64::from(self.row) + rows),
            column: clamp(i64::from(self.column) + columns),
        }
    }

    /// `A1`-style reference.
    pub fn encode(self) -> String {
        format!("{}{}", column_letters(self.column), u64::from(self.row) + 1)
    }

    pub fn decode(text: &str) -> Result<Self, GridError> {
        let invalid = || GridError::InvalidAddress(text.to_string());
        let split = text
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (letters, digits) = text.split_at(split);
        let column = letters_column(letters).ok_or_else(invalid)?;
        let row: u32 = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }
        Ok(Self::new(row - 1, column))
    }
}

/// `0 -> A`, `25 -> Z`, `26 -> AA`.
pub fn column_letters(column: u32) -> String {
    let mut out = Vec::new();
    let mut n = u64::from(column);
    loop {
        out.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    out.iter().rev().map(|b| *b as char).collect()
}

fn letters_column(letters: &str) -> Option<u32> {
    if letters.is_empty() || !letters.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    let mut n: u64 = 0;
    for b in letters.bytes() {
        n = n * 26 + u64::from(b - b'A' + 1);
        if n > u64::from(UNBOUNDED) {
            return None;
        }
    }
    u32::try_from(n - 1).ok()
}

/// An inclusive, normalized rectangle: `start` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRange {
    pub start: CellAddress,
    pub end: CellAddress,
}

impl CellRange {
    /// The rectangle spanned by two arbitrary corners.
    pub fn spanning(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.column.min(b.column)),
            end: CellAddress::new(a.row.max(b.row), a.column.max(b.column)),
        }
    }

    pub fn single(address: CellAddress) -> Self {
        Self {
            start: address,
            end: address,
        }
    }

    pub fn contains(&self, address: CellAddress) -> bool {
        (self.start.row..=self.end.row).contains(&address.row)
            && (self.start.column..=self.end.column).contains(&address.column)
    }

    /// Smallest range covering `self` and `address`.
    pub fn including(self, address: CellAddress) -> Self {
        Self {
            start: CellAddress::new(
                self.start.row.min(address.row),
                self.start.column.min(address.column),
            ),
            end: CellAddress::new(
                self.end.row.max(address.row),
                self.end.column.max(address.column),
            ),
        }
    }

    pub fn rows(&self) -> u32 {
        (self.end.row - self.start.row).saturating_add(1)
    }

    pub fn columns(&self) -> u32 {
        (self.end.column - self.start.column).saturating_add(1)
    }

    /// Addresses in row-major order.
    pub fn addresses(&self) -> impl Iterator<Item = CellAddress> + '_ {
        (self.start.row..=self.end.row).flat_map(move |row| {
            (self.start.column..=self.end.column).map(move |column| CellAddress::new(row, column))
        })
    }

    /// `A1:C3`, or `A1` for a single cell.
    pub fn encode(&self) -> String {
        if self.start == self.end {
            self.start.encode()
        } else {
            format!("{}:{}", self.start.encode(), self.end.encode())
        }
    }

    pub fn decode(text: &str) -> Result<Self, GridError> {
        let corners = match text.split_once(':') {
            Some((a, b)) => (CellAddress::decode(a), CellAddress::decode(b)),
            None => (CellAddress::decode(text), CellAddress::decode(text)),
        };
        match corners {
            (Ok(a), Ok(b)) => Ok(Self::spanning(a, b)),
            _ => Err(GridError::InvalidRange(text.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
        assert_eq!(letters_column("AAA"), Some(702));
    }

    #[test]
    fn test_address_codec() {
        assert_eq!(CellAddress::decode("C7").unwrap(), CellAddress::new(6, 2));
        assert_eq!(CellAddress::new(0, 27).encode(), "AB1");
        assert!(CellAddress::decode("A0").is_err());
        assert!(CellAddress::decode("a1").is_err());
        assert!(CellAddress::decode("12").is_err());
        assert!(CellAddress::decode("AB").is_err());
    }

    #[test]
    fn test_range_normalizes_corners() {
        let range = CellRange::spanning(CellAddress::new(4, 1), CellAddress::new(2, 3));
        assert_eq!(range.start, CellAddress::new(2, 1));
        assert_eq!(range.end, CellAddress::new(4, 3));
        assert_eq!((range.rows(), range.columns()), (3, 3));
        assert_eq!(range.encode(), "B3:D5");
        assert_eq!(CellRange::decode("D5:B3").unwrap(), range);
        assert_eq!(range.addresses().count(), 9);
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(
            CellAddress::new(0, 0).offset(-1, -3),
            CellAddress::new(0, 0)
        );
        assert_eq!(CellAddress::new(2, 2).offset(1, -1), CellAddress::new(3, 1));
    }
}
