//! 100 km square column and row letter alphabets.
//!
//! Column letters cycle through three 8-letter sets, one per zone modulo
//! three. Row letters use a 20-letter alphabet that even numbered zones
//! rotate by five positions. Both alphabets omit I and O.

use crate::core::constants::{COLUMN_LETTERS, HUNDRED_KM, ROW_LETTERS_EVEN, ROW_LETTERS_ODD};

/// Column letter alphabet for a zone.
pub fn column_letters(zone_number: u8) -> &'static str {
    COLUMN_LETTERS[usize::from((zone_number - 1) % 3)]
}

/// Row letter alphabet for a zone.
pub fn row_letters(zone_number: u8) -> &'static str {
    if zone_number % 2 == 1 {
        ROW_LETTERS_ODD
    } else {
        ROW_LETTERS_EVEN
    }
}

/// Column letter for a full UTM easting.
pub fn column_letter(zone_number: u8, easting: f64) -> char {
    let column = (easting / HUNDRED_KM).floor() as usize;
    debug_assert!((1..=8).contains(&column), "easting {} out of zone", easting);
    column_letters(zone_number).as_bytes()[column - 1] as char
}

/// Row letter for a full UTM northing.
pub fn row_letter(zone_number: u8, northing: f64) -> char {
    let row = ((northing / HUNDRED_KM).floor() as i64).rem_euclid(20) as usize;
    row_letters(zone_number).as_bytes()[row] as char
}

/// One-based 100 km block index of a column letter within its zone set.
pub fn column_index(zone_number: u8, letter: char) -> Option<usize> {
    column_letters(zone_number).find(letter).map(|index| index + 1)
}

/// Zero-based cycle position of a row letter within its zone alphabet.
pub fn row_index(zone_number: u8, letter: char) -> Option<usize> {
    row_letters(zone_number).find(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter_sets() {
        assert_eq!(column_letters(1), "ABCDEFGH");
        assert_eq!(column_letters(2), "JKLMNPQR");
        assert_eq!(column_letters(3), "STUVWXYZ");
        assert_eq!(column_letters(4), "ABCDEFGH");
        assert_eq!(column_letters(18), "STUVWXYZ");
        assert_eq!(column_letters(60), "STUVWXYZ");
    }

    #[test]
    fn test_column_letter() {
        // zone 18, easting 326938: third 100 km block of the S-Z set
        assert_eq!(column_letter(18, 326938.11), 'U');
        assert_eq!(column_letter(1, 166000.0), 'A');
        assert_eq!(column_letter(1, 833000.0), 'H');
    }

    #[test]
    fn test_row_letter_parity() {
        // odd zones start at A, even zones at F
        assert_eq!(row_letter(1, 0.0), 'A');
        assert_eq!(row_letter(2, 0.0), 'F');
        assert_eq!(row_letter(18, 4305973.76), 'J');
        assert_eq!(row_letter(56, 6250948.35), 'H');
    }

    #[test]
    fn test_row_letter_cycles() {
        // rows repeat every 2,000,000 m
        assert_eq!(row_letter(1, 100000.0), row_letter(1, 2100000.0));
        assert_eq!(row_letter(2, 300000.0), row_letter(2, 4300000.0));
    }

    #[test]
    fn test_index_roundtrip() {
        assert_eq!(column_index(18, 'U'), Some(3));
        assert_eq!(column_index(1, 'A'), Some(1));
        assert_eq!(column_index(1, 'S'), None);
        assert_eq!(row_index(18, 'J'), Some(3));
        assert_eq!(row_index(17, 'J'), Some(8));
        assert_eq!(row_index(17, 'I'), None);
    }
}
