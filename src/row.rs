//! Fixed-width row layout.
//!
//! ```text
//! 0        4                        36                              291
//! +--------+------------------------+-------------------------------+
//! | id LE  | username (32, 0-pad)   | email (255, 0-pad)            |
//! +--------+------------------------+-------------------------------+
//! ```

use std::fmt;

use crate::{
    EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: u32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Writes the row into `dest`, which must be exactly [`ROW_SIZE`] bytes.
    ///
    /// Text wider than its column is cut at the column boundary; callers are
    /// expected to have rejected it already.
    pub fn encode(&self, dest: &mut [u8]) {
        debug_assert_eq!(dest.len(), ROW_SIZE);
        dest[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());
        write_text(
            &mut dest[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE],
            &self.username,
        );
        write_text(&mut dest[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE], &self.email);
    }

    /// Reads a row back from a [`ROW_SIZE`] byte region.
    pub fn decode(src: &[u8]) -> Self {
        debug_assert_eq!(src.len(), ROW_SIZE);
        let id = u32::from_le_bytes([
            src[ID_OFFSET],
            src[ID_OFFSET + 1],
            src[ID_OFFSET + 2],
            src[ID_OFFSET + 3],
        ]);
        Self {
            id,
            username: read_text(&src[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]),
            email: read_text(&src[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

fn write_text(field: &mut [u8], text: &str) {
    let bytes = text.as_bytes();
    let len = bytes.len().min(field.len());
    field[..len].copy_from_slice(&bytes[..len]);
    field[len..].fill(0);
}

// A full-width field has no terminator.
fn read_text(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(row: &Row) -> Vec<u8> {
        let mut buf = vec![0xAA; ROW_SIZE];
        row.encode(&mut buf);
        buf
    }

    #[test]
    fn fields_land_at_fixed_offsets() {
        let buf = encoded(&Row::new(0x0102_0304, "bob", "bob@example.com"));

        assert_eq!(&buf[0..4], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&buf[USERNAME_OFFSET..USERNAME_OFFSET + 3], b"bob");
        assert!(buf[USERNAME_OFFSET + 3..EMAIL_OFFSET].iter().all(|&b| b == 0));
        assert_eq!(&buf[EMAIL_OFFSET..EMAIL_OFFSET + 15], b"bob@example.com");
        assert!(buf[EMAIL_OFFSET + 15..].iter().all(|&b| b == 0));
    }

    #[test]
    fn decode_restores_encoded_row() {
        let row = Row::new(42, "user42", "person42@example.com");
        assert_eq!(Row::decode(&encoded(&row)), row);
    }

    #[test]
    fn full_width_fields_survive_without_terminator() {
        let row = Row::new(u32::MAX, "u".repeat(USERNAME_SIZE), "e".repeat(EMAIL_SIZE));
        let buf = encoded(&row);
        assert!(!buf.contains(&0));
        assert_eq!(Row::decode(&buf), row);
    }

    #[test]
    fn empty_text_decodes_empty() {
        let row = Row::new(7, "", "");
        assert_eq!(Row::decode(&encoded(&row)), row);
    }

    #[test]
    fn reencoding_a_shorter_row_clears_old_bytes() {
        let mut buf = vec![0; ROW_SIZE];
        Row::new(1, "longer-name", "longer@example.com").encode(&mut buf);
        Row::new(2, "ab", "c@d").encode(&mut buf);
        assert_eq!(Row::decode(&buf), Row::new(2, "ab", "c@d"));
    }

    #[test]
    fn displays_as_tuple() {
        let row = Row::new(1, "user1", "person1@example.com");
        assert_eq!(row.to_string(), "(1, user1, person1@example.com)");
    }
}
