//! Loads instruction and data images from plain hex-text files.
//!
//! Each non-blank line holds one 32-bit word in hexadecimal, most
//! significant byte first, with an optional `0x`/`0X` prefix. Blank lines
//! (and lines that are only whitespace) are skipped; everything else must
//! parse as hex or the whole load fails with the offending line number.

use std::fs;
use std::path::Path;

use crate::common::error::SimFault;

/// Reads a hex-text image file from disk and parses it into words.
pub fn load_image(path: &Path) -> Result<Vec<u32>, SimFault> {
    let text = fs::read_to_string(path).map_err(|e| SimFault::Io {
        path: path.display().to_string(),
        source: e.to_string(),
    })?;
    parse_hex_lines(&text)
}

/// Parses hex-text image contents into words, independent of where the
/// text came from — split out so tests can exercise it without touching
/// the filesystem.
pub fn parse_hex_lines(text: &str) -> Result<Vec<u32>, SimFault> {
    let mut words = Vec::new();
    for (i, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let digits = line.strip_prefix("0x").or_else(|| line.strip_prefix("0X")).unwrap_or(line);
        let word = u32::from_str_radix(digits, 16).map_err(|_| SimFault::ImageParse {
            line: i + 1,
            text: raw_line.to_string(),
        })?;
        words.push(word);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_prefixed_hex_lines() {
        let words = parse_hex_lines("0x00000013\nDEADBEEF\n").unwrap();
        assert_eq!(words, vec![0x0000_0013, 0xDEAD_BEEF]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let words = parse_hex_lines("00000001\n\n   \n00000002\n").unwrap();
        assert_eq!(words, vec![1, 2]);
    }

    #[test]
    fn invalid_hex_reports_its_line_number() {
        let err = parse_hex_lines("00000001\nnot-hex\n").unwrap_err();
        assert_eq!(
            err,
            SimFault::ImageParse {
                line: 2,
                text: "not-hex".to_string()
            }
        );
    }
}
