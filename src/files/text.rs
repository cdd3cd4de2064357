//! Text File Helpers
//!
//! Small checks on pipeline outputs: whether a file holds enough content to
//! be worth passing on, and `touch` for marker files.

use std::fs::{File, FileTimes, OpenOptions};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::SystemTime;

use log::debug;

use crate::error::{Result, UtilError};

/// Default minimum number of non-blank lines for [`is_empty_txt`].
pub const DEFAULT_MIN_NON_EMPTY_LINES: usize = 1;

/// Checks whether a text file has fewer than `min_non_empty_lines`
/// non-blank lines.
///
/// Lines containing only whitespace do not count. Reading stops as soon as
/// the threshold is reached, so large files that clearly satisfy it are not
/// read to the end.
///
/// # Returns
///
/// * `Ok(true)` - The file does NOT meet the minimum
/// * `Ok(false)` - The file has at least `min_non_empty_lines` non-blank lines
/// * `Err(UtilError::Io)` - The file is missing or unreadable
pub fn is_empty_txt(path: impl AsRef<Path>, min_non_empty_lines: usize) -> Result<bool> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| UtilError::io(path, e))?;
    let count = count_non_empty_lines(BufReader::new(file), min_non_empty_lines)
        .map_err(|e| UtilError::io(path, e))?;

    Ok(count < min_non_empty_lines)
}

/// Counts non-blank lines, stopping once `limit` is reached.
fn count_non_empty_lines<R: BufRead>(reader: R, limit: usize) -> std::io::Result<usize> {
    let mut count = 0;
    if limit == 0 {
        return Ok(count);
    }

    for line in reader.split(b'\n') {
        let line = line?;
        if line.iter().any(|&b| !is_blank(b)) {
            count += 1;
            if count >= limit {
                break;
            }
        }
    }

    Ok(count)
}

/// ASCII whitespace, including the vertical tab that
/// [`u8::is_ascii_whitespace`] leaves out.
fn is_blank(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\x0b'
}

/// Creates `path` if it does not exist and updates its timestamps.
///
/// `times` is `(accessed, modified)`; `None` sets both to now. Existing
/// content is left untouched.
pub fn touch(path: impl AsRef<Path>, times: Option<(SystemTime, SystemTime)>) -> Result<()> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| UtilError::io(path, e))?;

    let (accessed, modified) = times.unwrap_or_else(|| {
        let now = SystemTime::now();
        (now, now)
    });

    file.set_times(FileTimes::new().set_accessed(accessed).set_modified(modified))
        .map_err(|e| UtilError::io(path, e))?;

    debug!("Touched {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_is_empty_txt_one_line_below_two() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "ACGT\n   \n").unwrap();

        assert!(is_empty_txt(&path, 2).unwrap());
        assert!(!is_empty_txt(&path, 1).unwrap());
    }

    #[test]
    fn test_is_empty_txt_three_lines() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, ">seq1\nACGT\n>seq2\n").unwrap();

        assert!(!is_empty_txt(&path, 2).unwrap());
        assert!(!is_empty_txt(&path, 3).unwrap());
        assert!(is_empty_txt(&path, 4).unwrap());
    }

    #[test]
    fn test_is_empty_txt_empty_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert!(is_empty_txt(&path, DEFAULT_MIN_NON_EMPTY_LINES).unwrap());
        assert!(!is_empty_txt(&path, 0).unwrap());
    }

    #[test]
    fn test_is_empty_txt_whitespace_only() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("blank.txt");
        fs::write(&path, "\n \t\n\r\n").unwrap();

        assert!(is_empty_txt(&path, 1).unwrap());
    }

    #[test]
    fn test_is_empty_txt_vertical_tab_is_blank() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("vt.txt");
        fs::write(&path, "\x0b\n \x0b\x0c\t\n").unwrap();

        assert!(is_empty_txt(&path, 1).unwrap());

        fs::write(&path, "\x0bACGT\x0b\n").unwrap();
        assert!(!is_empty_txt(&path, 1).unwrap());
    }

    #[test]
    fn test_is_empty_txt_no_trailing_newline() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("last.txt");
        fs::write(&path, "a\nb").unwrap();

        assert!(!is_empty_txt(&path, 2).unwrap());
    }

    #[test]
    fn test_is_empty_txt_idempotent() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "x\n\ny\n").unwrap();

        for min in 0..4 {
            assert_eq!(is_empty_txt(&path, min).unwrap(), is_empty_txt(&path, min).unwrap());
        }
    }

    #[test]
    fn test_is_empty_txt_missing_file() {
        let temp_dir = tempdir().unwrap();
        let err = is_empty_txt(temp_dir.path().join("missing.txt"), 1).unwrap_err();
        assert!(matches!(err, UtilError::Io { .. }));
    }

    #[test]
    fn test_count_stops_at_limit() {
        let mut cursor = Cursor::new(b"one\ntwo\nthree\n".to_vec());
        let count = count_non_empty_lines(&mut cursor, 2).unwrap();
        assert_eq!(count, 2);
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn test_touch_creates_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("marker");

        touch(&path, None).unwrap();
        assert!(path.is_file());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_touch_keeps_content_and_sets_times() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("data.txt");
        fs::write(&path, "keep me\n").unwrap();

        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
        touch(&path, Some((past, past))).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me\n");
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), past);
    }

    #[test]
    fn test_touch_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let err = touch(temp_dir.path().join("no/such/dir/file"), None).unwrap_err();
        assert!(matches!(err, UtilError::Io { .. }));
    }
}
