//! Text versus binary sniffing.
//!
//! Only the head of the file is inspected. A NUL byte means binary; otherwise
//! the file is text unless too many bytes fall outside the usual text range.
//! Bytes at or above 0x80 count as text so UTF-8 and legacy 8-bit encodings
//! pass.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of leading bytes sampled.
pub const SNIFF_SIZE: usize = 8192;

/// Largest tolerated share of non-text bytes in the sample.
pub const MAX_NON_TEXT_RATIO: f64 = 0.30;

/// Sniff a file on disk.
///
/// Files that cannot be opened or read are reported as binary so the
/// scanner skips them.
pub fn is_likely_text(path: &Path) -> bool {
    match read_sample(path) {
        Ok(sample) => classify_sample(&sample),
        Err(err) => {
            log::debug!("treating {} as binary: {}", path.display(), err);
            false
        }
    }
}

/// Classify an in-memory sample. An empty sample is text.
pub fn classify_sample(sample: &[u8]) -> bool {
    if sample.is_empty() {
        return true;
    }
    if sample.contains(&0) {
        return false;
    }

    let non_text = sample.iter().filter(|&&b| !is_text_byte(b)).count();
    (non_text as f64 / sample.len() as f64) <= MAX_NON_TEXT_RATIO
}

fn is_text_byte(b: u8) -> bool {
    matches!(b, b'\n' | b'\r' | b'\t' | 0x20..=0x7e | 0x80..=0xff)
}

/// Read up to [`SNIFF_SIZE`] bytes with a single read call.
fn read_sample(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut buf = vec![0u8; SNIFF_SIZE];
    let n = file.read(&mut buf)?;
    buf.truncate(n);
    Ok(buf)
}
