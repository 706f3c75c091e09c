//! Line and byte counting for a single file.
//!
//! Every `\n` completes a line. A non-empty file whose last byte is not `\n`
//! has one extra, unterminated line. `\r` is an ordinary byte, so a file
//! using bare carriage returns as separators counts as one line.

use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use serde::Serialize;

/// Size of the read buffer used while streaming a file.
pub const READ_CHUNK_SIZE: usize = 32 * 1024;

/// Line and byte totals of one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCount {
    /// Number of lines, counting a trailing unterminated one
    pub lines: u64,
    /// Number of bytes read
    pub bytes: u64,
}

/// Count lines and bytes from a reader, streaming it in chunks.
///
/// Interrupted reads are retried; any other read error is returned.
pub fn count_lines<R: Read>(mut reader: R) -> io::Result<LineCount> {
    let mut buf = vec![0u8; READ_CHUNK_SIZE];
    let mut count = LineCount::default();
    let mut last_byte_newline = true;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };

        let chunk = &buf[..n];
        count.bytes += n as u64;
        count.lines += chunk.iter().filter(|&&b| b == b'\n').count() as u64;
        last_byte_newline = chunk[n - 1] == b'\n';
    }

    if count.bytes > 0 && !last_byte_newline {
        count.lines += 1;
    }

    Ok(count)
}

/// Open a file and count its lines and bytes.
///
/// The file handle is dropped before returning, on success or failure.
pub fn count_file_lines(path: impl AsRef<Path>) -> io::Result<LineCount> {
    let file = File::open(path.as_ref())?;
    count_lines(file)
}
