use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

const CHUNK_SIZE: u64 = 8 * 1024;

/// Reads a file line by line starting from the last byte, without ever
/// materializing the whole file. Backing storage is one seek-backed chunk
/// plus the line currently being accumulated, so memory stays bounded by the
/// longest line even for multi-megabyte history files.
#[derive(Debug)]
pub struct ReverseLineReader {
    file: File,
    /// File offset one past the next byte to hand out, moving toward zero.
    pos: u64,
    chunk: Vec<u8>,
    /// File offset of `chunk[0]`.
    chunk_offset: u64,
    done: bool,
}

impl ReverseLineReader {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        Ok(ReverseLineReader {
            file,
            pos: len,
            chunk: Vec::new(),
            chunk_offset: len,
            done: len == 0,
        })
    }

    fn read_prev_byte(&mut self) -> io::Result<Option<u8>> {
        if self.pos == 0 {
            return Ok(None);
        }
        if self.pos <= self.chunk_offset {
            // Refill with the chunk ending at the cursor.
            let start = self.pos.saturating_sub(CHUNK_SIZE);
            let len = (self.pos - start) as usize;
            self.chunk.resize(len, 0);
            self.file.seek(SeekFrom::Start(start))?;
            self.file.read_exact(&mut self.chunk)?;
            self.chunk_offset = start;
        }
        self.pos -= 1;
        Ok(Some(self.chunk[(self.pos - self.chunk_offset) as usize]))
    }

    /// Next line moving toward the start of the file, without its newline.
    /// The partial line at the very start of the file (no leading newline)
    /// is returned like any other.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.done {
            return Ok(None);
        }
        let mut buf: Vec<u8> = Vec::new();
        loop {
            match self.read_prev_byte()? {
                Some(b'\n') => break,
                Some(b) => buf.push(b),
                None => {
                    self.done = true;
                    if buf.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
            }
        }
        buf.reverse();
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl Iterator for ReverseLineReader {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn reader_for(content: &[u8]) -> (tempfile::TempDir, ReverseLineReader) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history");
        let mut file = File::create(&path).unwrap();
        file.write_all(content).unwrap();
        (dir, ReverseLineReader::open(&path).unwrap())
    }

    fn collect_lines(reader: ReverseLineReader) -> Vec<String> {
        reader.map(|l| l.unwrap()).collect()
    }

    #[test]
    fn test_lines_come_back_last_first() {
        let (_dir, reader) = reader_for(b"one\ntwo\nthree\n");
        assert_eq!(collect_lines(reader), vec!["", "three", "two", "one"]);
    }

    #[test]
    fn test_partial_line_at_file_start() {
        let (_dir, reader) = reader_for(b"no newline before me\nlast\n");
        assert_eq!(
            collect_lines(reader),
            vec!["", "last", "no newline before me"]
        );
    }

    #[test]
    fn test_missing_trailing_newline() {
        let (_dir, reader) = reader_for(b"one\ntwo");
        assert_eq!(collect_lines(reader), vec!["two", "one"]);
    }

    #[test]
    fn test_empty_file() {
        let (_dir, reader) = reader_for(b"");
        assert_eq!(collect_lines(reader), Vec::<String>::new());
    }

    #[test]
    fn test_line_longer_than_chunk() {
        let long = "x".repeat(3 * CHUNK_SIZE as usize + 17);
        let content = format!("first\n{}\nlast\n", long);
        let (_dir, reader) = reader_for(content.as_bytes());
        assert_eq!(
            collect_lines(reader),
            vec!["", "last", long.as_str(), "first"]
        );
    }

    #[test]
    fn test_non_utf8_bytes_are_lossy() {
        let (_dir, reader) = reader_for(b"ok\n\xff\xfe broken\n");
        let lines = collect_lines(reader);
        assert_eq!(lines[1], "\u{fffd}\u{fffd} broken");
        assert_eq!(lines[2], "ok");
    }
}
