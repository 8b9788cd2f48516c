use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads one key per non-whitespace character from a line-buffered source.
#[derive(Debug)]
pub struct Keys<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> Keys<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Blocks until the next key is available, `None` once the input is closed.
    pub fn next_key(&mut self) -> io::Result<Option<char>> {
        loop {
            if let Some(key) = self.pending.pop_front() {
                return Ok(Some(key));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_lines_into_keys() {
        let mut keys = Keys::new(Cursor::new("ss a\n\n  w\r\n"));

        assert_eq!(keys.next_key().unwrap(), Some('s'));
        assert_eq!(keys.next_key().unwrap(), Some('s'));
        assert_eq!(keys.next_key().unwrap(), Some('a'));
        assert_eq!(keys.next_key().unwrap(), Some('w'));
        assert_eq!(keys.next_key().unwrap(), None);
    }

    #[test]
    fn closed_input_has_no_keys() {
        let mut keys = Keys::new(Cursor::new(""));

        assert_eq!(keys.next_key().unwrap(), None);
    }
}
