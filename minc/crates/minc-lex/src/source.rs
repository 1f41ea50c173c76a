//! Double-buffered character source.
//!
//! This module provides [`CharSource`], which reads its input in fixed-size
//! chunks, hands out one character at a time, accepts a single character of
//! pushback and tracks line/column information for token positions.
//!
//! Two chunks of equal capacity are kept. Characters are drained from the
//! active chunk; once it runs dry the other chunk is refilled from the reader
//! and becomes active. Memory use is bounded by the two chunks no matter how
//! large the input is.

use std::io::{self, ErrorKind, Read};
use std::num::NonZeroUsize;

use minc_util::Span;

/// Chunk capacity used by [`CharSource::new`], in bytes.
pub const DEFAULT_CHUNK_CAPACITY: usize = 10;

/// A character source over any [`Read`] implementation.
///
/// The chunks hold raw bytes. [`next_char`](Self::next_char) decodes UTF-8 one
/// scalar value at a time, so a multi-byte sequence may straddle the two
/// chunks. Malformed UTF-8 decodes to `U+FFFD`.
///
/// # Example
///
/// ```
/// use minc_lex::source::CharSource;
///
/// let mut source = CharSource::new("ab".as_bytes());
///
/// assert_eq!(source.next_char().unwrap(), Some('a'));
/// let b = source.next_char().unwrap().unwrap();
/// source.push_back(b);
/// assert_eq!(source.next_char().unwrap(), Some('b'));
/// assert_eq!(source.next_char().unwrap(), None);
/// ```
pub struct CharSource<R> {
    /// Underlying input stream.
    reader: R,

    /// The two chunks, each of the same capacity.
    chunks: [Box<[u8]>; 2],

    /// Number of valid bytes in each chunk.
    fill: [usize; 2],

    /// Index of the chunk being drained.
    active: usize,

    /// Read position inside the active chunk; always `<= fill[active]`.
    cursor: usize,

    /// Set once a refill returned no bytes.
    exhausted: bool,

    /// A byte read while decoding that did not belong to the sequence.
    stray: Option<u8>,

    /// One character of pushback.
    pushback: Option<char>,

    /// Line of the most recently read character (1-based).
    line: u32,

    /// Column of the most recently read character; 0 right after a newline.
    column: u32,
}

impl<R: Read> CharSource<R> {
    /// Creates a source with [`DEFAULT_CHUNK_CAPACITY`]-byte chunks.
    pub fn new(reader: R) -> Self {
        let capacity = NonZeroUsize::new(DEFAULT_CHUNK_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_capacity(reader, capacity)
    }

    /// Creates a source whose chunks hold `capacity` bytes each.
    ///
    /// No input is read until the first call to [`next_char`](Self::next_char).
    pub fn with_capacity(reader: R, capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        Self {
            reader,
            chunks: [
                vec![0; capacity].into_boxed_slice(),
                vec![0; capacity].into_boxed_slice(),
            ],
            fill: [0, 0],
            // The first refill targets the "other" chunk, which is chunk 0.
            active: 1,
            cursor: 0,
            exhausted: false,
            stray: None,
            pushback: None,
            line: Span::START.line,
            column: Span::START.column,
        }
    }

    /// Returns the next character, or `None` at end of input.
    ///
    /// A pushed-back character is replayed first; replaying does not move
    /// the line/column counters.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        if let Some(c) = self.pushback.take() {
            return Ok(Some(c));
        }

        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };
        let c = self.decode(lead)?;

        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Ok(Some(c))
    }

    /// Returns `c` to the stream so the next [`next_char`](Self::next_char)
    /// yields it again.
    ///
    /// At most one character may be held. The lexer never pushes back twice
    /// in a row; doing so is a bug in the caller.
    pub fn push_back(&mut self, c: char) {
        debug_assert!(
            self.pushback.is_none(),
            "pushback slot already holds {:?}",
            self.pushback
        );
        self.pushback = Some(c);
    }

    /// Position of the most recently read character.
    pub fn position(&self) -> Span {
        Span::new(self.line, self.column)
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Capacity of each chunk in bytes.
    pub fn capacity(&self) -> usize {
        self.chunks[0].len()
    }

    /// Takes the next raw byte, switching chunks at most once.
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.stray.take() {
            return Ok(Some(b));
        }

        // First pass drains the active chunk; second pass drains the chunk
        // that was just refilled.
        for _ in 0..2 {
            if self.cursor < self.fill[self.active] {
                let b = self.chunks[self.active][self.cursor];
                self.cursor += 1;
                return Ok(Some(b));
            }
            if self.exhausted || !self.refill_other()? {
                return Ok(None);
            }
        }

        Ok(None)
    }

    /// Refills the inactive chunk and makes it active.
    ///
    /// Returns false, leaving the active chunk alone, when the reader has
    /// nothing more to give.
    fn refill_other(&mut self) -> io::Result<bool> {
        let other = 1 - self.active;
        let count = loop {
            match self.reader.read(&mut self.chunks[other]) {
                Ok(count) => break count,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };

        tracing::trace!(chunk = other, bytes = count, "refilled input chunk");

        self.fill[other] = count;
        if count == 0 {
            self.exhausted = true;
            return Ok(false);
        }

        self.active = other;
        self.cursor = 0;
        Ok(true)
    }

    /// Decodes the UTF-8 sequence starting with `lead`.
    fn decode(&mut self, lead: u8) -> io::Result<char> {
        let width = match lead {
            0x00..=0x7F => return Ok(char::from(lead)),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Ok(char::REPLACEMENT_CHARACTER),
        };

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.next_byte()? {
                Some(b) if b & 0xC0 == 0x80 => *slot = b,
                Some(b) => {
                    self.stray = Some(b);
                    return Ok(char::REPLACEMENT_CHARACTER);
                },
                None => return Ok(char::REPLACEMENT_CHARACTER),
            }
        }

        Ok(std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}
