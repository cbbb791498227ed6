// Lexicon reader and loader
//
// The loader pulls decoded lines from a `LineReader` until end of file and
// feeds each one to `Dictionary::parse_article`. The first failing line
// stops the load; comment lines are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use lakota_core::{LkError, MAX_LINE_LEN, Result};
use log::{debug, info};

use crate::dictionary::{ArticleOutcome, Dictionary};

/// Environment variable naming the lexicon file when no path is given.
pub const DICTIONARY_ENV: &str = "LK_DICTIONARY";

/// Source of decoded lexicon lines.
pub trait LineReader {
    /// Read the next line with its line terminator removed.
    ///
    /// Returns `Ok(None)` at end of file. Undecodable bytes are
    /// `InvalidString`, an over-long line is `LineTooLong`, and I/O failures
    /// are `Read`.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// 1-based number of the line most recently returned.
    fn line_number(&self) -> usize;
}

/// `LineReader` over any buffered byte source.
#[derive(Debug)]
pub struct LexiconReader<R> {
    inner: R,
    max_line_len: usize,
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LexiconReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_max_line_len(inner, MAX_LINE_LEN)
    }

    /// Create a reader that rejects lines longer than `max_line_len` bytes.
    pub fn with_max_line_len(inner: R, max_line_len: usize) -> Self {
        Self {
            inner,
            max_line_len,
            line: 0,
            buf: Vec::new(),
        }
    }
}

impl LexiconReader<BufReader<File>> {
    /// Open a lexicon file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let invalid = |source| LkError::InvalidFile {
            path: path.display().to_string(),
            source,
        };
        let file = File::open(path).map_err(invalid)?;
        // Opening a directory succeeds on Unix; only the first read fails.
        if file.metadata().map_err(invalid)?.is_dir() {
            return Err(invalid(io::Error::new(
                io::ErrorKind::IsADirectory,
                "is a directory",
            )));
        }
        debug!("opened lexicon {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }

    /// Open the lexicon named by the `LK_DICTIONARY` environment variable.
    pub fn open_default() -> Result<Self> {
        let path = std::env::var_os(DICTIONARY_ENV).ok_or_else(|| {
            LkError::InvalidArgument(format!("no lexicon path given and {DICTIONARY_ENV} is not set"))
        })?;
        Self::open(path)
    }
}

impl<R: BufRead> LineReader for LexiconReader<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        // Two extra bytes leave room for a CRLF terminator.
        let limit = self.max_line_len as u64 + 2;
        let read = (&mut self.inner).take(limit).read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        self.line += 1;

        while matches!(self.buf.last(), Some(b'\n' | b'\r')) {
            self.buf.pop();
        }
        if self.buf.len() > self.max_line_len {
            return Err(LkError::LineTooLong {
                line: self.line,
                limit: self.max_line_len,
            });
        }

        let mut text = String::from_utf8(std::mem::take(&mut self.buf)).map_err(|e| {
            LkError::InvalidString(format!("line {}: {}", self.line, e.utf8_error()))
        })?;
        if self.line == 1 && text.starts_with('\u{FEFF}') {
            text.remove(0);
        }
        Ok(Some(text))
    }

    fn line_number(&self) -> usize {
        self.line
    }
}

/// Counters reported by [`Dictionary::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Articles indexed.
    pub articles: usize,
    /// Comment and blank lines skipped.
    pub comments: usize,
    /// Entries created, ablaut variants included.
    pub entries: usize,
}

impl Dictionary {
    /// Read every article from `reader`.
    ///
    /// Stops at the first line that fails to read or parse; the error
    /// carries that line's number. Articles indexed before it stay in the
    /// dictionary.
    pub fn load<L: LineReader + ?Sized>(&mut self, reader: &mut L) -> Result<LoadStats> {
        let mut stats = LoadStats::default();
        while let Some(line) = reader.read_line()? {
            let outcome = self.parse_article(&line).map_err(|source| LkError::AtLine {
                line: reader.line_number(),
                source: Box::new(source),
            })?;
            match outcome {
                ArticleOutcome::Indexed { entries, .. } => {
                    stats.articles += 1;
                    stats.entries += entries;
                }
                ArticleOutcome::Comment => stats.comments += 1,
            }
        }
        info!(
            "loaded {} articles ({} entries, {} spellings), skipped {} comment lines",
            stats.articles,
            stats.entries,
            self.spelling_count(),
            stats.comments
        );
        Ok(stats)
    }

    /// Build a dictionary from lexicon text held in memory.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut dict = Self::new();
        dict.load(&mut LexiconReader::new(text.as_bytes()))?;
        Ok(dict)
    }
}
