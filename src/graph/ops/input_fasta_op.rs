use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::mem;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use memchr::memchr2;

use crate::graph::*;

enum ParseState {
    Idle,
    Open(FastaRecord),
}

pub struct InputFastaOp<'reader> {
    reader: Box<dyn BufRead + 'reader>,
    origin: String,
    line: Vec<u8>,
    state: ParseState,
}

impl<'reader> InputFastaOp<'reader> {
    const NAME: &'static str = "InputFastaOp";

    /// Stream FASTA records from an input file, decompressing it if the path ends with `.gz`.
    pub fn from_file(file: impl AsRef<Path>) -> Result<Self> {
        let file = file.as_ref();
        let f = File::open(file).map_err(|e| Error::file_io(file, e))?;

        let reader: Box<dyn BufRead + 'reader> =
            if file.extension().map_or(false, |ext| ext == "gz") {
                Box::new(BufReader::new(MultiGzDecoder::new(f)))
            } else {
                Box::new(BufReader::new(f))
            };

        Ok(Self {
            reader,
            origin: file.display().to_string(),
            line: Vec::new(),
            state: ParseState::Idle,
        })
    }

    /// Stream FASTA records from an arbitrary buffered reader.
    pub fn from_reader(reader: impl BufRead + 'reader) -> Self {
        Self {
            reader: Box::new(reader),
            origin: String::new(),
            line: Vec::new(),
            state: ParseState::Idle,
        }
    }

    fn read_error(&self, e: std::io::Error) -> Error {
        if self.origin.is_empty() {
            Error::BytesIo(Box::new(e))
        } else {
            Error::FileIo {
                file: self.origin.clone(),
                source: Box::new(e),
            }
        }
    }

    /// Read the next line into `self.line`, without its terminator.
    ///
    /// `\n`, `\r` and `\r\n` all end a line. A `\r\n` pair yields an extra empty line, which
    /// the parser skips like any other blank line. Returns `false` at end of input.
    fn read_line(&mut self) -> io::Result<bool> {
        self.line.clear();

        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if buf.is_empty() {
                return Ok(!self.line.is_empty());
            }

            match memchr2(b'\n', b'\r', buf) {
                Some(end) => {
                    self.line.extend_from_slice(&buf[..end]);
                    self.reader.consume(end + 1);
                    return Ok(true);
                }
                None => {
                    let len = buf.len();
                    self.line.extend_from_slice(buf);
                    self.reader.consume(len);
                }
            }
        }
    }

    /// Read lines until a record is complete.
    ///
    /// A record is complete when the next header shows up or the input ends. Blank lines and
    /// lines before the first header are skipped.
    fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        loop {
            if !self.read_line().map_err(|e| self.read_error(e))? {
                return Ok(match mem::replace(&mut self.state, ParseState::Idle) {
                    ParseState::Open(record) => Some(record),
                    ParseState::Idle => None,
                });
            }

            let Some(line) = trim_ascii_whitespace(&self.line) else {
                continue;
            };

            if is_header(line) {
                log::info!("Processing: {}", display_header(line));
                let next = FastaRecord::new(line);

                if let ParseState::Open(record) =
                    mem::replace(&mut self.state, ParseState::Open(next))
                {
                    return Ok(Some(record));
                }
            } else if let ParseState::Open(record) = &mut self.state {
                record.extend_seq(line);
            }
        }
    }
}

impl<'reader> GraphNode for InputFastaOp<'reader> {
    fn run(&mut self, record: Option<FastaRecord>) -> Result<(Option<FastaRecord>, bool)> {
        assert!(record.is_none(), "Expected no input records for {}", Self::NAME);

        match self.next_record()? {
            Some(record) => Ok((Some(record), false)),
            None => Ok((None, true)),
        }
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
