use std::fs::File;
use std::io::{BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::Path;

use flate2::{write::GzEncoder, Compression};

use crate::graph::*;

enum Sink<'writer> {
    Plain(Box<dyn Write + 'writer>),
    Gz(BufWriter<GzEncoder<Box<dyn Write + 'writer>>>),
}

impl<'writer> Sink<'writer> {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Sink::Plain(w) => w,
            Sink::Gz(w) => w,
        }
    }

    /// Flush buffered output. Gzip output also gets its trailer written here, so a failure
    /// to complete the stream is reported instead of being lost on drop.
    fn finish(&mut self) -> std::io::Result<()> {
        match self {
            Sink::Plain(w) => w.flush(),
            Sink::Gz(w) => {
                w.flush()?;
                w.get_mut().try_finish()
            }
        }
    }
}

pub struct OutputFastaOp<'writer> {
    sink: Sink<'writer>,
    origin: String,
    width: NonZeroUsize,
}

impl<'writer> OutputFastaOp<'writer> {
    const NAME: &'static str = "OutputFastaOp";

    /// Write records to a file, gzip-compressed if the path ends with `.gz`.
    ///
    /// The file is created if it does not exist and truncated otherwise.
    pub fn from_file(file: impl AsRef<Path>, width: NonZeroUsize) -> Result<Self> {
        let file = file.as_ref();
        let f = File::create(file).map_err(|e| Error::file_io(file, e))?;

        let sink = if file.extension().map_or(false, |ext| ext == "gz") {
            Sink::Gz(BufWriter::new(GzEncoder::new(
                Box::new(f) as Box<dyn Write + 'writer>,
                Compression::default(),
            )))
        } else {
            Sink::Plain(Box::new(BufWriter::new(f)))
        };

        Ok(Self {
            sink,
            origin: file.display().to_string(),
            width,
        })
    }

    /// Write records to an arbitrary `Write`r.
    pub fn from_writer(writer: impl Write + 'writer, width: NonZeroUsize) -> Self {
        Self {
            sink: Sink::Plain(Box::new(writer)),
            origin: String::new(),
            width,
        }
    }

    /// Write gzip-compressed records to an arbitrary `Write`r.
    pub fn from_writer_gz(writer: impl Write + 'writer, width: NonZeroUsize) -> Self {
        let writer: Box<dyn Write + 'writer> = Box::new(writer);

        Self {
            sink: Sink::Gz(BufWriter::new(GzEncoder::new(writer, Compression::default()))),
            origin: String::new(),
            width,
        }
    }

    fn write_error(&self, e: std::io::Error) -> Error {
        if self.origin.is_empty() {
            Error::BytesIo(Box::new(e))
        } else {
            Error::FileIo {
                file: self.origin.clone(),
                source: Box::new(e),
            }
        }
    }
}

impl<'writer> GraphNode for OutputFastaOp<'writer> {
    fn run(&mut self, record: Option<FastaRecord>) -> Result<(Option<FastaRecord>, bool)> {
        let Some(record) = record else {
            panic!("Expected some record!")
        };

        write_fasta_record(self.sink.writer(), &record, self.width)
            .map_err(|e| self.write_error(e))?;

        Ok((Some(record), false))
    }

    fn finish(&mut self) -> Result<()> {
        self.sink.finish().map_err(|e| self.write_error(e))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

/// Write the header line, then the sequence wrapped to `width`. Empty sequences produce
/// only the header line.
pub fn write_fasta_record(
    writer: &mut dyn Write,
    record: &FastaRecord,
    width: NonZeroUsize,
) -> std::io::Result<()> {
    writer.write_all(record.header())?;
    writer.write_all(b"\n")?;

    for line in wrap_seq(record.seq(), width) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }

    Ok(())
}
