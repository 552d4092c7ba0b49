//! Open output sinks.

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

use ao_core::OutputKey;
use flate2::Compression;
use flate2::write::GzEncoder;

/// How bytes are handed to the sink.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Line-oriented UTF-8 text.
    Text,
    /// Raw bytes (the eigenstrat genotype stream).
    Binary,
}

enum Sink {
    Stdout(Stdout),
    Plain(BufWriter<File>),
    Gzip(BufWriter<GzEncoder<File>>),
}

/// An open writer for one output key.
///
/// Owns its file exclusively.  [`close`](Self::close) consumes the handle, so
/// a file is closed at most once; standard output is flushed but never
/// closed.  A handle dropped without `close` still flushes on a best-effort
/// basis.
pub struct WriterHandle {
    key:      OutputKey,
    encoding: Encoding,
    sink:     Sink,
}

impl WriterHandle {
    /// Wrap the process-wide standard output.
    pub fn stdout(key: OutputKey) -> Self {
        Self {
            key,
            encoding: Encoding::Text,
            sink: Sink::Stdout(io::stdout()),
        }
    }

    /// Create `path`, gzip-compressed if `compress` is set.
    pub fn create(key: OutputKey, path: &Path, encoding: Encoding, compress: bool) -> io::Result<Self> {
        let file = File::create(path)?;
        let sink = if compress {
            Sink::Gzip(BufWriter::new(GzEncoder::new(file, Compression::default())))
        } else {
            Sink::Plain(BufWriter::new(file))
        };
        Ok(Self { key, encoding, sink })
    }

    pub fn key(&self) -> OutputKey {
        self.key
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self.sink, Sink::Stdout(_))
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self.sink, Sink::Gzip(_))
    }

    /// Flush everything and release the file.  Gzip streams get their
    /// trailer written here.
    pub fn close(self) -> io::Result<()> {
        match self.sink {
            Sink::Stdout(mut out) => out.flush(),
            Sink::Plain(mut w) => w.flush(),
            Sink::Gzip(w) => {
                let encoder = w.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?.flush()
            }
        }
    }
}

impl Write for WriterHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.sink {
            Sink::Stdout(out) => out.write(buf),
            Sink::Plain(w) => w.write(buf),
            Sink::Gzip(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match &mut self.sink {
            Sink::Stdout(out) => out.write_all(buf),
            Sink::Plain(w) => w.write_all(buf),
            Sink::Gzip(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.sink {
            Sink::Stdout(out) => out.flush(),
            Sink::Plain(w) => w.flush(),
            Sink::Gzip(w) => w.flush(),
        }
    }
}
