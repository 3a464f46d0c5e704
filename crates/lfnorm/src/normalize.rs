use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use lf_normalizer::LfNormalizer;
use thiserror::Error;

use crate::config::{self, Source, DEFAULT_BUFFER_BYTES};

#[derive(Debug, Parser)]
#[command(name = "lfnorm")]
#[command(about = "Rewrite CR, LF, CRLF and LFCR line endings to LF")]
pub struct Args {
    /// Files to normalize, concatenated in order. Reads stdin when empty or `-`.
    pub inputs: Vec<PathBuf>,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Bytes requested from the normalizer per read.
    #[arg(long, default_value_t = DEFAULT_BUFFER_BYTES)]
    pub buffer_size: usize,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("--buffer-size must be at least 1 (got {0})")]
    InvalidBufferSize(usize),
    #[error("failed to open {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to create {path:?}: {source}")]
    Create { path: PathBuf, source: io::Error },
    #[error("failed reading {input}: {source}")]
    Read { input: String, source: io::Error },
    #[error("failed writing output: {0}")]
    Write(io::Error),
}

pub fn run(args: Args) -> Result<(), Error> {
    if args.buffer_size == 0 {
        return Err(Error::InvalidBufferSize(args.buffer_size));
    }

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::Create {
                path: path.clone(),
                source,
            })?;
            Box::new(file)
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    for source in config::sources(&args.inputs) {
        let label = source.label();
        match source {
            Source::Stdin => pump(io::stdin().lock(), &mut writer, args.buffer_size, label)?,
            Source::File(path) => {
                let file = File::open(&path).map_err(|source| Error::Open {
                    path: path.clone(),
                    source,
                })?;
                pump(file, &mut writer, args.buffer_size, label)?
            }
        };
    }

    writer.flush().map_err(Error::Write)
}

/// Streams one input through a fresh normalizer; line-ending state never
/// carries over from the previous input.
pub(crate) fn pump<R: Read, W: Write>(
    reader: R,
    writer: &mut W,
    buffer_bytes: usize,
    label: String,
) -> Result<(), Error> {
    let mut reader = LfNormalizer::new(reader);
    let mut buf = vec![0u8; buffer_bytes];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(Error::Read {
                    input: label,
                    source,
                })
            }
        };
        writer.write_all(&buf[..n]).map_err(Error::Write)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device unplugged"))
        }
    }

    /// Fails its first read with `Interrupted`, then yields `x\r\ny`.
    #[derive(Default)]
    struct InterruptedOnce {
        calls: usize,
    }

    impl Read for InterruptedOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.calls += 1;
            match self.calls {
                1 => Err(io::ErrorKind::Interrupted.into()),
                2 => {
                    let data = b"x\r\ny";
                    buf[..data.len()].copy_from_slice(data);
                    Ok(data.len())
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn pump_normalizes_with_single_byte_reads() {
        let mut out: Vec<u8> = Vec::new();
        pump(&b"a\r\nb\n\rc\r\r"[..], &mut out, 1, "test".to_string()).unwrap();
        assert_eq!(out, b"a\nb\nc\n\n");
    }

    #[test]
    fn pump_retries_interrupted_reads() {
        let mut out: Vec<u8> = Vec::new();
        pump(InterruptedOnce::default(), &mut out, 8, "tty".to_string()).unwrap();
        assert_eq!(out, b"x\ny");
    }

    #[test]
    fn pump_names_the_failing_input() {
        let err = pump(FailingReader, &mut Vec::<u8>::new(), 8, "port0".to_string()).unwrap_err();
        assert!(matches!(err, Error::Read { ref input, .. } if input == "port0"));
        assert_eq!(err.to_string(), "failed reading port0: device unplugged");
    }

    #[test]
    fn zero_buffer_size_is_rejected() {
        let args = Args::parse_from(["lfnorm", "--buffer-size", "0"]);
        assert!(matches!(run(args), Err(Error::InvalidBufferSize(0))));
    }

    #[test]
    fn args_default_to_stdin_and_stdout() {
        let args = Args::parse_from(["lfnorm"]);
        assert!(args.inputs.is_empty());
        assert!(args.output.is_none());
        assert_eq!(args.buffer_size, DEFAULT_BUFFER_BYTES);
    }
}
