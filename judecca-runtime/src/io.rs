//! I/O devices
//!
//! The machine only ever writes or reads a single byte at a time.

use std::collections::VecDeque;
use std::io::{self, ErrorKind, Read, Stdin, Stdout, Write};

/// Byte-level input and output used by `.` and `,`
pub trait IoDevice {
    /// Write one byte. A byte that is not fully written is an error.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;

    /// Read one byte. `None` means end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<D: IoDevice + ?Sized> IoDevice for &mut D {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        (**self).write_byte(byte)
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }
}

/// Process standard input and output
///
/// Output is flushed after every byte so interactive programs see it at once.
#[derive(Debug)]
pub struct StdIo {
    stdin: Stdin,
    stdout: Stdout,
}

impl StdIo {
    pub fn new() -> Self {
        StdIo {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdIo {
    fn default() -> Self {
        Self::new()
    }
}

impl IoDevice for StdIo {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        let mut out = self.stdout.lock();
        let written = out.write(&[byte])?;
        if written != 1 {
            return Err(io::Error::new(
                ErrorKind::WriteZero,
                format!("tried to write 1 byte, wrote {}", written),
            ));
        }
        out.flush()
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        let mut input = self.stdin.lock();
        loop {
            match input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Inert device for benchmarks and non-interactive runs
///
/// Discards every write and answers every read with the same filler byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullIo {
    filler: u8,
}

impl NullIo {
    /// Filler returned by the default device
    pub const DEFAULT_FILLER: u8 = b'?';

    pub fn with_filler(filler: u8) -> Self {
        NullIo { filler }
    }

    pub fn filler(&self) -> u8 {
        self.filler
    }
}

impl Default for NullIo {
    fn default() -> Self {
        Self::with_filler(Self::DEFAULT_FILLER)
    }
}

impl IoDevice for NullIo {
    fn write_byte(&mut self, _byte: u8) -> io::Result<()> {
        Ok(())
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(Some(self.filler))
    }
}

/// In-memory device: scripted input, captured output
#[derive(Debug, Clone, Default)]
pub struct BufferIo {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl BufferIo {
    pub fn new(input: impl Into<Vec<u8>>) -> Self {
        let input: Vec<u8> = input.into();
        BufferIo {
            input: VecDeque::from(input),
            output: Vec::new(),
        }
    }

    /// Bytes written so far
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    /// Input bytes not yet consumed
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    pub fn input_exhausted(&self) -> bool {
        self.input.is_empty()
    }
}

impl IoDevice for BufferIo {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.output.push(byte);
        Ok(())
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.input.pop_front())
    }
}
