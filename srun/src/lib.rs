//! Driver for executing assembled images on the [scpu](../scpu/index.html)
//! virtual machine.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use scpu::{ExitCode, Processor};
use simg::Image;

#[derive(Debug)]
pub enum Error {
    MissingFile(String),
    Image(String, io::Error),
    Asm(sasm::AssembleError),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingFile(path) => write!(f, "image file `{}` does not exist.", path),
            Error::Image(path, err) => {
                write!(f, "reading image file `{}` failed: {}", path, err)
            }
            Error::Asm(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "{}", err),
        }
    }
}

/// Loads an image file from disk.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Image, Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::MissingFile(path.display().to_string()));
    }

    simg::read_file(path).map_err(|err| Error::Image(path.display().to_string(), err))
}

/// Assembles a source file in memory, without writing an image to disk.
pub fn assemble_source<P: AsRef<Path>>(path: P) -> Result<Image, Error> {
    sasm::assemble_file(path).map_err(Error::Asm)
}

/// Executes an image on a fresh processor, writing program output to `out`.
pub fn run_program<W: Write>(
    image: &Image,
    trace: bool,
    out: &mut W,
) -> io::Result<(Processor, ExitCode)> {
    let mut processor = Processor::new();
    processor.set_trace(trace);
    let exit_code = processor.run(image.bytes(), out)?;
    Ok((processor, exit_code))
}
