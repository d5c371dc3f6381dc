//! Image format produced by the assembler and consumed by the virtual
//! machine.
//!
//! An image is a flat byte sequence with a fixed 3-byte header followed by
//! the code section. The header is itself an instruction, an unconditional
//! jump to the `main` entry point, so the machine simply starts fetching at
//! offset zero:
//!
//! ```text
//! offset 0:  0x0e              jump opcode
//! offset 1:  high byte of the entry point
//! offset 2:  low byte of the entry point
//! offset 3…  code section
//! ```
//!
//! Entry point and every other address are absolute offsets into the image.
//! There is no footer, no magic number and no checksum.

use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use byteorder::ByteOrder;
use util::Endian;

/// Size of the entry header in bytes.
pub const HEADER_BYTES: usize = 3;

/// Opcode stored at offset zero; must match the interpreter's `jmp`.
pub const ENTRY_OPCODE: u8 = 0x0E;

#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    bytes: Vec<u8>,
}

impl Image {
    /// Builds an image from an entry point and an already encoded code
    /// section.
    pub fn from_parts(entry: u16, code: &[u8]) -> Image {
        let mut bytes = vec![0; HEADER_BYTES];
        bytes[0] = ENTRY_OPCODE;
        Endian::write_u16(&mut bytes[1..HEADER_BYTES], entry);
        bytes.extend_from_slice(code);
        Image { bytes }
    }

    /// Wraps raw bytes, rejecting anything shorter than the header.
    pub fn from_bytes(bytes: Vec<u8>) -> io::Result<Image> {
        if bytes.len() < HEADER_BYTES {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "image is shorter than its header.",
            ));
        }
        Ok(Image { bytes })
    }

    /// Absolute offset the header jumps to.
    pub fn entry(&self) -> u16 {
        Endian::read_u16(&self.bytes[1..HEADER_BYTES])
    }

    /// The code section, without the header.
    pub fn code(&self) -> &[u8] {
        &self.bytes[HEADER_BYTES..]
    }

    /// The whole image, header included.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub fn read<R: Read>(reader: &mut R) -> io::Result<Image> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Image::from_bytes(bytes)
}

pub fn write<W: Write>(writer: &mut W, image: &Image) -> io::Result<()> {
    writer.write_all(image.bytes())
}

pub trait ReadImageExt: Read + Sized {
    fn read_image(&mut self) -> io::Result<Image> {
        read(self)
    }
}

impl<R: Read + Sized> ReadImageExt for R {}

pub trait WriteImageExt: Write + Sized {
    fn write_image(&mut self, image: &Image) -> io::Result<()> {
        write(self, image)
    }
}

impl<W: Write + Sized> WriteImageExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<Image> {
    BufReader::new(File::open(path)?).read_image()
}

pub fn write_file<P: AsRef<Path>>(path: P, image: &Image) -> io::Result<()> {
    BufWriter::new(File::create(path)?).write_image(image)
}
