#[macro_use]
extern crate clap;

use std::fmt;
use std::path::Path;
use std::process;

use clap::Arg;

#[derive(Debug)]
enum Error {
    MissingInput(String),
    Asm(sasm::AssembleError),
    WriteOutput(std::io::Error, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingInput(path) => {
                write!(f, "input file `{}` does not exist.", path)
            }
            Error::Asm(err) => write!(f, "{}", err),
            Error::WriteOutput(err, path) => {
                write!(f, "writing image file `{}` failed: {}", path, err)
            }
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the source file to assemble")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Sets the image file to write (defaults to a.out)")
                .index(2),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let output = matches.value_of("OUTPUT").unwrap_or("a.out");

    if let Err(err) = assemble(input, output) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn assemble(input: &str, output: &str) -> Result<(), Error> {
    let input_path = Path::new(input);
    if !input_path.exists() {
        return Err(Error::MissingInput(input.to_owned()));
    }

    let image = sasm::assemble_file(input_path).map_err(Error::Asm)?;

    simg::write_file(output, &image).map_err(|err| Error::WriteOutput(err, output.to_owned()))?;

    Ok(())
}
