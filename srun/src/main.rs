#[macro_use]
extern crate clap;

use std::io;
use std::process;

use clap::{Arg, ArgGroup, ArgMatches};

use scpu::ExitCode;

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("IMAGE")
                .help("Sets the image file to run")
                .index(1),
        )
        .arg(
            Arg::with_name("assembly")
                .short("a")
                .long("assembly")
                .takes_value(true)
                .value_name("SOURCE")
                .help("Assembles and runs a source file directly"),
        )
        .arg(
            Arg::with_name("disassemble")
                .short("d")
                .long("disassemble")
                .help("Prints a listing of the image instead of running it"),
        )
        .arg(
            Arg::with_name("trace")
                .short("t")
                .long("trace")
                .help("Disassembles each instruction to stderr before executing it"),
        )
        .group(
            ArgGroup::with_name("input")
                .args(&["IMAGE", "assembly"])
                .required(true),
        )
        .get_matches();

    match run(&matches) {
        Ok(exit_code) => {
            if !exit_code.is_success() {
                eprintln!("{}", exit_code);
                process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn run(matches: &ArgMatches) -> Result<ExitCode, srun::Error> {
    let (image, name) = match matches.value_of("IMAGE") {
        Some(path) => (srun::load_image(path)?, path),
        None => {
            let path = matches.value_of("assembly").unwrap();
            (srun::assemble_source(path)?, path)
        }
    };

    if matches.is_present("disassemble") {
        print!("{}", scpu::disassemble_source(image.bytes(), name));
        return Ok(ExitCode::Halted);
    }

    let stdout = io::stdout();
    let (_, exit_code) = srun::run_program(&image, matches.is_present("trace"), &mut stdout.lock())
        .map_err(srun::Error::Io)?;

    Ok(exit_code)
}
