//! Sol compiler CLI.
//!
//! `solc [options] <file.sol>` -- compiles the input and writes the
//! `.solbin` binary and/or the generated `.c` wrapper next to it.

use solc::{compile_file, tracing_setup, Outputs};
use std::path::Path;

fn main() {
    tracing_setup::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let mut binary_only = false;
    let mut c_only = false;
    let mut interactive = false;
    let mut input: Option<&str> = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-b" => binary_only = true,
            "-c" => c_only = true,
            "-i" => interactive = true,
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--version" => {
                println!("solc {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            other if other.starts_with('-') => {
                eprintln!("solc: unknown option `{other}`");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
            other => {
                if input.is_some() {
                    eprintln!("solc: multiple input files given");
                    std::process::exit(1);
                }
                input = Some(other);
            }
        }
    }

    if interactive {
        eprintln!(
            "solc: the interactive interpreter requires the Sol runtime, \
             which is not part of this build"
        );
        std::process::exit(1);
    }
    if binary_only && c_only {
        eprintln!("solc: -b and -c cannot be combined");
        std::process::exit(1);
    }
    let Some(input) = input else {
        eprintln!("solc: no input file");
        eprintln!();
        print_usage();
        std::process::exit(1);
    };

    let outputs = Outputs {
        binary: !c_only,
        c_source: !binary_only,
    };
    if let Err(error) = compile_file(Path::new(input), outputs) {
        eprintln!("solc: {error}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Sol compiler");
    println!();
    println!("Usage: solc [options] <file.sol>");
    println!();
    println!("Options:");
    println!("  -b            emit the binary artifact only");
    println!("  -c            emit the generated C source only");
    println!("  -i            start the interactive interpreter (requires the runtime)");
    println!("  -h, --help    show this help message");
    println!("  --version     show version information");
    println!();
    println!("Output files take the input's base name with the extensions");
    println!(".solbin and .c; with no option, both artifacts are written.");
}
