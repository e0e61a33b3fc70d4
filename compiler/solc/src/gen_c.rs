//! Generated C wrapper.
//!
//! Emits a C translation unit that embeds the compiled binary as a
//! byte array and a `main` that initialises the Sol runtime, binds the
//! program arguments to the `arguments` token, executes the embedded
//! data, and tears the runtime back down.

use std::io::{self, Write};

/// Write the C wrapper for `binary` to `out`. `source_name` is the
/// input file's base name, recorded in the header comment.
pub fn generate_c(binary: &[u8], source_name: &str, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "// generated from {source_name}")?;
    writeln!(out)?;
    writeln!(out, "#include <sol/runtime.h>")?;
    writeln!(out)?;

    write!(out, "unsigned char data[] = {{")?;
    for (index, byte) in binary.iter().enumerate() {
        if index % 12 == 0 {
            write!(out, "\n  ")?;
        }
        write!(out, "0x{byte:02X},")?;
    }
    writeln!(out)?;
    writeln!(out, "}};")?;
    writeln!(out)?;

    writeln!(out, "int main(int argc, char** argv) {{")?;
    writeln!(out, "    sol_runtime_init();")?;
    writeln!(
        out,
        "    SolList arguments = (SolList) sol_obj_retain((SolObject) sol_list_create(false));"
    )?;
    writeln!(out, "    for (int i = 0; i < argc; i++) {{")?;
    writeln!(
        out,
        "        sol_list_add_obj(arguments, (SolObject) sol_string_create(argv[i]));"
    )?;
    writeln!(out, "    }}")?;
    writeln!(
        out,
        "    sol_token_register(\"arguments\", (SolObject) arguments);"
    )?;
    writeln!(out, "    sol_runtime_execute(data);")?;
    writeln!(out, "    sol_obj_release((SolObject) arguments);")?;
    writeln!(out, "    sol_runtime_destroy();")?;
    writeln!(out, "    return 0;")?;
    writeln!(out, "}}")?;
    Ok(())
}
