use crate::Ident;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Bytes per emitted string-literal line. With the four-space indent,
/// two quotes, and four characters per `\xNN` escape, a full line is
/// 4 + 1 + 18 * 4 + 1 = 78 columns.
pub const BYTES_PER_LINE: usize = 18;

/// Writes the generated header to `out`: include guard, `const char`
/// declaration, the data as concatenated string literals of 18 escapes
/// each, and the closing guard.
///
/// The statement terminator lands on the final string line when the
/// last group is partial, and alone on its own line when the byte count
/// is an exact multiple of 18 (including zero bytes).
pub fn write_header<W: Write>(out: &mut W, ident: &Ident, data: &[u8]) -> io::Result<()> {
    let guard = ident.guard();
    writeln!(out, "#ifndef {guard}")?;
    writeln!(out, "#define {guard}")?;
    writeln!(out)?;
    writeln!(out, "const char {}[] =", ident.constant())?;

    let mut index = 0;
    for &byte in data {
        if index == 0 {
            write!(out, "    \"")?;
        }
        write!(out, "\\x{byte:02x}")?;
        index += 1;
        if index == BYTES_PER_LINE {
            index = 0;
            writeln!(out, "\"")?;
        }
    }

    if index != 0 {
        writeln!(out, "\";")?;
    } else {
        writeln!(out, ";")?;
    }

    writeln!(out)?;
    writeln!(out, "#endif")?;
    Ok(())
}

/// Reads `input` and writes its bytes as a guarded C header to
/// `output`, creating or overwriting the file. A failure partway
/// through may leave a truncated output file; the non-zero result is
/// the signal that the artifact is invalid.
pub fn embed<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let data = std::fs::read(input)
        .with_context(|| format!("failed to read input file {}", input.display()))?;
    let ident = Ident::from_path(&input.to_string_lossy());
    log::debug!(
        "embedding {} bytes from {} as {}",
        data.len(),
        input.display(),
        ident.constant()
    );

    let file = File::create(output)
        .with_context(|| format!("failed to create output file {}", output.display()))?;
    let mut out = BufWriter::new(file);
    write_header(&mut out, &ident, &data)
        .and_then(|_| out.flush())
        .with_context(|| format!("failed to write output file {}", output.display()))?;

    Ok(())
}
