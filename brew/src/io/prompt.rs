//! Interactive recipe choice.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

/// Write `Choose a type (<names>): ` to `output` and read one line from `input`.
///
/// The returned line is raw; selection normalizes it. End of input before any
/// line is an error.
pub fn prompt_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    names: &[&str],
) -> Result<String> {
    write!(output, "Choose a type ({}): ", names.join("/")).context("write prompt")?;
    output.flush().context("flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("read choice")?;
    if read == 0 {
        bail!("no choice given (stdin closed)");
    }
    Ok(line)
}
