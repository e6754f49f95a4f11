use std::io::{self, BufRead};
use std::path::Path;

/// Read console input up to the first empty line (or end of input).
///
/// Line terminators (`\n` or `\r\n`) are normalised: every line read is
/// kept with a single trailing `\n`.
pub fn read_source(mut reader: impl BufRead) -> io::Result<String> {
    let mut source = String::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let content = line.strip_suffix('\n').unwrap_or(&line);
        let content = content.strip_suffix('\r').unwrap_or(content);
        if content.is_empty() {
            break;
        }
        source.push_str(content);
        source.push('\n');
    }
    Ok(source)
}

/// Read a whole source file.
pub fn read_file(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}
