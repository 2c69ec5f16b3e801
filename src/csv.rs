// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Split text into logical lines. A newline inside a quoted field belongs to
/// the field, not the line. `\r\n` and `\n` both end a line; a trailing
/// empty line is not emitted.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut in_quotes = false;

    for (i, ch) in text.char_indices() {
        match ch {
            // `""` inside quotes toggles twice, which is the same as staying put
            '"' => in_quotes = !in_quotes,
            '\n' if !in_quotes => {
                let line = &text[start..i];
                lines.push(line.strip_suffix('\r').unwrap_or(line));
                start = i + 1;
            }
            _ => {}
        }
    }

    let tail = &text[start..];
    if !tail.is_empty() {
        lines.push(tail);
    }
    lines
}

/// Tokenize one logical line into trimmed fields.
///
/// Quote characters are consumed while scanning: a `"` opens or closes a
/// quoted run, `""` inside a run is one literal `"`, and a comma inside a
/// run is field text. There is no second stripping pass.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some('"')) {
                    chars.next(); // double-quote escape
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => fields.push(trimmed(take(&mut field))),
            _ => field.push(ch),
        }
    }

    // Flush the last field even if quotes were unterminated.
    fields.push(trimmed(field));
    fields
}

fn trimmed(field: String) -> String {
    if field.starts_with(char::is_whitespace) || field.ends_with(char::is_whitespace) {
        s!(field.trim())
    } else {
        field
    }
}

/// Data rows of a headed CSV document: the first logical line is the header
/// and is dropped, blank lines are skipped. Fewer than two logical lines
/// means there is no data.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let lines = split_lines(text);
    if lines.len() < 2 {
        return Vec::new();
    }
    lines[1..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| split_fields(line))
        .collect()
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Render a table (optionally headed) as delimited text for Copy / CLI output.
pub fn to_export_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_lines_lose_the_carriage_return() {
        assert_eq!(split_lines("a,b\r\nc,d\r\n"), vec!["a,b", "c,d"]);
    }

    #[test]
    fn quoted_newline_stays_in_line() {
        let lines = split_lines("h\n\"one\ntwo\",x\nlast");
        assert_eq!(lines, vec!["h", "\"one\ntwo\",x", "last"]);
    }

    #[test]
    fn needs_quotes_checks_separator() {
        assert!(needs_quotes("a,b", ','));
        assert!(!needs_quotes("a,b", '\t'));
        assert!(needs_quotes("say \"hi\"", '\t'));
    }
}
