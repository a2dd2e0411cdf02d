//! Headless print mode: render the command to stdout without a TUI

use std::io::Write;

use tcb_core::prelude::*;
use tcb_core::{CommandCodec, Document};

/// Write the command for `document` followed by a newline.
///
/// Compact (single line, as copied) by default; `pretty` gives the
/// preview form.
pub fn print_command<W: Write>(
    codec: &CommandCodec,
    document: &Document,
    pretty: bool,
    out: &mut W,
) -> Result<()> {
    let command = if pretty {
        codec.render(document)?
    } else {
        codec.render_compact(document)?
    };
    writeln!(out, "{command}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcb_core::Record;

    #[test]
    fn test_print_compact_is_one_line() {
        let mut doc = Document::new();
        doc.records.push(Record::new("0001_test").with_field("status", false));

        let mut out = Vec::new();
        print_command(&CommandCodec::default(), &doc, false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "python -u /home/tornado/selenium-tests/testcase_runner.py '{\"testcases\":[{\"0001_test\":{\"status\":false}}],\"params\":{}}'\n"
        );
    }

    #[test]
    fn test_print_pretty_spans_lines() {
        let mut out = Vec::new();
        print_command(&CommandCodec::default(), &Document::new(), true, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("'{\n  \"testcases\": [],\n  \"params\": {}\n}'"));
    }
}
