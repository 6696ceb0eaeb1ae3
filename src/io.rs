//! Output utilities.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

/// Minimal width of an aligned cell, padding included.
const MIN_WIDTH: usize = 8;
/// Spaces added after the widest cell of a column.
const PADDING: usize = 2;
const PAD_CHAR: u8 = b' ';

/// State of pull requests and issues that are listed.
pub const OPEN: &str = "open";

/// One listing line: actor, web URL and title.
pub type Row = (String, String, String);

/// Writes `rows` as tab-separated lines.
pub fn write_rows<W: Write>(w: &mut W, rows: &[Row]) -> io::Result<()> {
    for (actor, url, title) in rows {
        writeln!(
            w,
            "{}\t{}\t{}",
            escape_cell(actor),
            escape_cell(url),
            escape_cell(title)
        )?;
    }

    Ok(())
}

fn escape_cell(value: &str) -> String {
    value
        .replace('\t', " ")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}

/// A writer that aligns tab-separated cells into columns.
///
/// Input is buffered until [`Write::flush`], so alignment accounts for every
/// line written so far. Cells are terminated by `\t`. The trailing cell of a
/// line is not part of a column and is written as-is. A column block is a run
/// of consecutive lines that all have a terminated cell in that column; every
/// cell of a block is padded to `max(MIN_WIDTH, widest cell + PADDING)`.
pub struct TabWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> TabWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }

    fn write_aligned(&mut self) -> io::Result<()> {
        let text = String::from_utf8_lossy(&self.buf).into_owned();
        // The last element holds the text after the final newline, which is
        // usually empty.
        let lines: Vec<Vec<&str>> = text.split('\n').map(|l| l.split('\t').collect()).collect();
        let mut widths = vec![Vec::new(); lines.len()];

        assign_widths(&lines, 0, lines.len(), &mut Vec::new(), &mut widths);

        let last = lines.len() - 1;

        for (index, cells) in lines.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                self.inner.write_all(cell.as_bytes())?;

                if column + 1 < cells.len() {
                    let pad = widths[index][column].saturating_sub(cell.width());
                    self.inner.write_all(&vec![PAD_CHAR; pad])?;
                }
            }

            if index < last {
                self.inner.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}

impl<W: Write> Write for TabWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            self.write_aligned()?;
            self.buf.clear();
        }

        self.inner.flush()
    }
}

/// Computes the column widths of `lines[start..end]`, where `stack` holds the
/// widths of the enclosing column blocks.
fn assign_widths(
    lines: &[Vec<&str>],
    start: usize,
    end: usize,
    stack: &mut Vec<usize>,
    widths: &mut [Vec<usize>],
) {
    let column = stack.len();
    let has_cell = |line: usize| column + 1 < lines[line].len();
    let mut line = start;

    while line < end {
        if !has_cell(line) {
            widths[line] = stack.clone();
            line += 1;
            continue;
        }

        let block_start = line;
        let mut width = MIN_WIDTH;

        while line < end && has_cell(line) {
            width = width.max(lines[line][column].width() + PADDING);
            line += 1;
        }

        stack.push(width);
        assign_widths(lines, block_start, line, stack, widths);
        stack.pop();
    }
}
