use std::borrow::Cow;

const FIELD_SEPARATOR: &str = ",";
const LINE_SEPARATOR: &str = "\r\n";

/// A delimited-text report: an optional preamble block (title, period,
/// generation time), then one header row and one row per record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvReport {
    preamble: Vec<Vec<String>>,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvReport {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            preamble: Vec::new(),
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a line to the block printed above the table
    pub fn preamble_line<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preamble
            .push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render with CRLF line endings. A blank line separates the preamble
    /// from the table when a preamble is present.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self.preamble.iter().map(|cells| render_line(cells)).collect();
        if !lines.is_empty() {
            lines.push(String::new());
        }

        lines.push(render_line(&self.header));
        lines.extend(self.rows.iter().map(|cells| render_line(cells)));

        lines.join(LINE_SEPARATOR)
    }
}

fn render_line(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| escape_field(cell))
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

/// Quote a field when it contains a separator, a quote or a line break;
/// embedded quotes are doubled.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    let needs_quotes = value.contains([',', '"', '\r', '\n']);
    if !needs_quotes {
        return Cow::Borrowed(value);
    }
    Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
}
