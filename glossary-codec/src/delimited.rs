//! Quoted comma-separated text.
//!
//! Every field is written quoted with embedded quotes doubled. The examples
//! column joins the example list with `|`; inside an example, `|` and `\` are
//! backslash-escaped and quotes are doubled before the field itself is quoted,
//! so the examples column carries two layers of quote doubling.
//!
//! The reader is a forgiving character scanner: it never fails, an unmatched
//! quote runs to end of input, and columns are located by header name rather
//! than position.

use glossary_types::{Collection, ParsedCollection, TermRecord};

/// Header row written by [`encode`].
pub const HEADER: &str = "term,definition,link,examples";

const EXAMPLE_SEPARATOR: char = '|';
const ESCAPE: char = '\\';

// ── Encoding ─────────────────────────────────────────────────────

/// Encodes a collection with a header row and one line per record.
#[must_use]
pub fn encode(collection: &Collection) -> String {
    let mut out = String::from(HEADER);
    for record in collection {
        out.push('\n');
        out.push_str(&quote(&record.term));
        out.push(',');
        out.push_str(&quote(&record.definition));
        out.push(',');
        out.push_str(&quote(record.link.as_deref().unwrap_or_default()));
        out.push(',');
        out.push_str(&quote(&encode_examples(&record.examples)));
    }
    out.push('\n');
    out
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn encode_examples(examples: &[String]) -> String {
    examples
        .iter()
        .map(|example| {
            let mut escaped = String::with_capacity(example.len());
            for c in example.chars() {
                if c == EXAMPLE_SEPARATOR || c == ESCAPE {
                    escaped.push(ESCAPE);
                }
                escaped.push(c);
            }
            escaped.replace('"', "\"\"")
        })
        .collect::<Vec<_>>()
        .join("|")
}

// ── Decoding ─────────────────────────────────────────────────────

/// Decodes delimited text into a collection, dropping rows without a term.
#[must_use]
pub fn decode(input: &str) -> Collection {
    decode_report(input).collection
}

/// Like [`decode`], also counting the data rows that were dropped.
#[must_use]
pub fn decode_report(input: &str) -> ParsedCollection {
    let rows = scan(input.strip_prefix('\u{feff}').unwrap_or(input));
    let Some((header, body)) = rows.split_first() else {
        return ParsedCollection::default();
    };

    let columns = Columns::detect(header);
    let mut records = Vec::with_capacity(body.len());
    let mut skipped = 0;
    for row in body {
        match columns.record(row) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    ParsedCollection {
        collection: Collection::from(records),
        skipped,
    }
}

/// Splits text into rows of trimmed fields.
///
/// Commas and line breaks separate only outside quotes; `""` inside quotes is
/// a literal quote. A line break with nothing accumulated emits no row, which
/// also absorbs the second half of `\r\n`.
pub fn scan(input: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\n' | '\r' => {
                if !field.is_empty() || !row.is_empty() {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    for row in &mut rows {
        for field in row.iter_mut() {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
    }
    rows
}

/// Column positions found in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Columns {
    pub term: Option<usize>,
    pub definition: Option<usize>,
    pub link: Option<usize>,
    pub examples: Option<usize>,
}

impl Columns {
    /// Locates each column by the first header cell matching its pattern:
    /// `term`, `def*`, `link`, `example*` (case-insensitive).
    #[must_use]
    pub fn detect(header: &[String]) -> Self {
        let names: Vec<String> = header.iter().map(|h| h.to_lowercase()).collect();
        let find = |pred: &dyn Fn(&str) -> bool| names.iter().position(|n| pred(n.as_str()));
        Self {
            term: find(&|n| n == "term"),
            definition: find(&|n| n.starts_with("def")),
            link: find(&|n| n == "link"),
            examples: find(&|n| n.starts_with("example")),
        }
    }

    fn record(&self, row: &[String]) -> Option<TermRecord> {
        let term = cell(row, self.term);
        if term.is_empty() {
            return None;
        }

        let record = TermRecord::new(term, cell(row, self.definition))
            .with_examples(decode_examples(cell(row, self.examples)))
            .with_link(cell(row, self.link));
        Some(record)
    }
}

fn cell(row: &[String], index: Option<usize>) -> &str {
    index
        .and_then(|i| row.get(i))
        .map(String::as_str)
        .unwrap_or_default()
}

fn decode_examples(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }

    let mut examples = Vec::new();
    let mut current = String::new();
    let mut chars = field.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.peek() {
                Some(&next) if next == EXAMPLE_SEPARATOR || next == ESCAPE => {
                    current.push(next);
                    chars.next();
                }
                _ => current.push(ESCAPE),
            },
            EXAMPLE_SEPARATOR => examples.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    examples.push(current);

    examples
        .into_iter()
        .map(|e| e.replace("\"\"", "\""))
        .collect()
}
