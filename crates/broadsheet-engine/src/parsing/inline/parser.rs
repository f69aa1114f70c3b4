use std::ops::Range;

use super::{
    cursor::Cursor,
    kinds::{Bold, Italic},
    types::{Emphasis, InlineSpan},
};

/// A byte range of surviving text and whether it sat inside a marker pair.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Run {
    range: Range<usize>,
    inside: bool,
}

/// Renders one line into styled spans.
///
/// Bold pairs are resolved first, then italic pairs over the text the bold
/// pass leaves behind. Adjacent text with equal emphasis is merged, so a line
/// without markers yields a single plain span. An empty line yields no spans.
pub fn render_inline(line: &str) -> Vec<InlineSpan> {
    let mut stripped = String::with_capacity(line.len());
    let mut bold_ranges = vec![];
    for run in pair_runs(line, Bold::DELIM) {
        let start = stripped.len();
        stripped.push_str(&line[run.range]);
        if run.inside {
            bold_ranges.push(start..stripped.len());
        }
    }

    let mut out = SpanWriter::default();
    for run in pair_runs(&stripped, Italic::DELIM) {
        let mut pos = run.range.start;
        while pos < run.range.end {
            let (bold, next) = bold_at(&bold_ranges, pos, run.range.end);
            out.push(
                &stripped[pos..next],
                Emphasis {
                    bold,
                    italic: run.inside,
                },
            );
            pos = next;
        }
    }
    out.finish()
}

/// Splits `s` into runs outside and inside `delim` pairs, dropping the
/// delimiters themselves. Empty runs are omitted.
fn pair_runs(s: &str, delim: &[u8]) -> Vec<Run> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn push(out: &mut Vec<Run>, range: Range<usize>, inside: bool) {
        if !range.is_empty() {
            out.push(Run { range, inside });
        }
    }

    while !cur.eof() {
        if let Some(inner) = try_parse_pair(&mut cur, delim) {
            push(&mut out, text_start..inner.start - delim.len(), false);
            push(&mut out, inner, true);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    push(&mut out, text_start..cur.pos(), false);
    out
}

/// Attempts to parse a `delim … delim` pair at the current position.
///
/// Returns the inner byte range. On failure the cursor is restored.
fn try_parse_pair(cur: &mut Cursor<'_>, delim: &[u8]) -> Option<Range<usize>> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    if !cur.seek(delim) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(delim.len());

    Some(inner_start..inner_end)
}

/// Bold state at `pos` and the offset (capped at `end`) where it next changes.
fn bold_at(bold_ranges: &[Range<usize>], pos: usize, end: usize) -> (bool, usize) {
    for r in bold_ranges {
        if r.contains(&pos) {
            return (true, r.end.min(end));
        }
        if r.start > pos {
            return (false, r.start.min(end));
        }
    }
    (false, end)
}

#[derive(Default)]
struct SpanWriter {
    spans: Vec<InlineSpan>,
}

impl SpanWriter {
    fn push(&mut self, text: &str, emphasis: Emphasis) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.emphasis == emphasis => last.text.push_str(text),
            _ => self.spans.push(InlineSpan::new(text, emphasis)),
        }
    }

    fn finish(self) -> Vec<InlineSpan> {
        self.spans
    }
}
