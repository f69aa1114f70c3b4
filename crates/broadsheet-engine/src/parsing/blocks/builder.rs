use crate::parsing::inline::{InlineSpan, render_inline};

use super::{
    classify::{LineClass, LineKind},
    kinds::ListKind,
    types::Block,
};

#[derive(Debug)]
struct OpenList {
    kind: ListKind,
    items: Vec<Vec<InlineSpan>>,
}

/// Phase 2 of block rendering: groups classified lines into [`Block`]s.
pub struct BlockBuilder {
    list: Option<OpenList>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            list: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match c.kind {
            LineKind::Blank => self.flush_list(),
            LineKind::ListItem(kind) => self.extend_list(kind, c.content),
            LineKind::BlockQuote => {
                self.flush_list();
                self.out.push(Block::BlockQuote(render_inline(c.content)));
            }
            LineKind::Plain => {
                self.flush_list();
                self.out.push(Block::Paragraph(render_inline(c.content)));
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn extend_list(&mut self, kind: ListKind, content: &str) {
        if self.list.as_ref().is_some_and(|open| open.kind != kind) {
            self.flush_list();
        }

        self.list
            .get_or_insert_with(|| OpenList {
                kind,
                items: vec![],
            })
            .items
            .push(render_inline(content));
    }

    fn flush_list(&mut self) {
        if let Some(OpenList { kind, items }) = self.list.take() {
            self.out.push(Block::List { kind, items });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
