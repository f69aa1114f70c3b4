use serde::Serialize;

use crate::parsing::{
    blocks::{BlockQuote, ListKind, kinds::list::ordered_prefix_len},
    inline::kinds::{Bold, Italic},
};

use super::{Marker, SelectionRange, utf16_len};

/// Markers that look active for a selection, in toolbar order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActiveFormats(Vec<Marker>);

impl ActiveFormats {
    pub fn contains(&self, marker: Marker) -> bool {
        self.0.contains(&marker)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Marker> + '_ {
        self.0.iter().copied()
    }

    fn insert(&mut self, marker: Marker) {
        if !self.contains(marker) {
            self.0.push(marker);
            self.0.sort();
        }
    }
}

impl FromIterator<Marker> for ActiveFormats {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        let mut set = Self::default();
        for marker in iter {
            set.insert(marker);
        }
        set
    }
}

/// Reports which markers the selected substring already carries.
///
/// Pure inspection of `text[range]`; the paragraph around the selection is
/// never consulted, so a blockquote counts as active wherever the selection
/// starts with `"> "`. This read path is independent of [`super::apply_format`],
/// which never strips markers.
pub fn active_formats(text: &str, range: SelectionRange) -> ActiveFormats {
    let Some(bytes) = range.byte_range(text) else {
        return ActiveFormats::default();
    };
    let selected = &text[bytes];

    let checks = [
        (Marker::Bold, wrapped_in(selected, Bold::MARKER)),
        (Marker::Italic, wrapped_in(selected, Italic::MARKER)),
        (Marker::BlockQuote, selected.starts_with(BlockQuote::PREFIX)),
        (
            Marker::Bullet,
            selected.starts_with(ListKind::BULLET_PREFIX),
        ),
        (Marker::Ordered, ordered_prefix_len(selected).is_some()),
    ];

    checks
        .into_iter()
        .filter_map(|(marker, on)| on.then_some(marker))
        .collect()
}

fn wrapped_in(s: &str, marker: &str) -> bool {
    s.starts_with(marker) && s.ends_with(marker)
}
