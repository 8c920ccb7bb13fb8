// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attributed_text::TextRange;
use smallvec::SmallVec;
use span_model::URL_TAG;

use crate::RenderableText;

/// A tagged range that contains the tested offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagHit<'a> {
    /// The tag the range is registered under.
    pub tag: &'a str,
    /// The characters covered.
    pub range: TextRange,
    /// The associated value, such as a link target.
    pub value: &'a str,
}

/// The hits for one offset. Usually zero or one entry.
pub type TagHits<'a> = SmallVec<[TagHit<'a>; 2]>;

/// Returns every tagged range containing the character at `offset`.
///
/// Ranges under [`URL_TAG`] are always considered, followed by those under each of `tags` in
/// the order given. Within a tag, hits keep insertion order. Repeated tags are only searched
/// once.
pub fn hit_test<'a>(text: &'a RenderableText, offset: usize, tags: &[&str]) -> TagHits<'a> {
    let mut hits = TagHits::new();
    let mut searched: SmallVec<[&str; 4]> = SmallVec::new();
    for tag in core::iter::once(URL_TAG).chain(tags.iter().copied()) {
        if searched.contains(&tag) {
            continue;
        }
        searched.push(tag);
        let Some((tag, ranges)) = text.tag_table().iter().find(|(name, _)| *name == tag) else {
            continue;
        };
        hits.extend(
            ranges
                .iter()
                .filter(|tagged| tagged.range.contains(offset))
                .map(|tagged| TagHit {
                    tag,
                    range: tagged.range,
                    value: &tagged.value,
                }),
        );
    }
    hits
}
