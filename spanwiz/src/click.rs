// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use span_model::URL_TAG;
use span_resolve::{RenderableText, TagHit, hit_test};

/// Opens link targets on behalf of [`route_click`].
///
/// Implemented for every `FnMut(&str)`.
pub trait LinkOpener {
    /// Opens `link`.
    fn open(&mut self, link: &str);
}

impl<F: FnMut(&str)> LinkOpener for F {
    fn open(&mut self, link: &str) {
        self(link);
    }
}

/// What a click resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickEvent<'a> {
    /// A link under [`URL_TAG`] was hit and handed to the [`LinkOpener`].
    Link(TagHit<'a>),
    /// A range under one of the caller's tags was hit.
    Tagged(TagHit<'a>),
    /// Nothing tagged is under the offset.
    Plain {
        /// The clicked character offset.
        offset: usize,
    },
}

/// Routes a click at character `offset`.
///
/// A hit under [`URL_TAG`] wins and is opened through `opener`. Otherwise the first hit among
/// `tags` is returned for the caller to handle; nothing is opened for it.
pub fn route_click<'a>(
    text: &'a RenderableText,
    offset: usize,
    tags: &[&str],
    opener: &mut impl LinkOpener,
) -> ClickEvent<'a> {
    let hits = hit_test(text, offset, tags);
    let Some(hit) = hits.first().copied() else {
        log::debug!("click at {offset}: no tagged range");
        return ClickEvent::Plain { offset };
    };
    if hit.tag == URL_TAG {
        opener.open(hit.value);
        ClickEvent::Link(hit)
    } else {
        ClickEvent::Tagged(hit)
    }
}
