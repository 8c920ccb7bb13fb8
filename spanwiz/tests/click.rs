// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click routing over resolved text.

use spanwiz::{ClickEvent, RenderableText, SpanWiz, TypedJsonParser, URL_TAG, route_click};
use spanwiz_dev::DocumentSamples;

fn hit_test_text() -> RenderableText {
    SpanWiz::new(TypedJsonParser::new())
        .create_from_json(DocumentSamples::new().hit_test.json)
        .unwrap()
}

#[derive(Default)]
struct Browser {
    opened: Vec<String>,
}

impl spanwiz::LinkOpener for Browser {
    fn open(&mut self, link: &str) {
        self.opened.push(link.to_owned());
    }
}

#[test]
fn url_hit_opens_the_link() {
    let text = hit_test_text();
    let mut browser = Browser::default();
    match route_click(&text, 7, &["Click Me"], &mut browser) {
        ClickEvent::Link(hit) => {
            assert_eq!(hit.tag, URL_TAG);
            assert_eq!(hit.value, "https://a.com");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(browser.opened, ["https://a.com"]);
}

#[test]
fn tagged_hit_is_returned_without_opening() {
    let text = hit_test_text();
    let mut browser = Browser::default();
    match route_click(&text, 15, &["Click Me"], &mut browser) {
        ClickEvent::Tagged(hit) => {
            assert_eq!(hit.tag, "Click Me");
            assert_eq!(hit.value, "https://b.com");
            assert_eq!(hit.range.as_range(), 11..19);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(browser.opened.is_empty());
}

#[test]
fn untracked_tags_and_plain_text_are_plain() {
    let text = hit_test_text();
    let mut browser = Browser::default();
    assert_eq!(
        route_click(&text, 15, &[], &mut browser),
        ClickEvent::Plain { offset: 15 }
    );
    assert_eq!(
        route_click(&text, 3, &["Click Me"], &mut browser),
        ClickEvent::Plain { offset: 3 }
    );
    assert!(browser.opened.is_empty());
}

#[test]
fn closures_open_links() {
    let text = hit_test_text();
    let mut count = 0;
    let mut opener = |_: &str| count += 1;
    route_click(&text, 6, &[], &mut opener);
    route_click(&text, 8, &[], &mut opener);
    route_click(&text, 9, &[], &mut opener);
    assert_eq!(count, 2);
}
