use scraper::{Html, Node};

/// One event of the flattened markup stream.
///
/// The meal plan markup carries no meaningful nesting, so the extractor only
/// ever looks at start tags and text in document order. End tags, comments
/// and doctypes are dropped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupEvent<'a> {
    Start {
        tag: &'a str,
        /// Attributed tags are never structurally meaningful in this dialect.
        attributed: bool,
    },
    Text(&'a str),
}

/// Flatten a parsed document into a pre-order start-tag/text event stream.
pub fn markup_events(document: &Html) -> impl Iterator<Item = MarkupEvent<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Element(element) => Some(MarkupEvent::Start {
                tag: element.name(),
                attributed: element.attrs().next().is_some(),
            }),
            Node::Text(text) => Some(MarkupEvent::Text(&**text)),
            _ => None,
        })
}
