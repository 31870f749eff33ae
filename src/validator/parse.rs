//! Safe-load check for a single YAML stream.
//!
//! The stream is driven through the event parser without building any value
//! tree. Only core-schema tags are accepted, duplicate mapping keys are
//! allowed (last one wins on a real load), and at most one document may be
//! present.

use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::Marker;

use super::Outcome;

const CORE_TAG_PREFIX: &str = "tag:yaml.org,2002:";

/// Tags a safe loader knows how to construct.
const CORE_TAGS: &[&str] = &[
    "str",
    "int",
    "float",
    "bool",
    "null",
    "binary",
    "timestamp",
    "seq",
    "map",
    "set",
    "omap",
    "pairs",
];

/// First reason the stream cannot be safely loaded, with its position.
struct Rejection {
    message: String,
    mark: Marker,
}

#[derive(Default)]
struct SafeLoadCheck {
    documents: usize,
    rejection: Option<Rejection>,
}

impl SafeLoadCheck {
    fn reject(&mut self, message: String, mark: Marker) {
        if self.rejection.is_none() {
            self.rejection = Some(Rejection { message, mark });
        }
    }

    fn check_tag(&mut self, tag: Option<&Tag>, mark: Marker) {
        if let Some(tag) = tag
            && !is_constructible(tag)
        {
            self.reject(
                format!(
                    "could not determine a constructor for the tag '{}'",
                    display_tag(tag)
                ),
                mark,
            );
        }
    }
}

impl MarkedEventReceiver for SafeLoadCheck {
    fn on_event(&mut self, event: Event, mark: Marker) {
        match event {
            Event::DocumentStart => {
                self.documents += 1;
                if self.documents == 2 {
                    self.reject(
                        "expected a single document in the stream, but found another document"
                            .to_string(),
                        mark,
                    );
                }
            }
            Event::Scalar(_, _, _, tag)
            | Event::SequenceStart(_, tag)
            | Event::MappingStart(_, tag) => self.check_tag(tag.as_ref(), mark),
            _ => {}
        }
    }
}

/// The bare `!` tag, which only forces the node to stay a plain string.
fn is_non_specific(tag: &Tag) -> bool {
    matches!(
        (tag.handle.as_str(), tag.suffix.as_str()),
        ("" | "!", "!" | "")
    )
}

/// Core-schema name of `tag`, whether written as `!!x`, resolved to the
/// full `tag:yaml.org,2002:` prefix, or given verbatim.
fn core_name(tag: &Tag) -> Option<&str> {
    match tag.handle.as_str() {
        "!!" | CORE_TAG_PREFIX => Some(tag.suffix.as_str()),
        "" => tag.suffix.strip_prefix(CORE_TAG_PREFIX),
        _ => None,
    }
}

fn is_constructible(tag: &Tag) -> bool {
    is_non_specific(tag) || core_name(tag).is_some_and(|name| CORE_TAGS.contains(&name))
}

fn display_tag(tag: &Tag) -> String {
    if let Some(name) = core_name(tag) {
        format!("!!{name}")
    } else {
        format!("{}{}", tag.handle, tag.suffix)
    }
}

/// Classify `content` the way a safe single-document load would.
pub(super) fn parse_yaml(content: &str) -> Outcome {
    let mut check = SafeLoadCheck::default();
    let mut parser = Parser::new_from_str(content);

    if let Err(err) = parser.load(&mut check, true) {
        return Outcome::Invalid(err.to_string());
    }

    match check.rejection {
        None => Outcome::Valid,
        Some(Rejection { message, mark }) => Outcome::Invalid(format!(
            "{message} at line {} column {}",
            mark.line(),
            mark.col() + 1
        )),
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
