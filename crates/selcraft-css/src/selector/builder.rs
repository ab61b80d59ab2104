use std::fmt;

use strum::EnumCount;

use super::error::SelectorError;
use super::part::{Part, PartKind};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
///
/// Built one part at a time. Each append is checked immediately:
/// - a part may not follow a part of higher rank
///   (element, id, class, attribute, pseudo-class, pseudo-element)
/// - element, id and pseudo-element may appear at most once
///
/// Start a builder with one of the free functions ([`element`], [`id`],
/// [`class`], [`attr`], [`pseudo_class`], [`pseudo_element`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Appended parts, in append order.
    parts: Vec<Part>,
    /// Concatenated rendering of `parts`.
    rendered: String,
    /// Highest-ranked kind appended so far.
    highest: Option<PartKind>,
    /// Occurrences per kind, indexed by rank.
    counts: [usize; PartKind::COUNT],
}

impl SelectorBuilder {
    fn seeded(kind: PartKind, value: String) -> Self {
        let mut builder = Self {
            parts: Vec::new(),
            rendered: String::new(),
            highest: None,
            counts: [0; PartKind::COUNT],
        };
        builder.record(Part::new(kind, value));
        builder
    }

    /// Start a selector whose first part's kind is only known at runtime.
    ///
    /// Equivalent to the matching free function, e.g. `start(PartKind::Id, "x")` is `id("x")`.
    #[must_use]
    pub fn start(kind: PartKind, value: impl Into<String>) -> Self {
        Self::seeded(kind, value.into())
    }

    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an element is already present,
    /// [`SelectorError::Order`] if any other part is.
    pub fn element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(PartKind::Element, value)
    }

    /// Append an ID selector, rendered `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an id is already present,
    /// [`SelectorError::Order`] if a class or later part is.
    pub fn id(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(PartKind::Id, value)
    }

    /// Append a class selector, rendered `.value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if an attribute or later part is present.
    pub fn class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(PartKind::Class, value)
    }

    /// Append an attribute selector, rendered `[value]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-class or pseudo-element is present.
    pub fn attr(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(PartKind::Attribute, value)
    }

    /// Append a pseudo-class, rendered `:value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-element is present.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(PartKind::PseudoClass, value)
    }

    /// Append a pseudo-element, rendered `::value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a pseudo-element is already present.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(PartKind::PseudoElement, value)
    }

    /// Append a part whose kind is only known at runtime.
    ///
    /// The cardinality check runs before the ordering check, so a repeated
    /// singleton is always reported as [`SelectorError::Duplicate`].
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] or [`SelectorError::Order`] as for the
    /// kind-specific methods.
    pub fn append(
        mut self,
        kind: PartKind,
        value: impl Into<String>,
    ) -> Result<Self, SelectorError> {
        self.check(kind)?;
        self.record(Part::new(kind, value));
        Ok(self)
    }

    fn check(&self, kind: PartKind) -> Result<(), SelectorError> {
        if kind
            .max_occurrences()
            .is_some_and(|max| self.count(kind) >= max)
        {
            return Err(SelectorError::Duplicate { kind });
        }

        match self.highest {
            Some(previous) if kind < previous => Err(SelectorError::Order {
                attempted: kind,
                previous,
            }),
            _ => Ok(()),
        }
    }

    fn record(&mut self, part: Part) {
        part.render_into(&mut self.rendered);
        self.counts[part.kind.index()] += 1;
        self.highest = self.highest.max(Some(part.kind));
        self.parts.push(part);
    }

    /// The selector text built so far.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.rendered.clone()
    }

    /// Borrowed form of [`stringify`](Self::stringify).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Appended parts, in append order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Highest-ranked kind appended so far.
    #[must_use]
    pub const fn highest_kind(&self) -> Option<PartKind> {
        self.highest
    }

    /// Number of parts of `kind` appended so far.
    #[must_use]
    pub fn count(&self, kind: PartKind) -> usize {
        self.counts[kind.index()]
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Start a selector with a type selector, e.g. `element("div")`.
#[must_use]
pub fn element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(PartKind::Element, value.into())
}

/// Start a selector with an ID selector, e.g. `id("main")` renders `#main`.
#[must_use]
pub fn id(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(PartKind::Id, value.into())
}

/// Start a selector with a class selector, e.g. `class("nav")` renders `.nav`.
#[must_use]
pub fn class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(PartKind::Class, value.into())
}

/// Start a selector with an attribute selector, e.g. `attr("href")` renders `[href]`.
#[must_use]
pub fn attr(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(PartKind::Attribute, value.into())
}

/// Start a selector with a pseudo-class, e.g. `pseudo_class("hover")` renders `:hover`.
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(PartKind::PseudoClass, value.into())
}

/// Start a selector with a pseudo-element, e.g. `pseudo_element("after")` renders `::after`.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(PartKind::PseudoElement, value.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state() {
        let builder = class("x");
        assert_eq!(builder.highest_kind(), Some(PartKind::Class));
        assert_eq!(builder.count(PartKind::Class), 1);
        assert_eq!(builder.count(PartKind::Element), 0);
        assert_eq!(builder.parts(), &[Part::new(PartKind::Class, "x")]);
    }

    #[test]
    fn test_start_matches_free_functions() {
        assert_eq!(SelectorBuilder::start(PartKind::Element, "a"), element("a"));
        assert_eq!(SelectorBuilder::start(PartKind::Id, "a"), id("a"));
        assert_eq!(SelectorBuilder::start(PartKind::Class, "a"), class("a"));
        assert_eq!(SelectorBuilder::start(PartKind::Attribute, "a"), attr("a"));
        assert_eq!(SelectorBuilder::start(PartKind::PseudoClass, "a"), pseudo_class("a"));
        assert_eq!(
            SelectorBuilder::start(PartKind::PseudoElement, "a"),
            pseudo_element("a")
        );
    }

    #[test]
    fn test_highest_kind_does_not_drop_on_ties() {
        let builder = element("a").class("x").unwrap().class("y").unwrap();
        assert_eq!(builder.highest_kind(), Some(PartKind::Class));
        assert_eq!(builder.count(PartKind::Class), 2);
    }

    #[test]
    fn test_check_prefers_duplicate_over_order() {
        let builder = id("main").class("x").unwrap();
        assert_eq!(
            builder.check(PartKind::Id),
            Err(SelectorError::Duplicate { kind: PartKind::Id })
        );
        assert_eq!(
            builder.check(PartKind::Element),
            Err(SelectorError::Order {
                attempted: PartKind::Element,
                previous: PartKind::Class,
            })
        );
    }
}
