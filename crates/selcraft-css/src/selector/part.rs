use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The six kinds of simple selector a compound selector is built from.
///
/// Variants are declared in the order CSS requires them to appear, so the
/// derived `Ord` is the rank order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `table`
    #[strum(to_string = "element", serialize = "type")]
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.draggable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl PartKind {
    /// Position of this kind in the required part order, from 0 (element) to 5 (pseudo-element).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 0,
            Self::Id => 1,
            Self::Class => 2,
            Self::Attribute => 3,
            Self::PseudoClass => 4,
            Self::PseudoElement => 5,
        }
    }

    /// Text written before the part's value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the part's value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// How many parts of this kind one compound selector may hold, or `None` if unbounded.
    #[must_use]
    pub const fn max_occurrences(self) -> Option<usize> {
        match self {
            Self::Element | Self::Id | Self::PseudoElement => Some(1),
            Self::Class | Self::Attribute | Self::PseudoClass => None,
        }
    }

    /// Element, ID and pseudo-element may appear at most once.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        self.max_occurrences().is_some()
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.rank())
    }
}

/// One rendered piece of a compound selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Part {
    /// What kind of simple selector this is.
    pub kind: PartKind,
    /// The raw value, without prefix or brackets. Never validated.
    pub value: String,
}

impl Part {
    /// Create a part of the given kind.
    #[must_use]
    pub fn new(kind: PartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Append the rendered form (`prefix + value + suffix`) to `out`.
    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str(self.kind.prefix());
        out.push_str(&self.value);
        out.push_str(self.kind.suffix());
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind.prefix(), self.value, self.kind.suffix())
    }
}
