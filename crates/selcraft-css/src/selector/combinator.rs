use std::fmt;

use selcraft_common::warn_once;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::builder::SelectorBuilder;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// [`combine`] accepts any token; these are the ones CSS defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The literal token passed to [`combine`].
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// The combinator a literal token stands for, if it is one of the four CSS defines.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.token()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Anything that can sit on either side of a combinator.
pub trait SelectorText {
    /// The rendered selector.
    fn selector_text(&self) -> &str;
}

impl SelectorText for SelectorBuilder {
    fn selector_text(&self) -> &str {
        self.as_str()
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two selectors joined by a combinator. The text is final: nothing can be
/// appended, but the result can be combined again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    rendered: String,
}

impl CombinedSelector {
    /// The combined selector text.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.rendered.clone()
    }

    /// Borrowed form of [`stringify`](Self::stringify).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl SelectorText for CombinedSelector {
    fn selector_text(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Join two selectors as `left + " " + combinator + " " + right`.
///
/// The combinator is used verbatim. With the descendant token `" "` this
/// produces three spaces between the operands, and nesting combined
/// selectors simply concatenates their text; both are kept as is.
///
/// ```
/// use selcraft_css::selector::{combine, element, id};
///
/// let table = id("data");
/// let row = element("tr");
/// assert_eq!(combine(&table, "~", &row).stringify(), "#data ~ tr");
/// assert_eq!(combine(&table, " ", &row).stringify(), "#data   tr");
/// ```
#[must_use]
pub fn combine(
    left: &impl SelectorText,
    combinator: impl AsRef<str>,
    right: &impl SelectorText,
) -> CombinedSelector {
    let token = combinator.as_ref();
    if Combinator::from_token(token).is_none() {
        warn_once(
            "Selector",
            &format!("non-standard combinator token {token:?} passed through"),
        );
    }

    CombinedSelector {
        rendered: format!(
            "{} {token} {}",
            left.selector_text(),
            right.selector_text()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_token_round_trip() {
        for combinator in Combinator::iter() {
            assert_eq!(Combinator::from_token(combinator.token()), Some(combinator));
        }
        assert_eq!(Combinator::from_token(">>"), None);
        assert_eq!(Combinator::from_token(""), None);
    }

    #[test]
    fn test_display_is_token() {
        assert_eq!(Combinator::Child.to_string(), ">");
        assert_eq!(Combinator::Descendant.to_string(), " ");
    }
}
