use thiserror::Error;

use super::part::PartKind;

/// Why a part could not be appended to a [`SelectorBuilder`](super::SelectorBuilder).
///
/// Both variants are caller mistakes; the builder that produced them is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A part was appended after a part that must come later.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element (got {attempted} after {previous})"
    )]
    Order {
        /// The kind that was being appended.
        attempted: PartKind,
        /// The highest-ranked kind already present.
        previous: PartKind,
    },

    /// An element, id or pseudo-element was appended a second time.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector (got a second {kind})"
    )]
    Duplicate {
        /// The repeated kind.
        kind: PartKind,
    },
}
