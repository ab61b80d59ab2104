//! CSS selector generation for the Selcraft toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Part ordering enforced on every append
//!   - At most one type, ID and pseudo-element per compound
//!
//! - **Complex selectors** ([§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex))
//!   - Joining built selectors with a combinator token
//!
//! # Not Implemented
//!
//! - Selector parsing
//! - Lexical validation of identifiers and attribute expressions
//! - Specificity
//! - Matching against a document

/// CSS selector building per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use selector::{
    CombinedSelector, Combinator, Part, PartKind, SelectorBuilder, SelectorError, SelectorText,
    attr, class, combine, element, id, pseudo_class, pseudo_element,
};
