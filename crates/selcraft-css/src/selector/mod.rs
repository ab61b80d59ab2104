//! CSS selector building
//!
//! A [`SelectorBuilder`] assembles one compound selector from chained calls,
//! rejecting parts that are out of order or repeated where CSS allows only
//! one. [`combine`] joins finished selectors with a combinator.
//!
//! ```
//! use selcraft_css::selector::{combine, element, Combinator};
//!
//! let link = element("a").attr("href$=\".png\"")?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), "a[href$=\".png\"]:focus");
//!
//! let list = element("ul").class("nav")?;
//! assert_eq!(combine(&list, Combinator::Child, &link).stringify(), "ul.nav > a[href$=\".png\"]:focus");
//! # Ok::<(), selcraft_css::selector::SelectorError>(())
//! ```

mod builder;
mod combinator;
mod error;
mod part;

pub use builder::{SelectorBuilder, attr, class, element, id, pseudo_class, pseudo_element};
pub use combinator::{CombinedSelector, Combinator, SelectorText, combine};
pub use error::SelectorError;
pub use part::{Part, PartKind};
