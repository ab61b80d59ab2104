//! Turning command line tokens into a chain of compound selectors.
//!
//! `kind=value` tokens append parts; anything else is a combinator that
//! closes the current compound.

use anyhow::{Context, Result};
use selcraft_css::{Part, PartKind, SelectorBuilder, combine};
use serde::Serialize;

/// Spelled-out alias for the descendant combinator, which is awkward to quote.
const DESCENDANT_ALIAS: &str = "descendant";

/// One classified command line token.
#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Part(PartKind, &'a str),
    Combinator(&'a str),
}

fn classify(raw: &str) -> Result<Token<'_>> {
    if let Some((kind, value)) = raw.split_once('=') {
        let kind = kind
            .parse::<PartKind>()
            .with_context(|| format!("unknown part kind {kind:?} in token {raw:?}"))?;
        return Ok(Token::Part(kind, value));
    }

    if raw == DESCENDANT_ALIAS {
        Ok(Token::Combinator(" "))
    } else {
        Ok(Token::Combinator(raw))
    }
}

/// Compound selectors and the combinators between them, in command line order.
#[derive(Debug)]
pub struct Chain {
    /// Never empty.
    pub compounds: Vec<SelectorBuilder>,
    /// One fewer than `compounds`.
    pub combinators: Vec<String>,
}

impl Chain {
    /// Build a chain from raw tokens.
    ///
    /// # Errors
    ///
    /// Fails on an unknown part kind, a part the builder rejects, a
    /// combinator with nothing on one side, or no tokens at all.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let mut compounds = Vec::new();
        let mut combinators = Vec::new();
        let mut current: Option<SelectorBuilder> = None;

        for raw in tokens {
            let raw = raw.as_ref();
            match classify(raw)? {
                Token::Part(kind, value) => {
                    let builder = match current.take() {
                        None => SelectorBuilder::start(kind, value),
                        Some(builder) => builder
                            .append(kind, value)
                            .with_context(|| format!("cannot append {raw:?}"))?,
                    };
                    current = Some(builder);
                }
                Token::Combinator(token) => {
                    let compound = current.take().with_context(|| {
                        format!("combinator {token:?} has no selector on its left")
                    })?;
                    compounds.push(compound);
                    combinators.push(token.to_string());
                }
            }
        }

        let last = current.with_context(|| match combinators.last() {
            Some(token) => format!("combinator {token:?} has no selector on its right"),
            None => "no selector parts given".to_string(),
        })?;
        compounds.push(last);

        Ok(Self {
            compounds,
            combinators,
        })
    }

    /// The full selector, combined right-nested: `a + b ~ c` is
    /// `combine(a, "+", combine(b, "~", c))`.
    #[must_use]
    pub fn render(&self) -> String {
        let Some(last) = self.compounds.last() else {
            return String::new();
        };

        let mut pairs = self.compounds.iter().zip(&self.combinators).rev();
        let Some((left, token)) = pairs.next() else {
            return last.stringify();
        };

        let mut combined = combine(left, token, last);
        for (left, token) in pairs {
            combined = combine(left, token, &combined);
        }
        combined.stringify()
    }

    /// Machine-readable summary for `--json`.
    #[must_use]
    pub fn report(&self) -> Report<'_> {
        Report {
            selector: self.render(),
            compounds: self
                .compounds
                .iter()
                .map(|compound| CompoundReport {
                    selector: compound.as_str(),
                    parts: compound.parts(),
                })
                .collect(),
            combinators: &self.combinators,
        }
    }
}

/// JSON output of the CLI.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    selector: String,
    compounds: Vec<CompoundReport<'a>>,
    combinators: &'a [String],
}

#[derive(Debug, Serialize)]
struct CompoundReport<'a> {
    selector: &'a str,
    parts: &'a [Part],
}
