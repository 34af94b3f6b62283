//! Errors reported while building a selector.

use thiserror::Error;

use crate::part::SelectorKind;

/// A selector construction failure.
///
/// All variants are raised synchronously by the builder and are not
/// recoverable at the call site: the chain stops where the error occurred
/// and no partial selector survives.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A part was appended out of the canonical
    /// element, id, class, attribute, pseudo-class, pseudo-element order.
    #[error(
        "selector parts should be arranged in the following order: \
         element, id, class, attribute, pseudo-class, pseudo-element \
         (`{part}` cannot follow `{follows}`)"
    )]
    OrderViolation {
        /// Kind of the part that was being appended.
        part: SelectorKind,
        /// Kind of the previously appended part with the higher rank.
        follows: SelectorKind,
    },

    /// A second element or pseudo-element was appended to one compound
    /// selector.
    #[error("`{kind}` should not occur more than one time inside the selector")]
    DuplicateSingleton {
        /// The singleton kind that was appended twice.
        kind: SelectorKind,
    },

    /// A combinator character other than ` `, `>`, `+` or `~` was supplied
    /// to `combine`.
    #[error("invalid combinator `{0}`, expected one of ` `, `>`, `+`, `~`")]
    InvalidCombinator(char),
}
