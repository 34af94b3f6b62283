//! Fluent CSS selector builder.
//!
//! Builds selector strings per [Selectors Level 4](https://www.w3.org/TR/selectors-4/)
//! from a chained sequence of calls, enforcing the canonical part order
//! (`element#id.class[attr]:pseudo-class::pseudo-element`) and the
//! at-most-once rule for type and pseudo-element selectors. Two built
//! selectors combine with any of the four combinators into a composite
//! selector of unbounded nesting depth.
//!
//! This crate only *constructs* selector text; it is not a CSS parser and
//! does not match selectors against a document tree.
//!
//! # Example
//!
//! ```
//! use kata_selector::{combine, element, id};
//!
//! let sel = element("a").id("main")?.class("x")?;
//! assert_eq!(sel.stringify(), "a#main.x");
//!
//! let pair = combine(element("div").id("main")?, '+', element("table").id("data")?)?;
//! assert_eq!(pair.stringify(), "div#main + table#data");
//! # Ok::<(), kata_selector::SelectorError>(())
//! ```
//!
//! Out-of-order or repeated singleton parts fail at the call that breaks
//! the rule:
//!
//! ```
//! use kata_selector::{class, SelectorError};
//!
//! let err = class("draggable").id("main").unwrap_err();
//! assert!(matches!(err, SelectorError::OrderViolation { .. }));
//! ```

/// Selector construction errors.
pub mod error;
/// Simple selector parts and their kinds.
pub mod part;
/// Compound and combined selector values.
pub mod selector;

pub use error::SelectorError;
pub use part::{SelectorKind, SelectorPart};
pub use selector::{Combinator, CompoundSelector, Selector};

/// Start a fresh chain with a type selector, e.g. `div`.
///
/// Every factory call returns an independent value; nothing carries over
/// from previously built chains.
#[must_use]
pub fn element(name: &str) -> CompoundSelector {
    CompoundSelector::with_part(SelectorPart::Element(name.to_owned()))
}

/// Start a fresh chain with an ID selector, e.g. `#main`.
#[must_use]
pub fn id(name: &str) -> CompoundSelector {
    CompoundSelector::with_part(SelectorPart::Id(name.to_owned()))
}

/// Start a fresh chain with a class selector, e.g. `.container`.
#[must_use]
pub fn class(name: &str) -> CompoundSelector {
    CompoundSelector::with_part(SelectorPart::Class(name.to_owned()))
}

/// Start a fresh chain with an attribute selector, e.g. `[href$=".png"]`.
#[must_use]
pub fn attr(expr: &str) -> CompoundSelector {
    CompoundSelector::with_part(SelectorPart::Attribute(expr.to_owned()))
}

/// Start a fresh chain with a pseudo-class, e.g. `:focus`.
#[must_use]
pub fn pseudo_class(name: &str) -> CompoundSelector {
    CompoundSelector::with_part(SelectorPart::PseudoClass(name.to_owned()))
}

/// Start a fresh chain with a pseudo-element, e.g. `::before`.
#[must_use]
pub fn pseudo_element(name: &str) -> CompoundSelector {
    CompoundSelector::with_part(SelectorPart::PseudoElement(name.to_owned()))
}

/// Join two selectors with a combinator character.
///
/// The operands are selector values, not raw strings, and are wrapped
/// without being mutated. Use [`Selector::combined`] directly when the
/// combinator is already a [`Combinator`] and validation is unnecessary.
///
/// # Errors
///
/// `InvalidCombinator` if `combinator` is not one of ` `, `>`, `+`, `~`.
pub fn combine(
    left: impl Into<Selector>,
    combinator: char,
    right: impl Into<Selector>,
) -> Result<Selector, SelectorError> {
    Ok(Selector::combined(
        left,
        Combinator::try_from(combinator)?,
        right,
    ))
}
