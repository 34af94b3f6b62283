//! Compound and combined selector values.
//!
//! A [`CompoundSelector`] accumulates simple selector parts under the
//! ordering and cardinality rules of [Selectors Level 4](https://www.w3.org/TR/selectors-4/);
//! a [`Selector`] is either one compound selector or two selectors joined by
//! a [`Combinator`], forming an unbounded recursive structure.

use core::fmt;

use strum_macros::Display;

use crate::error::SelectorError;
use crate::part::SelectorPart;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors."
    ///
    /// Renders as a literal space, so the combined form carries three
    /// consecutive spaces once the surrounding padding is added.
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>)."
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+)."
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~)."
    #[strum(serialize = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// The single punctuation character of this combinator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;

    fn try_from(value: char) -> Result<Self, SelectorError> {
        match value {
            ' ' => Ok(Self::Descendant),
            '>' => Ok(Self::Child),
            '+' => Ok(Self::NextSibling),
            '~' => Ok(Self::SubsequentSibling),
            other => Err(SelectorError::InvalidCombinator(other)),
        }
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Parts are kept in append order. Every append consumes the value and
/// returns a new one, so a handle never shares state with any other chain:
/// two chains started from the same factory call site are fully independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    parts: Vec<SelectorPart>,
}

impl CompoundSelector {
    /// Start a compound selector from its first part.
    pub(crate) fn with_part(part: SelectorPart) -> Self {
        Self { parts: vec![part] }
    }

    /// The accumulated parts, in append order.
    #[must_use]
    pub fn parts(&self) -> &[SelectorPart] {
        &self.parts
    }

    /// Append one part, enforcing the two compound-selector invariants.
    ///
    /// 1. The incoming part's [`crate::part::SelectorKind::rank`] must not be below the
    ///    rank of the last appended part (`OrderViolation` otherwise).
    /// 2. An element or pseudo-element part must not already be present
    ///    (`DuplicateSingleton` otherwise).
    fn push(mut self, part: SelectorPart) -> Result<Self, SelectorError> {
        let kind = part.kind();

        if let Some(last) = self.parts.last() {
            let follows = last.kind();
            if kind.rank() < follows.rank() {
                return Err(SelectorError::OrderViolation { part: kind, follows });
            }
        }

        if kind.is_singleton() && self.parts.iter().any(|existing| existing.kind() == kind) {
            return Err(SelectorError::DuplicateSingleton { kind });
        }

        self.parts.push(part);
        Ok(self)
    }

    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// `OrderViolation` if any part was already appended (an element has the
    /// lowest rank), `DuplicateSingleton` if an element is already present.
    pub fn element(self, name: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::Element(name.to_owned()))
    }

    /// Append an ID selector, e.g. `#main`.
    ///
    /// # Errors
    ///
    /// `OrderViolation` if a part of higher rank was already appended.
    pub fn id(self, name: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::Id(name.to_owned()))
    }

    /// Append a class selector, e.g. `.container`.
    ///
    /// # Errors
    ///
    /// `OrderViolation` if a part of higher rank was already appended.
    pub fn class(self, name: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::Class(name.to_owned()))
    }

    /// Append an attribute selector, e.g. `[href$=".png"]`.
    ///
    /// # Errors
    ///
    /// `OrderViolation` if a part of higher rank was already appended.
    pub fn attr(self, expr: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::Attribute(expr.to_owned()))
    }

    /// Append a pseudo-class, e.g. `:focus`.
    ///
    /// # Errors
    ///
    /// `OrderViolation` if a pseudo-element was already appended.
    pub fn pseudo_class(self, name: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::PseudoClass(name.to_owned()))
    }

    /// Append a pseudo-element, e.g. `::before`.
    ///
    /// # Errors
    ///
    /// `DuplicateSingleton` if a pseudo-element is already present.
    pub fn pseudo_element(self, name: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::PseudoElement(name.to_owned()))
    }

    /// Render this compound selector to its CSS text.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// A complete selector: one compound selector, or two selectors joined by a
/// combinator.
///
/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
/// "A complex selector is a chain of one or more compound selectors
/// separated by combinators."
///
/// Combining wraps its operands without mutating them; a combined selector
/// is immutable and may nest to any depth on either side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A single compound selector, e.g. `a#main.x`.
    Compound(CompoundSelector),
    /// Two selectors joined by a combinator, e.g. `div#main + table#data`.
    Combined {
        /// The left operand.
        left: Box<Selector>,
        /// The joining combinator.
        combinator: Combinator,
        /// The right operand.
        right: Box<Selector>,
    },
}

impl Selector {
    /// Join two selectors with a combinator.
    #[must_use]
    pub fn combined(
        left: impl Into<Self>,
        combinator: Combinator,
        right: impl Into<Self>,
    ) -> Self {
        Self::Combined {
            left: Box::new(left.into()),
            combinator,
            right: Box::new(right.into()),
        }
    }

    /// Render this selector to its CSS text.
    ///
    /// Each combined level renders as `left`, a space, the combinator
    /// symbol, a space, `right`. The descendant combinator's symbol is
    /// itself a space, so nesting it produces three literal spaces; this
    /// matches the reference output and is not collapsed.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => write!(f, "{compound}"),
            Self::Combined {
                left,
                combinator,
                right,
            } => write!(f, "{left} {combinator} {right}"),
        }
    }
}
