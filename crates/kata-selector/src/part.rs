//! Simple selector parts per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).

use core::fmt;

use strum_macros::Display;

/// The six kinds of simple selector a compound selector may contain.
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// "If it starts with a type selector or universal selector, that selector
/// comes first in the sequence."
///
/// CSS canonically orders the parts of a compound selector as
/// `element#id.class[attr]:pseudo-class::pseudo-element`; [`Self::rank`]
/// encodes that order as a fixed integer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SelectorKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `table`
    #[strum(serialize = "element")]
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#data`
    #[strum(serialize = "id")]
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.editable`
    #[strum(serialize = "class")]
    Class,

    /// [§ 6.4 Attribute selector](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    #[strum(serialize = "attribute")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    #[strum(serialize = "pseudo-class")]
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    #[strum(serialize = "pseudo-element")]
    PseudoElement,
}

impl SelectorKind {
    /// Position of this kind in the canonical part order,
    /// `element < id < class < attribute < pseudo-class < pseudo-element`.
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

    /// Whether this kind is limited to at most one occurrence per compound
    /// selector.
    ///
    /// [§ 4.2](https://www.w3.org/TR/selectors-4/#compound) allows only one
    /// type selector, and [§ 11](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "Only one pseudo-element may appear per complex selector."
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::PseudoElement)
    }
}

/// One simple selector with its payload, e.g. `Id("main")` for `#main`.
///
/// The payload is stored verbatim; the builder performs no identifier
/// validation or escaping, so an attribute expression like `href$=".png"`
/// passes straight through into `[href$=".png"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorPart {
    /// Type selector, rendered bare: `a`.
    Element(String),
    /// ID selector, rendered with a leading hash: `#main`.
    Id(String),
    /// Class selector, rendered with a leading full stop: `.container`.
    Class(String),
    /// Attribute selector, rendered in square brackets: `[href$=".png"]`.
    Attribute(String),
    /// Pseudo-class, rendered with a single colon: `:focus`.
    PseudoClass(String),
    /// Pseudo-element, rendered with a double colon: `::before`.
    PseudoElement(String),
}

impl SelectorPart {
    /// The kind of this part, used for ordering and cardinality checks.
    #[must_use]
    pub const fn kind(&self) -> SelectorKind {
        match self {
            Self::Element(_) => SelectorKind::Element,
            Self::Id(_) => SelectorKind::Id,
            Self::Class(_) => SelectorKind::Class,
            Self::Attribute(_) => SelectorKind::Attribute,
            Self::PseudoClass(_) => SelectorKind::PseudoClass,
            Self::PseudoElement(_) => SelectorKind::PseudoElement,
        }
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(name) => write!(f, "{name}"),
            Self::Id(name) => write!(f, "#{name}"),
            Self::Class(name) => write!(f, ".{name}"),
            Self::Attribute(expr) => write!(f, "[{expr}]"),
            Self::PseudoClass(name) => write!(f, ":{name}"),
            Self::PseudoElement(name) => write!(f, "::{name}"),
        }
    }
}
