//! Integration tests for the fluent selector builder.

use kata_selector::{
    Combinator, Selector, SelectorError, SelectorKind, attr, class, combine, element, id,
    pseudo_class, pseudo_element,
};

#[test]
fn test_single_part_selectors() {
    assert_eq!(element("div").stringify(), "div");
    assert_eq!(id("nav-bar").stringify(), "#nav-bar");
    assert_eq!(class("warning").stringify(), ".warning");
    assert_eq!(attr("href").stringify(), "[href]");
    assert_eq!(pseudo_class("invalid").stringify(), ":invalid");
    assert_eq!(pseudo_element("first-line").stringify(), "::first-line");
}

#[test]
fn test_element_id_class_chain() {
    let sel = element("a").id("main").unwrap().class("x").unwrap();
    assert_eq!(sel.stringify(), "a#main.x");
}

#[test]
fn test_repeated_classes() {
    let sel = id("main")
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();
    assert_eq!(sel.stringify(), "#main.container.editable");
}

#[test]
fn test_attribute_and_pseudo_class_tokens() {
    let sel = element("a")
        .attr("href$=\".png\"")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(sel.stringify(), "a[href$=\".png\"]:focus");
}

#[test]
fn test_full_compound_selector() {
    let sel = element("div")
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("draggable")
        .unwrap()
        .attr("data-id=\"x\"")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_element("after")
        .unwrap();
    assert_eq!(
        sel.stringify(),
        "div#main.container.draggable[data-id=\"x\"]:hover::after"
    );
}

#[test]
fn test_repeatable_kinds_may_repeat() {
    let sel = attr("href")
        .attr("target=\"_blank\"")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(sel.stringify(), "[href][target=\"_blank\"]:hover:focus");
}

#[test]
fn test_duplicate_element_is_rejected() {
    let err = element("a").element("b").unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicateSingleton {
            kind: SelectorKind::Element
        }
    );
}

#[test]
fn test_duplicate_pseudo_element_is_rejected() {
    let err = pseudo_element("before").pseudo_element("after").unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicateSingleton {
            kind: SelectorKind::PseudoElement
        }
    );
}

#[test]
fn test_id_after_class_is_out_of_order() {
    let err = class("x").id("y").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OrderViolation {
            part: SelectorKind::Id,
            follows: SelectorKind::Class
        }
    );
}

#[test]
fn test_element_after_anything_is_out_of_order() {
    let err = pseudo_class("focus").element("div").unwrap_err();
    assert!(matches!(err, SelectorError::OrderViolation { .. }));

    let err = id("main").element("div").unwrap_err();
    assert!(matches!(err, SelectorError::OrderViolation { .. }));
}

#[test]
fn test_every_lower_rank_after_pseudo_element_is_rejected() {
    // pseudo-element has the highest rank, so nothing but another
    // pseudo-element may legally follow it (and that one is a singleton).
    assert!(pseudo_element("after").class("x").is_err());
    assert!(pseudo_element("after").attr("href").is_err());
    assert!(pseudo_element("after").pseudo_class("hover").is_err());
}

#[test]
fn test_simple_combine() {
    let sel = combine(
        element("div").id("main").unwrap(),
        '+',
        element("table").id("data").unwrap(),
    )
    .unwrap();
    assert_eq!(sel.stringify(), "div#main + table#data");
}

#[test]
fn test_all_four_combinators_render() {
    let child = combine(element("ul"), '>', element("li")).unwrap();
    assert_eq!(child.stringify(), "ul > li");

    let sibling = combine(element("h1"), '~', element("p")).unwrap();
    assert_eq!(sibling.stringify(), "h1 ~ p");

    // The descendant combinator is itself a space, padded by a space on
    // each side, giving three literal spaces.
    let descendant = combine(element("div"), ' ', element("p")).unwrap();
    assert_eq!(descendant.stringify(), "div   p");
}

#[test]
fn test_nested_combine_reference_output() {
    let inner = combine(
        element("tr").pseudo_class("nth-of-type(even)").unwrap(),
        ' ',
        element("td").pseudo_class("nth-of-type(even)").unwrap(),
    )
    .unwrap();
    let middle = combine(element("table").id("data").unwrap(), '~', inner).unwrap();
    let outer = combine(
        element("div")
            .id("main")
            .unwrap()
            .class("container")
            .unwrap()
            .class("draggable")
            .unwrap(),
        '+',
        middle,
    )
    .unwrap();

    assert_eq!(
        outer.stringify(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_combine_does_not_mutate_operands() {
    let left = element("div").id("main").unwrap();
    let right = element("span");
    let left_text = left.stringify();
    let right_text = right.stringify();

    let joined = combine(left.clone(), '>', right.clone()).unwrap();
    assert_eq!(joined.stringify(), "div#main > span");
    assert_eq!(left.stringify(), left_text);
    assert_eq!(right.stringify(), right_text);
}

#[test]
fn test_invalid_combinator_is_rejected() {
    let err = combine(element("a"), '*', element("b")).unwrap_err();
    assert_eq!(err, SelectorError::InvalidCombinator('*'));

    let err = combine(element("a"), '\t', element("b")).unwrap_err();
    assert_eq!(err, SelectorError::InvalidCombinator('\t'));
}

#[test]
fn test_typed_combinator_constructor() {
    let sel = Selector::combined(element("nav"), Combinator::Child, element("a"));
    assert_eq!(sel.stringify(), "nav > a");
    assert_eq!(Combinator::try_from('+').unwrap(), Combinator::NextSibling);
    assert_eq!(Combinator::NextSibling.symbol(), '+');
}

#[test]
fn test_fresh_chains_share_no_state() {
    // Exercising one chain to completion must not leak parts into a chain
    // started afterwards from the same factory functions.
    let first = element("p")
        .id("first")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(first.stringify(), "p#first:focus");

    let second = element("p");
    assert_eq!(second.stringify(), "p");
    assert_eq!(second.parts().len(), 1);

    let third = id("second");
    assert_eq!(third.stringify(), "#second");
}

#[test]
fn test_stringify_is_repeatable_and_non_mutating() {
    let sel = element("a").class("x").unwrap();
    assert_eq!(sel.stringify(), "a.x");
    assert_eq!(sel.stringify(), "a.x");
    assert_eq!(sel.to_string(), "a.x");
}

#[test]
fn test_error_messages() {
    let order = class("x").id("y").unwrap_err();
    assert_eq!(
        order.to_string(),
        "selector parts should be arranged in the following order: \
         element, id, class, attribute, pseudo-class, pseudo-element \
         (`id` cannot follow `class`)"
    );

    let dup = element("a").element("b").unwrap_err();
    assert_eq!(
        dup.to_string(),
        "`element` should not occur more than one time inside the selector"
    );
}
