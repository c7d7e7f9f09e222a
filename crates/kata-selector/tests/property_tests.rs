//! Property tests for the selector builder.

use kata_selector::{Category, Fragment, SelectorError, Token};
use quickcheck_macros::quickcheck;

/// Apply one append, chosen by `op`, to `fragment`.
fn apply(fragment: &Fragment, op: u8, value: &str) -> Result<Fragment, SelectorError> {
    match op % 6 {
        0 => fragment.element(value),
        1 => fragment.id(value),
        2 => fragment.class(value),
        3 => fragment.attr(value),
        4 => fragment.pseudo_class(value),
        _ => fragment.pseudo_element(value),
    }
}

/// Build a fragment from random appends, skipping the ones that fail.
fn build(ops: &[(u8, String)]) -> Fragment {
    ops.iter().fold(Fragment::new(), |fragment, (op, value)| {
        apply(&fragment, *op, value).unwrap_or(fragment)
    })
}

#[quickcheck]
fn prop_built_fragments_respect_the_grammar(ops: Vec<(u8, String)>) -> bool {
    let categories: Vec<Category> = build(&ops).categories().collect();

    let ordered = categories.windows(2).all(|pair| pair[0] <= pair[1]);
    let single = categories
        .windows(2)
        .all(|pair| pair[0] != pair[1] || pair[0].is_repeatable());
    ordered && single
}

#[quickcheck]
fn prop_append_extends_or_leaves_unchanged(ops: Vec<(u8, String)>, op: u8, value: String) -> bool {
    let before = build(&ops);
    let rendered = before.stringify();
    match apply(&before, op, &value) {
        Ok(after) => {
            after.stringify().starts_with(&rendered)
                && after.tokens().len() == before.tokens().len() + 1
                && before.stringify() == rendered
        }
        Err(_) => before.stringify() == rendered,
    }
}

#[quickcheck]
fn prop_stringify_is_idempotent(ops: Vec<(u8, String)>) -> bool {
    let fragment = build(&ops);
    fragment.stringify() == fragment.stringify()
}

#[quickcheck]
fn prop_combine_concatenates(left: Vec<(u8, String)>, right: Vec<(u8, String)>) -> bool {
    let left = build(&left);
    let right = build(&right);
    let combined = Fragment::combine(&left, "~", &right);

    combined.stringify() == format!("{} ~ {}", left.stringify(), right.stringify())
        && combined.is_combined()
        && combined.tokens().len() == left.tokens().len() + right.tokens().len() + 1
}

#[quickcheck]
fn prop_appends_after_combine_respect_the_grammar(
    left: Vec<(u8, String)>,
    right: Vec<(u8, String)>,
    more: Vec<(u8, String)>,
) -> bool {
    let combined = Fragment::combine(&build(&left), ">", &build(&right));
    let extended = more.iter().fold(combined, |fragment, (op, value)| {
        apply(&fragment, *op, value).unwrap_or(fragment)
    });

    let tail = extended
        .tokens()
        .iter()
        .rposition(Token::is_combinator)
        .map_or(0, |index| index + 1);
    let categories: Vec<Category> = extended.tokens()[tail..]
        .iter()
        .filter_map(Token::category)
        .collect();
    categories
        .windows(2)
        .all(|pair| pair[0] < pair[1] || (pair[0] == pair[1] && pair[0].is_repeatable()))
}
