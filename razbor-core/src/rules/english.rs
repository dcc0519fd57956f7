//! English rule layer

use super::{join_if, Bridge, BridgeRule, Decision, FnRule, Rule};
use crate::postprocess::contraction_prefixes;
use crate::punct::{is_apostrophe, APOSTROPHES};
use crate::types::{Atom, AtomKind};
use crate::window::Split;
use std::collections::HashSet;

/// Clitics that attach to an apostrophe: `'s`, `'ll`, `'ve`
const CLITICS: [&str; 6] = ["s", "ll", "m", "d", "ve", "re"];

const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

pub fn rules() -> Vec<Box<dyn Rule>> {
    let prefixes: HashSet<&'static str> = contraction_prefixes().collect();

    vec![
        Box::new(BridgeRule::new(
            "en_apostrophe",
            |atom: &Atom| atom.is_one_of(APOSTROPHES),
            // can't stays whole here and is cut by the contraction pass
            move |bridge: &Bridge<'_>, _: &Split<'_>| {
                join_if(
                    prefixes.contains(bridge.left.normal.as_str()) && bridge.right.normal == "t",
                )
            },
        )),
        Box::new(FnRule::new("en_apostrophe_right", |split: &Split<'_>| {
            join_if(
                is_apostrophe(split.left())
                    && CLITICS.contains(&split.right_1.normal.as_str()),
            )
        })),
        Box::new(FnRule::new("en_ordinal", ordinal)),
    ]
}

/// `1st`, `22nd`, `1990s`, `80s`; suffixes are lowercase only, `22ND` splits
fn ordinal(split: &Split<'_>) -> Decision {
    let (number, suffix) = (split.left_1, split.right_1);
    if number.kind != AtomKind::Int {
        return Decision::Abstain;
    }
    if ORDINAL_SUFFIXES.contains(&suffix.text.as_str()) {
        return Decision::Join;
    }
    join_if(suffix.text == "s" && is_decade(&number.text))
}

fn is_decade(digits: &str) -> bool {
    match digits.len() {
        4 => digits.starts_with("19") || digits.starts_with("20"),
        2 => digits.ends_with('0'),
        _ => false,
    }
}
