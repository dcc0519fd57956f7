//! Shared rule layer, evaluated after the language layers

use super::{join_if, Bridge, BridgeRule, Decision, FnRule, Rule};
use crate::lexicon::WordDictionary;
use crate::punct::{self, is_dash, is_ending, APOSTROPHES, DECIMAL_SEPARATORS, DIGIT_BRIDGES};
use crate::types::{Atom, AtomKind, Lang};
use crate::window::Split;
use regex::Regex;
use std::sync::{Arc, OnceLock};

/// Stems that take an elided vowel: `д'Артаньян`, `o'clock`, `l'Oréal`
const ELISION_STEMS: [&str; 7] = ["д", "л", "о", "d", "o", "xi", "l"];

/// Function words allowed between titlecase parts: `Isle-of-Man`
const LINKING_WORDS: [&str; 2] = ["in", "of"];

/// Identifier shape, checked on the text's prefix only
fn identifier() -> &'static Regex {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER.get_or_init(|| {
        Regex::new(r"^[@#]?\w+[\w_–-]*").expect("identifier pattern is a valid regex")
    })
}

/// Shared layer in evaluation order
pub fn rules(
    words: Arc<dyn WordDictionary>,
    abbreviations: Arc<dyn WordDictionary>,
) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(BridgeRule::new(
            "dash",
            |atom: &Atom| is_dash(&atom.text),
            move |bridge: &Bridge<'_>, split: &Split<'_>| dash(bridge, split, words.as_ref()),
        )),
        Box::new(BridgeRule::new(
            "underscore",
            |atom: &Atom| atom.text == "_",
            |bridge: &Bridge<'_>, _: &Split<'_>| {
                join_if(bridge.left.kind != AtomKind::Punct && bridge.right.kind != AtomKind::Punct)
            },
        )),
        Box::new(BridgeRule::new(
            "ampersand",
            |atom: &Atom| atom.text == "&",
            |bridge: &Bridge<'_>, _: &Split<'_>| ampersand(bridge),
        )),
        Box::new(BridgeRule::new(
            "apostrophe",
            |atom: &Atom| atom.is_one_of(APOSTROPHES),
            |bridge: &Bridge<'_>, _: &Split<'_>| {
                join_if(ELISION_STEMS.contains(&bridge.left.normal.as_str()))
            },
        )),
        Box::new(BridgeRule::new(
            "float",
            |atom: &Atom| atom.is_one_of(DECIMAL_SEPARATORS),
            |bridge: &Bridge<'_>, _: &Split<'_>| join_if(touching_digits(bridge)),
        )),
        Box::new(BridgeRule::new(
            "inside_digits",
            |atom: &Atom| atom.is_one_of(DIGIT_BRIDGES),
            |bridge: &Bridge<'_>, _: &Split<'_>| inside_digits(bridge),
        )),
        Box::new(FnRule::new("abbreviation", move |split: &Split<'_>| {
            abbreviation(split, abbreviations.as_ref())
        })),
        Box::new(FnRule::new("punct", punct_cluster)),
        Box::new(FnRule::new("other", other)),
        Box::new(FnRule::new("yahoo", |split: &Split<'_>| {
            join_if(split.left_1.normal == "yahoo" && split.right() == "!")
        })),
        Box::new(FnRule::new("alphanum_ids", alphanum_ids)),
        Box::new(FnRule::new("tags", tags)),
    ]
}

fn dash(bridge: &Bridge<'_>, split: &Split<'_>, words: &dyn WordDictionary) -> Decision {
    let (left, right) = (bridge.left, bridge.right);

    // 5-й, 1-Я
    if left.kind == AtomKind::Int && (right.kind == AtomKind::Ru || right.is_title()) {
        return Decision::Join;
    }
    // COVID-19, Ту-154
    if left.kind.is_word() && right.kind == AtomKind::Int {
        return Decision::Join;
    }
    if !(left.kind.is_word() && right.kind.is_word()) {
        return Decision::Abstain;
    }

    // Нью-Йорк, Isle-of-Man
    let linking = |atom: &Atom| LINKING_WORDS.contains(&atom.normal.as_str());
    if (left.is_title() && right.is_title())
        || (linking(left) && right.is_title())
        || (left.is_title() && linking(right))
    {
        return Decision::Join;
    }

    let lang = Lang::infer(left, right);
    let mut candidates = vec![format!("{}-{}", left.normal, right.normal)];
    if bridge.on_left {
        // из-|за-угла: the next compound part is visible on the right
        if let (Some(dash), Some(next)) = (split.right_2, split.right_3) {
            if is_dash(&dash.text) && next.kind.is_word() {
                candidates.push(format!("{}-{}-{}", left.normal, right.normal, next.normal));
            }
        }
    } else if let (Some(dash), Some(prev)) = (split.left_2, split.left_3) {
        // из-за|-угла: the previous compound part is visible on the left
        if is_dash(&dash.text) && prev.kind.is_word() {
            candidates.push(format!("{}-{}-{}", prev.normal, left.normal, right.normal));
        }
    }

    join_if(
        candidates
            .iter()
            .any(|candidate| words.is_word_known(candidate, lang)),
    )
}

fn ampersand(bridge: &Bridge<'_>) -> Decision {
    let (left, right) = (bridge.left, bridge.right);
    join_if(
        left.kind.is_word()
            && right.kind.is_word()
            && left.text.chars().next_back().is_some_and(char::is_uppercase)
            && right.text.chars().next().is_some_and(char::is_uppercase),
    )
}

fn touching_digits(bridge: &Bridge<'_>) -> bool {
    bridge.left.kind == AtomKind::Int && bridge.right.kind == AtomKind::Int && bridge.is_tight()
}

fn inside_digits(bridge: &Bridge<'_>) -> Decision {
    if !touching_digits(bridge) {
        return Decision::Abstain;
    }
    if bridge.delimiter.text != ":" {
        return Decision::Join;
    }
    // 20:55 is a clock reading, 20:99 is not
    let hours = bridge.left.text.parse::<u32>().ok();
    let minutes = bridge.right.text.parse::<u32>().ok();
    match (hours, minutes) {
        (Some(h), Some(m)) if (1..=24).contains(&h) && m <= 59 => Decision::Join,
        _ => Decision::Abstain,
    }
}

fn is_dot(atom: &Atom) -> bool {
    atom.text == "."
}

fn dot_atom(atom: Option<&Atom>) -> Option<&Atom> {
    atom.filter(|atom| is_dot(atom))
}

fn word_atom(atom: Option<&Atom>) -> Option<&Atom> {
    atom.filter(|atom| atom.kind.is_word())
}

/// Atoms follow each other without whitespace
fn adjacent(atoms: &[&Atom]) -> bool {
    atoms
        .windows(2)
        .all(|pair| pair[0].bytes.end == pair[1].bytes.start)
}

fn known_pair(first: &Atom, second: &Atom, abbreviations: &dyn WordDictionary) -> bool {
    let lang = Lang::infer(first, second);
    abbreviations.is_word_known(&format!("{}.{}", first.normal, second.normal), lang)
}

/// `т.д.`, `e.g.`, `г.`, `A.`
///
/// The abbreviation has to open the token, so `can't.` keeps its dot apart.
fn abbreviation(split: &Split<'_>, abbreviations: &dyn WordDictionary) -> Decision {
    let (left_1, right_1) = (split.left_1, split.right_1);

    if is_dot(right_1) && left_1.kind.is_word() {
        let ellipsis = split
            .right_2
            .is_some_and(|next| is_ending(&next.text) && adjacent(&[right_1, next]));

        // т|.д.
        if let (Some(second), Some(last)) = (word_atom(split.right_2), dot_atom(split.right_3)) {
            if opens_token(split, left_1)
                && adjacent(&[left_1, right_1, second, last])
                && known_pair(left_1, second, abbreviations)
            {
                return Decision::Join;
            }
        }
        // т.д|.
        if let (Some(inner), Some(first)) = (dot_atom(split.left_2), word_atom(split.left_3)) {
            if !ellipsis
                && opens_token(split, first)
                && adjacent(&[first, inner, left_1])
                && known_pair(first, left_1, abbreviations)
            {
                return Decision::Join;
            }
        }
        // г|.
        if !ellipsis
            && opens_token(split, left_1)
            && (left_1.text.chars().count() == 1
                || abbreviations.is_word_known(&left_1.normal, lang_of(left_1)))
        {
            return Decision::Join;
        }
        return Decision::Abstain;
    }

    // т.|д.
    if is_dot(left_1) && right_1.kind.is_word() {
        if let (Some(first), Some(last)) = (word_atom(split.left_2), dot_atom(split.right_2)) {
            if opens_token(split, first)
                && adjacent(&[first, left_1, right_1, last])
                && known_pair(first, right_1, abbreviations)
            {
                return Decision::Join;
            }
        }
    }
    Decision::Abstain
}

/// Whether the open token starts at `first`
fn opens_token(split: &Split<'_>, first: &Atom) -> bool {
    split.buffer.len() == split.left_1.bytes.end - first.bytes.start
}

fn lang_of(atom: &Atom) -> Lang {
    Lang::infer(atom, atom)
}

/// Runs of punctuation that read as one sign: `...`, `?!`, `:)))`, `--`
fn punct_cluster(split: &Split<'_>) -> Decision {
    if split.left_1.kind != AtomKind::Punct || split.right_1.kind != AtomKind::Punct {
        return Decision::Abstain;
    }
    let (left, right) = (split.left(), split.right());

    if punct::smile().is_match(&format!("{}{}", split.buffer, right)) {
        return Decision::Join;
    }
    if is_ending(left) && is_ending(right) {
        return Decision::Join;
    }
    join_if(matches!((left, right), ("-", "-") | ("*", "*")))
}

/// Symbols outside both alphabets stick to each other and to letters: `Δσ`, `mβж`
fn other(split: &Split<'_>) -> Decision {
    let (left, right) = (split.left_1.kind, split.right_1.kind);
    let letter_or_other = |kind: AtomKind| kind == AtomKind::Other || kind.is_word();
    join_if(
        (left == AtomKind::Other && letter_or_other(right))
            || (letter_or_other(left) && right == AtomKind::Other),
    )
}

/// Model names and ids: `MP3`, `А4`, `x3-9890`, `СаМgВ6O8`
fn alphanum_ids(split: &Split<'_>) -> Decision {
    let (left, right) = (split.left_1, split.right_1);
    let buffer = split.buffer;

    if right.kind == AtomKind::Int
        && buffer.chars().any(char::is_alphabetic)
        && identifier().is_match(buffer)
    {
        return Decision::Join;
    }
    if left.kind == AtomKind::Int
        && (is_dash(&right.text) || right.kind.is_word())
        && !buffer.chars().all(char::is_numeric)
        && identifier().is_match(&format!("{buffer}{}", right.text))
    {
        return Decision::Join;
    }
    join_if(matches!(
        (left.kind, right.kind),
        (AtomKind::Ru, AtomKind::Lat) | (AtomKind::Lat, AtomKind::Ru)
    ))
}

/// `@user`, `@42`, `#тег`
fn tags(split: &Split<'_>) -> Decision {
    let right = split.right_1.kind;
    match split.left() {
        "@" => join_if(matches!(right, AtomKind::Int | AtomKind::Ru | AtomKind::Lat)),
        "#" => join_if(right.is_word()),
        _ => Decision::Abstain,
    }
}
