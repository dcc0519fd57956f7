//! Russian rule layer

use super::{join_if, Bridge, BridgeRule, Decision, FnRule, Rule};
use crate::punct::{is_apostrophe, is_dash};
use crate::types::Atom;
use crate::window::Split;

/// Two-letter adjectival endings, checked on words longer than 4 letters
const ADJ_SUFFIXES_2: [&str; 16] = [
    "ая", "ее", "ей", "ем", "ие", "ий", "им", "их", "ое", "ой", "ом", "ую", "ый", "ые", "ым", "ых",
];

/// Three-letter adjectival endings, checked on words longer than 5 letters
const ADJ_SUFFIXES_3: [&str; 6] = ["его", "ему", "ими", "ому", "ого", "ыми"];

/// Dashed abbreviations: `кол-во`, `р-н`
const HYPHEN_ABBREVIATIONS: [(&str, &str); 7] = [
    ("кол", "во"),
    ("р", "н"),
    ("гр", "н"),
    ("пр", "кт"),
    ("ун", "т"),
    ("изд", "во"),
    ("хоз", "во"),
];

/// Particles inside dashed toponyms: `Вади-эль-Аасаль`, `Рас-эш-Шамра`
const AUX_WORDS: [&str; 4] = ["эль", "эш", "о", "au"];

fn dashed(atom: &Atom) -> bool {
    is_dash(&atom.text)
}

pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(FnRule::new("ru_hyphen_complex", hyphen_complex)),
        Box::new(BridgeRule::new(
            "ru_adj_hyphen",
            dashed,
            |bridge: &Bridge<'_>, _: &Split<'_>| adjective_hyphen(bridge.left, bridge.right),
        )),
        Box::new(BridgeRule::new(
            "ru_hyphen_abbr",
            dashed,
            |bridge: &Bridge<'_>, _: &Split<'_>| {
                let pair = (bridge.left.normal.as_str(), bridge.right.normal.as_str());
                join_if(HYPHEN_ABBREVIATIONS.contains(&pair))
            },
        )),
        Box::new(BridgeRule::new(
            "ru_hyphen_aux",
            dashed,
            |bridge: &Bridge<'_>, _: &Split<'_>| aux_word(bridge.left, bridge.right),
        )),
    ]
}

/// `Кот-д'Ивуар`: the dash boundaries see the apostrophe ahead
fn hyphen_complex(split: &Split<'_>) -> Decision {
    let normal = |atom: Option<&Atom>, expected: &str| atom.is_some_and(|a| a.normal == expected);
    let apostrophe = |atom: Option<&Atom>| atom.is_some_and(|a| is_apostrophe(&a.text));

    // Кот|-д'
    if split.left_1.normal == "кот"
        && dashed(split.right_1)
        && normal(split.right_2, "д")
        && apostrophe(split.right_3)
    {
        return Decision::Join;
    }
    // Кот-|д'
    join_if(
        normal(split.left_2, "кот")
            && dashed(split.left_1)
            && split.right_1.normal == "д"
            && apostrophe(split.right_2),
    )
}

/// `светло-красного`, `сине-зелёный`
fn adjective_hyphen(left: &Atom, right: &Atom) -> Decision {
    if !(left.normal == "сине" || left.normal.ends_with('о')) {
        return Decision::Abstain;
    }
    let letters = right.normal.chars().count();
    let ends_with_any = |suffixes: &[&str]| suffixes.iter().any(|s| right.normal.ends_with(s));
    join_if(
        (letters > 5 && ends_with_any(&ADJ_SUFFIXES_3[..]))
            || (letters > 4 && ends_with_any(&ADJ_SUFFIXES_2[..])),
    )
}

fn aux_word(left: &Atom, right: &Atom) -> Decision {
    let aux = |atom: &Atom| AUX_WORDS.contains(&atom.normal.as_str());
    join_if((aux(left) && right.is_title()) || (aux(right) && left.is_title()))
}
