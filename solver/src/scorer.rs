//! C3: the heuristic scorer. Lower is better. The forward search targets
//! the END node's words/language; the backward search targets the
//! START's. Pure function of `(title, lang, direction)` and the target
//! word sets -- invariant 6 -- so it never touches shared search state
//! and is trivially safe to call from concurrent tasks.

use std::collections::HashSet;

use wikipath_base::{Direction, HeuristicWeights, SupportedLang};

#[derive(Debug, Clone)]
pub struct TargetSide {
    pub lang: SupportedLang,
    pub words: HashSet<String>,
}

impl TargetSide {
    pub fn new(lang: SupportedLang, title: &str) -> Self {
        TargetSide { lang, words: words_of(title) }
    }
}

/// Word sets for both search directions, recomputed once per query
/// (driver step 2) from the resolved start/end titles.
#[derive(Debug, Clone)]
pub struct Targets {
    /// What the forward search (toward `end`) scores against.
    pub forward: TargetSide,
    /// What the backward search (toward `start`) scores against.
    pub backward: TargetSide,
}

impl Targets {
    pub fn new(start_lang: SupportedLang, start_title: &str, end_lang: SupportedLang, end_title: &str) -> Self {
        Targets {
            forward: TargetSide::new(end_lang, end_title),
            backward: TargetSide::new(start_lang, start_title),
        }
    }

    fn side_for(&self, direction: Direction) -> &TargetSide {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Backward => &self.backward,
        }
    }
}

/// Lower-cased whitespace-split tokens of length > 2.
fn words_of(title: &str) -> HashSet<String> {
    title
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .map(|w| w.to_string())
        .collect()
}

pub fn score(title: &str, lang: SupportedLang, direction: Direction, targets: &Targets, weights: &HeuristicWeights) -> i32 {
    let target = targets.side_for(direction);
    let lower_title = title.to_lowercase();
    let tokens: HashSet<&str> = lower_title.split_whitespace().collect();

    let mut total = weights.base;
    if lang == target.lang {
        total += weights.lang_match;
    }
    for word in &target.words {
        if tokens.contains(word.as_str()) {
            total += weights.exact_word;
        } else if lower_title.contains(word.as_str()) {
            total += weights.substring_word;
        }
    }
    if lang.is_hub() {
        total += weights.hub_lang;
    }
    let len = title.chars().count();
    if len < weights.short_title_len {
        total += weights.short_title_bonus;
    }
    if len > weights.long_title_len {
        total += weights.long_title_penalty;
    }
    total
}
