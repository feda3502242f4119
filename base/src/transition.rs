use std::fmt;

use crate::node::Node;

/// Advisory classification of a consecutive pair in a reconstructed path:
/// `Link` when both nodes share a language, `Interwiki` when they don't.
/// Direction of the underlying edge is not guaranteed  -- this is
/// honest labelling, not a claim about which side originated the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Link,
    Interwiki,
}

impl Transition {
    pub fn classify(a: &Node, b: &Node) -> Transition {
        if a.lang == b.lang {
            Transition::Link
        } else {
            Transition::Interwiki
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Link => f.write_str("link"),
            Transition::Interwiki => f.write_str("interwiki"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::SupportedLang;

    #[test]
    fn same_language_pair_is_a_link() {
        let a = Node::new(SupportedLang::En, "Berlin");
        let b = Node::new(SupportedLang::En, "Paris");
        assert_eq!(Transition::classify(&a, &b), Transition::Link);
    }

    #[test]
    fn differing_language_pair_is_interwiki() {
        let a = Node::new(SupportedLang::En, "Moscow");
        let b = Node::new(SupportedLang::Ru, "Москва");
        assert_eq!(Transition::classify(&a, &b), Transition::Interwiki);
    }
}
