use crate::lang::SupportedLang;

/// The normalised result of expanding one page (C1). `neighbours` holds
/// outgoing link titles for a forward expansion, incoming link titles
/// (`linkshere`) for a backward expansion. `lang_links` holds only
/// entries whose language is in the supported set; unknown-language or
/// empty-title entries are dropped by the client before this type is
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub canonical_title: String,
    pub neighbours: Vec<String>,
    pub lang_links: Vec<(SupportedLang, String)>,
}

impl Page {
    pub fn new(canonical_title: impl Into<String>) -> Self {
        Page { canonical_title: canonical_title.into(), neighbours: Vec::new(), lang_links: Vec::new() }
    }
}
