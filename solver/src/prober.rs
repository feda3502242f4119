//! C2: the language prober. Resolves a raw user-supplied title into a
//! `(lang, canonical_title)` pair by probing a small candidate set of
//! language endpoints concurrently, under a short bounded deadline, and
//! taking the first candidate (in list order) that resolves.

use std::sync::Arc;

use wikipath_base::{Profile, SupportedLang};

use crate::client;
use crate::transport::WikiTransport;

fn has_cyrillic(s: &str) -> bool {
    s.chars().any(|c| matches!(c, '\u{0400}'..='\u{04FF}'))
}

/// The candidate language list for a raw title: Cyrillic script biases
/// toward `ru` first, otherwise `en` first. Implementations may extend
/// this table; `en`/`ru` is the documented baseline.
pub fn candidate_langs(raw_title: &str) -> Vec<SupportedLang> {
    if has_cyrillic(raw_title) {
        vec![SupportedLang::Ru, SupportedLang::En]
    } else {
        vec![SupportedLang::En, SupportedLang::Ru]
    }
}

/// Resolves `raw_title` against the candidate list, under `profile`'s
/// probe deadline. Falls back to `(default_lang, raw_title)` when no
/// candidate resolves in time -- the search proceeds best-effort on that
/// node rather than failing outright.
pub async fn resolve(
    transport: &Arc<dyn WikiTransport>,
    raw_title: &str,
    default_lang: SupportedLang,
    profile: &Profile,
) -> (SupportedLang, String) {
    let candidates = candidate_langs(raw_title);

    let probes = candidates.iter().map(|&lang| {
        let transport = transport.clone();
        let title = raw_title.to_string();
        let deadline = profile.probe_deadline;
        async move {
            match client::probe(&transport, &title, lang, deadline).await {
                Ok(Some(canonical)) => Some((lang, canonical)),
                _ => None,
            }
        }
    });

    let results = futures::future::join_all(probes).await;
    for result in results {
        if let Some(resolved) = result {
            return resolved;
        }
    }
    (default_lang, raw_title.to_string())
}
