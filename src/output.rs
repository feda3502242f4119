//! Renders a [`SearchOutcome`] for the CLI: a numbered path listing plus a
//! per-edge "check" URL so a human can follow the chain by hand.

use wikipath_base::{Node, Transition};
use wikipath_engine::SearchOutcome;

/// Percent-encodes `title` for use in a Wikipedia article path, following
/// the wiki convention of turning spaces into underscores first.
fn escape_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for byte in title.replace(' ', "_").bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' | b'(' | b')' | b':' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

pub fn article_url(node: &Node) -> String {
    format!("https://{}.wikipedia.org/wiki/{}", node.lang.code(), escape_title(&node.title))
}

/// Renders the full human-readable report the CLI prints on a hit:
/// a numbered path listing followed by one "check" line per edge,
/// labelled by whether it crossed a language edition.
pub fn render_path(outcome: &SearchOutcome) -> String {
    let mut out = String::new();
    for (i, node) in outcome.path.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, node));
    }
    out.push('\n');
    for (i, window) in outcome.path.windows(2).enumerate() {
        let transition = outcome.transitions.get(i).copied().unwrap_or(Transition::Link);
        out.push_str(&format!("  {} --[{}]--> {}\n", article_url(&window[0]), transition, article_url(&window[1])));
    }
    out.push_str(&format!(
        "\n{} hops, {} requests, {:.2}s\n",
        outcome.path.len().saturating_sub(1),
        outcome.request_count,
        outcome.elapsed.as_secs_f64()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikipath_base::SupportedLang;

    #[test]
    fn escapes_spaces_and_reserved_bytes() {
        assert_eq!(escape_title("New York City"), "New_York_City");
        assert_eq!(escape_title("C#"), "C%23");
    }

    #[test]
    fn article_url_uses_the_node_language_subdomain() {
        let node = Node::new(SupportedLang::Ru, "Москва");
        assert!(article_url(&node).starts_with("https://ru.wikipedia.org/wiki/"));
    }

    #[test]
    fn render_path_reports_hop_count() {
        let outcome = SearchOutcome {
            path: vec![Node::new(SupportedLang::En, "Berlin"), Node::new(SupportedLang::En, "Paris")],
            transitions: vec![Transition::Link],
            request_count: 3,
            elapsed: std::time::Duration::from_millis(250),
        };
        let rendered = render_path(&outcome);
        assert!(rendered.contains("1 hops"));
        assert!(rendered.contains("3 requests"));
    }
}
