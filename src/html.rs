//! Input normalization: wraps `scraper::Html` with the tree-cleaning and
//! text-extraction helpers the Header/Body Examiners and Pattern Searcher
//! share (spec §4.7 step 1, §4.4's "cleaning step").

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

pub struct Document {
    html: Html,
}

macro_rules! cached_selector {
    ($name:ident, $css:expr) => {
        fn $name() -> &'static Selector {
            static CACHE: OnceLock<Selector> = OnceLock::new();
            CACHE.get_or_init(|| Selector::parse($css).expect("hardcoded CSS selector is valid"))
        }
    };
}

cached_selector!(meta_selector, "meta");
cached_selector!(time_selector, "time");
cached_selector!(abbr_selector, "abbr");
cached_selector!(script_style_selector, "script, style");
cached_selector!(head_selector, "head");
cached_selector!(body_selector, "body");
cached_selector!(ld_json_selector, r#"script[type="application/ld+json"]"#);

impl Document {
    /// Parses `input` as HTML. `scraper`/`html5ever` never fail outright —
    /// malformed markup degrades to a best-effort tree, matching spec §3's
    /// "invalid inputs ... yield a null result without raising" for the
    /// pipeline as a whole (the emptiness is detected by the caller, not
    /// here).
    pub fn parse(input: &str) -> Self {
        Document {
            html: Html::parse_document(input),
        }
    }

    pub fn head(&self) -> Option<ElementRef<'_>> {
        self.html.select(head_selector()).next()
    }

    pub fn body(&self) -> Option<ElementRef<'_>> {
        self.html.select(body_selector()).next()
    }

    pub fn meta_elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.select(meta_selector())
    }

    pub fn time_elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.select(time_selector())
    }

    pub fn abbr_elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.select(abbr_selector())
    }

    /// Text content of every `<script type="application/ld+json">` element,
    /// for the Body Examiner's JSON-LD probe.
    pub fn ld_json_blocks(&self) -> impl Iterator<Item = String> + '_ {
        self.html
            .select(ld_json_selector())
            .map(|el| el.text().collect::<String>())
    }

    /// `content`, in order, attribute lookup used by both examiners (spec
    /// §4.5: "reads `content`, then falls back to `datetime`, then to the
    /// element's text").
    pub fn meta_content(&self, property_or_name: &str) -> Option<String> {
        let needle = property_or_name.to_ascii_lowercase();
        self.meta_elements().find_map(|el| {
            let matches = ["property", "name", "itemprop"].iter().any(|attr| {
                el.value()
                    .attr(attr)
                    .map(|v| v.eq_ignore_ascii_case(&needle))
                    .unwrap_or(false)
            });
            if matches {
                el.value().attr("content").map(str::to_string)
            } else {
                None
            }
        })
    }

    /// The whole document's visible text, with `<script>`/`<style>` content
    /// and comments stripped, as used by the free-text Pattern Searcher.
    pub fn cleaned_text(&self) -> String {
        clean_element_text(self.html.root_element())
    }

    /// Runs an arbitrary CSS selector over the whole document, for probes
    /// the fixed accessors above don't cover (e.g. `[itemprop]`).
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> {
        self.html.select(selector)
    }
}

/// Removes `<script>`/`<style>` subtrees and HTML comments before collecting
/// text, then joins text nodes with a single space so adjacent inline
/// elements (`<b>12</b> <i>March</i>`) don't get glued into one token.
fn clean_element_text(root: ElementRef<'_>) -> String {
    use ego_tree::iter::Edge;
    use scraper::Node;

    let skip = script_style_selector();
    let mut out = String::new();
    for edge in root.traverse() {
        if let Edge::Open(node) = edge {
            if let Some(el) = ElementRef::wrap(node) {
                if skip.matches(&el) {
                    continue;
                }
            }
            if let Node::Text(text) = node.value() {
                // Skip text nodes whose nearest element ancestor is script/style.
                if let Some(parent) = node
                    .ancestors()
                    .find_map(ElementRef::wrap)
                {
                    if skip.matches(&parent) {
                        continue;
                    }
                }
                out.push_str(text);
                out.push(' ');
            }
        }
    }
    out
}
