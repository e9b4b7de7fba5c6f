//! Markdown renderers for repository descriptions.
//!
//! Rendering semantics belong to whoever displays the description; the
//! editor only needs something that turns raw source into display text.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, source: &str) -> String;
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// CommonMark to HTML
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl MarkdownRenderer for HtmlRenderer {
    fn render(&self, source: &str) -> String {
        let mut out = String::new();
        html::push_html(&mut out, Parser::new_ext(source, options()));
        out
    }
}

/// Plain text for terminal display.
///
/// Markup is dropped, blocks are separated by a blank line and list items
/// get a bullet, indented by nesting depth.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalRenderer;

impl MarkdownRenderer for TerminalRenderer {
    fn render(&self, source: &str) -> String {
        let mut out = String::new();
        let mut list_depth = 0usize;

        for event in Parser::new_ext(source, options()) {
            match event {
                Event::Text(text) | Event::Code(text) | Event::Html(text) | Event::InlineHtml(text) => {
                    out.push_str(&text)
                }
                Event::SoftBreak | Event::HardBreak => out.push('\n'),
                Event::Rule => {
                    out.push_str("───");
                    end_block(&mut out);
                }
                Event::TaskListMarker(done) => out.push_str(if done { "[x] " } else { "[ ] " }),
                Event::Start(Tag::List(_)) => {
                    if list_depth > 0 && !out.ends_with('\n') {
                        out.push('\n');
                    }
                    list_depth += 1;
                }
                Event::End(TagEnd::List(_)) => {
                    list_depth = list_depth.saturating_sub(1);
                    if list_depth == 0 {
                        end_block(&mut out);
                    }
                }
                Event::Start(Tag::Item) => {
                    out.push_str(&"  ".repeat(list_depth.saturating_sub(1)));
                    out.push_str("• ");
                }
                Event::End(TagEnd::Item) => {
                    if !out.ends_with('\n') {
                        out.push('\n');
                    }
                }
                Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::CodeBlock) if list_depth == 0 => {
                    end_block(&mut out)
                }
                Event::End(TagEnd::TableCell) => out.push('\t'),
                Event::End(TagEnd::TableHead | TagEnd::TableRow) => {
                    let len = out.trim_end_matches('\t').len();
                    out.truncate(len);
                    out.push('\n');
                }
                Event::End(TagEnd::Table) => end_block(&mut out),
                _ => {}
            }
        }

        out.trim_end().to_string()
    }
}

/// Close the current block with exactly one blank line
fn end_block(out: &mut String) {
    let len = out.trim_end_matches('\n').len();
    out.truncate(len);
    if !out.is_empty() {
        out.push_str("\n\n");
    }
}
