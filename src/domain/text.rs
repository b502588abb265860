//! Label and snippet helpers used when listing content.

use comrak::{
    Arena, Options, markdown_to_html,
    nodes::{AstNode, NodeValue},
    parse_document,
};

fn markdown_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options
}

/// Turn a machine label (`cloud_devops`, `data-engineering`) into a sentence
/// fragment with a capitalised first letter.
pub fn humanize(content: &str) -> String {
    let trimmed = content.trim_matches(|ch: char| ch.is_whitespace() || ch == '_');
    let mut output = String::with_capacity(trimmed.len());
    let mut in_separator = false;

    for ch in trimmed.chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            in_separator = true;
            continue;
        }
        if in_separator {
            output.push(' ');
            in_separator = false;
        }
        output.push(ch);
    }
    if in_separator {
        output.push(' ');
    }

    capitalize_ascii_first(&output)
}

/// [`humanize`], then capitalise every word.
pub fn titleify(content: &str) -> String {
    humanize(content)
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render Markdown to HTML. Inline mode drops the wrapping paragraph.
pub fn markdownify(content: &str, block: bool) -> String {
    let html = markdown_to_html(content, &markdown_options());
    if block {
        return html;
    }

    let trimmed = html.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|inner| inner.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner.to_string(),
        _ => trimmed.to_string(),
    }
}

/// Markdown to plain text, one line per block with text in it.
pub fn plainify(content: &str) -> String {
    let arena = Arena::new();
    let root = parse_document(&arena, content, &markdown_options());

    let mut lines = Vec::new();
    let mut line = String::new();
    collect_plain_lines(root, &mut line, &mut lines);
    flush_line(&mut line, &mut lines);
    lines.join("\n")
}

fn collect_plain_lines<'a>(node: &'a AstNode<'a>, line: &mut String, lines: &mut Vec<String>) {
    let is_block = {
        let data = node.data.borrow();
        match &data.value {
            NodeValue::Text(text) => line.push_str(text),
            NodeValue::Code(code) => line.push_str(&code.literal),
            NodeValue::LineBreak | NodeValue::SoftBreak => line.push(' '),
            NodeValue::CodeBlock(block) => {
                flush_line(line, lines);
                for code_line in block.literal.lines() {
                    line.push_str(code_line);
                    flush_line(line, lines);
                }
            }
            _ => {}
        }
        data.value.block()
    };

    if is_block {
        flush_line(line, lines);
    }
    let mut child = node.first_child();
    while let Some(next) = child {
        collect_plain_lines(next, line, lines);
        child = next.next_sibling();
    }
    if is_block {
        flush_line(line, lines);
    }
}

fn flush_line(line: &mut String, lines: &mut Vec<String>) {
    let trimmed = line.trim();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
    line.clear();
}

fn capitalize_ascii_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            let mut output = String::with_capacity(text.len());
            output.push(first.to_ascii_uppercase());
            output.push_str(chars.as_str());
            output
        }
        _ => text.to_string(),
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
