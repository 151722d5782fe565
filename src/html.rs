use crate::block::Block;
use crate::config::HtmlConfig;
use crate::inline::format_with_config;

/// Render blocks to output lines, one HTML fragment per line.
pub fn render(blocks: &[Block], config: &HtmlConfig) -> Vec<String> {
    let mut out = Vec::new();
    for block in blocks {
        emit_block(block, config, &mut out);
    }
    out
}

/// Join output lines with `\n`, ending with exactly one newline.
pub fn join_lines(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn emit_block(block: &Block, config: &HtmlConfig, out: &mut Vec<String>) {
    match block {
        Block::Heading { level, content } => {
            let content = format_with_config(content, config);
            out.push(format!("<h{level}>{content}</h{level}>"));
        }
        Block::UnorderedList { items } => {
            emit_list(&config.dash_list_tag, items, config, out);
        }
        Block::OrderedList { items } => {
            emit_list(&config.star_list_tag, items, config, out);
        }
        Block::Paragraph { lines } => {
            out.push("<p>".to_string());
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    out.push(config.line_break.clone());
                }
                out.push(format_with_config(line, config));
            }
            out.push("</p>".to_string());
        }
    }
}

fn emit_list(tag: &str, items: &[String], config: &HtmlConfig, out: &mut Vec<String>) {
    out.push(format!("<{tag}>"));
    for item in items {
        out.push(format!("<li>{}</li>", format_with_config(item, config)));
    }
    out.push(format!("</{tag}>"));
}
