use std::io::Write;

use crossterm::{queue, style, terminal};

/// A run of menu text. Key hints (`[...]`, brackets included) are bold;
/// everything else is dim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Key(&'a str),
    Label(&'a str),
}

/// Split a menu item into key hints and labels. An unclosed `[` is
/// treated as plain label text.
pub fn segments(item: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = item;
    while !rest.is_empty() {
        let Some(open) = rest.find('[') else {
            out.push(Segment::Label(rest));
            break;
        };
        let Some(close) = rest[open..].find(']').map(|c| open + c) else {
            out.push(Segment::Label(rest));
            break;
        };
        if open > 0 {
            out.push(Segment::Label(&rest[..open]));
        }
        out.push(Segment::Key(&rest[open..=close]));
        rest = &rest[close + 1..];
    }
    out
}

/// Queue a full-width menu line at the current cursor position.
pub fn queue_menu<W: Write, S: AsRef<str>>(out: &mut W, items: &[S]) -> anyhow::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::CurrentLine),
        style::Print(" "),
    )?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            queue!(out, style::Print("  "))?;
        }
        for segment in segments(item.as_ref()) {
            let (attr, text) = match segment {
                Segment::Key(text) => (style::Attribute::Bold, text),
                Segment::Label(text) => (style::Attribute::Dim, text),
            };
            queue!(
                out,
                style::SetAttribute(attr),
                style::Print(text),
                style::SetAttribute(style::Attribute::Reset),
            )?;
        }
    }
    Ok(())
}
