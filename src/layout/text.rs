use crate::units::Px;
use log::trace;

const TABSIZE: usize = 4;

/// A single line of text produced by [wrap_text], ready to be drawn with its
/// top edge at `origin_y`
#[derive(Clone, PartialEq, Debug)]
pub struct WrappedLine {
    pub text: String,
    pub origin_y: Px,
}

/// Lays out text with greedy word wrapping.
///
/// The text is first split into segments on newlines (`\n`, `\r\n` or `\r`); each
/// segment is wrapped on its own. Words (separated by spaces) are accumulated
/// onto a line for as long as the measured width of the line stays within
/// `max_width`; the word that would overflow starts the next line instead.
///
/// # Vertical positions
///
/// The first line sits at `top`. Every emitted line, and every blank segment,
/// advances the cursor by `line_height`. Blank (or whitespace-only) segments
/// therefore show up as vertical gaps but produce no [WrappedLine] themselves.
///
/// # Overlong words
///
/// Words are never split. A word that is wider than `max_width` on its own is
/// placed alone on its line and overflows the nominal width.
///
/// Tabs are expanded to spaces before wrapping; lines are trimmed of leading and
/// trailing whitespace but runs of inner spaces are kept.
pub fn wrap_text<M>(
    text: &str,
    measure: M,
    max_width: Px,
    top: Px,
    line_height: Px,
) -> Vec<WrappedLine>
where
    M: Fn(&str) -> Px,
{
    // replace tabs with spaces
    let text = text.replace('\t', &" ".repeat(TABSIZE));
    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut y = top;
    let mut lines: Vec<WrappedLine> = Vec::new();

    for segment in text.split('\n') {
        if segment.trim().is_empty() {
            y += line_height;
            continue;
        }

        let mut current = String::new();
        for word in segment.split(' ') {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if !current.trim().is_empty() && measure(candidate.trim()) > max_width {
                lines.push(WrappedLine {
                    text: current.trim().to_string(),
                    origin_y: y,
                });
                y += line_height;
                current = word.to_string();
            } else {
                current = candidate;
            }
        }

        if !current.trim().is_empty() {
            lines.push(WrappedLine {
                text: current.trim().to_string(),
                origin_y: y,
            });
            y += line_height;
        }
    }

    trace!("wrapped text into {} lines within {max_width}", lines.len());
    lines
}
