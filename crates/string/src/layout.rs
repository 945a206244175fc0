//! Line-block arithmetic shared by the multi-line renderer.
//!
//! A "block" is an ordered list of lines. The helpers here flatten child
//! blocks into a body, wrap bodies in delimiters, and lay out key/value
//! pairs as vertically aligned rows.

/// One indentation step, applied once per nesting level.
const INDENT: &str = "  ";

/// Concatenates child blocks into one body, appending `delimiter` to the
/// last line of every child except the final one.
pub(crate) fn flatten<I>(delimiter: &str, blocks: I) -> Vec<String>
where
    I: Iterator<Item = Vec<String>>,
{
    let mut flat: Vec<String> = Vec::new();
    for lines in blocks {
        if let Some(last) = flat.last_mut() {
            last.push_str(delimiter);
        }
        flat.extend(lines);
    }
    flat
}

/// Wraps a body in opening and closing lines, indenting every body line by
/// one step. An empty body collapses to the single line `open + close`.
pub(crate) fn enclose(lines: Vec<String>, open: &str, close: &str) -> Vec<String> {
    if lines.is_empty() {
        return vec![format!("{open}{close}")];
    }
    let mut enclosed = Vec::with_capacity(lines.len() + 2);
    enclosed.push(open.to_owned());
    enclosed.extend(lines.into_iter().map(|line| format!("{INDENT}{line}")));
    enclosed.push(close.to_owned());
    enclosed
}

/// Lays out a key/value pair whose sides may each span multiple lines.
///
/// Row 0 carries the separator; when the left side is multi-line, its lines
/// are right-padded to a common width and continuation rows get blanks in
/// the left and separator columns, which keeps the separators of adjacent
/// associations vertically aligned. A single-line left side needs no
/// padding at all.
pub(crate) fn association(left: Vec<String>, middle: &str, right: Vec<String>) -> Vec<String> {
    let lefts = left.len();
    let rights = right.len();
    let height = lefts.max(rights);
    let left_width = max_width(&left);

    let (left_blank, middle_blank) = if lefts < 2 {
        (String::new(), String::new())
    } else {
        (" ".repeat(left_width), " ".repeat(middle.chars().count()))
    };

    let mut rows = Vec::with_capacity(height);
    for i in 0..height {
        let l = if i < lefts {
            pad_end(&left[i], left_width)
        } else {
            left_blank.clone()
        };
        let m = if i == 0 { middle } else { &middle_blank };
        let r = if i < rights { right[i].as_str() } else { "" };
        rows.push(format!("{l}{m}{r}"));
    }
    rows
}

fn max_width(lines: &[String]) -> usize {
    lines.iter().map(|line| line.chars().count()).max().unwrap_or(0)
}

fn pad_end(line: &str, min_width: usize) -> String {
    let width = line.chars().count();
    if width >= min_width {
        line.to_owned()
    } else {
        format!("{line}{}", " ".repeat(min_width - width))
    }
}
