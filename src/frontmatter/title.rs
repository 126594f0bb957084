//! Move a quoted frontmatter `title:` line into a level-1 heading.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Frontmatter delimiter. Also the literal token the document is split on.
pub const DELIMITER: &str = "---";

// Single physical line only: `[ \t]*` instead of `\s*` keeps the quoted value
// from starting on the next line.
#[allow(clippy::expect_used)]
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^title:[ \t]*(?:'(?P<single>.+?)'|"(?P<double>.+?)")"#)
        .expect("valid title regex")
});

/// First `title:` line of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleLine<'a> {
    /// Quoted value without the quotes
    pub title: &'a str,
    /// Byte range of the whole physical line, including its line terminator
    pub line: Range<usize>,
}

/// Result of rewriting a document that had a title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub title: String,
    /// False when the document had fewer than two `---` after the title was removed
    pub heading_inserted: bool,
    /// True when non-empty text before the opening `---` was dropped
    pub preamble_discarded: bool,
}

/// Find the first line-anchored `title: '...'` / `title: "..."` in `content`.
pub fn find_title_line(content: &str) -> Option<TitleLine<'_>> {
    let caps = TITLE_RE.captures(content)?;
    let whole = caps.get(0)?;
    let title = caps.name("single").or_else(|| caps.name("double"))?;

    let line_end = content[whole.end()..]
        .find('\n')
        .map_or(content.len(), |i| whole.end() + i + 1);

    Some(TitleLine {
        title: title.as_str(),
        line: whole.start()..line_end,
    })
}

/// Remove the title line in its entirety.
pub fn strip_title_line(content: &str, title_line: &TitleLine<'_>) -> String {
    let mut out = String::with_capacity(content.len());
    out.push_str(&content[..title_line.line.start]);
    out.push_str(&content[title_line.line.end..]);
    out
}

/// Insert `# title` right after the closing frontmatter delimiter.
///
/// `content` is split on `---` into at most three pieces. With fewer than
/// three the text is returned as-is and `heading_inserted` is false.
pub fn insert_heading(content: &str, title: &str) -> Rewrite {
    let mut pieces = content.splitn(3, DELIMITER);
    let (Some(preamble), Some(frontmatter), Some(body)) =
        (pieces.next(), pieces.next(), pieces.next())
    else {
        return Rewrite {
            content: content.to_string(),
            title: title.to_string(),
            heading_inserted: false,
            preamble_discarded: false,
        };
    };

    // The line break after the closing delimiter is re-emitted before the heading.
    let (newline, body) = if let Some(rest) = body.strip_prefix("\r\n") {
        ("\r\n", rest)
    } else if let Some(rest) = body.strip_prefix('\n') {
        ("\n", rest)
    } else {
        ("\n", body)
    };

    Rewrite {
        content: format!("{DELIMITER}{frontmatter}{DELIMITER}{newline}# {title}{newline}{body}"),
        title: title.to_string(),
        heading_inserted: true,
        preamble_discarded: !preamble.is_empty(),
    }
}

/// Move the title of `content` into a heading. `None` when no title is found.
pub fn rewrite(content: &str) -> Option<Rewrite> {
    let title_line = find_title_line(content)?;
    let stripped = strip_title_line(content, &title_line);
    Some(insert_heading(&stripped, title_line.title))
}
