//! Frontmatter handling for Markdown posts
//!
//! A post starts with a block delimited by two `---` lines. The only field
//! this crate touches is a single-line, quoted `title:`; everything else in
//! the block is carried through verbatim.

mod title;

pub use title::rewrite;
