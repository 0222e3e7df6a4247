//! A single-pass pretty-printing library with bounded lookahead.
//!
//! Documents are built from composable primitives and rendered against a
//! target page width. Layout is greedy: a [flex group](Doc::flex_group)
//! speculatively renders its contents compactly, with every
//! [`flex_alt`](Doc::flex_alt) taking its compact side, and falls back to
//! the expanded alternatives as soon as a hard break shows up or the line
//! outgrows the ribbon. Only the outermost flex group speculates at a
//! time, so rendering stays linear in the document size.
//!
//! ## Quick start
//!
//! Let's pretty-print simple sexps!  We want to pretty print sexps like
//!
//! ```lisp
//! (1 2 3)
//! ```
//! or, if the line would be too long, like
//!
//! ```lisp
//! (1
//!   2 3)
//! ```
//!
//! A _simple symbolic expression_ consists of a numeric _atom_ or a nested
//! ordered _list_ of symbolic expression children.
//!
//! ```rust
//! # use flexdoc::*;
//! enum SExp {
//!     Atom(u32),
//!     List(Vec<SExp>),
//! }
//! use SExp::*;
//! # fn main() { }
//! ```
//!
//! We define a simple conversion to a [`Doc`]. Atoms are rendered as
//! strings; lists are rendered as indented paragraphs of their children
//! inside a flex group, so a list collapses onto one line whenever it
//! fits.
//!
//! ```rust
//! # use flexdoc::*;
//! # enum SExp {
//! #     Atom(u32),
//! #     List(Vec<SExp>),
//! # }
//! # use SExp::*;
//! impl SExp {
//!     /// Return a pretty printed format of self.
//!     pub fn to_doc(&self) -> Doc<'static> {
//!         match self {
//!             Atom(x) => Doc::as_string(x),
//!             List(xs) => paragraph(xs.iter().map(SExp::to_doc))
//!                 .indent()
//!                 .parens()
//!                 .flex_group(),
//!         }
//!     }
//! }
//! # fn main() { }
//! ```
//!
//! And finally we can test that the indentation and grouping behaves as we
//! expected.
//!
//! ```rust
//! # use flexdoc::*;
//! # enum SExp {
//! #     Atom(u32),
//! #     List(Vec<SExp>),
//! # }
//! # use SExp::*;
//! # impl SExp {
//! #     /// Return a pretty printed format of self.
//! #     pub fn to_doc(&self) -> Doc<'static> {
//! #         match self {
//! #             Atom(x) => Doc::as_string(x),
//! #             List(xs) => paragraph(xs.iter().map(SExp::to_doc))
//! #                 .indent()
//! #                 .parens()
//! #                 .flex_group(),
//! #         }
//! #     }
//! # }
//! # fn main() {
//! let atom = SExp::Atom(5);
//! assert_eq!("5", atom.to_doc().print(&PrintOptions::two_spaces()));
//!
//! let list = SExp::List(vec![SExp::Atom(1), SExp::Atom(2), SExp::Atom(3)]);
//! assert_eq!("(1 2 3)", list.to_doc().print(&PrintOptions::two_spaces()));
//!
//! let narrow = PrintOptions {
//!     page_width: 5,
//!     ..PrintOptions::two_spaces()
//! };
//! assert_eq!("(1\n  2 3)", list.to_doc().print(&narrow));
//! # }
//! ```
//!
//! Plain prose wraps the same way:
//!
//! ```rust
//! use flexdoc::{text_paragraph, Doc, PrintOptions};
//!
//! let doc: Doc = text_paragraph("the quick brown fox");
//! let narrow = PrintOptions {
//!     page_width: 10,
//!     ..PrintOptions::two_spaces()
//! };
//! assert_eq!(doc.print(&narrow), "the\nquick\nbrown fox");
//! ```
//!
//! ## Custom output
//!
//! Rendering goes through a [`Printer`], a sink of callbacks over a buffer
//! type of its choosing. [`PlainText`] is the bundled string printer;
//! implement [`Printer`] to emit styled output from
//! [annotations](Doc::annotate).

mod buffer;
mod combinators;
mod doc;
mod print;
pub mod text;

pub use combinators::{concat, fold_with, intersperse, lines, paragraph, text_paragraph, words};
pub use doc::Doc;
#[cfg(feature = "termcolor")]
pub use print::TermColored;
pub use print::{print, PlainText, Position, PrettyFmt, PrintOptions, Printer};

/// Concatenates a number of documents (or values that can be converted
/// into a document, like `&str`).
///
/// ```
/// use flexdoc::{docs, Doc, PrintOptions};
///
/// let doc: Doc = docs![
///     "let",
///     Doc::space(),
///     "x",
///     Doc::space(),
///     "=",
///     Some(" 123"),
/// ];
/// assert_eq!(doc.print(&PrintOptions::two_spaces()), "let x = 123");
/// ```
#[macro_export]
macro_rules! docs {
    ($first: expr $(,)?) => {
        $crate::Doc::from($first)
    };
    ($first: expr $(, $rest: expr)+ $(,)?) => {{
        let mut doc = $crate::Doc::from($first);
        $(
            doc = doc.append($rest);
        )*
        doc
    }}
}
