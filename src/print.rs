mod machine;
mod sink;

use std::{borrow::Cow, fmt};

use crate::Doc;
use machine::Machine;

pub use sink::{PlainText, Printer};
#[cfg(feature = "termcolor")]
pub use sink::TermColored;

/// A snapshot of the renderer's location, handed to
/// [`Doc::with_position`] callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Current line, starting at zero.
    pub line: usize,
    /// Current column, starting at zero.
    pub column: usize,
    /// Indentation the current line's content began at. May lag behind the
    /// indentation that will apply to the next write when nothing has been
    /// laid out on this line yet.
    pub indent: usize,
    /// The soft maximum line width.
    pub page_width: usize,
    /// Printable width before content on this line overflows:
    /// `ceil(ribbon_ratio * (page_width - indent))`, clamped to
    /// `[0, page_width]`.
    pub ribbon_width: usize,
}

/// Layout settings for [`print`].
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// The soft maximum line width.
    pub page_width: usize,
    /// Fraction of the width past the indentation that content may use
    /// before a flex group overflows. Values outside `[0, 1]` are clamped.
    pub ribbon_ratio: f64,
    /// The string emitted per indentation level.
    pub indent_unit: Cow<'static, str>,
    /// The assumed column width of `indent_unit`.
    pub indent_width: usize,
}

impl PrintOptions {
    /// Two-space indentation with an 80 column page.
    pub fn two_spaces() -> Self {
        PrintOptions {
            page_width: 80,
            ribbon_ratio: 1.0,
            indent_unit: Cow::Borrowed("  "),
            indent_width: 2,
        }
    }

    /// Four-space indentation with a 120 column page.
    pub fn four_spaces() -> Self {
        PrintOptions {
            page_width: 120,
            ribbon_ratio: 1.0,
            indent_unit: Cow::Borrowed("    "),
            indent_width: 4,
        }
    }

    /// Tab indentation, assumed four columns wide, with a 120 column page.
    pub fn tabs() -> Self {
        PrintOptions {
            page_width: 120,
            ribbon_ratio: 1.0,
            indent_unit: Cow::Borrowed("\t"),
            indent_width: 4,
        }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::two_spaces()
    }
}

/// Render `doc` through `printer`, producing the printer's output.
///
/// Deterministic for given inputs; the only side effects are the printer's
/// own callbacks.
pub fn print<'a, A, P>(printer: &P, options: &PrintOptions, doc: Doc<'a, A>) -> P::Output
where
    A: Clone,
    P: Printer<A>,
{
    Machine::new(printer, options).run(doc)
}

impl<'a, A: Clone> Doc<'a, A> {
    /// Render to a plain string, ignoring annotations.
    pub fn print(&self, options: &PrintOptions) -> String {
        print(&PlainText, options, self.clone())
    }

    /// Returns a value which implements `std::fmt::Display`.
    ///
    /// ```
    /// use flexdoc::{Doc, PrintOptions};
    ///
    /// let doc: Doc = Doc::text("hello").append_space(Doc::text("world"));
    /// assert_eq!(format!("{}", doc.pretty(&PrintOptions::two_spaces())), "hello world");
    /// ```
    pub fn pretty<'d>(&'d self, options: &'d PrintOptions) -> PrettyFmt<'d, 'a, A> {
        PrettyFmt { doc: self, options }
    }
}

/// Adapter rendering a document through [`fmt::Display`].
pub struct PrettyFmt<'d, 'a, A> {
    doc: &'d Doc<'a, A>,
    options: &'d PrintOptions,
}

impl<A: Clone> fmt::Display for PrettyFmt<'_, '_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.doc.print(self.options))
    }
}
