/// Output sink driven by [`print`](crate::print()).
///
/// The renderer funnels every write through these callbacks, threading a
/// buffer value of the implementer's choosing, and finally exchanges the
/// buffer for an [`Output`](Printer::Output) via [`flush`](Printer::flush).
///
/// Callbacks must be pure with respect to the buffer value: while a flex
/// group is being speculated they run against a buffer fork that may be
/// discarded, so external side effects would leak from layouts that were
/// never committed. Equivalent buffers in must give equivalent buffers out.
pub trait Printer<A> {
    /// The accumulator the callbacks write into.
    type Buffer: Clone;
    /// The result produced by [`flush`](Printer::flush).
    type Output;

    /// The seed buffer.
    fn empty_buffer(&self) -> Self::Buffer;

    /// Append literal text. `width` is the column width of `text`.
    fn write_text(&self, width: usize, text: &str, buffer: &mut Self::Buffer);

    /// Append the indentation prefix of a freshly started line. `width` is
    /// the column width the prefix accounts for.
    fn write_indent(&self, width: usize, text: &str, buffer: &mut Self::Buffer);

    /// Append a line terminator.
    fn write_break(&self, buffer: &mut Self::Buffer);

    /// Called as an annotated region opens. `outer` holds the enclosing
    /// annotations, outermost first.
    fn enter_annotation(&self, ann: &A, outer: &[A], buffer: &mut Self::Buffer);

    /// Called as an annotated region closes. `remaining` holds the
    /// annotations still open, outermost first.
    fn leave_annotation(&self, ann: &A, remaining: &[A], buffer: &mut Self::Buffer);

    /// Convert the finished buffer into the caller's result.
    fn flush(&self, buffer: Self::Buffer) -> Self::Output;
}

/// Plain text printer. Annotations are ignored.
pub struct PlainText;

impl<A> Printer<A> for PlainText {
    type Buffer = String;
    type Output = String;

    fn empty_buffer(&self) -> String {
        String::new()
    }

    fn write_text(&self, _width: usize, text: &str, buffer: &mut String) {
        buffer.push_str(text);
    }

    fn write_indent(&self, _width: usize, text: &str, buffer: &mut String) {
        buffer.push_str(text);
    }

    fn write_break(&self, buffer: &mut String) {
        buffer.push('\n');
    }

    fn enter_annotation(&self, _ann: &A, _outer: &[A], _buffer: &mut String) {}

    fn leave_annotation(&self, _ann: &A, _remaining: &[A], _buffer: &mut String) {}

    fn flush(&self, buffer: String) -> String {
        buffer
    }
}

#[cfg(feature = "termcolor")]
mod term {
    use termcolor::{Ansi, ColorSpec, WriteColor};

    use super::Printer;

    /// Printer emitting ANSI escape sequences from [`ColorSpec`]
    /// annotations.
    pub struct TermColored;

    impl Printer<ColorSpec> for TermColored {
        type Buffer = Vec<u8>;
        type Output = String;

        fn empty_buffer(&self) -> Vec<u8> {
            Vec::new()
        }

        fn write_text(&self, _width: usize, text: &str, buffer: &mut Vec<u8>) {
            buffer.extend_from_slice(text.as_bytes());
        }

        fn write_indent(&self, _width: usize, text: &str, buffer: &mut Vec<u8>) {
            buffer.extend_from_slice(text.as_bytes());
        }

        fn write_break(&self, buffer: &mut Vec<u8>) {
            buffer.push(b'\n');
        }

        fn enter_annotation(&self, color: &ColorSpec, _outer: &[ColorSpec], buffer: &mut Vec<u8>) {
            // Writing to a Vec<u8> cannot fail.
            let _ = Ansi::new(&mut *buffer).set_color(color);
        }

        fn leave_annotation(
            &self,
            _color: &ColorSpec,
            remaining: &[ColorSpec],
            buffer: &mut Vec<u8>,
        ) {
            let mut ansi = Ansi::new(&mut *buffer);
            let _ = match remaining.last() {
                Some(previous) => ansi.set_color(previous),
                None => ansi.reset(),
            };
        }

        fn flush(&self, buffer: Vec<u8>) -> String {
            String::from_utf8_lossy(&buffer).into_owned()
        }
    }
}

#[cfg(feature = "termcolor")]
pub use term::TermColored;
