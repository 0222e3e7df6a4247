use std::rc::Rc;

use crate::{
    buffer::Buffer,
    doc::Doc,
    text::push_spaces,
};

use super::{sink::Printer, Position, PrintOptions};

/// A unit of pending work on the interpreter's command stack.
#[derive(Clone)]
enum DocCmd<'a, A> {
    Doc(Rc<Doc<'a, A>>),
    Dedent { spaces: String, indent: usize },
    LeaveAnnotation(A),
    LeaveFlexGroup,
}

/// Savepoint captured when a flex group starts speculating.
///
/// Holds everything needed to restart from the group entry: the state
/// fields at entry time and the continuation stack with the group's inner
/// document on top. The buffer itself is not saved; it rolls back by
/// discarding its speculative fork.
struct FlexGroupState<'a, A> {
    position: Position,
    annotations: Vec<A>,
    indent: usize,
    indent_spaces: String,
    stack: Vec<DocCmd<'a, A>>,
}

pub(super) struct Machine<'p, 'a, A, P>
where
    P: Printer<A>,
{
    printer: &'p P,
    options: &'p PrintOptions,
    ribbon_ratio: f64,
    position: Position,
    buffer: Buffer<P::Buffer>,
    annotations: Vec<A>,
    indent: usize,
    indent_spaces: String,
    flex_group: Option<FlexGroupState<'a, A>>,
    stack: Vec<DocCmd<'a, A>>,
}

impl<'p, 'a, A, P> Machine<'p, 'a, A, P>
where
    A: Clone,
    P: Printer<A>,
{
    pub(super) fn new(printer: &'p P, options: &'p PrintOptions) -> Self {
        let ribbon_ratio = options.ribbon_ratio.clamp(0.0, 1.0);
        let page_width = options.page_width;
        let available = page_width as f64;
        let ribbon_width = ((ribbon_ratio * available).ceil() as usize).min(page_width);
        Machine {
            printer,
            options,
            ribbon_ratio,
            position: Position {
                line: 0,
                column: 0,
                indent: 0,
                page_width,
                ribbon_width,
            },
            buffer: Buffer::new(printer.empty_buffer()),
            annotations: Vec::new(),
            indent: 0,
            indent_spaces: String::new(),
            flex_group: None,
            stack: Vec::new(),
        }
    }

    pub(super) fn run(mut self, doc: Doc<'a, A>) -> P::Output {
        self.stack.push(DocCmd::Doc(Rc::new(doc)));
        while let Some(cmd) = self.stack.pop() {
            match cmd {
                DocCmd::Doc(doc) => self.step(doc),
                DocCmd::Dedent { spaces, indent } => {
                    self.indent_spaces = spaces;
                    self.indent = indent;
                }
                DocCmd::LeaveAnnotation(ann) => {
                    self.annotations.pop();
                    self.buffer
                        .modify(|b| self.printer.leave_annotation(&ann, &self.annotations, b));
                }
                DocCmd::LeaveFlexGroup => {
                    self.flex_group = None;
                    self.buffer.commit();
                }
            }
        }
        self.printer.flush(self.buffer.into_inner())
    }

    /// Process one document node, drilling into single-child nodes without
    /// round-tripping them through the stack.
    fn step(&mut self, mut doc: Rc<Doc<'a, A>>) {
        loop {
            match *doc {
                Doc::Empty => return,

                Doc::Text(width, ref text) => {
                    if self.pending_indent() {
                        self.write_pending_indent();
                        continue;
                    }
                    let next_column = self.position.column + width;
                    if self.flex_group.is_some()
                        && next_column
                            > self.position.indent.saturating_add(self.position.ribbon_width)
                    {
                        self.reset();
                        return;
                    }
                    let text = text.as_str();
                    self.buffer
                        .modify(|b| self.printer.write_text(width, text, b));
                    self.position.column = next_column;
                    return;
                }

                Doc::Break => {
                    if self.flex_group.is_some() {
                        self.reset();
                        return;
                    }
                    self.buffer.modify(|b| self.printer.write_break(b));
                    self.position.line += 1;
                    self.position.column = 0;
                    self.position.indent = self.indent;
                    self.position.ribbon_width = self.ribbon(self.indent);
                    return;
                }

                Doc::Append(ref left, ref right) => {
                    self.stack.push(DocCmd::Doc(Rc::clone(right)));
                    doc = Rc::clone(left);
                }

                Doc::Indent(ref inner) => {
                    // Committed flex content stays on one line, so indent
                    // bookkeeping is skipped while speculating.
                    if self.flex_group.is_none() {
                        self.stack.push(DocCmd::Dedent {
                            spaces: self.indent_spaces.clone(),
                            indent: self.indent,
                        });
                        self.indent += self.options.indent_width;
                        self.indent_spaces.push_str(&self.options.indent_unit);
                    }
                    doc = Rc::clone(inner);
                }

                Doc::Align(width, ref inner) => {
                    if self.flex_group.is_none() {
                        self.stack.push(DocCmd::Dedent {
                            spaces: self.indent_spaces.clone(),
                            indent: self.indent,
                        });
                        self.indent += width;
                        push_spaces(&mut self.indent_spaces, width);
                    }
                    doc = Rc::clone(inner);
                }

                Doc::FlexGroup(ref inner) => {
                    // Only the outermost group speculates; nested groups
                    // ride on its savepoint, which bounds the lookahead.
                    if self.flex_group.is_some() || self.position.ribbon_width == 0 {
                        doc = Rc::clone(inner);
                    } else {
                        let mut resume = self.stack.clone();
                        resume.push(DocCmd::Doc(Rc::clone(inner)));
                        self.flex_group = Some(FlexGroupState {
                            position: self.position,
                            annotations: self.annotations.clone(),
                            indent: self.indent,
                            indent_spaces: self.indent_spaces.clone(),
                            stack: resume,
                        });
                        self.buffer.branch();
                        self.stack.push(DocCmd::LeaveFlexGroup);
                        doc = Rc::clone(inner);
                    }
                }

                Doc::FlexAlt(ref flex, ref default) => {
                    doc = if self.flex_group.is_some() {
                        Rc::clone(flex)
                    } else {
                        Rc::clone(default)
                    };
                }

                Doc::Annotate(ref ann, ref inner) => {
                    self.buffer
                        .modify(|b| self.printer.enter_annotation(ann, &self.annotations, b));
                    self.stack.push(DocCmd::LeaveAnnotation(ann.clone()));
                    self.annotations.push(ann.clone());
                    doc = Rc::clone(inner);
                }

                Doc::WithPosition(ref continuation) => {
                    let position = if self.position.column == 0
                        && self.position.line > 0
                        && self.indent > self.position.indent
                    {
                        // Indentation is pending and would apply before the
                        // next write, so report it as already applied.
                        Position {
                            column: self.indent,
                            indent: self.indent,
                            ribbon_width: self.ribbon(self.indent),
                            ..self.position
                        }
                    } else {
                        self.position
                    };
                    doc = Rc::new(continuation(position));
                }
            }
        }
    }

    /// Indentation is written lazily, once the first text of a line shows
    /// up. A line that stays blank therefore carries no trailing spaces,
    /// and the very first line is never auto-indented.
    fn pending_indent(&self) -> bool {
        self.position.column == 0 && self.position.line > 0 && self.indent > 0
    }

    fn write_pending_indent(&mut self) {
        let indent = self.indent;
        self.buffer
            .modify(|b| self.printer.write_indent(indent, &self.indent_spaces, b));
        self.position.column = indent;
        self.position.indent = indent;
        self.position.ribbon_width = self.ribbon(indent);
    }

    /// Abort the active flex group: restore the entry snapshot, drop the
    /// speculative writes, and resume from the saved continuation with the
    /// group's inner document on top. Re-processing then takes the default
    /// side of every alternative.
    fn reset(&mut self) {
        if let Some(saved) = self.flex_group.take() {
            self.position = saved.position;
            self.annotations = saved.annotations;
            self.indent = saved.indent;
            self.indent_spaces = saved.indent_spaces;
            self.stack = saved.stack;
            self.buffer.discard();
        }
    }

    fn ribbon(&self, indent: usize) -> usize {
        let available = self.position.page_width.saturating_sub(indent);
        let width = (self.ribbon_ratio * available as f64).ceil() as usize;
        width.min(self.position.page_width)
    }
}
