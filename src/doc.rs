use std::{
    borrow::Cow,
    fmt::{self, Debug},
    ops::{Add, AddAssign},
    rc::Rc,
};

use crate::{print::Position, text::Text};

/// The document tree, generic over the annotation type `A`.
///
/// This type is not meant to be matched on directly. Construct documents
/// with the functions on `Doc` (and the free functions in this crate) so
/// that the structural invariants hold: `Empty` is elided from
/// compositions, `flex_group` is idempotent, and every `Text` leaf carries
/// its precomputed character width.
///
/// Children are reference counted, so cloning a document is shallow and
/// sharing subtrees is cheap.
#[derive(Clone)]
pub enum Doc<'a, A = ()> {
    /// The identity element under concatenation.
    Empty,
    /// A text leaf with its precomputed column width. The text must not
    /// contain line breaks.
    Text(usize, Text<'a>),
    /// An unconditional line break.
    Break,
    /// Ordered concatenation.
    Append(Rc<Doc<'a, A>>, Rc<Doc<'a, A>>),
    /// Raises the indentation level by one indent unit for the inner
    /// document.
    Indent(Rc<Doc<'a, A>>),
    /// Raises indentation by exactly the given number of spaces.
    Align(usize, Rc<Doc<'a, A>>),
    /// Marks the inner document as a candidate for compact layout.
    FlexGroup(Rc<Doc<'a, A>>),
    /// A pair of alternatives: the first is used inside a committed flex
    /// group, the second otherwise.
    FlexAlt(Rc<Doc<'a, A>>, Rc<Doc<'a, A>>),
    /// Wraps the inner document with an annotation value handed to the
    /// printer on entry and exit.
    Annotate(A, Rc<Doc<'a, A>>),
    /// Defers construction until the current render position is known.
    WithPosition(Rc<dyn Fn(Position) -> Doc<'a, A> + 'a>),
}

impl<'a, A> Doc<'a, A> {
    /// An empty document.
    #[inline]
    pub fn nil() -> Self {
        Doc::Empty
    }

    /// The given text, which must not contain line breaks.
    pub fn text<U: Into<Cow<'a, str>>>(data: U) -> Self {
        let data: Cow<_> = data.into();
        if data.is_empty() {
            return Doc::Empty;
        }
        let text = match data {
            Cow::Owned(t) => Text::Owned(t.into()),
            Cow::Borrowed(t) => Text::Borrowed(t),
        };
        Doc::Text(text.width(), text)
    }

    /// The text `data.to_string()`, which must not contain line breaks.
    pub fn as_string<U: fmt::Display>(data: U) -> Self {
        let text = Text::from(data);
        if text.as_str().is_empty() {
            return Doc::Empty;
        }
        Doc::Text(text.width(), text)
    }

    /// A single space.
    #[inline]
    pub fn space() -> Self {
        Doc::Text(1, Text::Borrowed(" "))
    }

    /// An unconditional line break.
    #[inline]
    pub fn hardline() -> Self {
        Doc::Break
    }

    /// A line break that collapses to a space inside a committed flex
    /// group.
    #[inline]
    pub fn space_break() -> Self {
        Self::hardline().flex_alt(Self::space())
    }

    /// A line break that collapses to nothing inside a committed flex
    /// group.
    #[inline]
    pub fn soft_break() -> Self {
        Self::hardline().flex_alt(Self::nil())
    }

    /// Builds the document from the render position reached when it is
    /// laid out.
    pub fn with_position(f: impl Fn(Position) -> Doc<'a, A> + 'a) -> Self {
        Doc::WithPosition(Rc::new(f))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Doc::Empty)
    }

    /// Append the given document after this document.
    pub fn append(self, that: impl Into<Doc<'a, A>>) -> Self {
        match (self, that.into()) {
            (Doc::Empty, doc) | (doc, Doc::Empty) => doc,
            (left, right) => Doc::Append(Rc::new(left), Rc::new(right)),
        }
    }

    /// Raise the indentation level for this document. Takes effect on
    /// lines started within it, not on the line already in progress.
    pub fn indent(self) -> Self {
        if self.is_empty() {
            self
        } else {
            Doc::Indent(Rc::new(self))
        }
    }

    /// Indent this document by `width` spaces. A zero width is ignored.
    pub fn align(self, width: usize) -> Self {
        if width == 0 || self.is_empty() {
            self
        } else {
            Doc::Align(width, Rc::new(self))
        }
    }

    /// Attach an annotation to this document. The printer sees matching
    /// enter/leave callbacks around the annotated region.
    pub fn annotate(self, ann: A) -> Self {
        if self.is_empty() {
            self
        } else {
            Doc::Annotate(ann, Rc::new(self))
        }
    }

    /// Mark this document as a flex group.
    ///
    /// A flex group is laid out compactly (every [`flex_alt`](Doc::flex_alt)
    /// inside takes its compact side) when the compact form fits within the
    /// ribbon; otherwise it is laid out with the default alternatives.
    pub fn flex_group(self) -> Self {
        match self {
            Doc::Empty | Doc::FlexGroup(_) | Doc::Text(..) => self,
            doc => Doc::FlexGroup(Rc::new(doc)),
        }
    }

    /// Acts as `self` normally and as `that` inside a committed flex
    /// group.
    pub fn flex_alt(self, that: impl Into<Doc<'a, A>>) -> Self {
        Doc::FlexAlt(Rc::new(that.into()), Rc::new(self))
    }

    /// Pin the lines of this document to the column it starts at.
    pub fn align_current_column(self) -> Self
    where
        A: Clone + 'a,
    {
        Doc::with_position(move |position| {
            self.clone()
                .align(position.column.saturating_sub(position.indent))
        })
    }

    /// Append with a space between. The space is skipped when either side
    /// is empty.
    pub fn append_space(self, that: impl Into<Doc<'a, A>>) -> Self {
        let that = that.into();
        if self.is_empty() {
            return that;
        }
        if that.is_empty() {
            return self;
        }
        self.append(Doc::space()).append(that)
    }

    /// Append on the following line. The break is skipped when either side
    /// is empty.
    pub fn append_break(self, that: impl Into<Doc<'a, A>>) -> Self {
        let that = that.into();
        if self.is_empty() {
            return that;
        }
        if that.is_empty() {
            return self;
        }
        self.append(Doc::hardline()).append(that)
    }

    /// Append with a collapsible space: a flex group renders a space when
    /// `that` fits on the current line and breaks otherwise. Skipped when
    /// either side is empty.
    pub fn append_space_break(self, that: impl Into<Doc<'a, A>>) -> Self {
        let that = that.into();
        if self.is_empty() {
            return that;
        }
        if that.is_empty() {
            return self;
        }
        self.append(Doc::space_break().append(that).flex_group())
    }

    /// Puts `self` between `before` and `after`.
    pub fn enclose(self, before: impl Into<Doc<'a, A>>, after: impl Into<Doc<'a, A>>) -> Self {
        before.into().append(self).append(after)
    }

    /// Like [`enclose`](Doc::enclose), but yields `fallback` when `self`
    /// is empty.
    pub fn enclose_or(
        self,
        before: impl Into<Doc<'a, A>>,
        after: impl Into<Doc<'a, A>>,
        fallback: impl Into<Doc<'a, A>>,
    ) -> Self {
        if self.is_empty() {
            fallback.into()
        } else {
            self.enclose(before, after)
        }
    }

    pub fn single_quotes(self) -> Self {
        self.enclose("'", "'")
    }

    pub fn double_quotes(self) -> Self {
        self.enclose("\"", "\"")
    }

    pub fn parens(self) -> Self {
        self.enclose("(", ")")
    }

    pub fn angles(self) -> Self {
        self.enclose("<", ">")
    }

    pub fn braces(self) -> Self {
        self.enclose("{", "}")
    }

    pub fn brackets(self) -> Self {
        self.enclose("[", "]")
    }
}

impl<'a, A> Default for Doc<'a, A> {
    fn default() -> Self {
        Doc::Empty
    }
}

impl<'a, A> From<&'a str> for Doc<'a, A> {
    fn from(s: &'a str) -> Self {
        Doc::text(s)
    }
}

impl<'a, A> From<String> for Doc<'a, A> {
    fn from(s: String) -> Self {
        Doc::text(s)
    }
}

impl<'a, A> From<Cow<'a, str>> for Doc<'a, A> {
    fn from(s: Cow<'a, str>) -> Self {
        Doc::text(s)
    }
}

impl<'a, A, T> From<Option<T>> for Doc<'a, A>
where
    T: Into<Doc<'a, A>>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(doc) => doc.into(),
            None => Doc::Empty,
        }
    }
}

impl<'a, A, P> Add<P> for Doc<'a, A>
where
    P: Into<Doc<'a, A>>,
{
    type Output = Doc<'a, A>;

    fn add(self, other: P) -> Self::Output {
        self.append(other)
    }
}

impl<'a, A, P> AddAssign<P> for Doc<'a, A>
where
    P: Into<Doc<'a, A>>,
{
    fn add_assign(&mut self, other: P) {
        *self = std::mem::take(self).append(other)
    }
}

/// Visit deeply concatenated docs sequentially.
fn visit_sequence<'d, 'a, A>(mut doc: &'d Doc<'a, A>, visitor: &mut impl FnMut(&'d Doc<'a, A>)) {
    while let Doc::Append(left, right) = doc {
        visit_sequence(&**left, visitor);
        doc = &**right;
    }
    visitor(doc);
}

fn write_compact<A: Debug>(
    f: &mut fmt::Formatter<'_>,
    doc: &Doc<'_, A>,
    name: &str,
) -> fmt::Result {
    if matches!(doc, Doc::Append(..)) {
        f.write_str(name)?;
        f.write_str("(")?;
        doc.fmt(f)?;
        f.write_str(")")
    } else {
        f.debug_tuple(name).field(doc).finish()
    }
}

impl<A: Debug> Debug for Doc<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Doc::Empty => f.write_str("Empty"),
            Doc::Text(_, s) => s.fmt(f),
            Doc::Break => f.write_str("Break"),
            Doc::Append(..) => {
                let mut list = f.debug_list();
                visit_sequence(self, &mut |doc| {
                    list.entry(doc);
                });
                list.finish()
            }
            Doc::Indent(doc) => write_compact(f, doc, "Indent"),
            Doc::Align(width, doc) => {
                write!(f, "Align({width}, ")?;
                doc.fmt(f)?;
                f.write_str(")")
            }
            Doc::FlexGroup(doc) => write_compact(f, doc, "FlexGroup"),
            Doc::FlexAlt(flex, default) => match (&**flex, &**default) {
                (Doc::Text(_, Text::Borrowed(" ")), Doc::Break) => f.write_str("SpaceBreak"),
                (Doc::Empty, Doc::Break) => f.write_str("SoftBreak"),
                _ => f.debug_tuple("FlexAlt").field(flex).field(default).finish(),
            },
            Doc::Annotate(ann, doc) => f.debug_tuple("Annotate").field(ann).field(doc).finish(),
            Doc::WithPosition(_) => f.write_str("WithPosition(..)"),
        }
    }
}
