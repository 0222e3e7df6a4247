use crate::Doc;

/// A single document concatenating all the given documents.
pub fn concat<'a, A, I>(docs: I) -> Doc<'a, A>
where
    I: IntoIterator,
    I::Item: Into<Doc<'a, A>>,
{
    docs.into_iter().fold(Doc::nil(), |acc, doc| acc.append(doc))
}

/// A single document interspersing the given separator between the given
/// documents. For example, if the documents are `[A, B, C]`, this yields
/// `[A, S, B, S, C]`.
pub fn intersperse<'a, A, I, S>(docs: I, separator: S) -> Doc<'a, A>
where
    A: Clone,
    I: IntoIterator,
    I::Item: Into<Doc<'a, A>>,
    S: Into<Doc<'a, A>>,
{
    let separator = separator.into();
    let mut result = Doc::nil();
    let mut iter = docs.into_iter();

    if let Some(first) = iter.next() {
        result = result.append(first);

        for doc in iter {
            result = result.append(separator.clone());
            result = result.append(doc);
        }
    }

    result
}

/// Right-fold the documents with `f`. The fold applies `f` only when both
/// sides are non-empty, so empty documents vanish without a trace of their
/// separator.
pub fn fold_with<'a, A, I, F>(f: F, docs: I) -> Doc<'a, A>
where
    I: IntoIterator,
    I::Item: Into<Doc<'a, A>>,
    F: Fn(Doc<'a, A>, Doc<'a, A>) -> Doc<'a, A>,
{
    let docs: Vec<Doc<'a, A>> = docs.into_iter().map(Into::into).collect();
    docs.into_iter().rev().fold(Doc::nil(), |acc, doc| {
        if doc.is_empty() {
            acc
        } else if acc.is_empty() {
            doc
        } else {
            f(doc, acc)
        }
    })
}

/// The documents on consecutive lines. Empty documents are skipped.
pub fn lines<'a, A, I>(docs: I) -> Doc<'a, A>
where
    I: IntoIterator,
    I::Item: Into<Doc<'a, A>>,
{
    fold_with(|a, b| a.append_break(b), docs)
}

/// The documents separated by single spaces. Empty documents are skipped.
pub fn words<'a, A, I>(docs: I) -> Doc<'a, A>
where
    I: IntoIterator,
    I::Item: Into<Doc<'a, A>>,
{
    fold_with(|a, b| a.append_space(b), docs)
}

/// The documents joined with collapsible spaces, so the sequence wraps
/// like prose once the line fills up.
pub fn paragraph<'a, A, I>(docs: I) -> Doc<'a, A>
where
    I: IntoIterator,
    I::Item: Into<Doc<'a, A>>,
{
    fold_with(|a, b| a.append_space_break(b), docs)
}

/// Trim `text`, split it on whitespace runs, and reflow the words as a
/// [`paragraph`].
pub fn text_paragraph<'a, A>(text: &'a str) -> Doc<'a, A> {
    paragraph(text.split_whitespace().map(|word| Doc::text(word)))
}
