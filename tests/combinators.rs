use flexdoc::{
    concat, fold_with, intersperse, lines, paragraph, words, Doc, PrintOptions,
};

fn render_at(doc: &Doc, page_width: usize) -> String {
    let options = PrintOptions {
        page_width,
        ..PrintOptions::two_spaces()
    };
    doc.print(&options)
}

fn render(doc: &Doc) -> String {
    render_at(doc, 80)
}

#[test]
fn empty_is_the_append_identity() {
    let samples: Vec<Doc> = vec![
        Doc::text("plain"),
        Doc::text("x").append_break(Doc::text("y")).indent(),
        lines(["a", "b", "c"]),
    ];
    for doc in samples {
        let left = Doc::nil().append(doc.clone());
        let right = doc.clone().append(Doc::nil());
        assert_eq!(render(&left), render(&doc));
        assert_eq!(render(&right), render(&doc));
    }
}

#[test]
fn append_is_associative_under_rendering() {
    let a: Doc = Doc::text("one");
    let b: Doc = Doc::hardline().append(Doc::text("two"));
    let c: Doc = Doc::text("three").indent();
    let left = a.clone().append(b.clone()).append(c.clone());
    let right = a.append(b.append(c));
    for width in [4, 10, 80] {
        assert_eq!(render_at(&left, width), render_at(&right, width));
    }
}

#[test]
fn text_renders_verbatim_at_sufficient_width() {
    let doc: Doc = Doc::text("exactly this");
    assert_eq!(render_at(&doc, 12), "exactly this");
}

#[test]
fn lines_are_independent() {
    let a: Doc = Doc::text("left");
    let b: Doc = Doc::text("right");
    let both = lines([a.clone(), b.clone()]);
    assert_eq!(
        render(&both),
        format!("{}\n{}", render(&a), render(&b))
    );
}

#[test]
fn words_separates_with_spaces() {
    let doc: Doc = words(["a", "b", "c"]);
    assert_eq!(render(&doc), "a b c");
}

#[test]
fn words_skips_empty_documents() {
    let doc: Doc = words(["a", "", "b"]);
    assert_eq!(render(&doc), "a b");
}

#[test]
fn lines_skips_empty_documents() {
    let doc: Doc = lines(["a", "", "b"]);
    assert_eq!(render(&doc), "a\nb");
}

#[test]
fn paragraph_acts_like_words_when_it_fits() {
    let doc: Doc = paragraph(["a", "b", "c"]);
    assert_eq!(render(&doc), "a b c");
}

#[test]
fn paragraph_wraps_greedily() {
    // Each flex group spans the rest of the paragraph, so a line keeps
    // extra words only when the whole tail fits.
    let doc: Doc = paragraph(["aaa", "bbb", "ccc", "ddd"]);
    assert_eq!(render_at(&doc, 7), "aaa\nbbb\nccc ddd");
}

#[test]
fn fold_with_joins_only_non_empty_pairs() {
    let doc: Doc = fold_with(
        |a, b| a.append(Doc::text("-")).append(b),
        ["x", "", "y", ""],
    );
    assert_eq!(render(&doc), "x-y");
}

#[test]
fn fold_with_of_nothing_is_empty() {
    let doc: Doc = fold_with(|a, b| a.append(b), Vec::<Doc>::new());
    assert!(doc.is_empty());
}

#[test]
fn intersperse_keeps_separators_between_all_items() {
    let doc: Doc = intersperse(["a", "b", "c"], Doc::text(", "));
    assert_eq!(render(&doc), "a, b, c");
}

#[test]
fn concat_runs_documents_together() {
    let doc: Doc = concat(["ab", "cd"]);
    assert_eq!(render(&doc), "abcd");
}

#[test]
fn enclose_or_falls_back_on_empty() {
    let doc: Doc = Doc::nil().enclose_or("(", ")", "()");
    assert_eq!(render(&doc), "()");
    let doc: Doc = Doc::text("x").enclose_or("(", ")", "()");
    assert_eq!(render(&doc), "(x)");
}

#[test]
fn bracket_helpers() {
    let doc: Doc = Doc::text("x").parens();
    assert_eq!(render(&doc), "(x)");
    let doc: Doc = Doc::text("x").brackets();
    assert_eq!(render(&doc), "[x]");
    let doc: Doc = Doc::text("x").braces();
    assert_eq!(render(&doc), "{x}");
    let doc: Doc = Doc::text("x").double_quotes();
    assert_eq!(render(&doc), "\"x\"");
}
