use flexdoc::{docs, text_paragraph, Doc, PrintOptions};

macro_rules! test {
    ($options: expr, $actual: expr, $expected: expr) => {
        let doc: Doc = $actual;
        let s = doc.print(&$options);
        difference::assert_diff!(&s, $expected, "\n", 0);
    };
    ($actual: expr, $expected: expr) => {
        test!(PrintOptions::two_spaces(), $actual, $expected)
    };
}

fn at_width(page_width: usize) -> PrintOptions {
    PrintOptions {
        page_width,
        ..PrintOptions::two_spaces()
    }
}

#[test]
fn empty_doc() {
    test!(Doc::nil(), "");
}

#[test]
fn append_space_puts_one_space_between() {
    test!(
        Doc::text("hello").append_space(Doc::text("world")),
        "hello world"
    );
}

#[test]
fn space_break_is_a_break_outside_flex_groups() {
    test!(docs!["a", Doc::space_break(), "b"], "a\nb");
}

fn a_flex_b() -> Doc<'static> {
    Doc::text("a")
        .append(Doc::space_break())
        .append(Doc::text("b"))
        .flex_group()
}

#[test]
fn flex_group_collapses_when_it_fits() {
    test!(a_flex_b(), "a b");
}

#[test]
fn flex_group_breaks_when_it_spills() {
    test!(at_width(2), a_flex_b(), "a\nb");
}

#[test]
fn indent_starts_at_the_next_line() {
    test!(
        Doc::text("x").append_break(Doc::text("y")).indent(),
        "x\n  y"
    );
}

#[test]
fn align_current_column_pins_later_lines() {
    test!(
        Doc::text("--- ").append(
            Doc::text("foo")
                .append_break(Doc::text("bar"))
                .align_current_column(),
        ),
        "--- foo\n    bar"
    );
}

#[test]
fn text_paragraph_reflows() {
    test!(
        text_paragraph("  hello\n  world  friends  "),
        "hello world friends"
    );
    test!(
        at_width(6),
        text_paragraph("  hello\n  world  friends  "),
        "hello\nworld\nfriends"
    );
}

#[test]
fn block() {
    test!(
        docs![
            "{",
            docs![Doc::hardline(), "two", Doc::hardline(), "words"].indent(),
            Doc::hardline(),
            "}",
        ],
        "{\n  two\n  words\n}"
    );
}

#[test]
fn nested_indents_accumulate() {
    test!(
        docs![
            "a",
            docs![
                Doc::hardline(),
                "b",
                docs![Doc::hardline(), "c"].indent(),
            ]
            .indent(),
        ],
        "a\n  b\n    c"
    );
}

#[test]
fn align_shifts_by_exact_width() {
    test!(docs!["a", docs![Doc::hardline(), "b"].align(3)], "a\n   b");
}

#[test]
fn blank_lines_carry_no_indentation() {
    test!(Doc::hardline().append(Doc::hardline()).indent(), "\n\n");
    test!(
        docs!["a", Doc::hardline(), Doc::hardline(), "b"].indent(),
        "a\n\n  b"
    );
}

#[test]
fn four_spaces_preset() {
    test!(
        PrintOptions::four_spaces(),
        docs!["do", docs![Doc::hardline(), "x"].indent()],
        "do\n    x"
    );
}

#[test]
fn tabs_preset() {
    test!(
        PrintOptions::tabs(),
        docs!["do", docs![Doc::hardline(), "x"].indent()],
        "do\n\tx"
    );
}

#[test]
fn usize_max_page_width() {
    test!(
        at_width(usize::MAX),
        docs!["test", Doc::space_break(), "test"].flex_group(),
        "test test"
    );
}

#[test]
fn ribbon_ratio_narrows_the_usable_width() {
    let options = PrintOptions {
        page_width: 10,
        ribbon_ratio: 0.5,
        ..PrintOptions::two_spaces()
    };
    test!(
        options,
        docs!["aaaa", Doc::space_break(), "bb"].flex_group(),
        "aaaa\nbb"
    );
}

#[test]
fn ribbon_ratio_above_one_is_clamped() {
    let options = PrintOptions {
        page_width: 4,
        ribbon_ratio: 2.0,
        ..PrintOptions::two_spaces()
    };
    test!(
        options,
        docs!["aaa", Doc::space_break(), "b"].flex_group(),
        "aaa\nb"
    );
}

#[test]
fn zero_ribbon_disables_flex_groups() {
    let options = PrintOptions {
        ribbon_ratio: 0.0,
        ..PrintOptions::two_spaces()
    };
    test!(
        options,
        docs!["a", Doc::space_break(), "b"].flex_group(),
        "a\nb"
    );
}

#[test]
fn with_position_reports_the_column() {
    test!(
        docs![
            "ab",
            Doc::with_position(|position| Doc::as_string(position.column)),
        ],
        "ab2"
    );
}

#[test]
fn with_position_sees_pending_indentation_as_applied() {
    test!(
        docs![
            Doc::hardline(),
            Doc::with_position(|position| Doc::as_string(position.column)).indent(),
        ],
        "\n  2"
    );
}

#[test]
fn annotations_are_invisible_in_plain_text() {
    let doc: Doc<'static, u8> = Doc::text("x").annotate(7).append(Doc::text("y"));
    assert_eq!(doc.print(&PrintOptions::two_spaces()), "xy");
}

#[test]
fn non_ascii_is_not_byte_length() {
    test!(
        at_width(8),
        docs!["ÅÄÖ", Doc::space_break(), "test"].flex_group(),
        "ÅÄÖ test"
    );
}

#[test]
fn pretty_display_adapter() {
    let options = PrintOptions::two_spaces();
    let doc: Doc = docs!["a", Doc::hardline(), "b"];
    assert_eq!(format!("{}", doc.pretty(&options)), "a\nb");
}

#[test]
fn stress_append_left_assoc() {
    let mut doc: Doc = Doc::nil();
    for _ in 0..4_000 {
        doc = doc.append("a");
    }
    assert_eq!(doc.print(&PrintOptions::two_spaces()).len(), 4_000);
}

#[test]
fn stress_append_right_assoc() {
    let mut doc: Doc = Doc::nil();
    for _ in 0..4_000 {
        doc = Doc::text("a").append(doc);
    }
    assert_eq!(doc.print(&PrintOptions::two_spaces()).len(), 4_000);
}
