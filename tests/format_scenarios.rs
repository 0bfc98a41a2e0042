//! End-to-end reformatting scenarios
//!
//! Each case feeds grammar source through the public API and checks the
//! exact canonical output, covering the layout conventions: header
//! normalization, alternation alignment, tight-binding operators, directive
//! grouping and comment placement.
use rstest::rstest;

#[rstest]
#[case::spacing_normalized("foo : \"a\" \"b\"", "foo: \"a\" \"b\"")]
#[case::alternation_aligned("foo: \"a\" | \"b\"", "foo: \"a\"\n   | \"b\"")]
#[case::star_binds_tightly("foo: \"a\" *", "foo: \"a\"*")]
#[case::question_binds_tightly("foo: a ?", "foo: a?")]
#[case::plus_stays_loose("foo: a+", "foo: a +")]
#[case::range_binds_tightly("CHAR: \"a\" .. \"z\"", "CHAR: \"a\"..\"z\"")]
#[case::priority_compacted("expr . 2 : a | b", "expr.2: a\n      | b")]
#[case::group_padding("foo: (a|b) c", "foo: ( a | b ) c")]
#[case::option_padding("foo: [a] b", "foo: [ a ] b")]
#[case::alias_spacing("foo: a b -> pair", "foo: a b -> pair")]
#[case::rules_blank_separated("foo: a\nbar: b", "foo: a\n\nbar: b")]
#[case::terminals_adjacent("AA: \"a\"\nBB: \"b\"", "AA: \"a\"\nBB: \"b\"")]
#[case::imports_adjacent(
    "%import common.WS\n%import common.NEWLINE",
    "%import common.WS\n%import common.NEWLINE"
)]
#[case::directive_kinds_separated(
    "%import common.WS\n%ignore WS",
    "%import common.WS\n\n%ignore WS"
)]
#[case::import_alias("%import common.WS -> SPACE", "%import common.WS -> SPACE")]
#[case::import_list("%import common (WS, NEWLINE)", "%import common ( WS, NEWLINE )")]
#[case::comment_above_header("// top\nfoo: \"a\"", "// top\nfoo: \"a\"")]
#[case::comment_block_separated("foo: a\n// note\nbar: b", "foo: a\n\n// note\nbar: b")]
#[case::comment_between_alternatives(
    "foo: \"a\"\n// note\n   | \"b\"",
    "foo: \"a\"\n\n// note\n   | \"b\""
)]
#[case::blank_runs_collapse("foo: a\n\n\n\nbar: b", "foo: a\n\nbar: b")]
fn reformats_to_canonical_layout(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(larkfmt::reformat(input).unwrap(), expected);
}

#[test]
fn comment_between_alternatives_is_a_fixed_point() {
    let formatted = larkfmt::reformat("foo: \"a\"\n// note\n   | \"b\"").unwrap();
    assert_eq!(larkfmt::reformat(&formatted).unwrap(), formatted);
}

#[rstest]
#[case::unknown_character("foo: @")]
#[case::missing_colon("foo \"a\"")]
#[case::unbalanced_group("foo: ( a | b")]
#[case::stray_arrow("-> foo")]
fn rejects_invalid_grammars(#[case] input: &str) {
    let err = larkfmt::reformat(input).unwrap_err();
    assert!(matches!(err, larkfmt::FormatError::InvalidGrammar(_)));
}

const KITCHEN_SINK: &str = r#"// A little expression grammar

?start: expr

expr: term "+" term   -> add
    | term

term: NUMBER
    | "(" expr ")"

NUMBER: /[0-9]+/

%import common.WS
%import common.NEWLINE

%ignore WS
"#;

const KITCHEN_SINK_FORMATTED: &str = r#"// A little expression grammar
?start: expr

expr: term "+" term -> add
    | term

term: NUMBER
    | "(" expr ")"
NUMBER: /[0-9]+/

%import common.WS
%import common.NEWLINE

%ignore WS"#;

#[test]
fn kitchen_sink_layout() {
    assert_eq!(
        larkfmt::reformat(KITCHEN_SINK).unwrap(),
        KITCHEN_SINK_FORMATTED
    );
}

#[test]
fn kitchen_sink_is_a_fixed_point() {
    let formatted = larkfmt::reformat(KITCHEN_SINK).unwrap();
    assert_eq!(larkfmt::reformat(&formatted).unwrap(), formatted);
}

#[test]
fn kitchen_sink_round_trips() {
    let (formatted, clean) = larkfmt::reformat_checked(KITCHEN_SINK).unwrap();
    assert!(clean, "round trip flagged mismatches for:\n{formatted}");
}
