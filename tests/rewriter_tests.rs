use sqlexplainer::{DEFAULT_DIRECTIVE, ScriptRewriter, StatementSpan};

fn span(start: usize, end: usize) -> StatementSpan {
    StatementSpan { start, end }
}

#[test]
fn test_empty_span_set_returns_script_unchanged() {
    let script = "CREATE TABLE t (a text);";
    let rewriter = ScriptRewriter::default();
    assert_eq!(rewriter.rewrite(script, &[]), script);
}

#[test]
fn test_span_order_does_not_affect_output() {
    let script = "abcdefghijklmnopqrstuvwxyz";
    let rewriter = ScriptRewriter::default();

    let orderings = [
        vec![span(2, 5), span(10, 12), span(3, 4)],
        vec![span(10, 12), span(3, 4), span(2, 5)],
        vec![span(3, 4), span(2, 5), span(10, 12)],
    ];
    let outputs: Vec<String> = orderings
        .iter()
        .map(|spans| rewriter.rewrite(script, spans))
        .collect();
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}

#[test]
fn test_nested_span_is_skipped() {
    let script = "x".repeat(50);
    let rewriter = ScriptRewriter::default();

    let output = rewriter.rewrite(&script, &[span(0, 40), span(5, 10)]);
    assert_eq!(output, format!("{DEFAULT_DIRECTIVE}{script}"));
    assert_eq!(output.matches(DEFAULT_DIRECTIVE).count(), 1);
}

#[test]
fn test_tie_on_start_selects_smaller_end_first() {
    let script = "abcdefghijklmnopqrst";
    let rewriter = ScriptRewriter::default();

    // The smaller of the two spans starting at 5 wins, which leaves room for
    // the span starting at 12 to be selected as well.
    let output = rewriter.rewrite(script, &[span(5, 20), span(5, 10), span(12, 15)]);
    assert_eq!(
        output,
        format!("abcde{DEFAULT_DIRECTIVE}fghijkl{DEFAULT_DIRECTIVE}mnopqrst")
    );
}

#[test]
fn test_span_starting_at_previous_end_is_skipped() {
    let script = "abcdefghijklmnopqrst";
    let rewriter = ScriptRewriter::default();

    let output = rewriter.rewrite(script, &[span(0, 9), span(9, 20)]);
    assert_eq!(output, format!("{DEFAULT_DIRECTIVE}{script}"));
    assert_eq!(output.matches(DEFAULT_DIRECTIVE).count(), 1);
}

#[test]
fn test_span_starting_past_previous_end_is_selected() {
    let script = "abcdefghijklmnopqrst";
    let rewriter = ScriptRewriter::default();

    let output = rewriter.rewrite(script, &[span(0, 9), span(10, 15)]);
    assert_eq!(
        output,
        format!("{DEFAULT_DIRECTIVE}abcdefghij{DEFAULT_DIRECTIVE}klmnopqrst")
    );
}

#[test]
fn test_whole_script_span_has_no_trailing_duplicate() {
    let script = "SELECT * FROM A;";
    let rewriter = ScriptRewriter::default();

    let output = rewriter.rewrite(script, &[span(0, script.len())]);
    assert_eq!(output, format!("{DEFAULT_DIRECTIVE}{script}"));
}

#[test]
fn test_directive_removal_reproduces_script() {
    let script = "abcdefghijklmnopqrst";
    let rewriter = ScriptRewriter::default();

    let output = rewriter.rewrite(script, &[span(5, 20), span(5, 10), span(12, 15)]);
    assert_eq!(output.replace(DEFAULT_DIRECTIVE, ""), script);
}

#[test]
fn test_custom_directive() {
    let rewriter = ScriptRewriter::with_directive(" PROFILE ");
    assert_eq!(rewriter.rewrite("abcdef", &[span(3, 6)]), "abc PROFILE def");
}
