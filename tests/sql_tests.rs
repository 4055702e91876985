use refmt::sql;

#[test]
fn lone_keyword_takes_its_first_argument() {
    assert_eq!(sql::compact("SELECT\nid, name"), "SELECT id, name");
}

#[test]
fn comma_continuations_merge() {
    assert_eq!(sql::compact("col_a,\ncol_b"), "col_a, col_b");
}

#[test]
fn comma_chains_collapse_onto_one_line() {
    assert_eq!(sql::compact("a,\nb,\nc"), "a, b, c");
}

#[test]
fn keyword_lines_do_not_merge_into_each_other() {
    assert_eq!(sql::compact("SELECT\nFROM t"), "SELECT\nFROM t");
}

#[test]
fn keyword_prefixes_block_merging() {
    // "ASSET_ID" starts with the keyword "AS", so the merge is refused.
    assert_eq!(sql::compact("AS\nASSET_ID"), "AS\nASSET_ID");
}

#[test]
fn comments_are_never_absorbed() {
    assert_eq!(sql::compact("SELECT\n-- a comment"), "SELECT\n-- a comment");
    assert_eq!(sql::compact("col_a,\n-- a comment"), "col_a,\n-- a comment");
}

#[test]
fn join_clauses_absorb_on_and_and_chains() {
    let input = "LEFT JOIN orders o\nON o.customer_id = c.id\nAND o.open = TRUE";
    assert_eq!(
        sql::compact(input),
        "LEFT JOIN orders o ON o.customer_id = c.id AND o.open = TRUE"
    );
}

#[test]
fn merges_respect_the_line_length_budget() {
    let long_list = format!("{},\nnext_col", "x".repeat(118));
    assert_eq!(sql::compact(&long_list), long_list, "oversized merge must not fire");

    let short_list = format!("{},\nnext_col", "x".repeat(80));
    assert_eq!(sql::compact(&short_list), format!("{}, next_col", "x".repeat(80)));
}

#[test]
fn merged_lines_keep_merging_with_what_follows() {
    // SELECT takes its argument list, then the comma continuation fires on
    // the merged result.
    let input = "SELECT\nid,\nname";
    assert_eq!(sql::compact(input), "SELECT id, name");
}

#[test]
fn short_parenthesized_groups_collapse() {
    let input = "WHERE id IN (\n  1,\n  2,\n  3\n)";
    assert_eq!(sql::compact(input), "WHERE id IN (1, 2, 3)");
}

#[test]
fn long_parenthesized_groups_stay_multi_line() {
    let first = "a".repeat(60);
    let second = "b".repeat(60);
    let input = format!("f(\n{}\n{}\n)", first, second);
    // The boundary newlines vanish, but the interior one is kept because
    // the joined group would exceed the budget.
    assert_eq!(sql::compact(&input), format!("f({}\n{})", first, second));
}

#[test]
fn indented_continuations_do_not_trigger_the_chain_rule() {
    // The AND prefix is only recognized at the start of the line.
    let input = "  AND a = 1\nAND b = 2";
    assert_eq!(sql::compact(input), "  AND a = 1\nAND b = 2");
}

#[test]
fn non_sql_text_passes_through_unchanged() {
    let input = "hello world\nthis is not a query";
    assert_eq!(sql::compact(input), input);
}

#[test]
fn empty_input_is_returned_as_is() {
    assert_eq!(sql::compact(""), "");
}

#[test]
fn compaction_never_alters_token_content() {
    let input = "SELECT\n  u.id,\n  u.name\nFROM users u\nWHERE u.active = TRUE";
    let output = sql::compact(input);
    let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    assert_eq!(strip(input), strip(&output));
}
