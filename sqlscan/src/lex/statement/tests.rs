// sqlscan - context-sensitive scanning of interactive SQL input.
// Copyright (C) 2025 Free Software Foundation, Inc.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt::Debug;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    lex::{Command, Incomplete},
    prompt::PromptStyle,
    settings::Settings,
};

use super::{Item, Statement, StatementScanner};

fn statement(text: &str, terminated: bool, line: usize) -> Item {
    Item::Statement(Statement::new(text, terminated, line))
}

fn command(name: &str, args: &[&str]) -> Item {
    Item::Command(Command::new(name, args.iter().copied()))
}

fn drain(scanner: &mut StatementScanner, items: &mut Vec<Item>) {
    while let Ok(item) = scanner.next_item() {
        items.push(item);
    }
}

#[track_caller]
fn check_slices<T: Debug + PartialEq>(what: &str, expected: &[T], actual: &[T]) {
    if actual != expected {
        eprintln!("{what} differ from expected:");
        for result in diff::slice(expected, actual) {
            match result {
                diff::Result::Left(left) => eprintln!("-{left:?}"),
                diff::Result::Both(left, _right) => eprintln!(" {left:?}"),
                diff::Result::Right(right) => eprintln!("+{right:?}"),
            }
        }
        panic!();
    }
}

/// Pushes `input` one line at a time, collecting items after each line and
/// the prompt that would be shown for the following line.
#[track_caller]
fn check_items_with(
    settings: &Settings,
    input: &str,
    expect_items: &[Item],
    expect_prompts: &[PromptStyle],
) {
    let mut scanner = StatementScanner::new(settings);
    let mut items = Vec::new();
    let mut prompts = Vec::new();
    for line in input.lines() {
        scanner.push_line(line);
        drain(&mut scanner, &mut items);
        prompts.push(scanner.prompt());
    }
    items.extend(scanner.finish());
    assert!(scanner.is_empty());

    check_slices("items", expect_items, &items);
    check_slices("prompts", expect_prompts, &prompts);
}

#[track_caller]
fn check_items(input: &str, expect_items: &[Item], expect_prompts: &[PromptStyle]) {
    check_items_with(&Settings::default(), input, expect_items, expect_prompts);
}

#[test]
fn test_simple_statements() {
    check_items(
        "select 1;\nselect 2;\n",
        &[statement("select 1;", true, 1), statement("select 2;", true, 2)],
        &[PromptStyle::First, PromptStyle::First],
    );
}

#[test]
fn test_several_statements_per_line() {
    check_items(
        "select 1; select 2;   select\n3;",
        &[
            statement("select 1;", true, 1),
            statement("select 2;", true, 1),
            statement("select\n3;", true, 1),
        ],
        &[PromptStyle::Later, PromptStyle::First],
    );
}

#[test]
fn test_multiline_statement() {
    check_items(
        "\n  select a,\n         b\n    from t\n   where a = 1;\n",
        &[statement(
            "select a,\n         b\n    from t\n   where a = 1;",
            true,
            2,
        )],
        &[
            PromptStyle::First,
            PromptStyle::Later,
            PromptStyle::Later,
            PromptStyle::Later,
            PromptStyle::First,
        ],
    );
}

#[test]
fn test_single_quote_spans_lines() {
    check_items(
        "select 'a;\nb;' as x;\n",
        &[statement("select 'a;\nb;' as x;", true, 1)],
        &[PromptStyle::SingleQuote, PromptStyle::First],
    );
}

#[test]
fn test_doubled_single_quotes() {
    check_items(
        "select 'it''s; fine';\nselect '';\n",
        &[
            statement("select 'it''s; fine';", true, 1),
            statement("select '';", true, 2),
        ],
        &[PromptStyle::First, PromptStyle::First],
    );
}

#[test]
fn test_double_quote_spans_lines() {
    check_items(
        "select \"My;\nColumn\" from t;\n",
        &[statement("select \"My;\nColumn\" from t;", true, 1)],
        &[PromptStyle::DoubleQuote, PromptStyle::First],
    );
}

#[test]
fn test_dollar_quotes() {
    check_items(
        r#"create function f() returns int as $body$
    select 1; -- 'not' the "end" $other$
$body$ language sql;
select $$a;b$$;
"#,
        &[
            statement(
                "create function f() returns int as $body$\n    select 1; -- 'not' the \"end\" $other$\n$body$ language sql;",
                true,
                1,
            ),
            statement("select $$a;b$$;", true, 4),
        ],
        &[
            PromptStyle::DollarQuote,
            PromptStyle::DollarQuote,
            PromptStyle::First,
            PromptStyle::First,
        ],
    );
}

#[test]
fn test_invalid_dollar_tags_are_literal() {
    check_items(
        "select $1, $2;\nselect $a b$;\n",
        &[
            statement("select $1, $2;", true, 1),
            statement("select $a b$;", true, 2),
        ],
        &[PromptStyle::First, PromptStyle::First],
    );
}

#[test]
fn test_dollar_quoting_disabled() {
    let settings = Settings {
        dollar_quoting: false,
        ..Settings::default()
    };
    check_items_with(
        &settings,
        "select $a$;\n",
        &[statement("select $a$;", true, 1)],
        &[PromptStyle::First],
    );

    check_items(
        "select $a$;\n",
        &[statement("select $a$;", false, 1)],
        &[PromptStyle::DollarQuote],
    );
}

#[test]
fn test_block_comments() {
    check_items(
        "select /* a;\nb; /* c */ 1;\n/* only a comment */\nselect 2;\n",
        &[
            statement("select /* a;\nb; /* c */ 1;", true, 1),
            statement("select 2;", true, 4),
        ],
        &[
            PromptStyle::Comment,
            PromptStyle::First,
            PromptStyle::First,
            PromptStyle::First,
        ],
    );
}

#[test]
fn test_unterminated_comment_at_end() {
    check_items("/* never\nclosed\n", &[], &[PromptStyle::Comment, PromptStyle::Comment]);
}

#[test]
fn test_comment_close_split_across_lines() {
    // `*` at the end of one line and `/` at the start of the next do not
    // close the comment, because a new-line separates them.
    check_items(
        "/* a *\n/ b */ select 1;\n",
        &[statement("select 1;", true, 2)],
        &[PromptStyle::Comment, PromptStyle::First],
    );
}

#[test]
fn test_line_comments() {
    check_items(
        "-- just a comment; really\n\nselect 1 -- ; not here\n;\n",
        &[statement("select 1 -- ; not here\n;", true, 3)],
        &[
            PromptStyle::First,
            PromptStyle::First,
            PromptStyle::Later,
            PromptStyle::First,
        ],
    );
}

#[test]
fn test_meta_commands() {
    check_items(
        "\\c mydb \\d mytable\n  \\q\n",
        &[
            command("c", &["mydb"]),
            command("d", &["mytable"]),
            command("q", &[]),
        ],
        &[PromptStyle::First, PromptStyle::First],
    );
}

#[test]
fn test_statement_before_meta_command() {
    check_items(
        "select 1\nfrom t \\g out.txt\nselect 2;\n",
        &[
            statement("select 1\nfrom t", false, 1),
            command("g", &["out.txt"]),
            statement("select 2;", true, 3),
        ],
        &[PromptStyle::Later, PromptStyle::First, PromptStyle::First],
    );
}

#[test]
fn test_backslash_inside_strings_and_comments() {
    check_items(
        "select 'a\\b', \"\\c\" /* \\d */;\n",
        &[statement("select 'a\\b', \"\\c\" /* \\d */;", true, 1)],
        &[PromptStyle::First],
    );
}

#[test]
fn test_meta_command_ends_at_line_end() {
    check_items(
        "\\set x 1\nselect 1;\n",
        &[command("set", &["x", "1"]), statement("select 1;", true, 2)],
        &[PromptStyle::First, PromptStyle::First],
    );
}

#[test]
fn test_empty_meta_command() {
    check_items("\\\n", &[Item::Command(Command::default())], &[PromptStyle::First]);
}

#[test]
fn test_unterminated_at_end() {
    check_items(
        "select 1\n",
        &[statement("select 1", false, 1)],
        &[PromptStyle::Later],
    );
    check_items(
        "select 'abc\n",
        &[statement("select 'abc", false, 1)],
        &[PromptStyle::SingleQuote],
    );
}

#[test]
fn test_reset() {
    let mut scanner = StatementScanner::default();
    scanner.push_line("select 'abc");
    assert_eq!(scanner.next_item(), Err(Incomplete));
    assert_eq!(scanner.prompt(), PromptStyle::SingleQuote);
    assert!(scanner.state().inside_single_quote());

    scanner.reset();
    assert!(scanner.is_empty());
    assert_eq!(scanner.prompt(), PromptStyle::First);

    scanner.push_line("select 1;");
    assert_eq!(scanner.next_item(), Ok(statement("select 1;", true, 2)));
    assert_eq!(scanner.next_item(), Err(Incomplete));
}

#[test]
fn test_sessions_are_independent() {
    let mut a = StatementScanner::default();
    let mut b = StatementScanner::default();
    a.push_line("select $x$");
    b.push_line("select 1;");
    assert_eq!(a.next_item(), Err(Incomplete));
    assert_eq!(b.next_item(), Ok(statement("select 1;", true, 1)));
    assert_eq!(a.state().dollar_tag(), Some("x"));
    assert_eq!(b.state().dollar_tag(), None);
}

/// Draining after every line, or only occasionally, must not change the
/// result, because scanning resumes where it left off.
#[test]
fn test_draining_schedule_does_not_matter() {
    let input = r#"select 'a
b', "c;
d" from t; -- x;
/* y;
 z */ select $f$ ;
 $f$; \echo hi \g
select 1
;
"#;
    let mut expected = Vec::new();
    let mut scanner = StatementScanner::default();
    for line in input.lines() {
        scanner.push_line(line);
    }
    drain(&mut scanner, &mut expected);
    expected.extend(scanner.finish());
    assert_eq!(expected.len(), 5);

    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..50 {
        let mut items = Vec::new();
        let mut scanner = StatementScanner::default();
        for line in input.lines() {
            scanner.push_line(line);
            if rng.random_bool(0.5) {
                drain(&mut scanner, &mut items);
            }
        }
        drain(&mut scanner, &mut items);
        items.extend(scanner.finish());
        check_slices("items", &expected, &items);
    }
}
