use commandlines::{Command, Error};

fn chars(c: &Command) -> String {
    c.mops().iter().collect()
}

fn switches(c: &Command) -> Vec<&str> {
    c.switches().iter().collect()
}

fn defs(c: &Command) -> Vec<(&str, &str)> {
    c.definitions().iter().collect()
}

#[test]
fn argc_matches_token_count() {
    let cases: [&[&str]; 4] = [&[], &["a"], &["-a", "--b", "c=d"], &["--", "--", "x"]];
    for tokens in cases {
        let c = Command::new(tokens.iter().copied());
        assert_eq!(c.argc(), tokens.len());
        assert_eq!(c.has_no_args(), c.argc() == 0);
        assert_eq!(c.has_no_args(), !c.has_at_least_one_arg());
    }
}

#[test]
fn equals_definition_is_not_a_switch_or_mop() {
    let c = Command::new(["-x=v"]);
    assert_eq!(defs(&c), vec![("x", "v")]);
    assert!(c.switches().is_empty());
    assert!(c.mops().is_empty());
}

#[test]
fn parsing_is_deterministic() {
    let tokens = ["-o", "a", "-rnj", "--flag", "--k=v", "pos"];
    let first = Command::new(tokens);
    let second = Command::new(tokens);
    assert_eq!(first, second);
    assert_eq!(first.describe(), second.describe());
}

#[test]
fn bundle_populates_both_mops_and_switches() {
    let c = Command::new(["-abc"]);
    assert_eq!(chars(&c), "abc");
    assert_eq!(switches(&c), vec!["abc"]);
}

#[test]
fn scenario_mixed_options() {
    let c = Command::new([
        "subcmd",
        "-s",
        "--long",
        "-n",
        "shortdef",
        "--name",
        "longdef",
        "--nameeq=longdefeq",
        "lastpos",
    ]);
    assert_eq!(c.argc(), 9);
    assert_eq!(switches(&c), vec!["s", "long", "n", "name"]);
    assert_eq!(
        defs(&c),
        vec![("n", "shortdef"), ("name", "longdef"), ("nameeq", "longdefeq")]
    );
    assert_eq!(c.arglp(), "lastpos");
}

#[test]
fn scenario_short_option_bundle() {
    let c = Command::new(["-mops", "-t", "lastpos"]);
    assert_eq!(chars(&c), "mops");
    assert_eq!(switches(&c), vec!["mops", "t"]);
    assert_eq!(defs(&c), vec![("t", "lastpos")]);
}

#[test]
fn scenario_repeated_option() {
    let c = Command::new(["-o", "path1", "-o", "path2", "-t", "--flag"]);
    let mdefs: Vec<(&str, &[String])> = c.multi_definitions().iter().collect();
    assert_eq!(mdefs.len(), 1);
    assert_eq!(mdefs[0].0, "o");
    assert_eq!(mdefs[0].1, ["path1", "path2"]);
    assert_eq!(defs(&c), vec![("o", "path2")]);
}

#[test]
fn scenario_empty_command() {
    let c = Command::new(Vec::<String>::new());
    assert_eq!(c.argc(), 0);
    assert!(c.has_no_args());
    assert!(c.switches().is_empty());
    assert!(c.mops().is_empty());
    assert!(c.definitions().is_empty());
    assert!(c.multi_definitions().is_empty());
    assert_eq!(
        c.get_arg_after("x"),
        Err(Error::ArgumentNotFound("x".to_string()))
    );
}

#[test]
fn scenario_double_dash() {
    let c = Command::new(["-t", "--name", "--", "lastpos", "-n", "--long", "another"]);
    assert!(c.has_double_dash());
    assert_eq!(
        c.get_args_after_double_dash().unwrap(),
        ["lastpos", "-n", "--long", "another"]
    );
    assert_eq!(switches(&c), vec!["t", "name"]);
    assert!(c.definitions().is_empty());
    assert!(c.multi_definitions().is_empty());
}

#[test]
fn subcommand_dispatch() {
    let c = Command::new(["remote", "add", "origin", "--push"]);
    assert!(c.has_command_sequence(["remote", "add"]));
    assert!(c.next_arg_is_in("remote", ["add", "remove"]).unwrap());
    assert_eq!(c.get_arg_after("add").unwrap(), "origin");
    assert!(c.has_args_after("add", 2).unwrap());
    assert!(c.has_all_switches("push"));
}

#[test]
fn defaults_fill_in_for_missing_definitions() {
    let mut c = Command::new(["--level", "2"]);
    c.set_defaults([("level", "1"), ("format", "plain")]);

    let level = c.get_definition("level").or_else(|_| c.get_default("level"));
    let format = c.get_definition("format").or_else(|_| c.get_default("format"));
    assert_eq!(level.unwrap(), "2");
    assert_eq!(format.unwrap(), "plain");
}
