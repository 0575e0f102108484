use assert_cmd::Command;
use predicates::{
    prelude::PredicateBooleanExt,
    str::{contains, is_empty},
};

fn demo(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.arg("--color=never");
    cmd
}

#[test]
fn passing_program() {
    demo("good")
        .assert()
        .code(0)
        .stdout(contains("1..3\n"))
        .stdout(contains("    1..4\n    ok 1\n    ok 2\n    ok 3\n    ok 4 - nothing to peek at\n"))
        .stdout(contains("        1..2\n        ok 1\n        ok 2\n    ok 3 - overflow\n"))
        .stdout(contains(" # TODO leading 'v' is not understood yet\n"))
        .stdout(contains("    # checked 4 formats\n"))
        .stdout(contains("ok 3 - Versions\n"))
        .stdout(contains("# All 3 tests passed\n"));
}

#[test]
fn failing_assertions() {
    demo("failures")
        .assert()
        .code(3)
        .stdout(contains(
            "    1..3\n    ok 1\n    ok 2\n    not ok 3 - boom\n    # Assertion failed at ",
        ))
        .stdout(contains("not ok 1 - Arithmetic\n"))
        .stdout(contains(
            "    # Got:      4\n    # Expected: 5\n    1..1\nnot ok 2 - Comparison\n",
        ))
        .stdout(contains("ok 3 - Passing\n"))
        .stdout(contains(
            "# Arithmetic ... not ok\n# Comparison ... not ok\n# Passing ...... ok\n# 2 of 3 tests failed!\n",
        ));
}

#[test]
fn plan_mismatch() {
    demo("too_many")
        .assert()
        .code(3)
        .stdout(contains(
            "    1..1\n    ok 1\n    ok 2\n    ok 3\n    # Looks like you only planned 1 test but 3 were run\n",
        ))
        .stdout(contains("    # Looks like you planned 3 tests but only 1 was run\n"))
        .stdout(contains("not ok 1 - Overplanned\n"))
        .stdout(contains("not ok 2 - Underplanned\n"));
}

#[test]
fn bail_out_stops_everything() {
    demo("bailout")
        .assert()
        .code(3)
        .stdout(contains("ok 1 - alpha\n"))
        .stdout(contains("        ok 1 - connected\nBail out! stop At "))
        .stdout(contains("bailout.rs:12\n"))
        .stdout(contains("gamma").not())
        .stdout(contains("unreachable").not())
        .stdout(contains("tests passed").not());
}

#[test]
fn errors_and_panics() {
    demo("exception")
        .assert()
        .code(3)
        .stdout(contains("    ok 1 - before\n    # Caught exception: invalid major version 'one'"))
        .stdout(contains("after").not())
        .stdout(contains("not ok 1 - Error\n"))
        .stdout(contains("    # Caught exception: index out of bounds"))
        .stdout(contains("    # Looks like you planned 2 tests but only 1 was run\n"))
        .stdout(contains("not ok 2 - Panic\n"))
        .stdout(contains("ok 3 - Survivor\n"))
        .stdout(contains("# 2 of 3 tests failed!\n"));
}

#[test]
fn runs_everything_in_name_order() {
    demo("selection")
        .assert()
        .code(0)
        .stdout(contains(
            "ok 1 - -l\n    ok 1 - alpha\n    1..1\nok 2 - Alpha\n    ok 1 - beta\n    1..1\nok 3 - Beta\n",
        ))
        .stdout(contains("ok 4 - Gamma\n"));
}

#[test]
fn select_by_name() {
    demo("selection").arg("Beta").assert().code(0).stdout(
        "1..1\n    ok 1 - beta\n    1..1\nok 1 - Beta\n# Beta ... ok\n# All 1 test passed\n",
    );
}

#[test]
fn select_by_pattern() {
    demo("selection")
        .args(&["-r", "^A"])
        .assert()
        .code(0)
        .stdout(contains("1..1\n"))
        .stdout(contains("ok 1 - Alpha\n"))
        .stdout(contains("Beta").not().and(contains("Gamma").not()));

    demo("selection")
        .args(&["-ir", "^(a|b)"])
        .assert()
        .code(0)
        .stdout(contains("ok 1 - Alpha\n"))
        .stdout(contains("ok 2 - Beta\n"))
        .stdout(contains("Gamma").not());
}

#[test]
fn list_tests() {
    demo("selection")
        .arg("-l")
        .assert()
        .code(0)
        .stdout("-l\nAlpha\nBeta\nGamma\n");
}

#[test]
fn names_after_double_dash() {
    demo("selection")
        .args(&["--", "-l"])
        .assert()
        .code(0)
        .stdout(contains("ok 1 - -l\n"))
        .stdout(contains("Alpha").not());
}

#[test]
fn bundled_flags() {
    demo("selection")
        .args(&["-iI", "beta", "delta"])
        .assert()
        .code(0)
        .stdout(contains("ok 1 - Beta\n"))
        .stdout(contains("Alpha").not());
}

#[test]
fn configuration_errors() {
    demo("selection")
        .arg("Delta")
        .assert()
        .code(2)
        .stdout(is_empty())
        .stderr(contains("No test named 'Delta'"));

    demo("selection")
        .args(&["-r", "^Z"])
        .assert()
        .code(2)
        .stderr(contains("No test matches /^Z/"));

    demo("selection")
        .args(&["-i", "-r", "^z"])
        .assert()
        .code(2)
        .stderr(contains("No test matches /^z/i"));

    demo("selection")
        .arg("--bogus")
        .assert()
        .code(2)
        .stderr(contains("Unrecognized option"));

    demo("selection")
        .arg("-r")
        .assert()
        .code(2)
        .stderr(contains("Argument to option 'r' missing"));
}

#[test]
fn assertion_while_declaring_tests() {
    demo("outside")
        .assert()
        .code(2)
        .stdout(is_empty())
        .stderr(contains("No current execution to which to push assertion"))
        .stderr(contains("panicked").not());
}

#[test]
fn ignore_missing() {
    demo("selection")
        .args(&["-I", "Delta"])
        .assert()
        .code(0)
        .stdout(is_empty());
}

#[test]
fn help() {
    demo("selection")
        .arg("--help")
        .assert()
        .code(0)
        .stdout(contains("Usage: selection"))
        .stdout(contains("--case-insensitive"));
}
