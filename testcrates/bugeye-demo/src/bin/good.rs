use bugeye::{diag, is, isnt, ok, pass, skip, subtest, todo};
use bugeye_demo::{parse_version, BoundedStack};

#[bugeye::test(name = "Empty stack", plan = 4)]
fn empty_stack() {
    let mut stack = BoundedStack::<i32>::new(2);
    ok!(stack.is_empty());
    is!(stack.len(), 0);
    is!(stack.pop(), None);
    is!(stack.peek(), None, "nothing to peek at");
}

#[bugeye::test(name = "Push and pop")]
fn push_and_pop() -> anyhow::Result<()> {
    let mut stack = BoundedStack::new(2);
    stack.push("a")?;
    stack.push("b")?;
    ok!(stack.is_full(), "two items fill the stack");
    is!(stack.as_slice(), &["a", "b"][..]);

    subtest!("overflow", plan = 2, {
        let rejected = stack.clone().push("c");
        ok!(rejected.is_err());
        isnt!(stack.len(), 3);
    });

    is!(stack.pop(), Some("b"));
    is!(stack.pop(), Some("a"));
    Ok(())
}

#[bugeye::test(name = "Versions")]
fn versions() -> anyhow::Result<()> {
    is!(parse_version("1.2.3")?, (1, 2, 3));
    ok!(parse_version("1.2").is_err(), "the patch version is required");

    skip!(cfg!(not(unix)), 1, "only meaningful on unix", {
        is!(parse_version(" 0.1.0\n")?, (0, 1, 0), "surrounding whitespace");
    });

    todo!("leading 'v' is not understood yet", {
        ok!(parse_version("v1.0.0").is_ok());
    });

    diag!("checked {} formats", 4);
    pass!();
    Ok(())
}

bugeye::test_main!(empty_stack, push_and_pop, versions);
