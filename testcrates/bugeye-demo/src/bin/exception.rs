use bugeye::pass;
use bugeye_demo::parse_version;

#[bugeye::test(name = "Error")]
fn error() -> anyhow::Result<()> {
    pass!("before");
    parse_version("one.two.three")?;
    pass!("after");
    Ok(())
}

#[bugeye::test(name = "Panic", plan = 2)]
fn panic() {
    pass!("before");
    let items: Vec<u32> = vec![];
    let _ = items[1];
}

#[bugeye::test(name = "Survivor")]
fn survivor() {
    pass!("still running");
}

bugeye::test_main!(error, panic, survivor);
