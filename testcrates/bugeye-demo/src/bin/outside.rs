use bugeye::{pass, ConfigError, Registry};

#[bugeye::test]
fn never_runs() {
    pass!();
}

fn declare_early(registry: &mut Registry) -> Result<(), ConfigError> {
    pass!("too early");
    registry.declare("Late", None, || pass!())?;
    Ok(())
}

bugeye::test_main!(never_runs, declare_early);
