#[bugeye(crate = crate)]
#[allow(unused_variables)]
fn attributes() {
    let x = 1;
    pass!();
}
