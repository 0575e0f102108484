use bugeye::pass;

#[bugeye::test(name = "Alpha")]
fn alpha() {
    pass!("alpha");
}

#[bugeye::test(name = "Beta")]
fn beta() {
    pass!("beta");
}

#[bugeye::test(name = "Gamma")]
fn gamma() {
    pass!("gamma");
}

#[bugeye::test(name = "-l")]
fn dash() {
    pass!("dash");
}

bugeye::test_main!(alpha, beta, gamma, dash);
