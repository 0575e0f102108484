use bugeye::{bail_out, pass, subtest};

#[bugeye::test]
fn alpha() {
    pass!("alpha");
}

#[bugeye::test]
fn beta() {
    subtest!("setup", {
        pass!("connected");
        bail_out!("stop");
    });
    pass!("unreachable");
}

#[bugeye::test]
fn gamma() {
    pass!("gamma");
}

bugeye::test_main!(alpha, beta, gamma);
