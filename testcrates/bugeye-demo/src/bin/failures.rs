use bugeye::{fail, is, ok};

#[bugeye::test(name = "Arithmetic", plan = 3)]
fn arithmetic() {
    ok!(true);
    is!(1 + 1, 2);
    fail!("boom");
}

#[bugeye::test(name = "Comparison")]
fn comparison() {
    is!(2 + 2, 5, "wrong sum");
}

#[bugeye::test(name = "Passing")]
fn passing() {
    ok!(true, "fine");
}

bugeye::test_main!(arithmetic, comparison, passing);
