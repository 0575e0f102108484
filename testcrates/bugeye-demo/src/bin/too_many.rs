use bugeye::ok;

#[bugeye::test(name = "Overplanned", plan = 1)]
fn overplanned() {
    for _ in 0..3 {
        ok!(true);
    }
}

#[bugeye::test(name = "Underplanned", plan = 3)]
fn underplanned() {
    ok!(true);
}

bugeye::test_main!(overplanned, underplanned);
