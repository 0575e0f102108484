fn basic() {
    ok!(true);
}
