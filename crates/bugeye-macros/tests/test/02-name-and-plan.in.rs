pub fn addition() {
    is!(1 + 1, 2);
    isnt!(1 + 1, 3);
}
