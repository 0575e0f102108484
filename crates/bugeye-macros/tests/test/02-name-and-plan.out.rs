#[allow(non_upper_case_globals)]
pub const addition: ::bugeye::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::bugeye::_test_reexports as __bugeye;

    pub fn addition() {
        is!(1 + 1, 2);
        isnt!(1 + 1, 3);
    }

    __bugeye::TestCase {
        name: "Addition",
        plan: __bugeye::Option::Some(2),
        location: __bugeye::location!(),
        body: __bugeye::test_fn!(addition),
    }
};
