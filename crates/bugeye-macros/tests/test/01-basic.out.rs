#[allow(non_upper_case_globals)]
const basic: ::bugeye::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::bugeye::_test_reexports as __bugeye;

    fn basic() {
        ok!(true);
    }

    __bugeye::TestCase {
        name: __bugeye::stringify!(basic),
        plan: __bugeye::Option::None,
        location: __bugeye::location!(),
        body: __bugeye::test_fn!(basic),
    }
};
