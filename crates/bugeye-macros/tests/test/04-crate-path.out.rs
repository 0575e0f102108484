#[allow(non_upper_case_globals)]
const attributes: crate::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use crate::_test_reexports as __bugeye;

    #[allow(unused_variables)]
    fn attributes() {
        let x = 1;
        pass!();
    }

    __bugeye::TestCase {
        name: __bugeye::stringify!(attributes),
        plan: __bugeye::Option::Some(1),
        location: __bugeye::location!(),
        body: __bugeye::test_fn!(attributes),
    }
};
