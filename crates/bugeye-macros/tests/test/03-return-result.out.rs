#[allow(non_upper_case_globals)]
const return_result: ::bugeye::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::bugeye::_test_reexports as __bugeye;

    fn return_result() -> std::io::Result<()>
    where
        std::io::Result<()>: __bugeye::Termination
    {
        Ok(())
    }

    __bugeye::TestCase {
        name: __bugeye::stringify!(return_result),
        plan: __bugeye::Option::None,
        location: __bugeye::location!(),
        body: __bugeye::test_fn!(return_result),
    }
};
