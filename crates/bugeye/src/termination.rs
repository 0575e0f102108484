/// Return values accepted from test bodies.
///
/// A body either returns nothing, or a `Result` whose error is reported as an
/// unexpected error of the running test.
pub trait Termination: sealed::Sealed {
    #[doc(hidden)] // private API
    fn into_result(self) -> anyhow::Result<()>;
}

impl Termination for () {
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<E> Termination for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        self.map_err(Into::into)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for () {}

    impl<E> Sealed for Result<(), E> where E: Into<anyhow::Error> {}
}
