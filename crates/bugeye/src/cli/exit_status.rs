/// The exit status of a test program.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExitStatus(pub(crate) i32);

impl ExitStatus {
    /// Every selected test passed, or nothing was asked to run.
    pub const OK: Self = Self(0);

    /// The program was declared or invoked incorrectly.
    pub const CONFIGURATION: Self = Self(2);

    /// At least one test failed, or the run was bailed out.
    pub const TESTS_FAILED: Self = Self(3);

    /// Return whether the status is successful or not.
    #[inline]
    pub fn success(self) -> bool {
        self.code() == 0
    }

    /// Return the raw exit code.
    #[inline]
    pub fn code(self) -> i32 {
        self.0
    }

    /// Terminate the test process with the exit code.
    ///
    /// This method **should not** be called before the cleanup
    /// of the test process has completed.
    #[inline]
    pub fn exit(self) -> ! {
        std::process::exit(self.code());
    }
}
