//! The command line front-end of a test program.

mod args;
mod exit_status;
mod selection;
mod session;

pub use self::{
    args::{Args, ColorConfig},
    exit_status::ExitStatus,
    selection::resolve,
    session::{test_main, Session},
};

pub(crate) use self::session::configuration_error;
