use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The hosting page does not contain the element the application
    /// mounts into. This is a bug in the HTML shell, there is nothing
    /// to recover to at runtime.
    #[error("anchor element #{0} missing from host document")]
    MissingAnchorElement(&'static str),

    #[error("host environment has no window")]
    MissingWindow,

    #[error("window has no document")]
    MissingDocument,
}
