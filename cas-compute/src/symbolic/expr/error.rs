use cas_attrs::ErrorKind;

/// A function that is rewritten into another form (such as `sqrt`) was called with the wrong
/// number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` takes {} argument(s), but {} were given", name, expected, given),
    labels = ["this function call", ""],
    help = format!("`{}` expects {} argument(s)", name, expected),
)]
pub struct WrongArgumentCount {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments the function takes.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}
