//! Sourcing default arguments from the host process.
//!
//! The scanner never reads the environment itself; `parse_args` calls into this
//! module only when the caller supplied no token list.

/// How the current program was launched, which decides how many leading
/// tokens of the raw argument vector belong to the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// A compiled executable: `prog ARGS...`.
    Native,
    /// An interpreter running a script: `interp script ARGS...`.
    Script,
    /// An interpreter evaluating inline code (`-e`, `--eval`, `-p`, `--print`):
    /// `interp ARGS...`.
    Inline,
}

impl Invocation {
    /// Pick `Inline` or `Script` from the interpreter's own flags.
    pub fn detect<S: AsRef<str>>(exec_argv: &[S]) -> Self {
        let inline = exec_argv
            .iter()
            .any(|a| matches!(a.as_ref(), "-e" | "--eval" | "-p" | "--print"));
        if inline { Self::Inline } else { Self::Script }
    }

    fn prefix_len(self) -> usize {
        match self {
            Self::Native | Self::Inline => 1,
            Self::Script => 2,
        }
    }
}

/// The user-supplied part of a raw argument vector.
pub fn user_args<I, S>(argv: I, invocation: Invocation) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    argv.into_iter()
        .skip(invocation.prefix_len())
        .map(Into::into)
        .collect()
}

/// Arguments of the running executable, without the program name.
pub fn host_args() -> Vec<String> {
    user_args(std::env::args(), Invocation::Native)
}
