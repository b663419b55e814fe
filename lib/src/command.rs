use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

use crate::{input::Input, request::InvocationRequest};

/// The argument vector for a single simulator run.
///
/// Each flag and each value is a separate token. Tokens are handed to the operating system as-is
/// and never pass through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl EngineCommand {
    /// Build the command line for running `program` against `request`.
    ///
    /// ``` text
    /// <program> --caida <path> --announcements <path> --output <path> [--rov-asns <path>]
    /// ```
    #[must_use]
    pub fn new(program: &Path, request: &InvocationRequest) -> Self {
        let mut args: Vec<OsString> = Vec::with_capacity(8);
        let mut push = |flag: &str, value: &Path| {
            args.push(flag.into());
            args.push(value.as_os_str().to_owned());
        };
        push(Input::Caida.flag(), request.caida());
        push(Input::Announcements.flag(), request.announcements());
        push("--output", request.output());
        if let Some(rov_asns) = request.rov_asns() {
            push(Input::RovAsns.flag(), rov_asns);
        }
        Self {
            program: program.as_os_str().to_owned(),
            args,
        }
    }

    /// Get the program to execute.
    #[must_use]
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Get the program arguments, excluding the program itself.
    pub fn args(&self) -> impl Iterator<Item = &OsStr> {
        self.args.iter().map(OsString::as_os_str)
    }

    /// Get the full argument vector, starting with the program.
    pub fn argv(&self) -> impl Iterator<Item = &OsStr> {
        std::iter::once(self.program()).chain(self.args())
    }
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.argv().enumerate().try_for_each(|(i, token)| {
            if i > 0 {
                f.write_str(" ")?;
            }
            let token = token.to_string_lossy();
            // quote anything a reader might misparse
            if token.is_empty() || !token.chars().all(is_plain) {
                write!(f, "{token:?}")
            } else {
                f.write_str(&token)
            }
        })
    }
}

fn is_plain(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        engine::tests::FakeEngine,
        request::{validate, InvocationArgs, Probe},
    };

    struct Everything;

    impl Probe for Everything {
        fn exists(&self, _: &Path) -> bool {
            true
        }
    }

    fn command(args: InvocationArgs) -> Vec<String> {
        let request = validate(&FakeEngine::exiting(0), &Everything, args).unwrap();
        EngineCommand::new(Path::new("./simulator"), &request)
            .argv()
            .map(|arg| arg.to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn default_output() {
        assert_eq!(
            command(InvocationArgs::new("a.txt", "b.csv")),
            [
                "./simulator",
                "--caida",
                "a.txt",
                "--announcements",
                "b.csv",
                "--output",
                "ribs.csv"
            ]
        );
    }

    #[test]
    fn rov_asns_appended_last() {
        assert_eq!(
            command(InvocationArgs::new("a.txt", "b.csv").with_rov_asns("c.csv")),
            [
                "./simulator",
                "--caida",
                "a.txt",
                "--announcements",
                "b.csv",
                "--output",
                "ribs.csv",
                "--rov-asns",
                "c.csv"
            ]
        );
    }

    #[test]
    fn explicit_output() {
        assert_eq!(
            command(
                InvocationArgs::new("a.txt", "b.csv")
                    .with_output("out.csv")
                    .with_rov_asns("c.csv")
            ),
            [
                "./simulator",
                "--caida",
                "a.txt",
                "--announcements",
                "b.csv",
                "--output",
                "out.csv",
                "--rov-asns",
                "c.csv"
            ]
        );
    }

    #[test]
    fn paths_are_single_tokens() {
        let argv = command(
            InvocationArgs::new("my data/rel;rm -rf ~.txt", "$(whoami) `id`.csv")
                .with_output("out put|tee.csv"),
        );
        assert_eq!(argv.len(), 7);
        assert_eq!(argv[2], "my data/rel;rm -rf ~.txt");
        assert_eq!(argv[4], "$(whoami) `id`.csv");
        assert_eq!(argv[6], "out put|tee.csv");
    }

    #[test]
    fn display() {
        let request = validate(
            &FakeEngine::exiting(0),
            &Everything,
            InvocationArgs::new("a.txt", "my anns.csv"),
        )
        .unwrap();
        let cmd = EngineCommand::new(Path::new("./simulator"), &request);
        assert_eq!(
            cmd.to_string(),
            r#"./simulator --caida a.txt --announcements "my anns.csv" --output ribs.csv"#
        );
    }
}
