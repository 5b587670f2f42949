//! Runs one invocation: every input through a single [`Counter`], then the
//! report.

use std::{
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{
    counter::Counter,
    error::{Chain, Error, Result},
    options::ProgramArguments,
};

/// What happened to the inputs of a successful run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    /// Files that could not be opened
    pub skipped: Vec<PathBuf>,
}

fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_owned(),
        source,
    })
}

/// Count `stdin` when no files were named, otherwise each file in turn, and
/// write the result to `out`.
pub fn run<R: Read, W: Write>(
    args: &ProgramArguments,
    stdin: R,
    out: &mut W,
) -> Result<RunSummary> {
    let mut counter = Counter::new(args.mode());
    let mut summary = RunSummary::default();
    log::debug!("counting in {:?} mode", counter.mode());

    if args.input_files.is_empty() {
        counter.process_reader(stdin, "stdin")?;
        summary.processed += 1;
    }

    for path in &args.input_files {
        let file = match open_input(path) {
            Ok(file) => file,
            Err(err) if err.is_recoverable() => {
                log::warn!("{}", Chain(&err));
                summary.skipped.push(path.clone());
                continue;
            }
            Err(err) => return Err(err),
        };
        // The file is closed when `file` is dropped at the end of this call.
        counter.process_reader(file, &path.display().to_string())?;
        summary.processed += 1;
    }

    counter.report(out)?;
    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, NamedTempFile};

    fn args(argv: &[&str]) -> ProgramArguments {
        ProgramArguments::try_parse_from(std::iter::once("words").chain(argv.iter().copied()))
            .unwrap()
    }

    fn file_with(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    fn run_to_string(args: &ProgramArguments, stdin: &str) -> (String, RunSummary) {
        let mut out = Vec::new();
        let summary = run(args, stdin.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn counts_stdin_by_default() {
        let (out, summary) = run_to_string(&args(&[]), "a bb cc cc dog");
        assert_eq!(out, "The total number of words is: 4\n");
        assert_eq!(summary.processed, 1);
    }

    #[test]
    fn frequencies_from_stdin() {
        let (out, _) = run_to_string(&args(&["-f"]), "a bb cc cc dog");
        assert_eq!(
            out,
            indoc! {"
                The frequencies of each word are: 
                1\tbb
                1\tdog
                2\tcc
            "}
        );
    }

    #[test]
    fn empty_stdin() {
        let (out, _) = run_to_string(&args(&["-c"]), "");
        assert_eq!(out, "The total number of words is: 0\n");

        let (out, _) = run_to_string(&args(&["-f"]), "");
        assert_eq!(out, "The frequencies of each word are: \n");
    }

    #[test]
    fn ignores_stdin_when_files_are_given() {
        let file = file_with("only these words");
        let path = file.path().to_str().unwrap();
        let (out, _) = run_to_string(&args(&[path]), "plenty of other words on stdin");
        assert_eq!(out, "The total number of words is: 3\n");
    }

    #[test]
    fn totals_span_all_files() {
        let first = file_with("The quick brown fox");
        let second = file_with("the LAZY dog, the end");
        let paths = [first.path().to_str().unwrap(), second.path().to_str().unwrap()];

        let (out, summary) = run_to_string(&args(&paths), "");
        assert_eq!(out, "The total number of words is: 9\n");
        assert_eq!(summary.processed, 2);

        let (out, _) = run_to_string(&args(&["--frequency", paths[0], paths[1]]), "");
        assert_eq!(
            out,
            indoc! {"
                The frequencies of each word are: 
                1\tbrown
                1\tdog
                1\tend
                1\tfox
                1\tlazy
                1\tquick
                3\tthe
            "}
        );
    }

    #[test]
    fn skips_files_that_cannot_be_opened() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let present = file_with("still counted here");

        let argv = [missing.to_str().unwrap(), present.path().to_str().unwrap()];
        let (out, summary) = run_to_string(&args(&argv), "");

        assert_eq!(out, "The total number of words is: 3\n");
        assert_eq!(summary.skipped, vec![missing]);
        assert_eq!(summary.processed, 1);
    }

    #[test]
    fn all_files_missing_still_reports() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let (out, summary) = run_to_string(&args(&["-f", missing.to_str().unwrap()]), "");
        assert_eq!(out, "The frequencies of each word are: \n");
        assert_eq!(summary.skipped.len(), 1);
    }
}
