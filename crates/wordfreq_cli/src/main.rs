//! wordfreq: count how often each word occurs in text.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use wordfreq_engine::{count_paths, write_file_atomically, write_table};
use wordfreq_logging::{wf_debug, wf_error, wf_info};

mod cli;
mod config;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    wordfreq_logging::initialize(cli.log_destination(), cli.log_level.into());

    let stdout = io::stdout();
    let mut sink = BufWriter::new(stdout.lock());
    ExitCode::from(exit_status(run(&cli, &mut sink)))
}

/// Count the inputs named by `cli` and write the result to `--output` or `stdout`.
fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    let settings = cli.apply(config::load_settings(cli.config.as_deref())?);
    wf_debug!("Effective settings: {:?}", settings);

    let table = count_paths(&cli.files, &settings).context("counting words failed")?;

    match &cli.output {
        Some(path) => {
            let written = write_file_atomically(path, |sink| {
                write_table(&table, settings.format, sink)
            })
            .with_context(|| format!("failed to write {path:?}"))?;
            wf_info!("Wrote {} entries to {:?}", table.len(), written);
        }
        None => {
            write_table(&table, settings.format, stdout).context("failed to write output")?;
            stdout.flush().context("failed to write output")?;
        }
    }

    table.destroy();
    Ok(())
}

fn exit_status(result: Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            wf_error!("{:#}", err);
            eprintln!("wordfreq: {err:#}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wordfreq").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    fn input(temp: &TempDir, name: &str, text: &str) -> String {
        let path = temp.path().join(name);
        fs::write(&path, text).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn counts_go_to_stdout_without_output_flag() {
        let temp = TempDir::new().unwrap();
        let path = input(&temp, "in.txt", "The cat; the end.");
        let mut stdout = Vec::new();

        let status = exit_status(run(&cli(&[&path]), &mut stdout));

        assert_eq!(status, 0);
        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            "1\tend\n1\tcat\n2\tthe\n"
        );
    }

    #[test]
    fn output_flag_writes_file_and_leaves_stdout_empty() {
        let temp = TempDir::new().unwrap();
        let path = input(&temp, "in.txt", "a b a");
        let target = temp.path().join("out").join("counts.json");
        let mut stdout = Vec::new();

        let args = cli(&[&path, "--format", "json", "--output", target.to_str().unwrap()]);
        let status = exit_status(run(&args, &mut stdout));

        assert_eq!(status, 0);
        assert!(stdout.is_empty());
        let written = fs::read_to_string(&target).unwrap();
        assert!(written.contains("\"total\": 3"));
        assert!(written.contains("\"distinct\": 2"));
    }

    #[test]
    fn total_flag_prints_summary_line() {
        let temp = TempDir::new().unwrap();
        let path = input(&temp, "in.txt", "one two three two");
        let mut stdout = Vec::new();

        run(&cli(&["--total", &path]), &mut stdout).unwrap();

        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            "The total number of words is: 4\n"
        );
    }

    #[test]
    fn failures_exit_with_status_one() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.txt");
        let mut stdout = Vec::new();

        let status = exit_status(run(&cli(&[missing.to_str().unwrap()]), &mut stdout));
        assert_eq!(status, 1);
        assert!(stdout.is_empty());

        let long = input(&temp, "long.txt", &"x".repeat(10));
        let status = exit_status(run(&cli(&["--max-word-len", "5", &long]), &mut stdout));
        assert_eq!(status, 1);
    }

    #[test]
    fn skip_overlong_flag_keeps_counting() {
        let temp = TempDir::new().unwrap();
        let path = input(&temp, "in.txt", &format!("ok {} ok", "x".repeat(10)));
        let mut stdout = Vec::new();

        let args = cli(&["--max-word-len", "5", "--skip-overlong", &path]);
        assert_eq!(exit_status(run(&args, &mut stdout)), 0);
        assert_eq!(String::from_utf8(stdout).unwrap(), "2\tok\n");
    }
}
