use std::io::Write;

use anyhow::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::generator::FlagGenerator;
use crate::metrics;

const HELP: &str = "\
Type text and press Enter to generate a flag.

  :prefix <text>   set the flag prefix (substitution mode only)
  :copy            copy the current flag to the clipboard
  :show            print the current flag
  :metrics         print counters
  :help            print this help
  :quit            leave

Lines starting with an unknown `:name` are flag text, `::text` forces it.";

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Generate(&'a str),
    Prefix(&'a str),
    Copy,
    Show,
    Metrics,
    Help,
    Quit,
}

impl<'a> Command<'a> {
    /// Lines that are not a known `:command` are flag text, `::text` escapes one colon.
    pub fn parse(line: &'a str) -> Self {
        let Some(command) = line.trim_start().strip_prefix(':') else {
            return Command::Generate(line);
        };

        if command.starts_with(':') {
            return Command::Generate(command);
        }

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (command.trim(), ""),
        };

        match name {
            "prefix" => Command::Prefix(argument),
            "copy" => Command::Copy,
            "show" => Command::Show,
            "metrics" => Command::Metrics,
            "help" | "h" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Generate(line),
        }
    }
}

/// Runs the shell until `:quit` or end of input.
pub async fn run<R, W>(generator: &mut FlagGenerator, reader: R, out: &mut W) -> Result<(), Error>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(
        out,
        "flaggen ({:?} mode, prefix `{}`), :help for commands",
        generator.transformer().mode(),
        generator.transformer().prefix()
    )?;

    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Generate(text) => {
                generator.set_input(text);

                if generator.generate().await.is_none() {
                    writeln!(out, "nothing to generate, enter some text")?;
                }
            }
            Command::Prefix(prefix) => {
                if generator.set_prefix(prefix) {
                    writeln!(out, "prefix set to `{prefix}`")?;
                } else {
                    writeln!(out, "strict mode always uses the `flag` prefix")?;
                }
            }
            Command::Copy => {
                generator.copy_to_clipboard().await;
            }
            Command::Show => writeln!(out, "{}", generator.generated_flag())?,
            Command::Metrics => match metrics::render() {
                Ok(text) => write!(out, "{text}")?,
                Err(e) => error!("couldn't render metrics: {e}"),
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }

        out.flush()?;
    }

    Ok(())
}

/// Prints one flag and optionally copies it, for non-interactive use.
pub async fn one_shot<W: Write>(
    generator: &mut FlagGenerator,
    text: &str,
    copy: bool,
    out: &mut W,
) -> Result<(), Error> {
    generator.set_input(text);

    match generator.generate().await {
        Some(flag) => writeln!(out, "{flag}")?,
        None => anyhow::bail!("nothing to generate: input text is blank"),
    }

    // the notifier has already reported the failure
    if copy && !generator.copy_to_clipboard().await {
        anyhow::bail!("couldn't copy flag");
    }

    Ok(())
}
