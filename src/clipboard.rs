use std::process::Stdio;

use anyhow::{anyhow, Error};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::traits::ClipboardWriter;

/// Writes text to the clipboard by piping it into a helper program.
#[derive(Clone, Debug)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(command: &[String]) -> Result<Self, Error> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| anyhow!("clipboard command is empty"))?;

        if program.trim().is_empty() {
            return Err(anyhow!("clipboard program is empty"));
        }

        Ok(CommandClipboard {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

pub fn default_command() -> Vec<String> {
    let command: &[&str] = if cfg!(target_os = "macos") {
        &["pbcopy"]
    } else if cfg!(target_os = "windows") {
        &["clip"]
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        &["wl-copy"]
    } else {
        &["xclip", "-selection", "clipboard"]
    };

    command.iter().map(|s| s.to_string()).collect()
}

#[async_trait]
impl ClipboardWriter for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), Error> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| anyhow!("couldn't spawn `{}`: {e}", self.program))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("stdin of `{}` is not piped", self.program))?;

        stdin.write_all(text.as_bytes()).await?;
        // closing stdin lets the helper see EOF
        drop(stdin);

        let status = child.wait().await?;
        if !status.success() {
            return Err(anyhow!("`{}` exited with {status}", self.program));
        }

        debug!("wrote {} bytes via `{}`", text.len(), self.program);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{default_command, CommandClipboard};
    use crate::traits::ClipboardWriter;

    fn command(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_rejects_empty_command() {
        assert!(CommandClipboard::new(&[]).is_err());
        assert!(CommandClipboard::new(&command(&[" "])).is_err());
    }

    #[test]
    fn default_command_is_not_empty() {
        assert!(!default_command().is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn write_text_success_when_helper_exits_zero() {
        let clipboard = CommandClipboard::new(&command(&["cat"])).unwrap();

        assert!(clipboard.write_text("flag{H3110}").await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn write_text_error_when_helper_fails() {
        let clipboard = CommandClipboard::new(&command(&["sh", "-c", "exit 3"])).unwrap();

        assert!(clipboard.write_text("flag{H3110}").await.is_err());
    }

    #[tokio::test]
    async fn write_text_error_when_helper_is_missing() {
        let clipboard =
            CommandClipboard::new(&command(&["flaggen-no-such-clipboard-helper"])).unwrap();

        assert!(clipboard.write_text("flag{H3110}").await.is_err());
    }
}
