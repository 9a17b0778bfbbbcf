use std::sync::Arc;
use std::time::Duration;

use crate::errors::Error;
use crate::metrics::{CLIPBOARD_WRITE_COUNTER, GENERATE_REQUEST_COUNTER};
use crate::traits::{ClipboardWriter, Notifier};
use crate::transformer::{is_blank, FlagTransformer};

pub const PLACEHOLDER_FLAG: &str = "flag{THE_FLA9}";

pub const TITLE_GENERATED: &str = "Flag generated successfully!";
pub const TITLE_COPIED: &str = "Flag copied to clipboard!";
pub const TITLE_COPY_FAILED: &str = "Failed to copy flag";
pub const DESCRIPTION_COPY_FAILED: &str = "Please try again or copy manually";

/// Ephemeral state of one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorState {
    pub input_text: String,
    pub generated_flag: String,
    pub is_generating: bool,
}

impl Default for GeneratorState {
    fn default() -> Self {
        GeneratorState {
            input_text: String::new(),
            generated_flag: PLACEHOLDER_FLAG.to_string(),
            is_generating: false,
        }
    }
}

pub struct FlagGenerator {
    transformer: FlagTransformer,
    state: GeneratorState,
    generation_delay: Duration,

    clipboard: Arc<dyn ClipboardWriter + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
}

impl FlagGenerator {
    pub fn new(
        transformer: FlagTransformer,
        generation_delay: Duration,
        clipboard: Arc<dyn ClipboardWriter + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Self {
        FlagGenerator {
            transformer,
            state: GeneratorState::default(),
            generation_delay,
            clipboard,
            notifier,
        }
    }

    pub fn state(&self) -> &GeneratorState {
        &self.state
    }

    pub fn transformer(&self) -> &FlagTransformer {
        &self.transformer
    }

    pub fn generated_flag(&self) -> &str {
        &self.state.generated_flag
    }

    pub fn set_input(&mut self, input_text: &str) {
        self.state.input_text = input_text.to_string();
    }

    /// Returns false when the current mode has a fixed prefix.
    pub fn set_prefix(&mut self, prefix: &str) -> bool {
        self.transformer.set_prefix(prefix)
    }

    /// Generates a flag from the current input.
    ///
    /// Blank input is not an error: nothing happens and `None` is returned.
    pub async fn generate(&mut self) -> Option<&str> {
        if is_blank(&self.state.input_text) {
            GENERATE_REQUEST_COUNTER
                .with_label_values(&["SKIPPED"])
                .inc();

            debug!("generate skipped: blank input");

            return None;
        }

        self.state.is_generating = true;

        if !self.generation_delay.is_zero() {
            tokio::time::sleep(self.generation_delay).await;
        }

        let flag = self.transformer.transform(&self.state.input_text);

        debug!("generated flag {flag:?}");

        self.state.generated_flag = flag;
        self.state.is_generating = false;

        GENERATE_REQUEST_COUNTER.with_label_values(&["OK"]).inc();

        self.notifier
            .success(TITLE_GENERATED, &self.state.generated_flag);

        Some(&self.state.generated_flag)
    }

    async fn write_flag(&self) -> Result<(), Error> {
        self.clipboard
            .write_text(&self.state.generated_flag)
            .await
            .map_err(|e| Error::Clipboard {
                method_name: "clipboard.write_text".to_string(),
                description: "couldn't write generated flag to clipboard".to_string(),
                error: e,
            })
    }

    /// Copies the current flag. Failures are reported, never propagated.
    pub async fn copy_to_clipboard(&self) -> bool {
        match self.write_flag().await {
            Ok(_) => {
                CLIPBOARD_WRITE_COUNTER.with_label_values(&["OK"]).inc();

                self.notifier
                    .success(TITLE_COPIED, &self.state.generated_flag);

                true
            }
            Err(e) => {
                error!("couldn't copy flag: {e}");

                CLIPBOARD_WRITE_COUNTER.with_label_values(&["ERROR"]).inc();

                self.notifier
                    .error(TITLE_COPY_FAILED, DESCRIPTION_COPY_FAILED);

                false
            }
        }
    }
}
