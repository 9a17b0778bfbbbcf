use anyhow::Error;
use async_trait::async_trait;

#[cfg(test)]
use mockall::{automock, predicate::*};
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), Error>;
}

#[cfg_attr(test, automock)]
pub trait Notifier {
    fn success(&self, title: &str, description: &str);
    fn error(&self, title: &str, description: &str);
}
