use crate::traits::Notifier;

/// Prints notifications to the terminal, errors go to stderr.
pub struct ConsoleNotifier {
    show_success: bool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        ConsoleNotifier { show_success: true }
    }

    /// Only errors reach the terminal.
    pub fn quiet() -> Self {
        ConsoleNotifier {
            show_success: false,
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn success(&self, title: &str, description: &str) {
        debug!("notify success: {title}");

        if !self.show_success {
            return;
        }

        println!("{}", format_notification("✓", title, description));
    }

    fn error(&self, title: &str, description: &str) {
        error!("{title}: {description}");

        eprintln!("{}", format_notification("✗", title, description));
    }
}

fn format_notification(marker: &str, title: &str, description: &str) -> String {
    if description.is_empty() {
        format!("{marker} {title}")
    } else {
        format!("{marker} {title}\n    {description}")
    }
}
