use indicatif::{ProgressBar, ProgressStyle};

/// A spinner shown while the resolver is waiting for an answer.
#[derive(Debug)]
pub struct ThinkingSpinner {
    spinner: ProgressBar,
}

impl ThinkingSpinner {
    /// Creates a new `ThinkingSpinner` with a message.
    pub fn new(msg: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        spinner.set_style(style);
        spinner.set_message(format!("🤔 {msg}"));
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        Self { spinner }
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn clear(&self) {
        self.spinner.finish_and_clear();
    }
}

impl Drop for ThinkingSpinner {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}
