//! Upload progress accounting and its output sinks.
//!
//! [`Progress`] only adds up percentages; what happens with the running
//! value is up to the [`ProgressObserver`] it was given.

use std::io::{self, Stdout, Write};

pub const BAR_WIDTH: usize = 20;

/// Receives the running percentage after every change.
pub trait ProgressObserver {
    fn update(&mut self, percent: f64);

    /// Called once after the last update of a run.
    fn finish(&mut self) {}
}

/// Running percentage of a batch upload.
pub struct Progress<O: ProgressObserver> {
    percent: f64,
    observer: O,
}

impl<O: ProgressObserver> Progress<O> {
    pub fn new(observer: O) -> Self {
        Self { percent: 0.0, observer }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Adds `value` percentage points and notifies the observer.
    pub fn advance(&mut self, value: f64) {
        self.percent += value;
        self.observer.update(self.percent);
    }

    pub fn finish(mut self) -> O {
        self.observer.finish();
        self.observer
    }
}

/// Renders `[#####...............] 25%`; filled cells are `floor(width * percent / 100)`.
pub fn render_bar(percent: f64, width: usize) -> String {
    let fill = ((width as f64 / 100.0 * percent).floor().max(0.0) as usize).min(width);
    format!("[{}{}] {}%", "#".repeat(fill), ".".repeat(width - fill), percent as i64)
}

/// Redraws a single terminal line on every update.
pub struct TerminalBar<W: Write = Stdout> {
    out: W,
    width: usize,
}

impl TerminalBar<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), BAR_WIDTH)
    }
}

impl<W: Write> TerminalBar<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressObserver for TerminalBar<W> {
    fn update(&mut self, percent: f64) {
        // Write errors are ignored; the upload goes on without the bar.
        let _ = write!(self.out, "\r{}", render_bar(percent, self.width));
        let _ = self.out.flush();
    }

    fn finish(&mut self) {
        let _ = writeln!(self.out);
    }
}

/// Emits one `tracing` event per update, for non-interactive runs.
#[derive(Debug, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn update(&mut self, percent: f64) {
        tracing::info!(percent = format!("{:.2}", percent), "upload progress");
    }
}

#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn update(&mut self, _percent: f64) {}
}

impl<O: ProgressObserver + ?Sized> ProgressObserver for Box<O> {
    fn update(&mut self, percent: f64) {
        (**self).update(percent);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}
