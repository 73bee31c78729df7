use std::io::{self, Write};

use parking_lot::Mutex;
use tracing::warn;

use crate::domain::{
    traits::ProgressRenderer,
    value_objects::{ElapsedTime, ProgressPercent},
};

/// Text progress bar, one line per render: `[##########----------]  50%  elapsed 10s`.
///
/// The filled cells saturate at the bar bounds; the printed percentage does not.
pub struct TerminalProgressRenderer<W: Write + Send> {
    out: Mutex<W>,
    width: usize,
}

impl TerminalProgressRenderer<io::Stdout> {
    pub fn stdout(width: usize) -> Self {
        Self::new(io::stdout(), width)
    }
}

impl<W: Write + Send> TerminalProgressRenderer<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out: Mutex::new(out),
            width: width.max(1),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn line(&self, progress: ProgressPercent, elapsed: &ElapsedTime) -> String {
        let filled = filled_cells(progress.0, self.width);
        let mut bar = String::with_capacity(self.width + 2);
        bar.push('[');
        bar.extend(std::iter::repeat('#').take(filled));
        bar.extend(std::iter::repeat('-').take(self.width - filled));
        bar.push(']');
        format!("{bar} {:>4}  elapsed {elapsed}", progress.to_string())
    }
}

fn filled_cells(progress: i64, width: usize) -> usize {
    let pct = progress.clamp(0, 100) as usize;
    pct * width / 100
}

impl<W: Write + Send> ProgressRenderer for TerminalProgressRenderer<W> {
    fn render(&self, progress: ProgressPercent, elapsed: &ElapsedTime) {
        let line = self.line(progress, elapsed);
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            warn!(%err, "failed to draw progress bar");
        }
    }
}
