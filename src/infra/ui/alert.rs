use std::io::{self, Write};

use parking_lot::Mutex;
use tracing::error;

use crate::domain::traits::Alerter;

pub struct ConsoleAlerter<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleAlerter<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> ConsoleAlerter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> Alerter for ConsoleAlerter<W> {
    fn alert(&self, message: &str) {
        error!(%message, "alert raised");
        let mut out = self.out.lock();
        // si ni siquiera stderr funciona no queda a quién avisar
        let _ = writeln!(out, "alert: {message}").and_then(|_| out.flush());
    }
}
