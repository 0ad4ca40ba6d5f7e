//! `tracing` output routed to the browser console.
//!
//! The shape-ops diagnostics are plain `tracing` events gated by the debug
//! level; this module installs the subscriber that makes them visible in a
//! JavaScript host.

use std::io;
use std::sync::Once;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Installs the console subscriber once per module instance.
///
/// Every level is let through; `setDebug` decides what gets emitted.
pub(crate) fn install() {
    static INSTALLED: Once = Once::new();
    INSTALLED.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_writer(Console)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            web_sys::console::warn_1(&JsValue::from_str(
                "shape-ops: a tracing subscriber is already installed",
            ));
        }
    });
}

/// Hands out one [`ConsoleLine`] per formatted event.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}

/// Collects one event and writes it to the console method of its level on drop.
pub(crate) struct ConsoleLine {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleLine {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let text = text.trim_end();
        if text.is_empty() {
            return;
        }
        let message = JsValue::from_str(text);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            Level::INFO => web_sys::console::info_1(&message),
            _ => web_sys::console::log_1(&message),
        }
    }
}
