// Tracing definitions
//
// Events are formatted by tracing_subscriber and handed to the browser console
// one record at a time.

use std::io;

use gloo_console as console;
use tracing::{subscriber::set_global_default, Level, Metadata, Subscriber};
use tracing_subscriber::{
    filter,
    fmt::MakeWriter,
    layer::{Layer, SubscriberExt},
    Registry,
};

static CRATE_TARGET: &str = "notes_frontend";

pub struct TracingSubscriber {
    crate_level: Level,
    default_level: Level,
}

impl Default for TracingSubscriber {
    fn default() -> Self {
        Self {
            crate_level: Level::DEBUG,
            default_level: Level::WARN,
        }
    }
}

impl TracingSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(unused)]
    pub fn crate_level(mut self, value: Level) -> Self {
        self.crate_level = value;
        self
    }

    #[allow(unused)]
    pub fn default_level(mut self, value: Level) -> Self {
        self.default_level = value;
        self
    }

    pub fn set_global_default(self) {
        if set_global_default(self.build()).is_err() {
            console::warn!("tracing subscriber is already set");
        }
    }

    fn build(self) -> impl Subscriber + Send + Sync {
        let target_filter = filter::Targets::new()
            .with_target(CRATE_TARGET, self.crate_level)
            .with_default(self.default_level);

        // the console stamps records itself
        Registry::default().with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(MakeConsoleWriter)
                .with_filter(target_filter),
        )
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted record and emits it on flush or drop.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }

        let record = String::from_utf8_lossy(&self.buf).trim_end().to_owned();
        self.buf.clear();

        if self.level == Level::ERROR {
            console::error!(record);
        } else if self.level == Level::WARN {
            console::warn!(record);
        } else if self.level == Level::INFO {
            console::info!(record);
        } else {
            console::debug!(record);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}
