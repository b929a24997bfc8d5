use crate::domain::ports::{Sink, Source};
use crate::utils::error::Result;

/// Runs the one call chain: build the record, render it, hand the line to the
/// sink. The rendered line is also returned to the caller.
pub struct Engine<S: Source, K: Sink> {
    source: S,
    sink: K,
}

impl<S: Source, K: Sink> Engine<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Building record");
        let record = self.source.build()?;

        tracing::info!("Rendering record");
        let line = format!("{record:?}");

        tracing::info!("Emitting record");
        self.sink.emit(&line)?;

        Ok(line)
    }
}
