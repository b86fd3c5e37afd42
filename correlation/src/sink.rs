use common::CorrelatedRecord;

/// Append-only log of emitted records. Insertion order follows the raw event
/// stream and is never reordered.
#[derive(Debug, Default)]
pub struct RecordSink {
    records: Vec<CorrelatedRecord>,
}

impl RecordSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: CorrelatedRecord) {
        tracing::trace!(?record, "Emitting record");
        self.records.push(record);
    }

    pub fn records(&self) -> &[CorrelatedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<CorrelatedRecord> {
        self.records
    }
}
