use crate::graph::*;

/// Records between milestone messages.
pub const PROGRESS_INTERVAL: usize = 100;

pub struct ProgressOp {
    count: usize,
    interval: usize,
}

impl ProgressOp {
    const NAME: &'static str = "ProgressOp";

    /// Count records and log a message every [`PROGRESS_INTERVAL`] records.
    pub fn new() -> Self {
        Self::with_interval(PROGRESS_INTERVAL)
    }

    pub fn with_interval(interval: usize) -> Self {
        Self {
            count: 0,
            interval: interval.max(1),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Count one record. Returns whether the count just reached a milestone.
    pub fn tick(&mut self) -> bool {
        self.count += 1;
        self.count % self.interval == 0
    }
}

impl Default for ProgressOp {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphNode for ProgressOp {
    fn run(&mut self, record: Option<FastaRecord>) -> Result<(Option<FastaRecord>, bool)> {
        let Some(record) = record else {
            panic!("Expected some record!")
        };

        if self.tick() {
            log::info!("Processed {} sequences...", self.count);
        }

        Ok((Some(record), false))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
