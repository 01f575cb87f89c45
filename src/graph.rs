//! Linear graph of operations that records flow through.
//!
//! The first node in a graph is a source: it is run without an input record and produces
//! records until it reports that it is done. Every later node receives the record produced
//! by the node before it and may modify it, pass it along, or drop it.

pub(crate) use crate::errors::*;
pub(crate) use crate::parse_utils::*;
pub(crate) use crate::record::*;
pub(crate) use crate::substitution::*;
pub(crate) use crate::wrap::*;

pub mod ops;
pub use ops::*;

pub trait GraphNode {
    /// Process one record.
    ///
    /// Returns the record to pass to the next node, if any, and whether this node is done.
    fn run(&mut self, record: Option<FastaRecord>) -> Result<(Option<FastaRecord>, bool)>;

    /// Called once after the last record, before the graph is dropped.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str;
}

#[derive(Default)]
pub struct Graph<'a> {
    nodes: Vec<Box<dyn GraphNode + 'a>>,
}

impl<'a> Graph<'a> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn add(&mut self, node: impl GraphNode + 'a) -> &mut Self {
        self.nodes.push(Box::new(node));
        self
    }

    /// Run records through every node until the source is exhausted.
    ///
    /// Returns the number of records that made it through the whole graph.
    pub fn run(&mut self) -> Result<usize> {
        let Some((source, rest)) = self.nodes.split_first_mut() else {
            return Ok(0);
        };

        let mut count = 0;

        loop {
            let (mut record, done) = source.run(None)?;

            for node in rest.iter_mut() {
                if record.is_none() {
                    break;
                }
                let (next, _) = node.run(record)?;
                record = next;
            }

            if record.is_some() {
                count += 1;
            }

            if done {
                break;
            }
        }

        for node in self.nodes.iter_mut() {
            log::trace!("finishing {}", node.name());
            node.finish()?;
        }

        Ok(count)
    }
}
