use crate::graph::*;

pub struct ForEachOp<F: FnMut(&mut FastaRecord)> {
    func: F,
}

impl<F: FnMut(&mut FastaRecord)> ForEachOp<F> {
    const NAME: &'static str = "ForEachOp";

    /// Apply an arbitrary function on each record.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F: FnMut(&mut FastaRecord)> GraphNode for ForEachOp<F> {
    fn run(&mut self, record: Option<FastaRecord>) -> Result<(Option<FastaRecord>, bool)> {
        let Some(mut record) = record else {
            panic!("Expected some record!")
        };
        (self.func)(&mut record);
        Ok((Some(record), false))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

pub struct DbgOp;

impl DbgOp {
    /// Log each record at trace level.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> ForEachOp<impl FnMut(&mut FastaRecord)> {
        ForEachOp::new(|record: &mut FastaRecord| log::trace!("{record}"))
    }
}
