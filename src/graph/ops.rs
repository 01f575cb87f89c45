//! Graph ops that process FASTA records.

mod input_fasta_op;
pub use input_fasta_op::*;

mod substitute_op;
pub use substitute_op::*;

mod progress_op;
pub use progress_op::*;

mod for_each_op;
pub use for_each_op::*;

mod output_fasta_op;
pub use output_fasta_op::*;
