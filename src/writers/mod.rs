pub mod master_writer;

pub use master_writer::{MasterWriter, MASTER_HEADER};
