mod load;
mod record;

pub use load::load_dataset;
pub use record::{RawRecord, Record, Region};
