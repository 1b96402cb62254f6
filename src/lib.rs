pub mod clock;
pub mod import;

pub use clock::{Clock, FixedClock, SystemClock};
pub use import::{import_data, import_with, ImportOutcome, ImportPaths, Prompt, RawRow};
