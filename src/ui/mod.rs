mod spinner;
mod style;

pub use spinner::{SegmentProgress, Spinner};
pub use style::Style;
