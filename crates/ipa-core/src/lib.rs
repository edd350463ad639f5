pub mod lexicon;
pub mod segmenter;
pub mod settings;
pub mod unicode;

pub use lexicon::Lexicon;
pub use segmenter::{segment, Segment, SegmentKind, Segmenter};
