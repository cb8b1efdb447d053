/// Segment module for bracket-based file names
///
/// - `tokenizer`: segment text → typed tokens
/// - `render`: typed tokens → router pattern fragment

pub mod render;
pub mod tokenizer;

pub use render::{encode_path, render_route_path};
pub use tokenizer::{segment_name, tokenize_segment, SegmentToken, TokenKind};
