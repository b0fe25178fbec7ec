pub mod batch;
pub mod equate;
pub mod essential;
pub mod parse;
pub mod predict;
pub mod redox;

/// Whether the text already names its products.
pub(crate) fn has_arrow(text: &str) -> bool {
    text.contains("->") || text.contains('=')
}
