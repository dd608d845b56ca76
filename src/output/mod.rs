//! Form rendering and clip file output

pub mod view;
pub mod writer;

pub use view::{busy_label, ClipCard, FormView, SubmitButton, SUBMIT_LABEL};
pub use writer::ClipWriter;

/// What to do when a downloaded clip already exists on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Always overwrite
    Always,
    /// Never overwrite
    Never,
}
