//! Data models for the anonymization core

pub mod entity;
pub mod text_index;

pub use entity::{AnonymizedText, Detection, EntityKind, Span};
pub use text_index::TextIndex;
