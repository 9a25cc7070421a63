//! antei-export
//!
//! Downloadable report generation: a Tera template rendered from the
//! assessment result, converted to DOCX. Pure rendering — no scoring
//! logic lives here.

pub mod context;
pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
pub mod template;
