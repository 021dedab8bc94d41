//! # Prompt Templates
//!
//! This module holds the prompt content used by the analysis pipeline. The
//! rubric itself is domain material, not control flow, so it lives in a
//! markdown asset next to the module and is included at compile time.

pub mod analysis;
