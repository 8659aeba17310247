// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod convert;
pub mod hex_color_parser;
pub mod rgb_fn_parser;
pub mod rgb_triplet;
pub mod triplet_parser;

// Re-export.
pub use convert::*;
pub use hex_color_parser::*;
pub use rgb_fn_parser::*;
pub use rgb_triplet::*;
pub use triplet_parser::*;
