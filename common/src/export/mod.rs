//! ワークブック出力

pub mod excel_core;

pub use excel_core::{generate_inventory_buffer, validation_plan, ListValidation};
