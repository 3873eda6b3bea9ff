pub mod output;
pub mod progress;

pub use output::{
    banner, create_standard_table, format_number, header_cell, info, step, success,
    warning,
};
pub use progress::create_spinner;
