pub mod reset_offsets;
