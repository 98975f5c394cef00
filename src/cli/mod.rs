//! Driver layer between the command line and the core

pub mod orchestration;
