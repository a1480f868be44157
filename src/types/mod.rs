mod icon;

pub use icon::{GeneratedIcon, GenerationReport, IconSpec};
