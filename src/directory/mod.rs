mod cleaning;
mod structure;

// Re-export common functions
pub use cleaning::clear_destination;
pub use structure::mirror_subdirectories;
