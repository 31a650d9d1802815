pub mod pattern;
pub mod polarity_engine;
pub mod valence;
