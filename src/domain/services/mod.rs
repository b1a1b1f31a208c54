//! Domain Services
//!
//! Pure classification logic. No I/O: callers hand in extracted metadata and
//! get labels back.

mod classifier;
mod keyword_tables;
mod layout;
mod provenance;

pub use classifier::{
    classify, classify_geographic, classify_period, classify_tradition, tradition_text,
    Classifier,
};
pub use keyword_tables::{KeywordTable, ORIGIN_TABLE, PERIOD_TABLE, TRADITION_TABLE};
pub use layout::{folder_segment, Destination, UNKNOWN_CANON};
pub use provenance::classify_provenance;
