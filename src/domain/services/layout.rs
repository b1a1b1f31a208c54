//! Folder naming for the recommended corpus layout

use crate::domain::value_objects::{Period, Tradition};

/// Canon folder for documents whose canon could not be determined
pub const UNKNOWN_CANON: &str = "Unknown";

/// Make a label safe as a single path segment
///
/// `Chan/Zen` becomes `Chan_Zen`, `Pure Land` becomes `Pure_Land`.
pub fn folder_segment(label: &str) -> String {
    label
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}

/// Recommended home of one document: canon, tradition, optional period
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Destination {
    pub canon: String,
    pub tradition: Tradition,
    pub period: Option<Period>,
}

impl Destination {
    /// Relative folder path with `/` separators and a trailing `/`
    pub fn path(&self) -> String {
        let mut path = format!("Canon_{}/", folder_segment(&self.canon));
        if self.tradition.is_unspecified() {
            path.push_str(&folder_segment(self.tradition.label()));
        } else {
            path.push_str(&format!("Tradition_{}", folder_segment(self.tradition.label())));
        }
        path.push('/');
        if let Some(period) = self.period {
            path.push_str(&format!("Period_{}/", folder_segment(period.label())));
        }
        path
    }
}
