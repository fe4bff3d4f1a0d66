//! Marker-based patient name extraction.
//!
//! Scans reconstructed text lines for a title marker ("Monsieur", "Madame",
//! ...) and reads the first two capitalized tokens after it as first and
//! last name.  Lines are the outer loop and markers the inner loop, in the
//! order given, and the first hit wins.

use crate::types::{NameMatch, PatientName};

/// Title markers checked when the caller does not provide any.
pub const DEFAULT_MARKERS: [&str; 2] = ["Monsieur", "Madame"];

/// Tokens of `segment` whose first character is an uppercase letter.
pub fn capitalized_tokens(segment: &str) -> Vec<&str> {
    segment
        .split_whitespace()
        .filter(|token| token.chars().next().is_some_and(char::is_uppercase))
        .collect()
}

/// Find the first name that follows one of `markers`, with its location.
///
/// For each line, top to bottom, every marker is tried in list order.  The
/// line is split at the marker's first occurrence; the part after it must
/// hold at least two capitalized tokens for the combination to match.
/// Empty markers never match.
pub fn find_patient_name<L, M>(lines: &[L], markers: &[M]) -> Option<NameMatch>
where
    L: AsRef<str>,
    M: AsRef<str>,
{
    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();

        for marker in markers {
            let marker = marker.as_ref();
            if marker.is_empty() {
                continue;
            }

            let Some((_, after)) = line.split_once(marker) else {
                continue;
            };

            // Marker at the end of the line: nothing to read.
            if after.trim().is_empty() {
                continue;
            }

            if let [first, last, ..] = capitalized_tokens(after)[..] {
                return Some(NameMatch {
                    name: PatientName::new(first, last),
                    line: index,
                    marker: marker.to_string(),
                });
            }
        }
    }

    None
}

/// Extract the patient's first and last name, if any line names one.
///
/// Finding nothing is an ordinary outcome and yields `None`.
pub fn extract_patient_name<L, M>(lines: &[L], markers: &[M]) -> Option<PatientName>
where
    L: AsRef<str>,
    M: AsRef<str>,
{
    find_patient_name(lines, markers).map(|m| m.name)
}
