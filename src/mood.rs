//! Mood labels from an external sentiment classifier, mapped to stress.

use anyhow::Result;

use crate::settings::StressLevel;

/// Seam for whatever turns free text into a sentiment label
/// ("positive", "negative", anything else for neutral).
pub trait MoodClassifier {
    fn classify(&self, text: &str) -> Result<String>;
}

impl<F> MoodClassifier for F
where
    F: Fn(&str) -> Result<String>,
{
    fn classify(&self, text: &str) -> Result<String> {
        self(text)
    }
}

/// Labels are matched case-insensitively; classifiers commonly emit
/// "NEGATIVE"/"POSITIVE".
pub fn stress_for_label(label: &str) -> StressLevel {
    let label = label.trim();
    if label.eq_ignore_ascii_case("negative") {
        StressLevel::High
    } else if label.eq_ignore_ascii_case("positive") {
        StressLevel::Low
    } else {
        StressLevel::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_labels_to_stress() {
        assert_eq!(stress_for_label("negative"), StressLevel::High);
        assert_eq!(stress_for_label("NEGATIVE"), StressLevel::High);
        assert_eq!(stress_for_label("positive"), StressLevel::Low);
        assert_eq!(stress_for_label("neutral"), StressLevel::Normal);
        assert_eq!(stress_for_label(""), StressLevel::Normal);
    }

    #[test]
    fn closures_are_classifiers() {
        let classifier = |text: &str| -> Result<String> {
            Ok(if text.contains("tired") { "NEGATIVE" } else { "POSITIVE" }.to_string())
        };
        assert_eq!(classifier.classify("so tired").unwrap(), "NEGATIVE");
    }
}
