use std::sync::LazyLock;

use crate::bands::{Band, BandTable, Severity, UpperBound};
use crate::descriptor::{
    DaySequenceLayout, Field, InstrumentDescriptor, Layout, Rounding, ScoreOption,
};
use crate::scoring::{ScoreRange, ScoreType};

/// UAS7: Urticaria Activity Score summed over 7 days.
/// Each day rates wheals and itching 0–3. Daily total 0–6, weekly 0–42.
pub static UAS7: LazyLock<InstrumentDescriptor> = LazyLock::new(|| {
    let field = |id: &str, name: &str, labels: [&str; 4]| Field {
        id: id.to_string(),
        name: name.to_string(),
        score_type: ScoreType::Rating,
        range: ScoreRange::discrete(0.0, 3.0),
        options: labels
            .iter()
            .zip(0..)
            .map(|(label, value)| ScoreOption {
                value,
                label: label.to_string(),
            })
            .collect(),
        description: None,
    };

    InstrumentDescriptor {
        id: "uas7".to_string(),
        name: "UAS7".to_string(),
        version: "2017".to_string(),
        reference: Some("Hawro et al. (2017)".to_string()),
        description: Some("Chronic urticaria activity over seven days".to_string()),
        layout: Layout::DaySequence(DaySequenceLayout {
            days: 7,
            fields: vec![
                field(
                    "wheals",
                    "Wheals",
                    [
                        "None",
                        "Mild (<20 wheals/24 hrs)",
                        "Moderate (20-50 wheals/24 hrs)",
                        "Intense (>50 wheals/24 hrs or large confluent areas)",
                    ],
                ),
                field(
                    "itching",
                    "Itching",
                    [
                        "None",
                        "Mild (present but not annoying or troublesome)",
                        "Moderate (troublesome but does not interfere with normal daily activity or sleep)",
                        "Intense (severe, interferes with normal daily activity or sleep)",
                    ],
                ),
            ],
            average_rounding: Rounding::OneDecimal,
        }),
        bands: BandTable {
            bands: vec![
                Band {
                    upper: UpperBound::Inclusive(0.0),
                    severity: Severity::WellControlled,
                },
                Band {
                    upper: UpperBound::Inclusive(6.0),
                    severity: Severity::Mild,
                },
                Band {
                    upper: UpperBound::Inclusive(15.0),
                    severity: Severity::Moderate,
                },
            ],
            ceiling: Severity::Severe,
        },
        max_score: 42.0,
    }
});
