use std::sync::LazyLock;

use crate::bands::{Band, BandTable, Severity, UpperBound};
use crate::descriptor::{
    Field, FieldGroup, InstrumentDescriptor, Layout, Ratio, Region, RegionalLayout, Rounding,
    ScoreOption,
};
use crate::scoring::{ScoreRange, ScoreType};

/// SCORAD: SCORing Atopic Dermatitis.
/// Area A (0–100) from eight weighted body regions, intensity I (six signs
/// rated 0–3), subjective S (itch and sleeplessness, 0–10 each, 3-day recall).
/// Total = A/5 + 7I/2 + S, range 0–103.
pub static SCORAD: LazyLock<InstrumentDescriptor> = LazyLock::new(|| {
    let regions = [
        ("headNeck", "Head and neck", 9.0),
        ("upperLimbLeft", "Left upper limb", 9.0),
        ("upperLimbRight", "Right upper limb", 9.0),
        ("lowerLimbLeft", "Left lower limb", 18.0),
        ("lowerLimbRight", "Right lower limb", 18.0),
        ("anteriorTrunk", "Anterior trunk", 18.0),
        ("back", "Back", 18.0),
        ("genitals", "Genitals", 1.0),
    ]
    .into_iter()
    .map(|(id, name, weight)| Region {
        id: id.to_string(),
        name: name.to_string(),
        weight,
    })
    .collect();

    let intensity_labels = ["None", "Mild", "Moderate", "Severe"];
    let intensity = [
        ("redness", "Redness"),
        ("swelling", "Swelling"),
        ("oozingCrusting", "Oozing/crusting"),
        ("scratchMarks", "Scratch marks"),
        ("lichenification", "Lichenification"),
        ("dryness", "Dryness"),
    ]
    .into_iter()
    .map(|(id, name)| Field {
        id: id.to_string(),
        name: name.to_string(),
        score_type: ScoreType::Rating,
        range: ScoreRange::discrete(0.0, 3.0),
        options: intensity_labels
            .iter()
            .zip(0..)
            .map(|(label, value)| ScoreOption {
                value,
                label: label.to_string(),
            })
            .collect(),
        description: None,
    })
    .collect();

    let subjective = [("itch", "Itch"), ("sleeplessness", "Sleeplessness")]
        .into_iter()
        .map(|(id, name)| Field {
            id: id.to_string(),
            name: name.to_string(),
            score_type: ScoreType::VisualAnalogue,
            range: ScoreRange::continuous(0.0, 10.0),
            options: Vec::new(),
            description: Some("Average over the last 3 days".to_string()),
        })
        .collect();

    InstrumentDescriptor {
        id: "scorad".to_string(),
        name: "SCORAD".to_string(),
        version: "1993".to_string(),
        reference: Some("European Task Force on Atopic Dermatitis (1993)".to_string()),
        description: Some("Severity of atopic dermatitis".to_string()),
        layout: Layout::Regional(RegionalLayout {
            region_range: ScoreRange::continuous(0.0, 100.0),
            regions,
            area_max: 100.0,
            area_coefficient: Ratio::new(1, 5),
            area_rounding: Rounding::OneDecimal,
            groups: vec![
                FieldGroup {
                    id: "intensity".to_string(),
                    name: "Intensity".to_string(),
                    fields: intensity,
                    coefficient: Ratio::new(7, 2),
                    rounding: Rounding::Integral,
                },
                FieldGroup {
                    id: "subjective".to_string(),
                    name: "Subjective".to_string(),
                    fields: subjective,
                    coefficient: Ratio::ONE,
                    rounding: Rounding::OneDecimal,
                },
            ],
            total_rounding: Rounding::OneDecimal,
        }),
        // 25 is moderate, 50 is severe.
        bands: BandTable {
            bands: vec![
                Band {
                    upper: UpperBound::Exclusive(25.0),
                    severity: Severity::Mild,
                },
                Band {
                    upper: UpperBound::Exclusive(50.0),
                    severity: Severity::Moderate,
                },
            ],
            ceiling: Severity::Severe,
        },
        max_score: 103.0,
    }
});
