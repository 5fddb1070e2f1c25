use sona_core::models::{Band, Interpretation, ScoreTransform, UNEVALUATED_LABEL};

fn band(min: f64, max: f64, label: &str) -> Band {
    Band {
        min,
        max,
        label: label.to_string(),
    }
}

#[test]
fn first_matching_band_wins() {
    let interpretation = Interpretation {
        bands: vec![
            band(30.0, 100.0, "Elevated"),
            band(0.0, 30.0, "Typical"),
        ],
        transform: None,
    };

    // 30 sits in both bands; the earlier one wins.
    assert_eq!(interpretation.label_for(30.0), "Elevated");
    assert_eq!(interpretation.label_for(29.5), "Typical");
    assert_eq!(interpretation.label_for(100.0), "Elevated");
}

#[test]
fn band_boundaries_are_inclusive() {
    let interpretation = Interpretation {
        bands: vec![band(0.0, 4.0, "Minimal"), band(5.0, 9.0, "Mild")],
        transform: None,
    };

    assert_eq!(interpretation.label_for(0.0), "Minimal");
    assert_eq!(interpretation.label_for(4.0), "Minimal");
    assert_eq!(interpretation.label_for(5.0), "Mild");
    assert_eq!(interpretation.label_for(9.0), "Mild");
}

#[test]
fn out_of_range_score_resolves_to_sentinel() {
    let interpretation = Interpretation {
        bands: vec![band(0.0, 10.0, "Low")],
        transform: None,
    };

    assert_eq!(interpretation.label_for(-1.0), UNEVALUATED_LABEL);
    assert_eq!(interpretation.label_for(10.5), UNEVALUATED_LABEL);
}

#[test]
fn divide_by_transform_rounds_to_decimals() {
    let transform = ScoreTransform::DivideBy {
        divisor: 28.0,
        decimals: 2,
    };

    assert_eq!(transform.apply(56.0), 2.0);
    assert_eq!(transform.apply(100.0), 3.57);
    assert_eq!(transform.apply(0.0), 0.0);
}

#[test]
fn transform_score_is_identity_without_transform() {
    let interpretation = Interpretation {
        bands: vec![],
        transform: None,
    };

    assert_eq!(interpretation.transform_score(17.0), 17.0);
}
