use crashcalc::age::{age_correction, age_correction_for_dates};
use crashcalc::curve::{limit_speed, segment};
use crashcalc::depreciation::{Bvsk, Mfm};
use crashcalc::lane_change;
use crashcalc::slope;
use crashcalc::stopping::{StoppingInput, MEAN_DECEL, REACTION_TIME, THRESHOLD_TIME, V_END, V_START};
use crashcalc::store::{load_inputs, save_inputs, FieldStore, MemoryStore};
use crashcalc::*;

/// Stopping from 50 km/h with 0.8 s reaction, 0.2 s threshold, 7.5 m/s².
#[test]
fn test_stopping_sequence_from_fields() {
    let mut inputs = Inputs::new();
    inputs.set_text(V_START, "50");
    inputs.set_text(V_END, "0");
    inputs.set_text(REACTION_TIME, "0,8");
    inputs.set_text(THRESHOLD_TIME, "0,2");
    inputs.set_text(MEAN_DECEL, "7,5");

    let seq = StoppingInput::from_inputs(&inputs)
        .and_then(|input| input.compute())
        .unwrap();

    let opts = FormatOptions::default();
    assert_eq!(format_number(seq.reaction_distance, 2, &opts), "11,11");
    assert_eq!(
        seq.total_distance,
        seq.reaction_distance + seq.threshold_distance + seq.braking_distance
    );
    assert!(seq.onset_speed < 50.0);
    assert!(seq.total_duration > 1.0);
}

#[test]
fn test_stopping_sequence_partial_stop() {
    let seq = StoppingInput {
        v_start: 80.0,
        v_end: 30.0,
        reaction_time: 1.0,
        threshold_time: 0.2,
        mean_decel: 8.0,
    }
    .compute()
    .unwrap();

    let onset = 80.0 / 3.6 - 0.8;
    let ve = 30.0 / 3.6;
    assert!((seq.braking_duration - (onset - ve) / 8.0).abs() < 1e-12);
}

#[test]
fn test_slope_prefers_angle() {
    let both = slope::evaluate(Some(10.0), Some(50.0)).unwrap();
    let angle_only = slope::evaluate(Some(10.0), None).unwrap();
    assert_eq!(both, angle_only);
    assert!((both.downhill_decel - 9.81 * 10f64.to_radians().sin()).abs() < 1e-12);
}

#[test]
fn test_curve_segment_and_limit_speed() {
    let seg = segment(30.0, 2.0).unwrap();
    assert!((seg.radius - (900.0 / 16.0 + 1.0)).abs() < 1e-9);

    let v = limit_speed(seg.radius, 0.7, 0.0).unwrap();
    assert!(v > 0.0);

    // 1 − μ·e = 0
    assert!(limit_speed(seg.radius, 0.8, 125.0).is_none());
}

#[test]
fn test_lane_change_distance_scales_with_speed() {
    let slow = lane_change::evaluate(3.0, 2.0, 50.0).unwrap();
    let fast = lane_change::evaluate(3.0, 2.0, 100.0).unwrap();
    assert_eq!(slow.normal.duration, fast.normal.duration);
    assert!((fast.normal.distance - 2.0 * slow.normal.distance).abs() < 1e-9);
}

#[test]
fn test_bvsk_zero_replacement_value() {
    let bvsk = Bvsk {
        replacement_value: 0.0,
        k: 1.1,
        percent: 5.0,
        m: 2.0,
    };
    assert_eq!(bvsk.compute(), 0.0);
}

#[test]
fn test_mfm_with_dated_age_correction() {
    let ak = age_correction_for_dates("15.01.2020", "2023-01-15").unwrap();
    assert_eq!(ak, age_correction(36));

    let mfm = Mfm {
        sale_value: 12_000.0,
        new_price: 24_000.0,
        repair_cost: 5_000.0,
        damage_extent: 0.4,
        age_correction: ak,
        marketability: 1.0,
        prior_damage: 0.9,
    };
    let expected = (120.0 + 0.5 * 5_000.0 * 0.4 * ak) * 0.9;
    assert!((mfm.compute() - expected).abs() < 1e-9);
}

#[test]
fn test_age_correction_table_edges() {
    assert_eq!(age_correction(0), 0.25);
    assert_eq!(age_correction(120), 0.0);
    assert_eq!(age_correction(130), 0.0);

    // Registered after the reference date counts as new.
    assert_eq!(age_correction_for_dates("2024-06-01", "2024-01-01").unwrap(), 0.25);
    assert!(matches!(
        age_correction_for_dates("yesterday", "2024-01-01"),
        Err(CalcError::InvalidDate(_))
    ));
}

#[test]
fn test_session_snapshot_round_trip() {
    let group = groups::curve_geometry();
    let inputs = Inputs::new().with("chord", 20.0).with("height", 0.125);

    let mut store = MemoryStore::new();
    save_inputs(&group, &inputs, &mut store);
    let json = store.to_json().unwrap();

    let restored = MemoryStore::from_json(&json).unwrap();
    assert_eq!(restored.get("curve_geometry.height").as_deref(), Some("0.125"));

    let solver = Solver::new(group.clone());
    let loaded = load_inputs(&group, &restored);
    let radius = solver.solve(&loaded, &VarId::from_str("radius")).unwrap();
    assert!((radius.value().unwrap() - (400.0 / 1.0 + 0.0625)).abs() < 1e-9);
}
