//! 모델 파일 로드/저장 회귀 테스트.
use drainage_sizing_toolbox::model::{self, DrainageModel};
use drainage_sizing_toolbox::network::{Point3, Segment};
use drainage_sizing_toolbox::units::LengthUnit;

fn sample_model() -> DrainageModel {
    DrainageModel {
        length_unit: Some(LengthUnit::Foot),
        segments: vec![Segment {
            id: "s1".to_string(),
            start: Point3::new(0.0, 0.0, 8.0),
            end: Point3::new(0.0, 0.0, 10.0),
            load_units: 40.0,
            slope: None,
            diameter: None,
            locked: false,
            system: Some("W1".to_string()),
        }],
    }
}

#[test]
fn save_then_load_roundtrip() {
    let path = std::env::temp_dir().join(format!(
        "drainage_model_roundtrip_{}.json",
        std::process::id()
    ));
    let saved = sample_model();
    model::save(&path, &saved).expect("save model");
    let loaded = model::load(&path).expect("load model");
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.length_unit, Some(LengthUnit::Foot));
    assert_eq!(loaded.segments.len(), 1);
    assert_eq!(loaded.segments[0].id, "s1");
    assert!((loaded.segments[0].load_units - 40.0).abs() < 1e-12);
    assert!(loaded.segments[0].diameter.is_none());
}

#[test]
fn optional_fields_default_when_absent() {
    // 호스트가 내보낸 최소 형태: slope/diameter/locked/system 생략 가능.
    let raw = r#"{
        "segments": [
            {
                "id": "s1",
                "start": { "x": 0.0, "y": 0.0, "z": 8.0 },
                "end": { "x": 0.0, "y": 0.0, "z": 10.0 },
                "load_units": 12.0
            }
        ]
    }"#;
    let path = std::env::temp_dir().join(format!(
        "drainage_model_minimal_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, raw).expect("write model file");
    let loaded = model::load(&path).expect("load model");
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.length_unit, None);
    let seg = &loaded.segments[0];
    assert!(seg.slope.is_none());
    assert!(seg.diameter.is_none());
    assert!(!seg.locked);
    assert!(seg.system.is_none());
}
