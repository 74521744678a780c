// ==========================================
// 诊断 API 集成测试
// ==========================================
// 测试目标: DuvalApi 输入归一化与诊断输出, ScreeningApi 请求处理
// ==========================================


use dga_duval::api::{ApiError, DuvalApi, ScreeningApi, ScreeningRequest};
use dga_duval::domain::types::{
    AgeBracket, Gas, PreservationRegime, ScreeningCondition, SeverityGroup, ZoneCode,
};
use test_helpers::{default_manager, manager_with_locale, panel_of, zero_panel};

// ==========================================
// 输入归一化
// ==========================================

#[test]
fn test_normalize_ppm() {
    let api = DuvalApi::new(&default_manager());

    let c = api.normalize_ppm(200.0, 100.0, 100.0).unwrap();
    assert_eq!((c.ch4, c.c2h4, c.c2h2), (50.0, 25.0, 25.0));

    let c = api.normalize_ppm(0.0, 0.0, 0.0).unwrap();
    assert!(c.is_zero());
}

#[test]
fn test_normalize_sliders_fills_acetylene() {
    let api = DuvalApi::new(&default_manager());
    let c = api.normalize_sliders(50.0, 40.0).unwrap();
    assert_eq!((c.ch4, c.c2h4, c.c2h2), (50.0, 40.0, 10.0));
}

#[test]
fn test_normalize_sliders_renormalizes_overshoot() {
    let api = DuvalApi::new(&default_manager());
    let c = api.normalize_sliders(70.0, 50.0).unwrap();
    assert_eq!(c.c2h2, 0.0);
    assert!((c.sum() - 100.0).abs() < 1e-9);
    assert!((c.ch4 - 70.0 / 1.2).abs() < 1e-9);
}

#[test]
fn test_negative_and_non_finite_inputs_rejected() {
    let api = DuvalApi::new(&default_manager());
    assert!(matches!(
        api.normalize_sliders(-1.0, 20.0),
        Err(ApiError::InvalidReading { .. })
    ));
    assert!(matches!(
        api.diagnose_ppm(f64::NAN, 1.0, 1.0),
        Err(ApiError::InvalidReading { .. })
    ));
    assert!(api.diagnose_percentages(50.0, 60.0, -10.0).is_err());
}

// ==========================================
// 诊断
// ==========================================

#[test]
fn test_diagnose_ppm_low_energy_discharge() {
    let api = DuvalApi::new(&default_manager());
    let d = api.diagnose_ppm(10.0, 10.0, 80.0).unwrap();

    assert_eq!(d.zone, ZoneCode::D1);
    assert_eq!(d.severity_group, SeverityGroup::Electrical);
    assert_eq!(d.fault.name, "低能放电");
    assert!(d.rule.starts_with("RULE_D1"));
    assert!((d.point.x - 0.15).abs() < 1e-9);
    assert!((d.point.y - 0.10).abs() < 1e-9);
}

#[test]
fn test_diagnose_zero_reading_is_not_applicable() {
    let api = DuvalApi::new(&default_manager());
    let d = api.diagnose_ppm(0.0, 0.0, 0.0).unwrap();
    assert_eq!(d.zone, ZoneCode::NotApplicable);
    assert_eq!(d.severity_group, SeverityGroup::Unclassified);
    assert_eq!(d.fault.name, "数据不足");
}

#[test]
fn test_diagnose_percentages_out_of_range() {
    let api = DuvalApi::new(&default_manager());
    let d = api.diagnose_percentages(50.0, 50.0, 0.5).unwrap();
    assert_eq!(d.zone, ZoneCode::OutOfRange);
    assert_eq!(d.fault.name, "超出三角形");
}

#[test]
fn test_diagnose_sliders() {
    let api = DuvalApi::new(&default_manager());
    assert_eq!(api.diagnose_sliders(50.0, 40.0).unwrap().zone, ZoneCode::Dt);
    assert_eq!(api.diagnose_sliders(70.0, 50.0).unwrap().zone, ZoneCode::T2);
    assert_eq!(api.diagnose_sliders(99.0, 0.5).unwrap().zone, ZoneCode::Pd);
}

#[test]
fn test_english_fault_description() {
    let api = DuvalApi::new(&manager_with_locale("en"));
    let d = api.diagnose_percentages(25.0, 35.0, 40.0).unwrap();
    assert_eq!(d.zone, ZoneCode::D2);
    assert_eq!(d.fault.name, "High-energy discharges");
}

#[test]
fn test_diagnosis_serializes_zone_code() {
    let api = DuvalApi::new(&default_manager());
    let d = api.diagnose_percentages(0.0, 0.0, 0.0).unwrap();
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["zone"], "N/A");
}

#[test]
fn test_render_svg_marks_point() {
    let api = DuvalApi::new(&default_manager());
    let d = api.diagnose_percentages(40.0, 45.0, 15.0).unwrap();

    let svg = api.render_svg(Some(&d));
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("current-point"));
    assert_eq!(svg, api.render_svg(Some(&d)));

    let empty = api.diagnose_percentages(0.0, 0.0, 0.0).unwrap();
    assert!(!api.render_svg(Some(&empty)).contains("current-point"));
}

// ==========================================
// IEEE 筛查 API
// ==========================================

#[test]
fn test_screen_request_from_json() {
    let request: ScreeningRequest = serde_json::from_str(
        r#"{"o2_ppm": 20.0, "n2_ppm": 100.0, "age": "UNKNOWN", "panel": {"CH4": 150.0}}"#,
    )
    .unwrap();

    let report = ScreeningApi::new(&default_manager()).screen(&request).unwrap();
    assert_eq!(report.regime, PreservationRegime::Sealed);
    assert_eq!(report.condition(), Some(ScreeningCondition::Alert));
}

#[test]
fn test_screen_english_labels() {
    let request = ScreeningRequest {
        o2_ppm: Some(10.0),
        n2_ppm: Some(100.0),
        age: AgeBracket::Unknown,
        panel: panel_of(&[(Gas::Ch4, 150.0)]),
    };
    let report = ScreeningApi::new(&manager_with_locale("en")).screen(&request).unwrap();
    let assessment = report.assessment.unwrap();
    assert_eq!(assessment.label, "Condition 3 (High / Alert)");
    assert!(assessment.rationale.contains("95th percentile"));
}

#[test]
fn test_screen_unknown_regime_has_no_condition() {
    let request = ScreeningRequest {
        o2_ppm: Some(5.0),
        n2_ppm: None,
        age: AgeBracket::Over30,
        panel: zero_panel(),
    };
    let report = ScreeningApi::new(&default_manager()).screen(&request).unwrap();
    assert_eq!(report.regime, PreservationRegime::Unknown);
    assert!(report.condition().is_none());
}

#[test]
fn test_screen_rejects_negative_reading() {
    let request = ScreeningRequest {
        o2_ppm: Some(5.0),
        n2_ppm: Some(100.0),
        age: AgeBracket::Unknown,
        panel: panel_of(&[(Gas::Co, -3.0)]),
    };
    match ScreeningApi::new(&default_manager()).screen(&request) {
        Err(ApiError::InvalidReading { field, .. }) => assert_eq!(field, "CO"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_reference_tables() {
    let api = ScreeningApi::new(&default_manager());
    let rows = api.reference_tables(PreservationRegime::Sealed);
    let h2 = rows.iter().find(|r| r.gas == Gas::H2).unwrap();
    assert_eq!(h2.p90[0], (AgeBracket::Unknown, 80.0));
    assert_eq!(h2.p95[3], (AgeBracket::Over30, 200.0));
}

// ==========================================
// 展示标签
// ==========================================

fn sealed_request() -> ScreeningRequest {
    ScreeningRequest {
        o2_ppm: Some(10.0),
        n2_ppm: Some(100.0),
        age: AgeBracket::Years10To30,
        panel: panel_of(&[(Gas::Ch4, 120.0)]),
    }
}

#[test]
fn test_screen_chinese_display_labels() {
    let report = ScreeningApi::new(&default_manager()).screen(&sealed_request()).unwrap();
    assert_eq!(report.regime_label, "密封式 (O₂/N₂ ≤ 0.2)");
    assert_eq!(report.age_label, "10–30 年");

    let ch4 = report.rows.iter().find(|r| r.gas == Gas::Ch4).unwrap();
    assert_eq!(ch4.gas_label, "甲烷 (CH₄)");
}

#[test]
fn test_screen_english_display_labels() {
    let report = ScreeningApi::new(&manager_with_locale("en"))
        .screen(&sealed_request())
        .unwrap();
    assert_eq!(report.regime_label, "Sealed (O₂/N₂ ≤ 0.2)");
    assert_eq!(report.age_label, "10–30 years");

    let labels: Vec<&str> = report.rows.iter().map(|r| r.gas_label.as_str()).collect();
    assert_eq!(labels[0], "Hydrogen (H₂)");
    assert_eq!(labels[6], "Carbon dioxide (CO₂)");
}

#[test]
fn test_screen_unknown_regime_label() {
    let request = ScreeningRequest {
        n2_ppm: None,
        ..sealed_request()
    };
    let zh = ScreeningApi::new(&default_manager()).screen(&request).unwrap();
    assert_eq!(zh.regime_label, "未知 (需要 N₂ > 0)");

    let en = ScreeningApi::new(&manager_with_locale("en")).screen(&request).unwrap();
    assert_eq!(en.regime_label, "Unknown (requires N₂ > 0)");
}

#[test]
fn test_reference_tables_gas_labels() {
    let zh = ScreeningApi::new(&default_manager()).reference_tables(PreservationRegime::Sealed);
    assert_eq!(zh[4].gas, Gas::C2h2);
    assert_eq!(zh[4].gas_label, "乙炔 (C₂H₂)");

    let en = ScreeningApi::new(&manager_with_locale("en"))
        .reference_tables(PreservationRegime::FreeBreathing);
    assert_eq!(en[4].gas_label, "Acetylene (C₂H₂)");
}
