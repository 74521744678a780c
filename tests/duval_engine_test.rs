// ==========================================
// Duval 三角形 1 引擎集成测试
// ==========================================
// 测试目标: 坐标投影、区域分类、哨兵值
// 覆盖范围: PD/T1/T2/T3/D1/D2/DT + N/A / OUT_OF_RANGE
// ==========================================


use dga_duval::domain::types::{TernaryAxis, ZoneCode};
use dga_duval::engine::{zone_for, DuvalClassifier, TernaryProjector, ZONE_RULES};
use test_helpers::{assert_point_eq, composition_grid, EPS};

fn classify(ch4: f64, c2h4: f64, c2h2: f64) -> ZoneCode {
    DuvalClassifier::new().classify(ch4, c2h4, c2h2)
}

// ==========================================
// 投影
// ==========================================

#[test]
fn test_vertices_project_exactly() {
    let projector = TernaryProjector::new();
    assert_point_eq(projector.project(100.0, 0.0, 0.0), (0.5, 1.0));
    assert_point_eq(projector.project(0.0, 100.0, 0.0), (1.0, 0.0));
    assert_point_eq(projector.project(0.0, 0.0, 100.0), (0.0, 0.0));
}

#[test]
fn test_inverse_recovers_grid_compositions() {
    let projector = TernaryProjector::new();
    for (ch4, c2h4, c2h2) in composition_grid(5) {
        let back = projector.inverse(&projector.project(ch4, c2h4, c2h2));
        assert!((back.ch4 - ch4).abs() < 1e-9);
        assert!((back.c2h4 - c2h4).abs() < 1e-9);
        assert!((back.c2h2 - c2h2).abs() < 1e-9);
    }
}

#[test]
fn test_project_many_matches_scalar() {
    let projector = TernaryProjector::new();
    let ch4 = [10.0, 40.0, 99.0];
    let c2h4 = [10.0, 35.0, 0.5];
    let c2h2 = [80.0, 25.0, 0.5];

    let points = projector.project_many(&ch4, &c2h4, &c2h2);
    assert_eq!(points.len(), 3);
    for i in 0..3 {
        assert_eq!(points[i], projector.project(ch4[i], c2h4[i], c2h2[i]));
    }
}

#[test]
fn test_isoline_holds_fixed_component() {
    let projector = TernaryProjector::new();
    let points = projector.project_isoline(TernaryAxis::C2h4, 40.0);
    assert!(!points.is_empty());

    for p in &points {
        let c = projector.inverse(p);
        assert!((c.c2h4 - 40.0).abs() < 1e-9);
        assert!(c.ch4 >= -EPS && c.c2h2 >= -EPS);
    }

    assert!(projector.project_isoline(TernaryAxis::Ch4, 100.0).is_empty());
    assert!(projector.project_isoline(TernaryAxis::C2h2, 120.0).is_empty());
}

// ==========================================
// 分类
// ==========================================

#[test]
fn test_sentinel_results() {
    assert_eq!(classify(0.0, 0.0, 0.0), ZoneCode::NotApplicable);
    assert_eq!(classify(50.0, 50.0, 0.5), ZoneCode::OutOfRange);
    assert_eq!(classify(30.0, 30.0, 30.0), ZoneCode::OutOfRange);
}

#[test]
fn test_literal_cases() {
    assert_eq!(classify(10.0, 10.0, 80.0), ZoneCode::D1);
    assert_eq!(classify(90.0, 5.0, 5.0), ZoneCode::Dt);
}

#[test]
fn test_high_methane_is_always_pd() {
    for tenth in 980..=1000 {
        let ch4 = tenth as f64 / 10.0;
        let rest = 100.0 - ch4;
        for split in 0..=4 {
            let c2h4 = rest * split as f64 / 4.0;
            let c2h2 = rest - c2h4;
            assert_eq!(classify(ch4, c2h4, c2h2), ZoneCode::Pd, "({}, {}, {})", ch4, c2h4, c2h2);
        }
    }
}

#[test]
fn test_each_zone_reachable() {
    let cases = [
        ((99.0, 0.5, 0.5), ZoneCode::Pd),
        ((87.0, 10.0, 3.0), ZoneCode::T1),
        ((60.0, 38.0, 2.0), ZoneCode::T2),
        ((25.0, 65.0, 10.0), ZoneCode::T3),
        ((50.0, 15.0, 35.0), ZoneCode::D1),
        ((25.0, 35.0, 40.0), ZoneCode::D2),
        ((55.0, 25.0, 20.0), ZoneCode::D2),
        ((40.0, 35.0, 25.0), ZoneCode::D2),
        ((40.0, 45.0, 15.0), ZoneCode::Dt),
        ((30.0, 52.0, 18.0), ZoneCode::Dt),
    ];
    for ((ch4, c2h4, c2h2), expected) in cases {
        assert_eq!(classify(ch4, c2h4, c2h2), expected, "({}, {}, {})", ch4, c2h4, c2h2);
    }
}

#[test]
fn test_boundary_values_follow_rule_order() {
    // c2h2 = 4 离开 T 区进入 DT
    assert_eq!(classify(76.0, 20.0, 4.0), ZoneCode::Dt);
    // c2h4 = 50 且 c2h2 < 4 → T3 (T2 上界为开区间)
    assert_eq!(classify(48.0, 50.0, 2.0), ZoneCode::T3);
    // c2h2 = 13, c2h4 < 23 → D1 先于 DT
    assert_eq!(classify(67.0, 20.0, 13.0), ZoneCode::D1);
    // c2h2 = 13..15 且 c2h4 ≥ 50 → T3 先于 DT
    assert_eq!(classify(36.0, 50.0, 14.0), ZoneCode::T3);
}

#[test]
fn test_rule_table_is_shared() {
    assert_eq!(ZONE_RULES.len(), 10);
    for (ch4, c2h4, c2h2) in composition_grid(2) {
        assert_eq!(classify(ch4, c2h4, c2h2), zone_for(ch4, c2h4, c2h2).0);
    }
}

#[test]
fn test_explain_names_matching_rule() {
    let (zone, rule) = DuvalClassifier::new().explain(10.0, 10.0, 80.0);
    assert_eq!(zone, ZoneCode::D1);
    assert!(rule.starts_with("RULE_D1"));
}

#[test]
fn test_custom_tolerance() {
    let loose = DuvalClassifier::with_tolerance(1.0);
    assert_eq!(loose.classify(50.0, 50.0, 0.5), ZoneCode::T3);
    assert_eq!(DuvalClassifier::new().sum_tolerance(), 0.01);
}

#[test]
fn test_pure_functions_are_idempotent() {
    let classifier = DuvalClassifier::new();
    let projector = TernaryProjector::new();
    for (ch4, c2h4, c2h2) in composition_grid(10) {
        assert_eq!(classifier.classify(ch4, c2h4, c2h2), classifier.classify(ch4, c2h4, c2h2));
        assert_eq!(projector.project(ch4, c2h4, c2h2), projector.project(ch4, c2h4, c2h2));
    }
}
