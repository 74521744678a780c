// ==========================================
// 区域几何集成测试
// ==========================================
// 测试目标: 栅格化与点分类器一致、边界线、标签锚点
// ==========================================


use dga_duval::domain::types::{TernaryAxis, ZoneCode};
use dga_duval::engine::{DuvalClassifier, TernaryProjector, ZoneGeometry};
use test_helpers::EPS;

fn assert_raster_agrees_with_classifier(resolution: usize) {
    let geometry = ZoneGeometry::new();
    let classifier = DuvalClassifier::new();
    let raster = geometry.rasterize_zones(resolution);

    let mut inside = 0;
    for cell in raster.inside_cells() {
        let c = cell.composition;
        let expected = classifier.classify(c.ch4, c.c2h4, c.c2h2);
        assert_eq!(
            cell.zone,
            Some(expected),
            "res={} point=({}, {}) composition=({}, {}, {})",
            resolution,
            cell.point.x,
            cell.point.y,
            c.ch4,
            c.c2h4,
            c.c2h2
        );
        inside += 1;
    }
    assert!(inside > 0);
}

#[test]
fn test_raster_agrees_with_classifier_at_50() {
    assert_raster_agrees_with_classifier(50);
}

#[test]
fn test_raster_agrees_with_classifier_at_120() {
    assert_raster_agrees_with_classifier(120);
}

#[test]
fn test_inside_cells_have_nonnegative_components() {
    let raster = ZoneGeometry::new().rasterize_zones(80);
    for cell in raster.cells() {
        let c = cell.composition;
        let inside = c.ch4 >= 0.0 && c.c2h4 >= 0.0 && c.c2h2 >= 0.0;
        assert_eq!(cell.zone.is_some(), inside);
    }
}

#[test]
fn test_raster_covers_about_half_the_square() {
    let raster = ZoneGeometry::new().rasterize_zones(100);
    let ratio = raster.inside_cells().count() as f64 / raster.cells().len() as f64;
    assert!((ratio - 0.5).abs() < 0.05, "inside ratio = {}", ratio);
}

#[test]
fn test_raster_never_paints_sentinels() {
    let raster = ZoneGeometry::new().rasterize_zones(90);
    assert_eq!(raster.count(ZoneCode::NotApplicable), 0);
    assert_eq!(raster.count(ZoneCode::OutOfRange), 0);
}

#[test]
fn test_raster_is_deterministic() {
    let geometry = ZoneGeometry::new();
    assert_eq!(geometry.rasterize_zones(40), geometry.rasterize_zones(40));
}

#[test]
fn test_boundary_polylines_fixed_values() {
    let projector = TernaryProjector::new();
    let lines = ZoneGeometry::new().boundary_polylines();

    let values: Vec<(TernaryAxis, f64)> = lines.iter().map(|l| (l.axis, l.value)).collect();
    assert_eq!(
        values,
        vec![
            (TernaryAxis::Ch4, 98.0),
            (TernaryAxis::C2h4, 20.0),
            (TernaryAxis::C2h4, 23.0),
            (TernaryAxis::C2h4, 40.0),
            (TernaryAxis::C2h4, 50.0),
            (TernaryAxis::C2h2, 4.0),
            (TernaryAxis::C2h2, 13.0),
            (TernaryAxis::C2h2, 15.0),
            (TernaryAxis::C2h2, 29.0),
        ]
    );

    for line in &lines {
        for p in &line.points {
            let c = projector.inverse(p);
            let fixed = match line.axis {
                TernaryAxis::Ch4 => c.ch4,
                TernaryAxis::C2h4 => c.c2h4,
                TernaryAxis::C2h2 => c.c2h2,
            };
            assert!((fixed - line.value).abs() < 1e-9);
        }
    }
}

#[test]
fn test_outline_is_closed_triangle() {
    let outline = ZoneGeometry::new().outline();
    assert_eq!(outline[0], outline[3]);
    assert!((outline[2].y - 1.0).abs() < EPS);
}

#[test]
fn test_label_anchors_classify_to_their_zone() {
    let classifier = DuvalClassifier::new();
    let anchors = ZoneGeometry::new().label_anchors();
    assert_eq!(anchors.len(), ZoneCode::FAULT_ZONES.len());

    for anchor in anchors {
        let c = anchor.composition;
        assert_eq!(classifier.classify(c.ch4, c.c2h4, c.c2h2), anchor.zone);
    }
}
