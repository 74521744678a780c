// ==========================================
// DGA Duval 诊断引擎 - Duval 三角形 SVG 渲染
// ==========================================
// 顶点: CH4 (上), C2H4 (右下), C2H2 (左下)
// 图层: 区域填充 → 边界线 → 外框 → 区域标签 → 轴标题 → 当前点
// 红线: 纯函数,相同输入输出相同的 SVG 字符串
// ==========================================

use crate::domain::composition::PlanePoint;
use crate::domain::diagnosis::DuvalDiagnosis;
use crate::domain::types::ZoneCode;
use crate::engine::zone_geometry::{effective_resolution, ZoneGeometry, DEFAULT_RESOLUTION};
use tracing::debug;

/// 平面坐标显示范围 [-0.08, 1.08]
const VIEW_MIN: f64 = -0.08;
const VIEW_SPAN: f64 = 1.16;

/// 区域填充颜色
pub fn zone_color(zone: ZoneCode) -> &'static str {
    match zone {
        ZoneCode::Pd => "#FFE4B5",
        ZoneCode::T1 => "#98FB98",
        ZoneCode::T2 => "#90EE90",
        ZoneCode::T3 => "#00FA9A",
        ZoneCode::D1 => "#FFB6C1",
        ZoneCode::D2 => "#FF69B4",
        ZoneCode::Dt => "#DDA0DD",
        ZoneCode::NotApplicable | ZoneCode::OutOfRange => "#D3D3D3",
    }
}

// ==========================================
// TriangleRenderer - 三角形渲染器
// ==========================================
#[derive(Debug, Clone)]
pub struct TriangleRenderer {
    geometry: ZoneGeometry,
    resolution: usize,
    size_px: f64,
}

impl Default for TriangleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleRenderer {
    /// 默认: 120 × 120 栅格, 560 px 画布
    pub fn new() -> Self {
        Self {
            geometry: ZoneGeometry::new(),
            resolution: DEFAULT_RESOLUTION,
            size_px: 560.0,
        }
    }

    /// 指定区域几何（决定等值线采样点数）
    pub fn with_geometry(mut self, geometry: ZoneGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// 指定栅格分辨率
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = effective_resolution(resolution);
        self
    }

    /// 指定画布边长 (px)
    pub fn with_size(mut self, size_px: f64) -> Self {
        self.size_px = size_px;
        self
    }

    /// 平面坐标 → 画布坐标 (y 轴翻转)
    fn to_canvas(&self, p: &PlanePoint) -> (f64, f64) {
        let cx = (p.x - VIEW_MIN) / VIEW_SPAN * self.size_px;
        let cy = self.size_px - (p.y - VIEW_MIN) / VIEW_SPAN * self.size_px;
        (cx, cy)
    }

    fn polyline_points(&self, points: &[PlanePoint]) -> String {
        points
            .iter()
            .map(|p| {
                let (x, y) = self.to_canvas(p);
                format!("{:.2},{:.2}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    // ==========================================
    // 图层
    // ==========================================

    fn zone_fill_layer(&self) -> String {
        let raster = self.geometry.rasterize_zones(self.resolution);
        let w = raster.cell_width() / VIEW_SPAN * self.size_px;
        let h = raster.cell_height() / VIEW_SPAN * self.size_px;

        let mut layer = String::from(r#"<g id="zones" opacity="0.6">"#);
        for cell in raster.inside_cells() {
            if let Some(zone) = cell.zone {
                let (cx, cy) = self.to_canvas(&cell.point);
                layer.push_str(&format!(
                    r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                    cx - w / 2.0,
                    cy - h / 2.0,
                    w,
                    h,
                    zone_color(zone)
                ));
            }
        }
        layer.push_str("</g>");
        layer
    }

    fn boundary_layer(&self) -> String {
        let mut layer = String::from(r#"<g id="boundaries" stroke="black" stroke-width="1" stroke-opacity="0.8" fill="none">"#);
        for line in self.geometry.boundary_polylines() {
            layer.push_str(&format!(
                r#"<polyline data-axis="{}" data-value="{}" points="{}"/>"#,
                line.axis,
                line.value,
                self.polyline_points(&line.points)
            ));
        }
        layer.push_str("</g>");
        layer
    }

    fn outline_layer(&self) -> String {
        format!(
            r#"<polyline id="outline" points="{}" stroke="black" stroke-width="2" fill="none"/>"#,
            self.polyline_points(&self.geometry.outline())
        )
    }

    fn label_layer(&self) -> String {
        let mut layer = String::from(r##"<g id="labels" font-size="11" font-weight="bold" fill="#444" text-anchor="middle" dominant-baseline="middle">"##);
        for anchor in self.geometry.label_anchors() {
            let (x, y) = self.to_canvas(&anchor.point);
            layer.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}">{}</text>"#,
                x, y, anchor.zone
            ));
        }
        layer.push_str("</g>");
        layer
    }

    fn axis_layer(&self) -> String {
        let captions = [
            (PlanePoint::new(0.5, 1.05), "% CH₄"),
            (PlanePoint::new(-0.06, -0.04), "% C₂H₂"),
            (PlanePoint::new(1.06, -0.04), "% C₂H₄"),
        ];
        let mut layer = String::from(r#"<g id="axes" font-size="12" text-anchor="middle">"#);
        for (p, caption) in captions.iter() {
            let (x, y) = self.to_canvas(p);
            layer.push_str(&format!(r#"<text x="{:.2}" y="{:.2}">{}</text>"#, x, y, caption));
        }
        layer.push_str("</g>");
        layer
    }

    /// 五角星标记
    fn marker(&self, p: &PlanePoint) -> String {
        let (cx, cy) = self.to_canvas(p);
        let outer = self.size_px * 0.022;
        let inner = outer * 0.45;
        let points = (0..10)
            .map(|i| {
                let r = if i % 2 == 0 { outer } else { inner };
                let angle = std::f64::consts::PI / 5.0 * i as f64 - std::f64::consts::FRAC_PI_2;
                format!("{:.2},{:.2}", cx + r * angle.cos(), cy + r * angle.sin())
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            r#"<polygon id="current-point" points="{}" fill="red" stroke="black" stroke-width="1"/>"#,
            points
        )
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 渲染 SVG
    ///
    /// diagnosis 为 None 或哨兵结果 (N/A) 时不绘制当前点
    pub fn render_svg(&self, diagnosis: Option<&DuvalDiagnosis>) -> String {
        let size = self.size_px;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}" style="background:white">"#,
            size, size, size, size
        );
        svg.push_str(&self.zone_fill_layer());
        svg.push_str(&self.boundary_layer());
        svg.push_str(&self.outline_layer());
        svg.push_str(&self.label_layer());
        svg.push_str(&self.axis_layer());

        if let Some(d) = diagnosis.filter(|d| d.zone != ZoneCode::NotApplicable) {
            svg.push_str(&self.marker(&d.point));
            svg.push_str(&format!(
                r#"<title>{} ({:.1}%, {:.1}%, {:.1}%)</title>"#,
                d.zone, d.composition.ch4, d.composition.c2h4, d.composition.c2h2
            ));
        }

        svg.push_str("</svg>");
        debug!(bytes = svg.len(), "Duval 三角形 SVG 渲染完成");
        svg
    }
}
