//! Viewport-Culling für Line-Tools.
//!
//! Klassifiziert die Pixel-Geometrie eines Tools gegen den Pane und
//! entscheidet vor jeder Shape-Komposition, ob das Tool diesen Frame
//! überhaupt darstellbar ist. Ein geculltes Tool leistet null weitere
//! Arbeit und registriert keine Hit-Ziele.

use super::{CullOrientation, ExtendFlags};
use crate::core::{ChartScale, LogicalPoint};
use glam::Vec2;

/// Culling-Urteil relativ zu den vier Pane-Kanten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullingState {
    /// Geometrie kann den Pane schneiden — rendern
    Visible,
    /// Vollständig oberhalb des Pane
    OffScreenTop,
    /// Vollständig unterhalb des Pane
    OffScreenBottom,
    /// Vollständig links des Pane
    OffScreenLeft,
    /// Vollständig rechts des Pane
    OffScreenRight,
    /// Nicht klassifizierbar/darstellbar (fehlende Punkte, keine
    /// Bildschirmposition, kein sichtbares Segment)
    FullyOffScreen,
}

impl CullingState {
    /// Soll das Tool diesen Frame gerendert werden?
    pub fn is_visible(self) -> bool {
        self == CullingState::Visible
    }
}

/// Ein unabhängig testbares Segment in der abgeflachten Punktliste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRef {
    /// Index des Startpunkts
    pub a: usize,
    /// Index des Endpunkts
    pub b: usize,
    /// Läuft über den Startpunkt hinaus ins Unendliche
    pub extend_a: bool,
    /// Läuft über den Endpunkt hinaus ins Unendliche
    pub extend_b: bool,
}

impl SegmentRef {
    /// Begrenztes Segment zwischen zwei Punkt-Indizes.
    pub fn bounded(a: usize, b: usize) -> Self {
        Self {
            a,
            b,
            extend_a: false,
            extend_b: false,
        }
    }
}

/// Segment-Beschreibung zusammengesetzter Tools (z.B. Level-Fächer).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CullingInfo {
    /// Unabhängig testbare Segmente über der abgeflachten Punktliste
    pub segments: Vec<SegmentRef>,
}

/// Klassifiziert ein Tool gegen den aktuellen Pane.
///
/// Reihenfolge der Regeln:
/// 1. Zusammengesetzte Tools (`culling_info`): sichtbar gdw. irgendein
///    Segment den Pane schneidet.
/// 2. Einzelpunkt-Infinite-Tools (`orientation`): nur die begrenzte Achse
///    cullt; in beide Richtungen unbegrenzte Tools werden nie gecullt.
/// 3. Begrenzte Formen: Bounding-Box gegen den Pane, vertikal vor
///    horizontal. `extend.right` hebt `OffScreenLeft` auf,
///    `extend.left` hebt `OffScreenRight` auf; Top/Bottom werden von
///    Extension-Flags nie aufgehoben (Extension ist horizontal).
pub fn culling_state(
    points: &[LogicalPoint],
    extend: ExtendFlags,
    orientation: Option<CullOrientation>,
    culling_info: Option<&CullingInfo>,
    scale: &dyn ChartScale,
) -> CullingState {
    if points.is_empty() {
        return CullingState::FullyOffScreen;
    }
    let [width, height] = scale.pane_size();
    if width <= 0.0 || height <= 0.0 {
        return CullingState::FullyOffScreen;
    }

    let mut pixels = Vec::with_capacity(points.len());
    for point in points {
        match scale.point_to_pixel(*point) {
            Some(px) if px.is_finite() => pixels.push(px),
            _ => {
                log::trace!("Punkt ohne Bildschirmposition: {point:?} — Tool übersprungen");
                return CullingState::FullyOffScreen;
            }
        }
    }

    let pane_min = Vec2::ZERO;
    let pane_max = Vec2::new(width, height);

    if let Some(info) = culling_info {
        for seg in &info.segments {
            let (Some(&a), Some(&b)) = (pixels.get(seg.a), pixels.get(seg.b)) else {
                continue;
            };
            if segment_intersects_rect(a, b, seg.extend_a, seg.extend_b, pane_min, pane_max) {
                return CullingState::Visible;
            }
        }
        return CullingState::FullyOffScreen;
    }

    if let Some(orient) = orientation {
        let px = pixels[0];
        if orient.horizontal && orient.vertical {
            return CullingState::Visible;
        }
        if orient.horizontal {
            // Unbegrenzt in Zeitrichtung: nur der Preis (Y) cullt.
            if px.y < 0.0 {
                return CullingState::OffScreenTop;
            }
            if px.y > height {
                return CullingState::OffScreenBottom;
            }
            return CullingState::Visible;
        }
        // Unbegrenzt in Preisrichtung: nur die Zeit (X) cullt.
        if px.x < 0.0 {
            return CullingState::OffScreenLeft;
        }
        if px.x > width {
            return CullingState::OffScreenRight;
        }
        return CullingState::Visible;
    }

    let (bb_min, bb_max) = bounding_box(&pixels);
    if bb_max.y < 0.0 {
        return CullingState::OffScreenTop;
    }
    if bb_min.y > height {
        return CullingState::OffScreenBottom;
    }
    if bb_max.x < 0.0 {
        return if extend.right {
            CullingState::Visible
        } else {
            CullingState::OffScreenLeft
        };
    }
    if bb_min.x > width {
        return if extend.left {
            CullingState::Visible
        } else {
            CullingState::OffScreenRight
        };
    }
    CullingState::Visible
}

/// Prüft ob ein Punkt innerhalb eines AABB-Rechtecks liegt (inklusiv).
pub(crate) fn point_in_rect(point: Vec2, min: Vec2, max: Vec2) -> bool {
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

/// Prüft ob ein (ggf. einseitig/beidseitig unendliches) Segment ein
/// AABB-Rechteck schneidet oder darin liegt (Liang-Barsky-Clipping mit
/// erweitertem Parameter-Bereich).
pub(crate) fn segment_intersects_rect(
    a: Vec2,
    b: Vec2,
    extend_a: bool,
    extend_b: bool,
    min: Vec2,
    max: Vec2,
) -> bool {
    let d = b - a;
    let mut t0 = if extend_a { f32::NEG_INFINITY } else { 0.0 };
    let mut t1 = if extend_b { f32::INFINITY } else { 1.0 };

    for (delta, q_min, q_max) in [
        (d.x, min.x - a.x, max.x - a.x),
        (d.y, min.y - a.y, max.y - a.y),
    ] {
        if delta.abs() < f32::EPSILON {
            // Parallel zum Slab: außerhalb → kein Schnitt möglich
            if q_min > 0.0 || q_max < 0.0 {
                return false;
            }
        } else {
            let (mut enter, mut exit) = (q_min / delta, q_max / delta);
            if enter > exit {
                std::mem::swap(&mut enter, &mut exit);
            }
            t0 = t0.max(enter);
            t1 = t1.min(exit);
            if t0 > t1 {
                return false;
            }
        }
    }
    true
}

fn bounding_box(pixels: &[Vec2]) -> (Vec2, Vec2) {
    let mut min = pixels[0];
    let mut max = pixels[0];
    for px in &pixels[1..] {
        min = min.min(*px);
        max = max.max(*px);
    }
    (min, max)
}
