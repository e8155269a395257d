//! Level-Projektion der Fibonacci-Extension.

use crate::core::LogicalPoint;
use crate::tools::{CullingInfo, FibLevel, LineTool, SegmentRef};

/// Projizierte Level-Segmente: `(Level, Start, Ende)` in logischen
/// Koordinaten.
///
/// Der Level-Preis ist `anker + coeff * (basis_ende - basis_start)` über
/// die Preisachse; die Zeit-Spanne jedes Levels entspricht der Dauer der
/// Basis-Bewegung, vorwärts ab dem Anker-Punkt.
pub(crate) fn level_segments(tool: &LineTool) -> Vec<(FibLevel, LogicalPoint, LogicalPoint)> {
    let points = tool.points();
    let [basis_start, basis_ende, anker] = match points {
        [a, b, c] => [*a, *b, *c],
        _ => return Vec::new(),
    };
    let preis_delta = basis_ende.price - basis_start.price;
    let zeit_spanne = (basis_ende.timestamp - basis_start.timestamp).abs();

    tool.options
        .levels
        .iter()
        .map(|level| {
            let preis = anker.price + level.coeff * preis_delta;
            (
                *level,
                LogicalPoint::new(anker.timestamp, preis),
                LogicalPoint::new(anker.timestamp + zeit_spanne, preis),
            )
        })
        .collect()
}

/// Abgeflachte Punktliste + Segment-Beschreibung fürs Culling.
///
/// Indizes 0-2 sind die persistierten Punkte (Basis-Segmente), dahinter
/// folgen die Level-Endpunkte paarweise. Extension-Flags gelten nur für
/// die Level-Segmente, nie für die Basis.
pub(crate) fn flattened_points(tool: &LineTool) -> (Vec<LogicalPoint>, CullingInfo) {
    let mut flat = tool.points().to_vec();
    if flat.len() < 3 {
        return (flat, CullingInfo::default());
    }

    let mut segments = vec![SegmentRef::bounded(0, 1), SegmentRef::bounded(1, 2)];
    let extend = tool.effective_extend();
    for (_, start, ende) in level_segments(tool) {
        let index = flat.len();
        flat.push(start);
        flat.push(ende);
        segments.push(SegmentRef {
            a: index,
            b: index + 1,
            extend_a: extend.left,
            extend_b: extend.right,
        });
    }
    (flat, CullingInfo { segments })
}
