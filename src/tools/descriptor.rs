//! Statische Verhaltens-Records pro Tool-Typ.
//!
//! Jeder `ToolKind` bekommt genau einen `ToolDescriptor`: Anzahl
//! persistierter Punkte, Handle-Anzahl, Normalisierungs-Policy und
//! Culling-Orientierung. Daten statt Vererbung — das Verhalten eines
//! Tool-Typs steht komplett in dieser Tabelle.

use super::ToolKind;

/// Normalisierungs-Policy nach Abschluss einer Erstellungs-/Edit-Geste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizePolicy {
    /// Punkte nach Zeitstempel aufsteigend ordnen; bei Gleichstand
    /// niedrigerer Preis zuerst. Für form-basierte Tools, deren
    /// Handle-Formeln eine kanonische Orientierung voraussetzen.
    TimeAscending,
    /// Reihenfolge unangetastet lassen — sie trägt Bedeutung
    /// (Trend-Start vs. -Ende, Ziel vs. Label).
    Keep,
}

/// Unbegrenzte Achsen eines Einzelpunkt-Tools (Linie ins Unendliche).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CullOrientation {
    /// Unbegrenzt in Zeitrichtung (horizontale Linie)
    pub horizontal: bool,
    /// Unbegrenzt in Preisrichtung (vertikale Linie)
    pub vertical: bool,
}

/// Statischer Geometrie-Vertrag eines Tool-Typs.
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
    /// Tool-Typ, zu dem dieser Record gehört
    pub kind: ToolKind,
    /// Anzahl persistierter Anker-Punkte (Basis-Variante)
    pub points_count: usize,
    /// Höchster interaktiver Handle-Index (kann `points_count - 1` übersteigen)
    pub max_anchor_index: usize,
    /// Normalisierungs-Policy
    pub normalization: NormalizePolicy,
    /// Unbegrenzte Achsen (nur Einzelpunkt-Infinite-Tools)
    pub orientation: Option<CullOrientation>,
    /// Wertet das Tool `ExtendFlags` aus?
    pub supports_extend: bool,
}

/// Statische Descriptor-Tabelle, Reihenfolge = `ToolKind`-Deklaration.
const DESCRIPTORS: [ToolDescriptor; 10] = [
    ToolDescriptor {
        kind: ToolKind::TrendLine,
        points_count: 2,
        max_anchor_index: 2,
        normalization: NormalizePolicy::TimeAscending,
        orientation: None,
        supports_extend: true,
    },
    ToolDescriptor {
        kind: ToolKind::HorizontalLine,
        points_count: 1,
        max_anchor_index: 0,
        normalization: NormalizePolicy::Keep,
        orientation: Some(CullOrientation {
            horizontal: true,
            vertical: false,
        }),
        supports_extend: false,
    },
    ToolDescriptor {
        kind: ToolKind::VerticalLine,
        points_count: 1,
        max_anchor_index: 0,
        normalization: NormalizePolicy::Keep,
        orientation: Some(CullOrientation {
            horizontal: false,
            vertical: true,
        }),
        supports_extend: false,
    },
    ToolDescriptor {
        kind: ToolKind::CrossLine,
        points_count: 1,
        max_anchor_index: 0,
        normalization: NormalizePolicy::Keep,
        orientation: Some(CullOrientation {
            horizontal: true,
            vertical: true,
        }),
        supports_extend: false,
    },
    ToolDescriptor {
        kind: ToolKind::Rectangle,
        points_count: 2,
        max_anchor_index: 7,
        normalization: NormalizePolicy::TimeAscending,
        orientation: None,
        supports_extend: true,
    },
    ToolDescriptor {
        kind: ToolKind::DateRange,
        points_count: 2,
        max_anchor_index: 2,
        normalization: NormalizePolicy::Keep,
        orientation: None,
        supports_extend: false,
    },
    ToolDescriptor {
        kind: ToolKind::PriceRange,
        points_count: 2,
        max_anchor_index: 2,
        normalization: NormalizePolicy::Keep,
        orientation: None,
        supports_extend: false,
    },
    ToolDescriptor {
        kind: ToolKind::Callout,
        points_count: 2,
        max_anchor_index: 1,
        normalization: NormalizePolicy::Keep,
        orientation: None,
        supports_extend: false,
    },
    ToolDescriptor {
        kind: ToolKind::ElliottWave,
        points_count: 6,
        max_anchor_index: 5,
        normalization: NormalizePolicy::Keep,
        orientation: None,
        supports_extend: false,
    },
    ToolDescriptor {
        kind: ToolKind::FibExtension,
        points_count: 3,
        max_anchor_index: 2,
        normalization: NormalizePolicy::Keep,
        orientation: None,
        supports_extend: true,
    },
];

/// Gibt den Descriptor eines Tool-Typs zurück.
pub fn descriptor(kind: ToolKind) -> &'static ToolDescriptor {
    let index = match kind {
        ToolKind::TrendLine => 0,
        ToolKind::HorizontalLine => 1,
        ToolKind::VerticalLine => 2,
        ToolKind::CrossLine => 3,
        ToolKind::Rectangle => 4,
        ToolKind::DateRange => 5,
        ToolKind::PriceRange => 6,
        ToolKind::Callout => 7,
        ToolKind::ElliottWave => 8,
        ToolKind::FibExtension => 9,
    };
    &DESCRIPTORS[index]
}
