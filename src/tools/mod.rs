//! Daten-getriebenes Line-Tool-System.
//!
//! Jeder Tool-Typ ist ein `ToolKind` mit statischem `ToolDescriptor`
//! (Punkt-/Handle-Anzahl, Normalisierung, Orientierung) statt einer
//! Klassen-Hierarchie. Tool-Varianten (Ray, Extended Line, Pfeil) werden
//! über das Options-Record ausgewählt, nie über Subtypen. Die Registry
//! bildet Typ-Tags auf Factories ab.

/// Anker-Virtualisierung: Handle-Index ↔ persistierte Punkte.
pub mod anchors;
/// Shift-Drag-Constraints (Achsen-Locks) pro Tool-Typ und Phase.
pub mod constraints;
/// Viewport-Culling inkl. Extension- und Orientierungs-Regeln.
pub mod culling;
/// Statische Verhaltens-Records pro Tool-Typ.
pub mod descriptor;
/// Tool-spezifische Geometrie und Frame-Komposition.
pub mod kinds;

pub use anchors::{Edge, HandleFormula};
pub use constraints::{Constrained, DragPhase, SnapAxis};
pub use culling::{CullingInfo, CullingState, SegmentRef};
pub use descriptor::{descriptor, CullOrientation, NormalizePolicy, ToolDescriptor};

use crate::core::{ChartScale, LogicalPoint};
use crate::shared::options as shared_options;
use crate::shared::ToolDefaults;
use anyhow::{bail, Result};
use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ── Typen ────────────────────────────────────────────────────────

/// Typ-Tag eines Line-Tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Zwei-Punkt-Linie; Ray/Extended/Pfeil über Options-Varianten
    TrendLine,
    /// Unendliche horizontale Linie (ein Punkt)
    HorizontalLine,
    /// Unendliche vertikale Linie (ein Punkt)
    VerticalLine,
    /// Fadenkreuz: unendlich in beiden Achsen (ein Punkt)
    CrossLine,
    /// Rechteck aus zwei gegenüberliegenden Ecken
    Rectangle,
    /// Zeitraum-Box (gerichtet: Start → Ende)
    DateRange,
    /// Preisspannen-Box (gerichtet: Start → Ende)
    PriceRange,
    /// Beschriftung mit Zeiger (gerichtet: Ziel → Label)
    Callout,
    /// Elliott-Wellen-Markierung (Impulse/Korrektur über Options)
    ElliottWave,
    /// Trend-basierte Fibonacci-Extension mit Level-Fächer
    FibExtension,
}

impl ToolKind {
    /// Alle eingebauten Tool-Typen in Registry-Reihenfolge.
    pub const ALL: [ToolKind; 10] = [
        ToolKind::TrendLine,
        ToolKind::HorizontalLine,
        ToolKind::VerticalLine,
        ToolKind::CrossLine,
        ToolKind::Rectangle,
        ToolKind::DateRange,
        ToolKind::PriceRange,
        ToolKind::Callout,
        ToolKind::ElliottWave,
        ToolKind::FibExtension,
    ];

    /// Registry-/Serialisierungs-Tag des Typs.
    pub fn tag(self) -> &'static str {
        match self {
            ToolKind::TrendLine => "trend_line",
            ToolKind::HorizontalLine => "horizontal_line",
            ToolKind::VerticalLine => "vertical_line",
            ToolKind::CrossLine => "cross_line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::DateRange => "date_range",
            ToolKind::PriceRange => "price_range",
            ToolKind::Callout => "callout",
            ToolKind::ElliottWave => "elliott_wave",
            ToolKind::FibExtension => "fib_extension",
        }
    }

    /// Löst ein Tag auf einen Tool-Typ auf.
    pub fn from_tag(tag: &str) -> Option<ToolKind> {
        ToolKind::ALL.into_iter().find(|k| k.tag() == tag)
    }
}

/// Horizontale Unendlich-Flags eines Tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtendFlags {
    /// Geometrie läuft links (Richtung Vergangenheit) ins Unendliche
    pub left: bool,
    /// Geometrie läuft rechts (Richtung Zukunft) ins Unendliche
    pub right: bool,
}

/// Endkappen-Stil einer Trendlinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapStyle {
    /// Keine Kappe
    #[default]
    Flat,
    /// Pfeilspitze am Endpunkt (gerichtete Variante)
    Arrow,
}

/// Elliott-Wellen-Muster — bestimmt das Punkt-Budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WavePattern {
    /// Impulswelle 0-1-2-3-4-5 (6 Punkte)
    #[default]
    Impulse,
    /// Korrekturwelle 0-A-B-C (4 Punkte)
    Correction,
}

impl WavePattern {
    /// Anzahl persistierter Punkte des Musters.
    pub fn point_budget(self) -> usize {
        match self {
            WavePattern::Impulse => 6,
            WavePattern::Correction => 4,
        }
    }

    /// Beschriftungen der Wellen-Punkte.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            WavePattern::Impulse => &["0", "1", "2", "3", "4", "5"],
            WavePattern::Correction => &["0", "A", "B", "C"],
        }
    }
}

/// Ein Fibonacci-Level: Koeffizient + Darstellungsfarbe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FibLevel {
    /// Koeffizient relativ zur Basis-Bewegung (0.618, 1.0, 1.618, …)
    pub coeff: f64,
    /// Linienfarbe des Levels (RGBA)
    pub color: [f32; 4],
}

/// Options-Record eines Tools: Stil + Geometrie-Varianten.
///
/// Für das Geometrie-Layer sind nur `extend`, `cap`, `levels` und `wave`
/// relevant; die Stil-Felder reicht der Host unverändert an seine Maler
/// durch. Serde-Defaults halten alte Exporte importierbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolOptions {
    /// Linienfarbe (RGBA)
    pub line_color: [f32; 4],
    /// Linienstärke in Screen-Pixeln
    pub line_width: f32,
    /// Füllfarbe für Flächen-Tools (RGBA)
    pub fill_color: [f32; 4],
    /// Endkappen-Stil (nur Trendlinien-Familie)
    pub cap: CapStyle,
    /// Horizontale Unendlich-Flags
    pub extend: ExtendFlags,
    /// Fibonacci-Levels (nur FibExtension)
    pub levels: Vec<FibLevel>,
    /// Wellen-Muster (nur ElliottWave)
    pub wave: WavePattern,
    /// Beschriftungstext (nur Callout)
    pub text: Option<String>,
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self {
            line_color: shared_options::LINE_COLOR_DEFAULT,
            line_width: shared_options::LINE_WIDTH_DEFAULT,
            fill_color: shared_options::FILL_COLOR_DEFAULT,
            cap: CapStyle::default(),
            extend: ExtendFlags::default(),
            levels: default_levels(&shared_options::FIB_LEVELS_DEFAULT),
            wave: WavePattern::default(),
            text: None,
        }
    }
}

impl ToolOptions {
    /// Erstellt Options aus den Laufzeit-Defaults des Hosts.
    pub fn from_defaults(defaults: &ToolDefaults) -> Self {
        Self {
            line_color: defaults.line_color,
            line_width: defaults.line_width,
            fill_color: defaults.fill_color,
            levels: default_levels(&defaults.fib_levels),
            ..Self::default()
        }
    }

    /// Macht die Variante die Linie gerichtet (Pfeil oder asymmetrische Extension)?
    pub(crate) fn is_directional_line(&self) -> bool {
        self.cap != CapStyle::Flat || self.extend.left != self.extend.right
    }
}

fn default_levels(coeffs: &[f64]) -> Vec<FibLevel> {
    coeffs
        .iter()
        .map(|&coeff| FibLevel {
            coeff,
            color: shared_options::LINE_COLOR_DEFAULT,
        })
        .collect()
}

/// Ergebnis eines Erstellungs-Klicks — steuert den Tool-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationAction {
    /// Punkt registriert, weitere Eingabe nötig
    Continue,
    /// Alle nötigen Punkte gesetzt — Erstellung abgeschlossen
    Finished,
}

// ── LineTool ─────────────────────────────────────────────────────

/// Ein Line-Tool: Typ-Tag, persistierte Punkte, Options-Record.
///
/// Die Punkte sind die einzige persistierte Geometrie; alle virtuellen
/// Handles werden über `point`/`set_point` aus ihnen abgeleitet.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTool {
    kind: ToolKind,
    points: Vec<LogicalPoint>,
    /// Stil + Geometrie-Varianten (für dieses Layer nur `extend`/`cap`/
    /// `levels`/`wave` relevant)
    pub options: ToolOptions,
}

impl LineTool {
    /// Erstellt ein leeres Tool für die interaktive Erstellung.
    pub fn new(kind: ToolKind, options: ToolOptions) -> Self {
        Self {
            kind,
            points: Vec::new(),
            options,
        }
    }

    /// Erstellt ein Tool programmatisch mit vollständigem Punkt-Satz.
    pub fn with_points(
        kind: ToolKind,
        points: Vec<LogicalPoint>,
        options: ToolOptions,
    ) -> Result<Self> {
        let mut tool = Self::new(kind, options);
        if points.len() > tool.points_budget() {
            bail!(
                "{} erwartet höchstens {} Punkte, {} übergeben",
                kind.tag(),
                tool.points_budget(),
                points.len()
            );
        }
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            bail!("Nicht-endlicher Punkt übergeben: {bad:?}");
        }
        tool.points = points;
        Ok(tool)
    }

    /// Tool-Typ.
    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    /// Persistierte Punkte in semantischer Reihenfolge.
    pub fn points(&self) -> &[LogicalPoint] {
        &self.points
    }

    /// Statischer Verhaltens-Record des Typs.
    pub fn descriptor(&self) -> &'static ToolDescriptor {
        descriptor::descriptor(self.kind)
    }

    /// Anzahl persistierter Anker (Elliott: abhängig vom Wellen-Muster).
    pub fn points_budget(&self) -> usize {
        match self.kind {
            ToolKind::ElliottWave => self.options.wave.point_budget(),
            _ => self.descriptor().points_count,
        }
    }

    /// Höchster interaktiver Handle-Index.
    pub fn max_anchor_index(&self) -> usize {
        match self.kind {
            ToolKind::ElliottWave => self.points_budget() - 1,
            _ => self.descriptor().max_anchor_index,
        }
    }

    /// Sind alle persistierten Punkte gesetzt?
    pub fn is_complete(&self) -> bool {
        self.points.len() == self.points_budget()
    }

    /// Effektive Extension-Flags (Typen ohne Extension ignorieren die Options).
    pub fn effective_extend(&self) -> ExtendFlags {
        if self.descriptor().supports_extend {
            self.options.extend
        } else {
            ExtendFlags::default()
        }
    }

    /// Erstellungs-Protokoll: nächsten Punkt anhängen.
    ///
    /// Nicht-endliche Punkte werden verworfen (`Continue`); über das
    /// Budget hinaus wird nichts angehängt.
    pub fn add_point(&mut self, point: LogicalPoint) -> CreationAction {
        if !point.is_finite() {
            return CreationAction::Continue;
        }
        if self.points.len() < self.points_budget() {
            self.points.push(point);
        }
        if self.points.len() >= self.points_budget() {
            CreationAction::Finished
        } else {
            CreationAction::Continue
        }
    }

    /// Handle-Zugriff: persistiert (`index < points_budget`) oder abgeleitet.
    ///
    /// Außerhalb `[0, max_anchor_index]` oder bei unvollständigen Punkten
    /// für abgeleitete Formeln: `None` — nie ein Fehler als Kontrollfluss.
    pub fn point(&self, index: usize) -> Option<LogicalPoint> {
        if index > self.max_anchor_index() {
            return None;
        }
        let formula = *anchors::handle_table(self.kind).get(index)?;
        anchors::resolve(&self.points, formula)
    }

    /// Handle-Schreibzugriff: verteilt abgeleitete Edits auf genau die
    /// persistierten Koordinaten, von denen die Formel abhängt.
    pub fn set_point(&mut self, index: usize, point: LogicalPoint) {
        if index > self.max_anchor_index() || !point.is_finite() {
            return;
        }
        let Some(&formula) = anchors::handle_table(self.kind).get(index) else {
            return;
        };
        anchors::apply(&mut self.points, formula, point);
    }

    /// Normalisiert die Punkt-Reihenfolge nach Abschluss einer Geste.
    pub fn normalize(&mut self) {
        if self.normalize_policy() == NormalizePolicy::TimeAscending && self.points.len() == 2 {
            let [a, b] = [self.points[0], self.points[1]];
            let swap = b.timestamp < a.timestamp
                || (b.timestamp == a.timestamp && b.price < a.price);
            if swap {
                self.points.swap(0, 1);
            }
        }
    }

    /// Effektive Normalisierungs-Policy: gerichtete Trendlinien-Varianten
    /// (Pfeil, Ray) behalten ihre Punkt-Reihenfolge.
    fn normalize_policy(&self) -> NormalizePolicy {
        if self.kind == ToolKind::TrendLine && self.options.is_directional_line() {
            NormalizePolicy::Keep
        } else {
            self.descriptor().normalization
        }
    }

    /// Shift-Drag-Constraint: korrigierter Pixel-Punkt für den Aufrufer.
    ///
    /// `original` ist die logische Originalposition des gegriffenen Handles,
    /// `all_original` die Originalpunkte beim Gesten-Start. Mutiert nie den
    /// Tool-Zustand.
    pub fn shift_constrained_point(
        &self,
        handle_index: usize,
        raw: Vec2,
        phase: DragPhase,
        original: Option<LogicalPoint>,
        all_original: &[LogicalPoint],
        scale: &dyn ChartScale,
    ) -> Constrained {
        constraints::shift_constrained_point(
            self.kind,
            handle_index,
            raw,
            phase,
            original,
            all_original,
            scale,
        )
    }

    /// Culling-Urteil für den aktuellen Ausschnitt.
    ///
    /// Unvollständige Tools sind nie darstellbar; zusammengesetzte Tools
    /// (FibExtension) werden über ihre unabhängigen Segmente beurteilt.
    pub fn culling_state(&self, scale: &dyn ChartScale) -> CullingState {
        if !self.is_complete() {
            return CullingState::FullyOffScreen;
        }
        match self.kind {
            ToolKind::FibExtension => {
                let (flat, info) = kinds::fib_extension::flattened_points(self);
                culling::culling_state(&flat, self.effective_extend(), None, Some(&info), scale)
            }
            _ => culling::culling_state(
                &self.points,
                self.effective_extend(),
                self.descriptor().orientation,
                None,
                scale,
            ),
        }
    }
}

// ── ToolRegistry ─────────────────────────────────────────────────

/// Factory-Funktion: erzeugt ein frisches Tool mit Standard-Options.
pub type ToolFactory = fn() -> LineTool;

/// Registry: Typ-Tag → Factory.
///
/// Ersetzt klassenbasierte Registrierung; die Iterations-Reihenfolge ist
/// die Registrierungs-Reihenfolge (deterministisch).
pub struct ToolRegistry {
    factories: IndexMap<&'static str, ToolFactory>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Erstellt eine Registry mit allen eingebauten Tool-Typen.
    pub fn new() -> Self {
        let mut registry = Self {
            factories: IndexMap::new(),
        };
        for kind in ToolKind::ALL {
            registry.register(kind.tag(), builtin_factory(kind));
        }
        registry
    }

    /// Registriert eine Factory unter einem Tag (überschreibt bestehende).
    pub fn register(&mut self, tag: &'static str, factory: ToolFactory) {
        self.factories.insert(tag, factory);
    }

    /// Erzeugt ein frisches Tool für ein Tag.
    pub fn create(&self, tag: &str) -> Option<LineTool> {
        self.factories.get(tag).map(|factory| factory())
    }

    /// Alle registrierten Tags in Registrierungs-Reihenfolge.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

/// Eingebaute Factory eines Tool-Typs (frisches Tool mit Standard-Options).
fn builtin_factory(kind: ToolKind) -> ToolFactory {
    match kind {
        ToolKind::TrendLine => || LineTool::new(ToolKind::TrendLine, ToolOptions::default()),
        ToolKind::HorizontalLine => {
            || LineTool::new(ToolKind::HorizontalLine, ToolOptions::default())
        }
        ToolKind::VerticalLine => || LineTool::new(ToolKind::VerticalLine, ToolOptions::default()),
        ToolKind::CrossLine => || LineTool::new(ToolKind::CrossLine, ToolOptions::default()),
        ToolKind::Rectangle => || LineTool::new(ToolKind::Rectangle, ToolOptions::default()),
        ToolKind::DateRange => || LineTool::new(ToolKind::DateRange, ToolOptions::default()),
        ToolKind::PriceRange => || LineTool::new(ToolKind::PriceRange, ToolOptions::default()),
        ToolKind::Callout => || LineTool::new(ToolKind::Callout, ToolOptions::default()),
        ToolKind::ElliottWave => || LineTool::new(ToolKind::ElliottWave, ToolOptions::default()),
        ToolKind::FibExtension => || LineTool::new(ToolKind::FibExtension, ToolOptions::default()),
    }
}
