//! Zentrale Konfiguration für die Line-Tools.
//!
//! `ToolDefaults` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Handles ─────────────────────────────────────────────────────────

/// Darstellungs-Radius eines Handle-Markers in Screen-Pixeln.
pub const HANDLE_RADIUS_PX: f32 = 5.0;
/// Hit-Radius eines Handle-Markers in Screen-Pixeln (etwas größer als die Darstellung).
pub const HANDLE_HIT_RADIUS_PX: f32 = 8.0;

// ── Hit-Test ────────────────────────────────────────────────────────

/// Toleranz für Linien-Hit-Tests in Screen-Pixeln.
pub const LINE_HIT_TOLERANCE_PX: f32 = 4.0;

// ── Linien-Darstellung ──────────────────────────────────────────────

/// Standard-Linienstärke in Screen-Pixeln.
pub const LINE_WIDTH_DEFAULT: f32 = 1.5;
/// Standard-Linienfarbe (RGBA: Blau).
pub const LINE_COLOR_DEFAULT: [f32; 4] = [0.16, 0.38, 0.92, 1.0];
/// Standard-Füllfarbe für Flächen-Tools (RGBA: Blau, halbtransparent).
pub const FILL_COLOR_DEFAULT: [f32; 4] = [0.16, 0.38, 0.92, 0.18];
/// Farbe für Handle-Marker (RGBA: Weiß mit blauem Rand wird vom Host gemalt).
pub const HANDLE_COLOR_DEFAULT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Pfeilspitzen-Länge in Screen-Pixeln.
pub const ARROW_LENGTH_PX: f32 = 12.0;
/// Pfeilspitzen-Breite in Screen-Pixeln.
pub const ARROW_WIDTH_PX: f32 = 7.0;
/// Hit-Radius runder Text-Plaketten (Wellen-Labels, Level-Labels).
pub const TEXT_PLATE_RADIUS_PX: f32 = 10.0;
/// Hit-Radius der Callout-Plakette.
pub const CALLOUT_PLATE_RADIUS_PX: f32 = 16.0;

// ── Fibonacci ───────────────────────────────────────────────────────

/// Standard-Koeffizienten der Fib-Extension-Levels.
pub const FIB_LEVELS_DEFAULT: [f64; 7] = [0.0, 0.382, 0.618, 1.0, 1.382, 1.618, 2.618];

/// Laufzeit-Optionen für Handle-Radien, Hit-Toleranzen und Standard-Stile.
/// Wird als TOML-Datei neben der Host-Anwendung persistiert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDefaults {
    // ── Handles ─────────────────────────────────────────────────
    /// Darstellungs-Radius eines Handles in Screen-Pixeln
    pub handle_radius_px: f32,
    /// Hit-Radius eines Handles in Screen-Pixeln
    pub handle_hit_radius_px: f32,

    // ── Hit-Test ────────────────────────────────────────────────
    /// Toleranz für Linien-Hit-Tests in Screen-Pixeln
    pub line_hit_tolerance_px: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Standard-Linienstärke in Screen-Pixeln
    pub line_width: f32,
    /// Standard-Linienfarbe (RGBA)
    pub line_color: [f32; 4],
    /// Standard-Füllfarbe für Flächen-Tools (RGBA)
    pub fill_color: [f32; 4],
    /// Farbe für Handle-Marker (RGBA)
    pub handle_color: [f32; 4],

    // ── Fibonacci ───────────────────────────────────────────────
    /// Standard-Koeffizienten neuer Fib-Extension-Tools
    #[serde(default = "default_fib_levels")]
    pub fib_levels: Vec<f64>,
}

impl Default for ToolDefaults {
    fn default() -> Self {
        Self {
            handle_radius_px: HANDLE_RADIUS_PX,
            handle_hit_radius_px: HANDLE_HIT_RADIUS_PX,
            line_hit_tolerance_px: LINE_HIT_TOLERANCE_PX,
            line_width: LINE_WIDTH_DEFAULT,
            line_color: LINE_COLOR_DEFAULT,
            fill_color: FILL_COLOR_DEFAULT,
            handle_color: HANDLE_COLOR_DEFAULT,
            fib_levels: FIB_LEVELS_DEFAULT.to_vec(),
        }
    }
}

/// Serde-Default für `fib_levels` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_fib_levels() -> Vec<f64> {
    FIB_LEVELS_DEFAULT.to_vec()
}

impl ToolDefaults {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Tool-Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Tool-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Begrenzt alle Radien/Toleranzen auf sinnvolle Wertebereiche.
    pub fn sanitized(mut self) -> Self {
        self.handle_radius_px = self.handle_radius_px.clamp(1.0, 32.0);
        self.handle_hit_radius_px = self.handle_hit_radius_px.clamp(1.0, 64.0);
        self.line_hit_tolerance_px = self.line_hit_tolerance_px.clamp(0.5, 32.0);
        self.line_width = self.line_width.clamp(0.5, 16.0);
        self.fib_levels.retain(|c| c.is_finite());
        self
    }
}
