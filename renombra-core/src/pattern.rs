use serde::Serialize;

/// A known report prefix and the display name it is renamed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pattern {
    pub prefix: &'static str,
    pub display_name: &'static str,
}

const fn pattern(prefix: &'static str, display_name: &'static str) -> Pattern {
    Pattern {
        prefix,
        display_name,
    }
}

/// Ordered pattern table. Order is match priority: the first prefix that
/// matches wins, so entries must not be sorted or deduplicated.
pub const PATTERNS: &[Pattern] = &[
    pattern(
        "1 Suministro a la RO",
        "Suministro de crudo de la TMDB a la RO",
    ),
    pattern(
        "2 Calidad de punto cercano a la RO",
        "Calidad de punto cercano a la RO",
    ),
    pattern(
        "3 Envío calidad al SNR",
        "Comportamiento de calidad (Envío al SNR)",
    ),
    pattern("4 Calidad exportacion", "Exportación TMDB"),
    pattern(
        "5 Retorno crudo RO a TMDB",
        "Retorno de crudo de la RO a la TMDB",
    ),
    pattern(
        "6 Seguimiento de calidad de crudo a RO",
        "Entrega de crudo a Refinería Olmeca",
    ),
    pattern("7 Crudo reposado", "TMDB Crudo reposado"),
    pattern(
        "8. Tanques de repaso",
        "Comportamiento – TV-5009 (repaso)",
    ),
    pattern(
        "ACONDICIONAMIENTO",
        "ACONDICIONAMIENTO DE CRUDO MAYA EN TANQUE",
    ),
    pattern("RDI LAB ID INFORME DE LINEAS", "INFORME DIARIO DE LÍNEAS"),
    pattern(
        "Escenario de distribución de crudo en tanques",
        "Escenario de distribución de crudo en tanques",
    ),
];

/// Find the first pattern whose prefix starts `stem`. Case-sensitive.
pub fn match_pattern(stem: &str) -> Option<&'static Pattern> {
    match_in(PATTERNS, stem)
}

pub fn match_in<'a>(table: &'a [Pattern], stem: &str) -> Option<&'a Pattern> {
    table.iter().find(|p| stem.starts_with(p.prefix))
}
