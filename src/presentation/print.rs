//! Print document rendering.
//!
//! Produces a fixed-layout plain-text view of an estimate: the inputs as a
//! table, the result block for the contract type, the summary, and a footer.

use std::fmt;

use crate::config::ReferenceData;
use crate::models::{CalculationInput, CalculationResult, ContractType};

use super::currency::format_currency;
use super::summary::summary_text;

/// Document title.
pub const PRINT_TITLE: &str = "Gehaltskalkulator (DACH · Tech)";

/// Disclaimer shown under the title.
pub const PRINT_DISCLAIMER: &str = "Schnelle Orientierung für Angebote & Erwartungen. \
Werte sind Richtwerte und ersetzen keine individuelle Marktanalyse.";

const FOOTER_TEXT: &str =
    "Richtwerte ohne Gewähr. Für exakte Benchmarks: Marktanalyse & Kandidaten-/Kundeninterviews.";

const INDENT: &str = "  ";

/// A rendered-ready print view of one estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    /// Input table rows as (label, value).
    pub inputs: Vec<(String, String)>,
    /// Result rows as (label, value).
    pub results: Vec<(String, String)>,
    /// The summary text.
    pub summary: String,
    /// Note on how the day rate is derived.
    pub note: String,
    /// Footer line.
    pub footer: String,
}

impl PrintDocument {
    /// Builds the print view for an estimate.
    ///
    /// `year` is stamped into the footer.
    pub fn new(
        input: &CalculationInput,
        result: &CalculationResult,
        reference: &ReferenceData,
        year: i32,
    ) -> Self {
        let currency = reference.currency(&input.country);
        let money = |value: f64| format_currency(value, currency);

        let inputs = vec![
            (
                "Rolle:".to_string(),
                label_or_key(reference.role_label(&input.role), &input.role),
            ),
            (
                "Land:".to_string(),
                label_or_key(reference.country_label(&input.country), &input.country),
            ),
            (
                "Stadt:".to_string(),
                label_or_key(reference.city_label(&input.country, &input.city), &input.city),
            ),
            (
                "Berufserfahrung:".to_string(),
                format!("{} Jahre ({})", input.years, result.level.label()),
            ),
            (
                "Remote-Anteil:".to_string(),
                format!("{}%", input.remote_percent),
            ),
            (
                "Unternehmensgröße:".to_string(),
                label_or_key(
                    reference.company_size_label(&input.company_size),
                    &input.company_size,
                ),
            ),
            (
                "Vertragsart:".to_string(),
                label_or_key(
                    reference.contract_label(input.contract),
                    input.contract.as_str(),
                ),
            ),
        ];

        let results = match input.contract {
            ContractType::Perm => vec![
                ("Zielgehalt (Brutto/Jahr)".to_string(), money(result.median)),
                (
                    "Orientierungsbereich (25.–75. Perzentil)".to_string(),
                    format!("{} – {}", money(result.p25), money(result.p75)),
                ),
            ],
            ContractType::Contractor => vec![
                ("Ziel-Tagessatz (Freelance)".to_string(), money(result.day_rate)),
                (
                    "Entspricht Median-Festanstellung".to_string(),
                    money(result.median),
                ),
            ],
        };

        let params = reference.parameters();
        let note = format!(
            "Hinweis: Freelance-Berechnung basiert auf grober Umrechnung ({} AT/Jahr, Faktor {}).",
            params.working_days_per_year, params.day_rate_markup
        );

        Self {
            inputs,
            results,
            summary: summary_text(input, result, reference),
            note,
            footer: format!("© {} · {}", year, FOOTER_TEXT),
        }
    }
}

fn label_or_key(found: Option<&str>, key: &str) -> String {
    found.unwrap_or(key).to_string()
}

fn write_rows(f: &mut fmt::Formatter<'_>, rows: &[(String, String)]) -> fmt::Result {
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    for (label, value) in rows {
        writeln!(f, "{}{:<width$}  {}", INDENT, label, value, width = width)?;
    }
    Ok(())
}

impl fmt::Display for PrintDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", PRINT_TITLE)?;
        writeln!(f, "{}", PRINT_DISCLAIMER)?;
        writeln!(f)?;

        writeln!(f, "Eingaben")?;
        write_rows(f, &self.inputs)?;
        writeln!(f)?;

        writeln!(f, "Ergebnis")?;
        write_rows(f, &self.results)?;
        writeln!(f)?;

        writeln!(f, "Zusammenfassung")?;
        for line in self.summary.lines() {
            writeln!(f, "{}{}", INDENT, line)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", self.note)?;
        writeln!(f)?;
        write!(f, "{}", self.footer)
    }
}
