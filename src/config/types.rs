//! Configuration types for salary estimation.
//!
//! This module contains the strongly-typed reference data structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{ContractType, Currency, ExperienceLevel};

/// A selectable option with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// The key used in inputs and lookups.
    pub key: String,
    /// The human-readable label.
    pub label: String,
}

/// A selectable country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    /// The country code (e.g., "DE").
    pub key: String,
    /// The human-readable label.
    pub label: String,
    /// The currency amounts are rendered in.
    pub currency: Currency,
}

/// Form options from catalog.yaml, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Selectable roles.
    pub roles: Vec<CatalogEntry>,
    /// Selectable countries.
    pub countries: Vec<CountryEntry>,
    /// Cities per country code.
    pub cities: HashMap<String, Vec<CatalogEntry>>,
    /// Selectable company sizes.
    pub company_sizes: Vec<CatalogEntry>,
    /// Selectable contract types.
    pub contracts: Vec<CatalogEntry>,
}

/// Base salaries for one role, one per experience level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBand {
    /// Base for junior level.
    pub junior: f64,
    /// Base for mid level.
    pub mid: f64,
    /// Base for senior level.
    pub senior: f64,
    /// Base for lead level.
    pub lead: f64,
}

impl SalaryBand {
    /// Returns the base salary for a level.
    pub fn get(&self, level: ExperienceLevel) -> f64 {
        match level {
            ExperienceLevel::Junior => self.junior,
            ExperienceLevel::Mid => self.mid,
            ExperienceLevel::Senior => self.senior,
            ExperienceLevel::Lead => self.lead,
        }
    }
}

/// Salary table from salaries.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryTableConfig {
    /// The country whose currency the bases are denominated in.
    pub baseline_country: String,
    /// Base used when a role has no band.
    pub default_base: f64,
    /// Map of role key to salary band.
    pub bases: HashMap<String, SalaryBand>,
}

/// Multipliers from multipliers.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierConfig {
    /// Country code to multiplier relative to the baseline country.
    pub countries: HashMap<String, f64>,
    /// Country code to city key to multiplier.
    pub cities: HashMap<String, HashMap<String, f64>>,
    /// Company size key to multiplier.
    pub company_sizes: HashMap<String, f64>,
}

/// Spread and conversion constants from parameters.yaml.
///
/// The values are fixed design constants, not statistically derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorParameters {
    /// Factor applied to the median for the lower bound.
    pub p25_factor: f64,
    /// Factor applied to the median for the upper bound.
    pub p75_factor: f64,
    /// Reduction at 100% remote, as a fraction.
    pub remote_softening: f64,
    /// Markup of a contractor day over salaried cost.
    pub day_rate_markup: f64,
    /// Billable days per year.
    pub working_days_per_year: f64,
}

impl Default for EstimatorParameters {
    fn default() -> Self {
        Self {
            p25_factor: 0.90,
            p75_factor: 1.12,
            remote_softening: 0.03,
            day_rate_markup: 1.45,
            working_days_per_year: 220.0,
        }
    }
}

/// The complete reference data loaded from YAML files.
///
/// Immutable once built. [`ReferenceData::new`] checks that every option
/// the catalog exposes is backed by table data.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    catalog: CatalogConfig,
    salaries: SalaryTableConfig,
    multipliers: MultiplierConfig,
    parameters: EstimatorParameters,
}

impl ReferenceData {
    /// Creates reference data from its component parts, validating integrity.
    ///
    /// Returns `InvalidReferenceData` if a catalog role has no salary band,
    /// a listed country or city or company size has no multiplier, or any
    /// amount or multiplier is not a positive finite number.
    pub fn new(
        catalog: CatalogConfig,
        salaries: SalaryTableConfig,
        multipliers: MultiplierConfig,
        parameters: EstimatorParameters,
    ) -> EstimatorResult<Self> {
        let data = Self {
            catalog,
            salaries,
            multipliers,
            parameters,
        };
        data.validate()?;
        Ok(data)
    }

    fn validate(&self) -> EstimatorResult<()> {
        ensure_positive("default_base", self.salaries.default_base)?;

        for (role, band) in &self.salaries.bases {
            for level in ExperienceLevel::ALL {
                ensure_positive(&format!("bases.{}.{}", role, level), band.get(level))?;
            }
        }
        for role in &self.catalog.roles {
            if !self.salaries.bases.contains_key(&role.key) {
                return Err(invalid(format!("role '{}' has no salary band", role.key)));
            }
        }

        for (country, factor) in &self.multipliers.countries {
            ensure_positive(&format!("countries.{}", country), *factor)?;
        }
        for (country, cities) in &self.multipliers.cities {
            for (city, factor) in cities {
                ensure_positive(&format!("cities.{}.{}", country, city), *factor)?;
            }
        }
        for (size, factor) in &self.multipliers.company_sizes {
            ensure_positive(&format!("company_sizes.{}", size), *factor)?;
        }

        for country in &self.catalog.countries {
            if !self.multipliers.countries.contains_key(&country.key) {
                return Err(invalid(format!(
                    "country '{}' has no multiplier",
                    country.key
                )));
            }

            let listed = self.cities(&country.key);
            if listed.is_empty() {
                return Err(invalid(format!("country '{}' lists no cities", country.key)));
            }
            for city in listed {
                if self.city_multiplier(&country.key, &city.key).is_none() {
                    return Err(invalid(format!(
                        "city '{}' in '{}' has no multiplier",
                        city.key, country.key
                    )));
                }
            }
        }

        for size in &self.catalog.company_sizes {
            if !self.multipliers.company_sizes.contains_key(&size.key) {
                return Err(invalid(format!(
                    "company size '{}' has no multiplier",
                    size.key
                )));
            }
        }

        for contract in &self.catalog.contracts {
            contract
                .key
                .parse::<ContractType>()
                .map_err(|_| invalid(format!("unknown contract type '{}'", contract.key)))?;
        }

        let params = &self.parameters;
        ensure_positive("p25_factor", params.p25_factor)?;
        ensure_positive("p75_factor", params.p75_factor)?;
        ensure_positive("day_rate_markup", params.day_rate_markup)?;
        ensure_positive("working_days_per_year", params.working_days_per_year)?;
        if !(params.p25_factor < 1.0 && params.p75_factor > 1.0) {
            return Err(invalid(
                "p25_factor must be below 1 and p75_factor above 1".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&params.remote_softening) {
            return Err(invalid("remote_softening must be in [0, 1)".to_string()));
        }

        Ok(())
    }

    /// Returns the form catalog.
    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }

    /// Returns the spread and conversion constants.
    pub fn parameters(&self) -> &EstimatorParameters {
        &self.parameters
    }

    /// Returns the baseline country code.
    pub fn baseline_country(&self) -> &str {
        &self.salaries.baseline_country
    }

    /// Returns the base used for roles without a band.
    pub fn default_base(&self) -> f64 {
        self.salaries.default_base
    }

    /// Returns the base salary for a role and level, if the role is known.
    pub fn base_salary(&self, role: &str, level: ExperienceLevel) -> Option<f64> {
        self.salaries.bases.get(role).map(|band| band.get(level))
    }

    /// Returns the multiplier for a country, if known.
    pub fn country_multiplier(&self, country: &str) -> Option<f64> {
        self.multipliers.countries.get(country).copied()
    }

    /// Returns the multiplier for a city within a country, if known.
    pub fn city_multiplier(&self, country: &str, city: &str) -> Option<f64> {
        self.multipliers
            .cities
            .get(country)
            .and_then(|cities| cities.get(city))
            .copied()
    }

    /// Returns the multiplier for a company size, if known.
    pub fn size_multiplier(&self, company_size: &str) -> Option<f64> {
        self.multipliers.company_sizes.get(company_size).copied()
    }

    /// Returns the cities listed for a country, empty if none.
    pub fn cities(&self, country: &str) -> &[CatalogEntry] {
        self.catalog
            .cities
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Keeps the city in sync with the chosen country.
    ///
    /// Returns `city` if the country lists it, otherwise the country's first
    /// listed city. Unlisted countries leave the city untouched.
    pub fn resolve_city<'a>(&'a self, country: &str, city: &'a str) -> &'a str {
        let listed = self.cities(country);
        if listed.iter().any(|c| c.key == city) {
            return city;
        }
        listed.first().map(|c| c.key.as_str()).unwrap_or(city)
    }

    /// Returns the currency of a country, EUR if unlisted.
    pub fn currency(&self, country: &str) -> Currency {
        self.catalog
            .countries
            .iter()
            .find(|c| c.key == country)
            .map(|c| c.currency)
            .unwrap_or(Currency::Eur)
    }

    /// Returns the label of a role.
    pub fn role_label(&self, role: &str) -> Option<&str> {
        find_label(&self.catalog.roles, role)
    }

    /// Returns the label of a country.
    pub fn country_label(&self, country: &str) -> Option<&str> {
        self.catalog
            .countries
            .iter()
            .find(|c| c.key == country)
            .map(|c| c.label.as_str())
    }

    /// Returns the label of a city within a country.
    pub fn city_label(&self, country: &str, city: &str) -> Option<&str> {
        find_label(self.cities(country), city)
    }

    /// Returns the label of a company size.
    pub fn company_size_label(&self, company_size: &str) -> Option<&str> {
        find_label(&self.catalog.company_sizes, company_size)
    }

    /// Returns the label of a contract type.
    pub fn contract_label(&self, contract: ContractType) -> Option<&str> {
        find_label(&self.catalog.contracts, contract.as_str())
    }
}

fn find_label<'a>(entries: &'a [CatalogEntry], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|e| e.key == key)
        .map(|e| e.label.as_str())
}

fn ensure_positive(name: &str, value: f64) -> EstimatorResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!(
            "'{}' must be a positive number, got {}",
            name, value
        )))
    }
}

fn invalid(message: String) -> EstimatorError {
    EstimatorError::InvalidReferenceData { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, label: &str) -> CatalogEntry {
        CatalogEntry {
            key: key.to_string(),
            label: label.to_string(),
        }
    }

    fn create_test_parts() -> (CatalogConfig, SalaryTableConfig, MultiplierConfig) {
        let catalog = CatalogConfig {
            roles: vec![entry("backend", "Backend")],
            countries: vec![CountryEntry {
                key: "CH".to_string(),
                label: "Schweiz".to_string(),
                currency: Currency::Chf,
            }],
            cities: HashMap::from([(
                "CH".to_string(),
                vec![entry("zurich", "Zürich"), entry("bern", "Bern")],
            )]),
            company_sizes: vec![entry("sme", "SME")],
            contracts: vec![entry("perm", "Festanstellung"), entry("contractor", "Freelance")],
        };

        let salaries = SalaryTableConfig {
            baseline_country: "DE".to_string(),
            default_base: 50000.0,
            bases: HashMap::from([(
                "backend".to_string(),
                SalaryBand {
                    junior: 45000.0,
                    mid: 60000.0,
                    senior: 75000.0,
                    lead: 90000.0,
                },
            )]),
        };

        let multipliers = MultiplierConfig {
            countries: HashMap::from([("CH".to_string(), 1.9)]),
            cities: HashMap::from([(
                "CH".to_string(),
                HashMap::from([("zurich".to_string(), 1.1), ("bern".to_string(), 1.0)]),
            )]),
            company_sizes: HashMap::from([("sme".to_string(), 1.0)]),
        };

        (catalog, salaries, multipliers)
    }

    fn create_test_data() -> ReferenceData {
        let (catalog, salaries, multipliers) = create_test_parts();
        ReferenceData::new(catalog, salaries, multipliers, EstimatorParameters::default())
            .unwrap()
    }

    fn expect_invalid(result: EstimatorResult<ReferenceData>, needle: &str) {
        match result {
            Err(EstimatorError::InvalidReferenceData { message }) => {
                assert!(message.contains(needle), "unexpected message: {}", message)
            }
            other => panic!("Expected InvalidReferenceData, got {:?}", other),
        }
    }

    #[test]
    fn test_default_parameters_match_design_constants() {
        let params = EstimatorParameters::default();
        assert_eq!(params.p25_factor, 0.90);
        assert_eq!(params.p75_factor, 1.12);
        assert_eq!(params.remote_softening, 0.03);
        assert_eq!(params.day_rate_markup, 1.45);
        assert_eq!(params.working_days_per_year, 220.0);
    }

    #[test]
    fn test_salary_band_get_by_level() {
        let data = create_test_data();
        assert_eq!(data.base_salary("backend", ExperienceLevel::Junior), Some(45000.0));
        assert_eq!(data.base_salary("backend", ExperienceLevel::Lead), Some(90000.0));
        assert_eq!(data.base_salary("cobol", ExperienceLevel::Lead), None);
    }

    #[test]
    fn test_multiplier_lookups() {
        let data = create_test_data();
        assert_eq!(data.country_multiplier("CH"), Some(1.9));
        assert_eq!(data.country_multiplier("FR"), None);
        assert_eq!(data.city_multiplier("CH", "zurich"), Some(1.1));
        assert_eq!(data.city_multiplier("CH", "geneva"), None);
        assert_eq!(data.city_multiplier("DE", "zurich"), None);
        assert_eq!(data.size_multiplier("sme"), Some(1.0));
    }

    #[test]
    fn test_resolve_city_keeps_listed_city() {
        let data = create_test_data();
        assert_eq!(data.resolve_city("CH", "bern"), "bern");
    }

    #[test]
    fn test_resolve_city_falls_back_to_first_listed() {
        let data = create_test_data();
        assert_eq!(data.resolve_city("CH", "berlin"), "zurich");
    }

    #[test]
    fn test_resolve_city_unlisted_country_keeps_city() {
        let data = create_test_data();
        assert_eq!(data.resolve_city("FR", "paris"), "paris");
    }

    #[test]
    fn test_currency_and_labels() {
        let data = create_test_data();
        assert_eq!(data.currency("CH"), Currency::Chf);
        assert_eq!(data.currency("FR"), Currency::Eur);
        assert_eq!(data.city_label("CH", "zurich"), Some("Zürich"));
        assert_eq!(data.contract_label(ContractType::Perm), Some("Festanstellung"));
        assert_eq!(data.role_label("unknown"), None);
    }

    #[test]
    fn test_missing_role_band_is_rejected() {
        let (mut catalog, salaries, multipliers) = create_test_parts();
        catalog.roles.push(entry("java", "Java"));

        let result =
            ReferenceData::new(catalog, salaries, multipliers, EstimatorParameters::default());
        expect_invalid(result, "java");
    }

    #[test]
    fn test_listed_city_without_multiplier_is_rejected() {
        let (mut catalog, salaries, multipliers) = create_test_parts();
        catalog
            .cities
            .get_mut("CH")
            .unwrap()
            .push(entry("basel", "Basel"));

        let result =
            ReferenceData::new(catalog, salaries, multipliers, EstimatorParameters::default());
        expect_invalid(result, "basel");
    }

    #[test]
    fn test_non_positive_multiplier_is_rejected() {
        let (catalog, salaries, mut multipliers) = create_test_parts();
        multipliers.countries.insert("CH".to_string(), 0.0);

        let result =
            ReferenceData::new(catalog, salaries, multipliers, EstimatorParameters::default());
        expect_invalid(result, "countries.CH");
    }

    #[test]
    fn test_inverted_spread_is_rejected() {
        let (catalog, salaries, multipliers) = create_test_parts();
        let params = EstimatorParameters {
            p25_factor: 1.1,
            ..EstimatorParameters::default()
        };

        let result = ReferenceData::new(catalog, salaries, multipliers, params);
        expect_invalid(result, "p25_factor");
    }

    #[test]
    fn test_unknown_contract_key_is_rejected() {
        let (mut catalog, salaries, multipliers) = create_test_parts();
        catalog.contracts.push(entry("internship", "Praktikum"));

        let result =
            ReferenceData::new(catalog, salaries, multipliers, EstimatorParameters::default());
        expect_invalid(result, "internship");
    }
}
