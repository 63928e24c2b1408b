use crate::config::{self, TcoConfig};
use crate::errors::TcoError;
use crate::input::TcoInputs;
use crate::output::{create_writer, OutputFormat};
use crate::tco::{TcoCalculator, TcoResult};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

pub struct CalculateConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub years: Option<f64>,
    pub miles_per_year: Option<f64>,
    pub purchase_price: Option<f64>,
    pub current_mileage: Option<f64>,
}

pub fn handle_calculate(options: CalculateConfig) -> Result<()> {
    let tco_config = resolve_config(options.config.as_deref())?;
    let inputs = read_inputs(&options.input)
        .with_context(|| format!("Failed to load request {}", options.input.display()))?;
    let inputs = apply_overrides(inputs, &options);

    let result = TcoCalculator::new(tco_config).calculate(&inputs);
    log::info!(
        "Computed TCO for {}: total costs {:.2}",
        options.input.display(),
        result.total_costs.total
    );

    write_result(&result, options.format, options.output.as_deref())
}

fn resolve_config(path: Option<&Path>) -> Result<TcoConfig> {
    match path {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config()),
    }
}

/// Read and parse a request file. The payload must be a JSON object; its
/// contents are otherwise accepted leniently.
pub fn read_inputs(path: &Path) -> std::result::Result<TcoInputs, TcoError> {
    let contents = fs::read_to_string(path).map_err(|e| TcoError::io(path, e))?;
    parse_inputs(&contents)
}

pub fn parse_inputs(contents: &str) -> std::result::Result<TcoInputs, TcoError> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    if !value.is_object() {
        return Err(TcoError::invalid_input("top-level JSON value must be an object"));
    }
    Ok(serde_json::from_value(value)?)
}

// Pure function: command-line values take precedence over the request
fn apply_overrides(mut inputs: TcoInputs, options: &CalculateConfig) -> TcoInputs {
    inputs.time_period_years = options.years.or(inputs.time_period_years);
    inputs.miles_per_year = options.miles_per_year.or(inputs.miles_per_year);
    inputs.purchase_price = options.purchase_price.or(inputs.purchase_price);
    inputs.current_mileage = options.current_mileage.or(inputs.current_mileage);
    inputs
}

fn write_result(result: &TcoResult, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = fs::File::create(path)
                .map_err(|e| TcoError::io(path, e))
                .with_context(|| "Failed to create output file")?;
            create_writer(format, BufWriter::new(file)).write_result(result)
        }
        None => create_writer(format, io::stdout().lock()).write_result(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> CalculateConfig {
        CalculateConfig {
            input: PathBuf::from("deal.json"),
            format: OutputFormat::Json,
            output: None,
            config: None,
            years: None,
            miles_per_year: None,
            purchase_price: None,
            current_mileage: None,
        }
    }

    #[test]
    fn test_parse_inputs_rejects_non_object() {
        assert!(matches!(parse_inputs("[1, 2]"), Err(TcoError::InvalidInput(_))));
        assert!(matches!(parse_inputs("{not json"), Err(TcoError::Json(_))));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let inputs = parse_inputs(r#"{"timePeriodYears": 2, "purchasePrice": 9000}"#).unwrap();
        let overridden = apply_overrides(
            inputs,
            &CalculateConfig {
                years: Some(4.0),
                ..options()
            },
        );
        assert_eq!(overridden.time_period_years, Some(4.0));
        assert_eq!(overridden.purchase_price, Some(9000.0));
    }
}
