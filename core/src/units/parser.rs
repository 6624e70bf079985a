use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::multispace0,
    combinator::{all_consuming, opt, value},
    number::complete::double,
    sequence::{pair, preceded},
    IResult, Parser,
};

use super::{fahrenheit_to_celsius, inches_to_cm, lbs_to_kg};
use crate::error::UnitParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LengthUnit {
    Centimetres,
    Inches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MassUnit {
    Kilograms,
    Pounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

/// Parse a thickness such as `"10.0 cm"`, `"3.9\""` or `"4 in"` into
/// centimetres. A bare number is taken as centimetres.
pub fn parse_thickness_cm(input: &str) -> Result<f64, UnitParseError> {
    let (amount, unit) = parse_measurement(input, length_unit)?;
    Ok(match unit.unwrap_or(LengthUnit::Centimetres) {
        LengthUnit::Centimetres => amount,
        LengthUnit::Inches => inches_to_cm(amount),
    })
}

/// Parse a weight such as `"80 kg"` or `"176 lbs"` into kilograms. A bare
/// number is taken as kilograms.
pub fn parse_weight_kg(input: &str) -> Result<f64, UnitParseError> {
    let (amount, unit) = parse_measurement(input, mass_unit)?;
    Ok(match unit.unwrap_or(MassUnit::Kilograms) {
        MassUnit::Kilograms => amount,
        MassUnit::Pounds => lbs_to_kg(amount),
    })
}

/// Parse a temperature such as `"-10°C"` or `"14°F"` into degrees Celsius.
/// A bare number is taken as Celsius.
pub fn parse_temperature_c(input: &str) -> Result<f64, UnitParseError> {
    let (amount, unit) = parse_measurement(input, temperature_unit)?;
    Ok(match unit.unwrap_or(TemperatureUnit::Celsius) {
        TemperatureUnit::Celsius => amount,
        TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(amount),
    })
}

fn parse_measurement<U>(
    input: &str,
    unit: fn(&str) -> IResult<&str, U>,
) -> Result<(f64, Option<U>), UnitParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UnitParseError::Empty);
    }

    let (_, (amount, unit)) = all_consuming(pair(number, preceded(blank, opt(unit))))
        .parse(trimmed)
        .map_err(|_| UnitParseError::Malformed {
            input: input.to_string(),
        })?;

    if !amount.is_finite() {
        return Err(UnitParseError::NonFinite {
            input: input.to_string(),
        });
    }
    Ok((amount, unit))
}

fn number(input: &str) -> IResult<&str, f64> {
    double(input)
}

fn blank(input: &str) -> IResult<&str, &str> {
    multispace0(input)
}

// Longer spellings come first so `alt` does not stop at a prefix.

fn length_unit(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        value(
            LengthUnit::Centimetres,
            alt((
                tag_no_case("centimetres"),
                tag_no_case("centimeters"),
                tag_no_case("cm"),
            )),
        ),
        value(
            LengthUnit::Inches,
            alt((
                tag("\""),
                tag_no_case("inches"),
                tag_no_case("inch"),
                tag_no_case("in"),
            )),
        ),
    ))
    .parse(input)
}

fn mass_unit(input: &str) -> IResult<&str, MassUnit> {
    alt((
        value(
            MassUnit::Kilograms,
            alt((
                tag_no_case("kilograms"),
                tag_no_case("kgs"),
                tag_no_case("kg"),
            )),
        ),
        value(
            MassUnit::Pounds,
            alt((
                tag_no_case("pounds"),
                tag_no_case("lbs"),
                tag_no_case("lb"),
            )),
        ),
    ))
    .parse(input)
}

fn temperature_unit(input: &str) -> IResult<&str, TemperatureUnit> {
    preceded(
        opt(alt((tag("°"), tag("º")))),
        alt((
            value(
                TemperatureUnit::Celsius,
                alt((tag_no_case("celsius"), tag_no_case("c"))),
            ),
            value(
                TemperatureUnit::Fahrenheit,
                alt((tag_no_case("fahrenheit"), tag_no_case("f"))),
            ),
        )),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{format_temperature, format_thickness, format_weight};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_parse_thickness() {
        assert_close(parse_thickness_cm("10.0 cm").unwrap(), 10.0);
        assert_close(parse_thickness_cm("12cm").unwrap(), 12.0);
        assert_close(parse_thickness_cm("3.9\"").unwrap(), 3.9 * 2.54);
        assert_close(parse_thickness_cm("4 in").unwrap(), 10.16);
        assert_close(parse_thickness_cm("4 Inches").unwrap(), 10.16);
        assert_close(parse_thickness_cm("  7.5 ").unwrap(), 7.5);
    }

    #[test]
    fn test_parse_weight() {
        assert_close(parse_weight_kg("80 kg").unwrap(), 80.0);
        assert_close(parse_weight_kg("80").unwrap(), 80.0);
        assert_close(parse_weight_kg("176 lbs").unwrap(), 176.0 / 2.20462);
        assert_close(parse_weight_kg("2.20462 LB").unwrap(), 1.0);
    }

    #[test]
    fn test_parse_temperature() {
        assert_close(parse_temperature_c("-10°C").unwrap(), -10.0);
        assert_close(parse_temperature_c("14°F").unwrap(), -10.0);
        assert_close(parse_temperature_c("14 f").unwrap(), -10.0);
        assert_close(parse_temperature_c("-3 celsius").unwrap(), -3.0);
        assert_close(parse_temperature_c("-3").unwrap(), -3.0);
    }

    #[test]
    fn test_parse_formatter_output() {
        assert_close(parse_thickness_cm(&format_thickness(25.0, false)).unwrap(), 25.0);
        assert_close(parse_weight_kg(&format_weight(80.0, false)).unwrap(), 80.0);
        assert_close(parse_temperature_c(&format_temperature(-10.0, true)).unwrap(), -10.0);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_thickness_cm(""), Err(UnitParseError::Empty));
        assert_eq!(parse_weight_kg("   "), Err(UnitParseError::Empty));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            parse_thickness_cm("ten cm"),
            Err(UnitParseError::Malformed {
                input: "ten cm".to_string()
            })
        );
        assert!(matches!(
            parse_thickness_cm("10 furlongs"),
            Err(UnitParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_weight_kg("80 kg extra"),
            Err(UnitParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_temperature_c("-10 K"),
            Err(UnitParseError::Malformed { .. })
        ));
    }

    #[test]
    fn test_parse_non_finite() {
        assert_eq!(
            parse_thickness_cm("1e400 cm"),
            Err(UnitParseError::NonFinite {
                input: "1e400 cm".to_string()
            })
        );
    }
}
