use crate::utils::error::{CalcError, Result};

pub fn parse_integer(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| CalcError::InvalidIntegerFormat {
            value: trimmed.to_string(),
        })
}

pub fn parse_number_list(raw: &str) -> Result<Vec<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    // Splitting a non-empty string always yields at least one segment.
    trimmed
        .split(',')
        .map(|segment| {
            let segment = segment.trim();
            segment
                .parse::<f64>()
                .map_err(|_| CalcError::InvalidNumberFormat {
                    segment: segment.to_string(),
                })
        })
        .collect()
}
