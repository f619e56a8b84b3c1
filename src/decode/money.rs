use crate::error::DecodeError;

const MILLION: u128 = 1_000_000;
const BILLION: u128 = 1_000_000_000;

/// Longest fraction kept; later digits cannot move the truncated result.
const MAX_FRACTION_DIGITS: usize = 18;

/// Decode a jackpot string like "$94.8 Million" into whole currency units.
///
/// The decimal part is scaled with integer arithmetic, so "$1.04 Billion"
/// is exactly 1_040_000_000. Anything after the decimal point that survives
/// the scaling is truncated.
pub fn decode(text: &str) -> Result<u64, DecodeError> {
    let lowered = text.to_lowercase().replace([',', '$', '€', '£'], "");

    let multiplier = if lowered.contains("million") {
        MILLION
    } else if lowered.contains("billion") {
        BILLION
    } else {
        1
    };

    let amount: String = lowered
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if amount.is_empty() {
        return Err(DecodeError::EmptyAmount(text.to_string()));
    }

    let (whole, fraction) = amount.split_once('.').unwrap_or((amount.as_str(), ""));
    if fraction.contains('.') || (whole.is_empty() && fraction.is_empty()) {
        return Err(DecodeError::MalformedAmount(text.to_string()));
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| DecodeError::AmountOverflow(text.to_string()))?
    };
    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    let scaled_fraction = if fraction.is_empty() {
        0
    } else {
        let digits: u128 = fraction
            .parse()
            .map_err(|_| DecodeError::MalformedAmount(text.to_string()))?;
        digits * multiplier / 10u128.pow(fraction.len() as u32)
    };

    whole
        .checked_mul(multiplier)
        .and_then(|w| w.checked_add(scaled_fraction))
        .and_then(|v| u64::try_from(v).ok())
        .ok_or_else(|| DecodeError::AmountOverflow(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millions() {
        assert_eq!(decode("$94.8 Million"), Ok(94_800_000));
        assert_eq!(decode("$20 Million"), Ok(20_000_000));
    }

    #[test]
    fn billions() {
        assert_eq!(decode("$1.04 Billion"), Ok(1_040_000_000));
        assert_eq!(decode("$2.04 BILLION"), Ok(2_040_000_000));
    }

    #[test]
    fn bare_amount_is_unscaled() {
        assert_eq!(decode("150000"), Ok(150_000));
        assert_eq!(decode("$1,250,000"), Ok(1_250_000));
    }

    #[test]
    fn fraction_is_truncated() {
        assert_eq!(decode("$1.5"), Ok(1));
        assert_eq!(decode("$0.0000015 Million"), Ok(1));
        assert_eq!(decode(".5 Million"), Ok(500_000));
    }

    #[test]
    fn rejects_text_without_amount() {
        assert!(matches!(decode("Million"), Err(DecodeError::EmptyAmount(_))));
        assert!(matches!(decode(""), Err(DecodeError::EmptyAmount(_))));
        assert!(matches!(decode("$. Million"), Err(DecodeError::MalformedAmount(_))));
        assert!(matches!(decode("1.2.3"), Err(DecodeError::MalformedAmount(_))));
    }

    #[test]
    fn rejects_overflow() {
        assert!(matches!(
            decode("99999999999999999999 Billion"),
            Err(DecodeError::AmountOverflow(_))
        ));
    }
}
