// Currency formatting shared by the calculator (parsing user input)
// and the GUI (rendering totals).

pub mod currency_format {
    use anyhow::{anyhow, Result};
    use serde::{Deserialize, Serialize};
    use std::str::FromStr;

    /// How a currency amount is written for one locale.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CurrencyFormat {
        pub code: String,
        pub symbol: String,
        pub decimal_separator: char,
        pub thousand_separator: char,
        pub decimals: usize,
        pub symbol_first: bool,
        // Space between symbol and digits, e.g. "R$ 10,00" or "10,00 €"
        pub symbol_spaced: bool,
    }

    impl Default for CurrencyFormat {
        fn default() -> Self {
            Self::usd()
        }
    }

    impl CurrencyFormat {
        pub fn usd() -> Self {
            Self {
                code: "USD".to_string(),
                symbol: "$".to_string(),
                decimal_separator: '.',
                thousand_separator: ',',
                decimals: 2,
                symbol_first: true,
                symbol_spaced: false,
            }
        }

        fn euro(thousand_separator: char) -> Self {
            Self {
                code: "EUR".to_string(),
                symbol: "€".to_string(),
                decimal_separator: ',',
                thousand_separator,
                decimals: 2,
                symbol_first: false,
                symbol_spaced: true,
            }
        }

        /// Picks a format from a POSIX locale tag such as `pt_BR.UTF-8` or `en-GB`.
        /// Unknown or neutral locales (`C`, `POSIX`) fall back to USD.
        pub fn for_locale(tag: &str) -> Self {
            let base = tag
                .split(['.', '@'])
                .next()
                .unwrap_or_default()
                .replace('-', "_");

            match base.as_str() {
                "pt_BR" => Self {
                    code: "BRL".to_string(),
                    symbol: "R$".to_string(),
                    decimal_separator: ',',
                    thousand_separator: '.',
                    decimals: 2,
                    symbol_first: true,
                    symbol_spaced: true,
                },
                "en_GB" => Self {
                    code: "GBP".to_string(),
                    symbol: "£".to_string(),
                    ..Self::usd()
                },
                "ja_JP" => Self {
                    code: "JPY".to_string(),
                    symbol: "¥".to_string(),
                    decimals: 0,
                    ..Self::usd()
                },
                "de_DE" | "es_ES" | "it_IT" | "nl_NL" | "pt_PT" => Self::euro('.'),
                "fr_FR" => Self::euro(' '),
                _ => Self::usd(),
            }
        }

        /// Renders `value` with grouping and a fixed number of decimals.
        pub fn format_amount(&self, value: f64) -> String {
            let fixed = format!("{:.*}", self.decimals, value.abs());
            let (int_part, frac_part) = match fixed.split_once('.') {
                Some((i, f)) => (i, Some(f)),
                None => (fixed.as_str(), None),
            };

            let mut digits = group_thousands(int_part, self.thousand_separator);
            if let Some(frac) = frac_part {
                digits.push(self.decimal_separator);
                digits.push_str(frac);
            }

            let spacer = if self.symbol_spaced { " " } else { "" };
            let body = if self.symbol_first {
                format!("{}{}{}", self.symbol, spacer, digits)
            } else {
                format!("{}{}{}", digits, spacer, self.symbol)
            };

            // "-0.00" after rounding reads as a bug, so only sign non-zero output
            if value < 0.0 && digits.chars().any(|c| c.is_ascii_digit() && c != '0') {
                format!("-{}", body)
            } else {
                body
            }
        }

        /// Parses text typed into the amount field. The currency symbol and
        /// grouping separators are optional; empty text reads as zero.
        /// Only digits, one decimal separator, a leading `-` and well-placed
        /// grouping separators are accepted, so "1e5" or "12.50" in a
        /// locale grouping with '.' are errors rather than surprising amounts.
        pub fn parse_amount(&self, s: &str) -> Result<f64> {
            let without_symbol = s.replace(self.symbol.as_str(), "");
            let trimmed = without_symbol.trim();

            // A whitespace grouping separator (fr_FR) has to survive; any
            // other whitespace is noise between symbol, sign and digits.
            let compact: String = if self.thousand_separator.is_whitespace() {
                trimmed
                    .chars()
                    .map(|c| if c.is_whitespace() { self.thousand_separator } else { c })
                    .collect()
            } else {
                trimmed.chars().filter(|c| !c.is_whitespace()).collect()
            };

            if compact.is_empty() {
                return Ok(0.0);
            }

            let (negative, unsigned) = match compact.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, compact.as_str()),
            };

            let mut parts = unsigned.split(self.decimal_separator);
            let int_part = parts.next().unwrap_or_default();
            let frac_part = parts.next().unwrap_or_default();
            if parts.next().is_some() {
                return Err(anyhow!("Amount '{}' has more than one decimal separator", s));
            }

            let int_digits = ungroup(int_part, self.thousand_separator)
                .ok_or_else(|| anyhow!("Amount '{}' has misplaced grouping separators", s))?;
            if !frac_part.chars().all(|c| c.is_ascii_digit()) {
                return Err(anyhow!("Failed to parse amount '{}': unexpected characters", s));
            }
            if int_digits.is_empty() && frac_part.is_empty() {
                return Err(anyhow!("Failed to parse amount '{}': no digits", s));
            }

            let normalized = format!(
                "{}{}.{}",
                if negative { "-" } else { "" },
                if int_digits.is_empty() { "0" } else { int_digits.as_str() },
                if frac_part.is_empty() { "0" } else { frac_part }
            );
            let value = f64::from_str(&normalized)
                .map_err(|e| anyhow!("Failed to parse amount '{}': {}", s, e))?;
            if !value.is_finite() {
                return Err(anyhow!("Amount '{}' is not a finite number", s));
            }
            Ok(value)
        }
    }

    // Strips grouping separators from an integer part. The first group holds
    // one to three digits, every later group exactly three.
    fn ungroup(int_part: &str, separator: char) -> Option<String> {
        if !int_part.contains(separator) {
            return int_part
                .chars()
                .all(|c| c.is_ascii_digit())
                .then(|| int_part.to_string());
        }

        let mut digits = String::with_capacity(int_part.len());
        for (i, group) in int_part.split(separator).enumerate() {
            let valid_len = if i == 0 {
                (1..=3).contains(&group.len())
            } else {
                group.len() == 3
            };
            if !valid_len || !group.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            digits.push_str(group);
        }
        Some(digits)
    }

    pub fn format_percent(value: u32) -> String {
        format!("{}%", value)
    }

    fn group_thousands(int_part: &str, separator: char) -> String {
        let len = int_part.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(ch);
        }
        grouped
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_usd() {
            let usd = CurrencyFormat::usd();
            assert_eq!(usd.format_amount(0.0), "$0.00");
            assert_eq!(usd.format_amount(10.0 / 3.0), "$3.33");
            assert_eq!(usd.format_amount(1234.5), "$1,234.50");
            assert_eq!(usd.format_amount(1_000_000.0), "$1,000,000.00");
        }

        #[test]
        fn test_format_brl() {
            let brl = CurrencyFormat::for_locale("pt_BR.UTF-8");
            assert_eq!(brl.code, "BRL");
            assert_eq!(brl.format_amount(1234.5), "R$ 1.234,50");
        }

        #[test]
        fn test_format_euro_suffix() {
            assert_eq!(CurrencyFormat::for_locale("de_DE").format_amount(1234.5), "1.234,50 €");
            assert_eq!(CurrencyFormat::for_locale("fr_FR@euro").format_amount(1234.5), "1 234,50 €");
        }

        #[test]
        fn test_format_jpy_has_no_decimals() {
            let jpy = CurrencyFormat::for_locale("ja-JP");
            assert_eq!(jpy.format_amount(1234.6), "¥1,235");
        }

        #[test]
        fn test_format_negative() {
            let usd = CurrencyFormat::usd();
            assert_eq!(usd.format_amount(-5.0), "-$5.00");
            assert_eq!(usd.format_amount(-0.001), "$0.00");
        }

        #[test]
        fn test_unknown_locale_falls_back_to_usd() {
            assert_eq!(CurrencyFormat::for_locale("C"), CurrencyFormat::usd());
            assert_eq!(CurrencyFormat::for_locale(""), CurrencyFormat::usd());
            assert_eq!(CurrencyFormat::for_locale("xx_YY"), CurrencyFormat::usd());
        }

        #[test]
        fn test_parse_amount_usd() {
            let usd = CurrencyFormat::usd();
            assert_eq!(usd.parse_amount("37.50").unwrap(), 37.5);
            assert_eq!(usd.parse_amount("$1,234.56").unwrap(), 1234.56);
            assert_eq!(usd.parse_amount("  $ 12 ").unwrap(), 12.0);
            assert_eq!(usd.parse_amount("").unwrap(), 0.0);
        }

        #[test]
        fn test_parse_amount_brl() {
            let brl = CurrencyFormat::for_locale("pt_BR");
            assert_eq!(brl.parse_amount("R$ 1.234,56").unwrap(), 1234.56);
            assert_eq!(brl.parse_amount("123,45").unwrap(), 123.45);
        }

        #[test]
        fn test_parse_amount_rejects_garbage() {
            let usd = CurrencyFormat::usd();
            assert!(usd.parse_amount("abc").is_err());
            assert!(usd.parse_amount("1.2.3").is_err());
            assert!(usd.parse_amount("inf").is_err());
            assert!(usd.parse_amount("1e308").is_err());
            assert!(usd.parse_amount("2E3").is_err());
            assert!(usd.parse_amount("+5").is_err());
            assert!(usd.parse_amount("-").is_err());
        }

        #[test]
        fn test_parse_amount_rejects_misplaced_grouping() {
            let brl = CurrencyFormat::for_locale("pt_BR");
            assert!(brl.parse_amount("12.50").is_err());
            assert!(brl.parse_amount("1.23,4").is_err());
            assert_eq!(brl.parse_amount("12,50").unwrap(), 12.5);

            let usd = CurrencyFormat::usd();
            assert!(usd.parse_amount("1,2").is_err());
            assert!(usd.parse_amount("1234,567").is_err());
            assert!(usd.parse_amount(",123").is_err());
            assert_eq!(usd.parse_amount("12,345,678.9").unwrap(), 12_345_678.9);
        }

        #[test]
        fn test_parse_amount_space_grouping() {
            let eur = CurrencyFormat::for_locale("fr_FR");
            assert_eq!(eur.parse_amount("1 234,50 €").unwrap(), 1234.5);
            assert!(eur.parse_amount("12 34").is_err());
        }

        #[test]
        fn test_parse_amount_partial_input() {
            let usd = CurrencyFormat::usd();
            assert_eq!(usd.parse_amount("12.").unwrap(), 12.0);
            assert_eq!(usd.parse_amount(".5").unwrap(), 0.5);
            assert_eq!(usd.parse_amount("-4").unwrap(), -4.0);
        }

        #[test]
        fn test_parse_reads_back_formatted_output() {
            let brl = CurrencyFormat::for_locale("pt_BR");
            let text = brl.format_amount(98765.43);
            assert_eq!(brl.parse_amount(&text).unwrap(), 98765.43);
        }

        #[test]
        fn test_format_percent() {
            assert_eq!(format_percent(20), "20%");
            assert_eq!(format_percent(0), "0%");
        }
    }
}
