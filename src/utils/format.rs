// ============================================================================
// FORMATO - Parseo y formato de precios/talles (sin DOM)
// ============================================================================

/// Parsea como `parseFloat` de JS: toma el prefijo numérico más largo
/// ("12abc" -> 12, "  3.5" -> 3.5, "abc" -> None).
/// Infinity y NaN no son precios válidos, devuelven None.
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponente solo si trae al menos un dígito ("1e" -> 1)
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Quita el símbolo de moneda y espacios del texto mostrado ("$ 1500.00 " -> "1500.00")
pub fn strip_currency(text: &str) -> String {
    text.replace('$', "").trim().to_string()
}

/// Precio mostrado -> número
pub fn parse_display_price(text: &str) -> Option<f64> {
    parse_float(&strip_currency(text))
}

/// Equivalente a `Number.prototype.toFixed(2)`: en empates exactos redondea
/// alejándose de cero (0.125 -> "0.13"), no al par.
pub fn to_fixed_2(value: f64) -> String {
    let tie = (value * 8.0).fract() == 0.0 && (value * 4.0).fract() != 0.0;
    let rounded = if tie {
        value.signum() * ((value.abs() * 100.0 + 0.5).floor() / 100.0)
    } else {
        value
    };
    // -0 se muestra sin signo, igual que en JS
    if rounded == 0.0 {
        return "0.00".to_string();
    }
    format!("{:.2}", rounded)
}

/// Texto del span de precio: "$" + toFixed(2)
pub fn format_price(value: f64) -> String {
    format!("${}", to_fixed_2(value))
}

/// "S, M ,,L " -> ["S", "M", "L"]
pub fn parse_talles(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Texto para mostrar/prompt
pub fn join_talles_display(talles: &[String]) -> String {
    talles.join(", ")
}

/// Formato que espera `guardarTalles` ("a,b,c")
pub fn join_talles_csv(talles: &[String]) -> String {
    talles.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_float_follows_js_prefix_rules() {
        assert_eq!(parse_float("12.5"), Some(12.5));
        assert_eq!(parse_float("  42"), Some(42.0));
        assert_eq!(parse_float("12abc"), Some(12.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("-3.25"), Some(-3.25));
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("1e"), Some(1.0));
        assert_eq!(parse_float("2.5e-1x"), Some(0.25));
    }

    #[test]
    fn parse_float_rejects_non_numbers() {
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("   "), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("$12"), None);
        assert_eq!(parse_float("1e999"), None);
    }

    #[test]
    fn display_price_strips_currency() {
        assert_eq!(strip_currency(" $1500.00 "), "1500.00");
        assert_eq!(parse_display_price("$1500.00"), Some(1500.0));
        assert_eq!(parse_display_price("$ 99.9"), Some(99.9));
        assert_eq!(parse_display_price("Consultar"), None);
    }

    #[test]
    fn format_price_matches_to_fixed() {
        assert_eq!(format_price(1500.0), "$1500.00");
        assert_eq!(format_price(19.999), "$20.00");
        assert_eq!(format_price(0.125), "$0.13");
        assert_eq!(format_price(2.5), "$2.50");
        assert_eq!(format_price(1.005), "$1.00");
        assert_eq!(format_price(-5.0), "$-5.00");
        assert_eq!(format_price(-0.0), "$0.00");
    }

    #[test]
    fn talles_are_trimmed_and_filtered() {
        assert_eq!(parse_talles(" S, M ,L"), vec!["S", "M", "L"]);
        assert_eq!(parse_talles("38,,39, ,40,"), vec!["38", "39", "40"]);
        assert!(parse_talles(" , ").is_empty());
        assert!(parse_talles("").is_empty());
    }

    #[test]
    fn talles_join_formats() {
        let talles = parse_talles("S,M,L");
        assert_eq!(join_talles_display(&talles), "S, M, L");
        assert_eq!(join_talles_csv(&talles), "S,M,L");
    }
}
