/// Formats a float the way the target language reads it back: the shortest
/// digits that round-trip, always with a fractional part or an exponent.
///
/// Fixed notation is used for decimal exponents in `-4..16`, scientific
/// notation (`1e+16`, `1.5e-07`) otherwise.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e3".
    let sci = format!("{:e}", value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (-4..16).contains(&exponent) {
        fixed_notation(&digits, exponent)
    } else {
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{:+03}", first, exponent)
        } else {
            format!("{}.{}e{:+03}", first, rest, exponent)
        }
    };

    format!("{}{}", sign, body)
}

fn fixed_notation(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{}{}", zeros, digits);
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{}.{}", int_part, frac_part)
    }
}
