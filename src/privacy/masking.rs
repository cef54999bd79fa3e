//! Masking transforms
//!
//! Every transform is a pure, lossy string function. Inputs that do not have
//! the shape a transform expects are returned unchanged.

const MASK: char = 'X';

fn ascii_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn mask_run(len: usize) -> String {
    std::iter::repeat(MASK).take(len).collect()
}

/// Keep the last ten digits and show only their first and last two:
/// `+91 98765 43210` becomes `98XXXXXX10`.
pub fn mask_phone(value: &str) -> String {
    let digits = ascii_digits(value);
    if digits.len() < 10 {
        return value.to_string();
    }
    let core = &digits[digits.len() - 10..];
    format!("{}XXXXXX{}", &core[..2], &core[8..])
}

/// Replace the middle group of a 12 digit identifier with `XXXX`, keeping the
/// original grouping separator (space, then hyphen, else none).
pub fn mask_national_id(value: &str) -> String {
    let digits = ascii_digits(value);
    if digits.len() != 12 {
        return value.to_string();
    }
    let sep = if value.contains(' ') {
        " "
    } else if value.contains('-') {
        "-"
    } else {
        ""
    };
    format!("{}{sep}XXXX{sep}{}", &digits[..4], &digits[8..])
}

/// `A1234567` becomes `AXXX4567`. Values that are not exactly eight
/// characters are passed through.
pub fn mask_passport(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 8 {
        return value.to_string();
    }
    let mut masked = String::with_capacity(8);
    masked.push(chars[0]);
    masked.push_str("XXX");
    masked.extend(&chars[4..]);
    masked
}

/// Mask the part before the first `@`, keeping the domain or bank handle.
/// Shared by email addresses and UPI handles.
pub fn mask_handle(value: &str) -> String {
    let Some((local, domain)) = value.split_once('@') else {
        return value.to_string();
    };
    let len = local.chars().count();
    let masked_local = if len <= 2 {
        "XX".to_string()
    } else {
        let prefix: String = local.chars().take(2).collect();
        prefix + &mask_run(len - 2)
    };
    format!("{}@{}", masked_local, domain)
}

/// Keep the (uppercased) initial of every word: `amit kumar` becomes `AXXX KXXXX`.
pub fn mask_name(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let len = word.chars().count();
            match word.chars().next() {
                Some(first) if len > 1 => {
                    first.to_uppercase().collect::<String>() + &mask_run(len - 1)
                }
                _ => MASK.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
