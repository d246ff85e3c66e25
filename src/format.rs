//! 결과 수치를 표시용 문자열로 바꾸는 함수 모음.

/// 통화 기호(위안).
pub const CURRENCY_SYMBOL: &str = "¥";

/// 정수부에 세 자리마다 쉼표를 넣는다. 입력은 부호 없는 숫자열.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 반올림(0에서 먼 쪽) 후 최대 `decimals` 자리까지 표시하고 끝자리 0은 지운다.
/// 부호는 따로 돌려준다.
fn split_number(value: f64, decimals: usize) -> (bool, String) {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value.abs() * factor).round() / factor;
    let mut text = format!("{rounded:.decimals$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text.clone(), None),
    };
    let mut body = group_thousands(&int_part);
    if let Some(frac) = frac_part {
        body.push('.');
        body.push_str(&frac);
    }
    let negative = value < 0.0 && rounded != 0.0;
    (negative, body)
}

/// 소수점 이하 `decimals` 자리까지, 천 단위 구분 기호를 넣어 표시한다.
///
/// `format_number(123.456, 1) == "123.5"`, `format_number(1000.0, 1) == "1,000"`
pub fn format_number(value: f64, decimals: usize) -> String {
    let (negative, body) = split_number(value, decimals);
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// 원 단위로 반올림한 통화 문자열. 음수는 기호 앞에 부호를 둔다.
pub fn format_currency(value: f64) -> String {
    let (negative, body) = split_number(value, 0);
    if negative {
        format!("-{CURRENCY_SYMBOL}{body}")
    } else {
        format!("{CURRENCY_SYMBOL}{body}")
    }
}

/// 이미 % 단위인 값을 소수 첫째 자리까지 표시한다.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value, 1))
}

pub fn format_volume(value: f64) -> String {
    format!("{} ml", format_number(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_rounds_to_whole_units() {
        assert_eq!(format_currency(12345.0), "¥12,345");
        assert_eq!(format_currency(0.0), "¥0");
        assert_eq!(format_currency(-1000.0), "-¥1,000");
        assert_eq!(format_currency(999.5), "¥1,000");
        assert_eq!(format_currency(1_234_567.4), "¥1,234,567");
    }

    #[test]
    fn percent_trims_trailing_zero() {
        assert_eq!(format_percent(25.5), "25.5%");
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(698.58), "698.6%");
    }

    #[test]
    fn number_respects_decimals() {
        assert_eq!(format_number(123.456, 1), "123.5");
        assert_eq!(format_number(123.456, 2), "123.46");
        assert_eq!(format_number(1000.0, 1), "1,000");
        assert_eq!(format_number(-0.01, 1), "0");
    }

    #[test]
    fn volume_has_ml_suffix() {
        assert_eq!(format_volume(123.45), "123.5 ml");
        assert_eq!(format_volume(1000.0), "1,000 ml");
    }
}
