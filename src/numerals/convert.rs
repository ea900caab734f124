//! Compound Chinese numeral conversion
//!
//! Handles basic digits (一二三), formal banking digits (壹贰叁), and place
//! values (十百千万, formal 拾佰仟) with the usual elision rules (十 alone
//! is 10, 二十二 is 22). 元年 reads as year 1.

/// Value of a basic or formal digit character
fn digit_value(ch: char) -> Option<u64> {
    Some(match ch {
        '零' => 0,
        '一' | '壹' => 1,
        '二' | '贰' | '貳' => 2,
        '三' | '叁' | '參' => 3,
        '四' | '肆' => 4,
        '五' | '伍' => 5,
        '六' | '陆' | '陸' => 6,
        '七' | '柒' => 7,
        '八' | '捌' => 8,
        '九' | '玖' => 9,
        _ => return None,
    })
}

/// Multiplier of a place-value character
fn place_value(ch: char) -> Option<u64> {
    Some(match ch {
        '十' | '拾' => 10,
        '百' | '佰' => 100,
        '千' | '仟' => 1000,
        '万' | '萬' => 10000,
        _ => return None,
    })
}

/// True if the character participates in compound numerals
pub fn is_numeral_char(ch: char) -> bool {
    digit_value(ch).is_some() || place_value(ch).is_some()
}

/// Convert a compound Chinese numeral to its Arabic value.
///
/// Returns 0 for empty or non-numeral input. A place value with no leading
/// digit counts as one of that place (十 = 10, 千 = 1000). Big units
/// (万 and above) multiply the whole accumulated value, so 十万 = 100000
/// and a bare 万 = 10000.
pub fn convert_compound(numeral: &str) -> u64 {
    let mut result: u64 = 0;
    let mut pending: u64 = 0;

    for ch in numeral.chars() {
        if let Some(digit) = digit_value(ch) {
            pending = digit;
        } else if let Some(place) = place_value(ch) {
            if place >= 10000 {
                result = (result + pending).max(1) * place;
            } else {
                let digit = if pending == 0 { 1 } else { pending };
                result += digit * place;
            }
            pending = 0;
        }
        // Non-numeral characters are skipped
    }

    result + pending
}

/// Rewrite every numeral run in `text` as its decimal value.
///
/// 元年 rewrites to 1年 first (era "year one" carries no digit character).
/// Arabic digits pass through untouched, so 民国22年 and 民国二十二年 agree
/// after rewriting.
pub fn normalize_numerals(text: &str) -> String {
    let text = text.replace("元年", "1年");
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();

    for ch in text.chars() {
        if is_numeral_char(ch) {
            run.push(ch);
        } else {
            if !run.is_empty() {
                out.push_str(&convert_compound(&run).to_string());
                run.clear();
            }
            out.push(ch);
        }
    }
    if !run.is_empty() {
        out.push_str(&convert_compound(&run).to_string());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_digits() {
        assert_eq!(convert_compound("七"), 7);
        assert_eq!(convert_compound("玖"), 9);
    }

    #[test]
    fn test_compound_values() {
        assert_eq!(convert_compound("二十二"), 22);
        assert_eq!(convert_compound("十"), 10);
        assert_eq!(convert_compound("三十"), 30);
        assert_eq!(convert_compound("一百零五"), 105);
        assert_eq!(convert_compound("五万"), 50000);
    }

    #[test]
    fn test_big_units_multiply_accumulated_value() {
        assert_eq!(convert_compound("十万"), 100_000);
        assert_eq!(convert_compound("十一万"), 110_000);
        assert_eq!(convert_compound("壹佰萬"), 1_000_000);
        assert_eq!(convert_compound("万"), 10_000);
    }

    #[test]
    fn test_distinct_denominations_stay_distinct() {
        assert_ne!(convert_compound("十万"), convert_compound("十一万"));
        assert_ne!(
            normalize_numerals("十万圆"),
            normalize_numerals("十一万圆")
        );
    }

    #[test]
    fn test_formal_banking_forms() {
        assert_eq!(convert_compound("壹"), 1);
        assert_eq!(convert_compound("贰拾贰"), 22);
        assert_eq!(convert_compound("柒佰"), 700);
    }

    #[test]
    fn test_normalize_numerals_rewrites_runs() {
        assert_eq!(normalize_numerals("民国二十二年壹圆"), "民国22年1圆");
        assert_eq!(normalize_numerals("七钱二分"), "7钱2分");
        assert_eq!(normalize_numerals("宣统元年"), "宣统1年");
    }

    #[test]
    fn test_normalize_numerals_leaves_arabic_alone() {
        assert_eq!(normalize_numerals("民国22年"), "民国22年");
        assert_eq!(normalize_numerals("1911 江南"), "1911 江南");
    }

    #[test]
    fn test_variant_forms_agree_after_rewrite() {
        assert_eq!(normalize_numerals("壹圆"), normalize_numerals("一圆"));
    }
}
