//! Форматирование сумм и процентов для отображения результата расчета

/// Число с разделителем тысяч (пробел) и заданным количеством знаков
///
/// ```
/// use contracts::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let formatted = format!("{:.*}", decimals as usize, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    // "-0" после округления не показываем
    let sign = if grouped.chars().all(|c| c == '0' || c == ' ')
        && fraction.map_or(true, |f| f.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Сумма в тенге: целое число с разделителем тысяч
///
/// ```
/// use contracts::shared::number_format::format_money;
/// assert_eq!(format_money(26701.0), "26 701 ₸");
/// ```
pub fn format_money(value: f64) -> String {
    format!("{} ₸", format_number_with_decimals(value, 0))
}

/// Процент с двумя знаками. `None` означает неопределенную маржу.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}%", format_number_with_decimals(v, 2)),
        _ => "—".to_string(),
    }
}
