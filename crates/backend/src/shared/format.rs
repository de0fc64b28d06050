/// Размер ответа с разделителями тысяч (точками) для лога запросов
///
/// # Примеры
/// ```text
/// format_size(1234567) == "1.234.567"
/// format_size(42) == "42"
/// ```
pub fn format_size(bytes: usize) -> String {
    let digits = bytes.to_string();
    let head = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - head) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
