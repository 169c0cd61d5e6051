//! String helpers shared by the core and its shells

/// Default length `mask_key` pads to
pub const MASK_LEN: usize = 32;

/// Removes line breaks anywhere in `value` and trims surrounding whitespace.
pub fn remove_trim(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Masks a secret for logging.
///
/// The key is cut to `max_len` characters. Up to 8 characters only the first
/// and last one stay visible, a single character is masked entirely. Longer
/// keys keep four on each side and are padded with `*` to `max_len`.
pub fn mask_key(key: &str, max_len: usize) -> String {
    let chars: Vec<char> = key.chars().take(max_len).collect();
    let len = chars.len();

    match len {
        0 => String::new(),
        1 => "*".to_string(),
        2..=8 => {
            let mut masked = String::with_capacity(len);
            masked.push(chars[0]);
            masked.push_str(&"*".repeat(len - 2));
            masked.push(chars[len - 1]);
            masked
        }
        _ => {
            let front: String = chars[..4].iter().collect();
            let back: String = chars[len - 4..].iter().collect();
            let mut masked = format!("{front}{}{back}", "*".repeat(len - 8));
            while masked.chars().count() < max_len {
                masked.push('*');
            }
            masked
        }
    }
}
