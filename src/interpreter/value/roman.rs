/// Roman symbols in descending order of value, including the subtractive
/// pairs.
pub const SYMBOLS: [(i64, &str); 9] = [(100, "C"),
                                       (90, "XC"),
                                       (50, "L"),
                                       (40, "XL"),
                                       (10, "X"),
                                       (9, "IX"),
                                       (5, "V"),
                                       (4, "IV"),
                                       (1, "I")];

/// Encodes a magnitude as a Roman numeral.
///
/// The largest symbol that still fits is appended repeatedly until nothing
/// remains. Zero and negative magnitudes produce an empty string.
///
/// # Example
/// ```
/// use romana::interpreter::value::roman::to_roman;
///
/// assert_eq!(to_roman(4), "IV");
/// assert_eq!(to_roman(49), "XLIX");
/// assert_eq!(to_roman(100), "C");
/// assert_eq!(to_roman(0), "");
/// ```
#[must_use]
pub fn to_roman(magnitude: i64) -> String {
    let mut remaining = magnitude;
    let mut result = String::new();

    for (value, symbol) in SYMBOLS {
        while remaining >= value {
            remaining -= value;
            result.push_str(symbol);
        }
    }

    result
}
