/// Numerals tagged with their notation.
///
/// Defines the `Numeral` type, the `Notation` it was written in, and the
/// fixed table of spellings that doubles as parser and validator for
/// operands.
pub mod numeral;
/// Roman numeral encoding.
///
/// Converts magnitudes into their shortest subtractive Roman spelling. The
/// encoder covers every magnitude up to one hundred, which is the largest
/// product two operands can form.
pub mod roman;
