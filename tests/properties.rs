use proptest::prelude::*;
use romana::{
    ast::Equation,
    error::ParseError,
    evaluate,
    interpreter::value::{
        numeral::{Notation, Numeral},
        roman::to_roman,
    },
};

const ROMAN: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

fn decode(roman: &str) -> i64 {
    let value = |c: char| match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        _ => panic!("unexpected symbol {c}"),
    };

    let digits: Vec<i64> = roman.chars().map(value).collect();
    let mut total = 0;
    for (i, &d) in digits.iter().enumerate() {
        if digits.get(i + 1).is_some_and(|&next| next > d) {
            total -= d;
        } else {
            total += d;
        }
    }

    total
}

/// Length of the shortest spelling, built digit by digit.
fn minimal_length(n: i64) -> usize {
    const DIGIT: [usize; 10] = [0, 1, 2, 3, 2, 1, 2, 3, 4, 2];
    let hundreds = usize::try_from(n / 100).unwrap();
    let tens = usize::try_from(n / 10 % 10).unwrap();
    let ones = usize::try_from(n % 10).unwrap();

    hundreds + DIGIT[tens] + DIGIT[ones]
}

#[test]
fn roman_encoding_is_minimal_up_to_one_hundred() {
    assert_eq!(to_roman(0), "");

    for n in 1..=100 {
        let roman = to_roman(n);
        assert_eq!(decode(&roman), n, "{roman} does not decode to {n}");
        assert_eq!(roman.len(), minimal_length(n), "{roman} is not minimal for {n}");
    }
}

#[test]
fn roman_encoding_matches_known_spellings() {
    let known = [(14, "XIV"), (19, "XIX"), (40, "XL"), (44, "XLIV"), (49, "XLIX"), (64, "LXIV"),
                 (88, "LXXXVIII"), (90, "XC"), (99, "XCIX"), (100, "C")];

    for (n, spelling) in known {
        assert_eq!(to_roman(n), spelling);
    }
}

#[test]
fn table_spellings_match_encoder() {
    for (i, spelling) in ROMAN.iter().enumerate() {
        let magnitude = i64::try_from(i).unwrap() + 1;
        assert_eq!(to_roman(magnitude), *spelling);
    }
}

fn mixed_case(word: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), word.len()).prop_map(move |flags| {
        word.chars()
            .zip(flags)
            .map(|(c, lower)| if lower { c.to_ascii_lowercase() } else { c })
            .collect::<String>()
    })
}

proptest! {
    #[test]
    fn roman_parse_ignores_case(index in 0..ROMAN.len(), flags in proptest::collection::vec(any::<bool>(), 4)) {
        let word: String = ROMAN[index].chars()
                                       .zip(flags.iter().cycle())
                                       .map(|(c, &lower)| if lower { c.to_ascii_lowercase() } else { c })
                                       .collect();
        let numeral = Numeral::parse(&word).unwrap();

        prop_assert_eq!(numeral.notation(), Notation::Roman);
        prop_assert_eq!(numeral.magnitude(), i64::try_from(index).unwrap() + 1);
    }

    #[test]
    fn roman_sums_match_arabic_sums(a in 1..=10_usize, b in 1..=10_usize) {
        let arabic = evaluate(&format!("{a} + {b}")).unwrap();
        let roman = evaluate(&format!("{} + {}", ROMAN[a - 1], ROMAN[b - 1])).unwrap();

        prop_assert_eq!(decode(&roman).to_string(), arabic);
    }

    #[test]
    fn mixed_case_equations_evaluate(left in mixed_case("VIII"), right in mixed_case("IV")) {
        prop_assert_eq!(evaluate(&format!("{left} * {right}")).unwrap(), "XXXII");
    }

    #[test]
    fn wrong_word_count_is_format_error(words in proptest::collection::vec("[0-9IVX+*/-]{1,3}", 0..8)) {
        prop_assume!(words.len() != 3);

        let errors = Equation::parse(Some(&words.join(" "))).unwrap_err();

        prop_assert_eq!(errors.as_slice(), &[ParseError::IncorrectFormat { tokens: words.len().max(1) }]);
    }

    #[test]
    fn unknown_words_report_three_errors(a in "[abefghjknopqrstuwyz]{1,5}",
                                         b in "[abefghjknopqrstuwyz]{1,5}",
                                         c in "[abefghjknopqrstuwyz]{1,5}") {
        let errors = Equation::parse(Some(&format!("{a} {b} {c}"))).unwrap_err();

        prop_assert_eq!(errors.len(), 3);
    }
}
