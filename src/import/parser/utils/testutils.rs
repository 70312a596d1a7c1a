use chumsky::{
    error::Simple,
    prelude::{any, end},
    Parser as _,
};

/// Run `parser` on `input` and check that it produces `expected`, leaving `rest` unconsumed.
#[track_caller]
pub fn test_parser<T>(
    input: &str,
    parser: impl chumsky::Parser<char, T, Error = Simple<char>>,
    expected: T,
    rest: &str,
) where
    T: std::fmt::Debug + PartialEq,
{
    let remainder = any().repeated().collect::<String>();
    let (parsed, unconsumed) = parser
        .then(remainder)
        .then_ignore(end())
        .parse(input)
        .unwrap_or_else(|errors| panic!("Failed to parse {input:?}: {errors:?}"));
    assert_eq!(expected, parsed, "parsed value of {input:?}");
    assert_eq!(rest, unconsumed, "unconsumed input of {input:?}");
}

#[cfg(test)]
mod tests {
    use chumsky::prelude::{filter, just};

    use super::*;

    fn comma() -> impl chumsky::Parser<char, char, Error = Simple<char>> {
        just(',')
    }

    #[test]
    fn whole_input_consumed() {
        test_parser(",", comma(), ',', "");
    }

    #[test]
    fn rest_is_left_over() {
        test_parser(",a,b", comma(), ',', "a,b");
        let digits = filter(|c: &char| c.is_ascii_digit())
            .repeated()
            .collect::<String>();
        test_parser("12ab", digits, "12".to_string(), "ab");
    }

    #[test]
    #[should_panic(expected = "Failed to parse")]
    fn parser_does_not_match() {
        test_parser(";", comma(), ',', "");
    }

    #[test]
    #[should_panic(expected = "unconsumed input")]
    fn rest_differs() {
        test_parser(",", comma(), ',', "a");
    }

    #[test]
    #[should_panic(expected = "parsed value")]
    fn value_differs() {
        test_parser("12", just("12").to(1), 2, "");
    }
}
