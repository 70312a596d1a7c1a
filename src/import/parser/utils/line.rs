use chumsky::{
    error::Simple,
    prelude::{end, filter, just},
    Parser as _,
};

use super::Delimiter;

/// Split one line into fields, tracking whether we're inside quotes.
///
/// A doubled quote inside a quoted section is a literal quote, the delimiter only
/// splits outside of quotes. Quotes may open and close anywhere inside a field and a
/// quote left open runs to the end of the line. This never rejects a line.
pub fn line(delimiter: Delimiter) -> impl chumsky::Parser<char, Vec<String>, Error = Simple<char>> {
    let delimiter = delimiter.as_char();
    field(delimiter)
        .then(just(delimiter).ignore_then(field(delimiter)).repeated())
        .map(|(first, rest): (String, Vec<String>)| {
            std::iter::once(first).chain(rest).collect::<Vec<_>>()
        })
        .then_ignore(end())
        .labelled("line")
}

fn field(delimiter: char) -> impl chumsky::Parser<char, String, Error = Simple<char>> {
    quoted_section()
        .or(unquoted_section(delimiter))
        .repeated()
        .map(|sections: Vec<String>| sections.concat())
        .labelled("field")
}

fn quoted_section() -> impl chumsky::Parser<char, String, Error = Simple<char>> {
    let escaped_quote = just("\"\"").to('"');
    let content = escaped_quote
        .or(filter(|c: &char| *c != '"'))
        .repeated()
        .collect::<String>();

    quote()
        .ignore_then(content)
        .then_ignore(quote().or_not())
        .labelled("quoted section")
}

fn unquoted_section(delimiter: char) -> impl chumsky::Parser<char, String, Error = Simple<char>> {
    filter(move |c: &char| *c != delimiter && *c != '"')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .labelled("unquoted section")
}

fn quote() -> impl chumsky::Parser<char, (), Error = Simple<char>> {
    just('"').ignored().labelled("quote")
}
