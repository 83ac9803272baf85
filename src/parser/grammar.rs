//! Path data parser using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::PathDataError;
use crate::parser::lexer::{lex, Token};
use crate::routing::Point;

/// Parse `M x y L x y ...` into its vertices.
///
/// Several coordinate pairs may follow one `L`, as in SVG.
pub fn parse_path_data(input: &str) -> Result<Vec<Point>, Vec<PathDataError>> {
    let len = input.len();

    let mut tokens = Vec::new();
    for result in lex(input) {
        match result {
            Ok((tok, span)) => tokens.push((tok, SimpleSpan::from(span))),
            Err(span) => return Err(vec![PathDataError::unrecognized(span)]),
        }
    }

    let token_stream = Stream::from_iter(tokens)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    path_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn path_parser<'a, I>() -> impl Parser<'a, I, Vec<Point>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let number = select! {
        Token::Number(n) => n,
    };

    let point = number
        .clone()
        .then(number)
        .map(|(x, y)| Point::new(x, y));

    let move_to = just(Token::MoveTo).ignore_then(point.clone());

    let line_to = just(Token::LineTo).ignore_then(point.repeated().at_least(1).collect::<Vec<_>>());

    move_to
        .then(line_to.repeated().at_least(1).collect::<Vec<_>>())
        .then_ignore(end())
        .map(|(first, runs)| {
            let mut points = vec![first];
            points.extend(runs.into_iter().flatten());
            points
        })
}
