//! Lexer for move/line-to path data using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r,]+")]
pub enum Token {
    #[token("M")]
    MoveTo,
    #[token("L")]
    LineTo,

    #[regex(r"-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"-?\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
}

/// Lex input into tokens with spans; unrecognized input yields `Err(span)`
pub fn lex(input: &str) -> impl Iterator<Item = Result<(Token, Span), Span>> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(t) => Ok((t, span)),
            Err(()) => Err(span),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).filter_map(Result::ok).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_commands_and_numbers() {
        assert_eq!(
            tokens("M 200 140 L 300.5 -140"),
            vec![
                Token::MoveTo,
                Token::Number(200.0),
                Token::Number(140.0),
                Token::LineTo,
                Token::Number(300.5),
                Token::Number(-140.0),
            ]
        );
    }

    #[test]
    fn test_commas_and_newlines_are_separators() {
        assert_eq!(
            tokens("M1,2\nL3,4"),
            vec![
                Token::MoveTo,
                Token::Number(1.0),
                Token::Number(2.0),
                Token::LineTo,
                Token::Number(3.0),
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_exponent_and_leading_dot() {
        assert_eq!(
            tokens("1e3 -.5 2.5E-1"),
            vec![Token::Number(1000.0), Token::Number(-0.5), Token::Number(0.25)]
        );
    }

    #[test]
    fn test_unrecognized_input_is_reported() {
        let results: Vec<_> = lex("M 1 2 Q 3 4").collect();
        assert_eq!(results[3], Err(6..7));
    }
}
