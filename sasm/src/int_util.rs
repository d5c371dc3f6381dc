use matches::debug_assert_matches;
use pest::iterators::Pair;

use crate::error::{new_parser_error, Result};
use crate::parser::Rule;

/// Parses a numeric literal pair into a 16-bit value. The grammar already
/// decided the base: `0x` prefix is hexadecimal, a leading `0` octal,
/// anything else decimal.
pub fn process_u16(pair: Pair<Rule>) -> Result<u16> {
    debug_assert_matches!(pair.as_rule(), Rule::int);

    let inner = pair.into_inner().next().unwrap();
    let span = inner.as_span();
    let text = inner.as_str();

    let (digits, base) = match inner.as_rule() {
        Rule::hex_int => (&text[2..], 16),
        Rule::oct_int => (&text[1..], 8),
        Rule::dec_int => (text, 10),
        _ => unreachable!(),
    };

    u16::from_str_radix(digits, base).map_err(|_| {
        new_parser_error(
            span,
            format!("numeric literal `{}` does not fit in 16 bits.", text),
        )
    })
}
