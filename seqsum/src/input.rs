//! Reading the input number

use std::io::BufRead;

use log::debug;

use crate::error::SeqsumError;

/// Read one signed integer token from `reader`.
///
/// Blank lines and leading whitespace are skipped. The token is an optional
/// sign followed by digits; anything after the digits is ignored, so `5abc`
/// reads as 5.
pub fn read_number<R: BufRead>(mut reader: R) -> Result<i64, SeqsumError> {
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(SeqsumError::MissingInput);
        }

        if let Some(token) = line.split_whitespace().next() {
            debug!("read token '{}'", token);
            return parse_leading_integer(token);
        }
    }
}

fn parse_leading_integer(token: &str) -> Result<i64, SeqsumError> {
    let invalid = || SeqsumError::InvalidInput {
        token: token.to_string(),
    };

    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(invalid());
    }

    token[..sign_len + digits].parse::<i64>().map_err(|_| invalid())
}
