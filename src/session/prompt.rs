//! Line-oriented console prompts.

use std::io::{BufRead, Write};

use crate::error::{ExplorerError, ExplorerResult};

/// Read one answer, trimmed and lower-cased. `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced, so such an answer is simply rejected by the
/// caller's parser.
fn read_answer<R: BufRead>(input: &mut R) -> ExplorerResult<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).trim().to_lowercase()))
}

/// Ask `question` until `parse` accepts the answer.
///
/// Rejected answers print `invalid` and ask again. End of input yields
/// [`ExplorerError::InputClosed`].
pub fn ask<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    question: &str,
    invalid: &str,
    parse: F,
) -> ExplorerResult<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        write!(output, "{question} ")?;
        output.flush()?;

        let Some(answer) = read_answer(input)? else {
            return Err(ExplorerError::InputClosed);
        };
        match parse(&answer) {
            Some(value) => return Ok(value),
            None => {
                log::debug!("rejected answer {answer:?}");
                writeln!(output, "{invalid}")?;
            }
        }
    }
}

/// Ask a yes/no question. Only `yes` counts as yes; end of input counts as no.
pub fn ask_yes_no<R, W>(input: &mut R, output: &mut W, question: &str) -> ExplorerResult<bool>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n{question} Enter yes or no.")?;
    output.flush()?;
    Ok(read_answer(input)?.is_some_and(|a| a == "yes"))
}

#[cfg(test)]
mod tests {
    use super::{ask, ask_yes_no};
    use crate::error::ExplorerError;
    use std::io::Cursor;

    fn parse_number(s: &str) -> Option<u32> {
        s.parse().ok()
    }

    #[test]
    fn ask_reprompts_until_valid() {
        let mut input = Cursor::new("nope\n  42 \n");
        let mut output = Vec::new();
        let n = ask(&mut input, &mut output, "Number?", "Try again.", parse_number).unwrap();
        assert_eq!(n, 42);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Number?").count(), 2);
        assert_eq!(text.matches("Try again.").count(), 1);
    }

    #[test]
    fn ask_normalizes_case() {
        let mut input = Cursor::new("YES\n");
        let mut output = Vec::new();
        let got = ask(&mut input, &mut output, "?", "!", |s| (s == "yes").then_some(true));
        assert!(got.unwrap());
    }

    #[test]
    fn ask_reports_closed_input() {
        let mut input = Cursor::new("bad\n");
        let mut output = Vec::new();
        let err = ask(&mut input, &mut output, "?", "!", parse_number).unwrap_err();
        assert!(matches!(err, ExplorerError::InputClosed));
    }

    #[test]
    fn ask_rejects_non_utf8_answer_and_reprompts() {
        let mut input = Cursor::new(b"\xff\xfe\n7\n".to_vec());
        let mut output = Vec::new();
        let n = ask(&mut input, &mut output, "Number?", "Try again.", parse_number).unwrap();
        assert_eq!(n, 7);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Try again.").count(), 1);
    }

    #[test]
    fn yes_no_only_accepts_yes() {
        let mut output = Vec::new();
        assert!(ask_yes_no(&mut Cursor::new(" Yes \n"), &mut output, "More?").unwrap());
        assert!(!ask_yes_no(&mut Cursor::new("y\n"), &mut output, "More?").unwrap());
        assert!(!ask_yes_no(&mut Cursor::new(""), &mut output, "More?").unwrap());
    }
}
