use std::io::BufRead;

use crate::model::BikeshareError;

/// fixed console width used for banners and rules.
pub const LINE_WIDTH: usize = 79;

/// displays a message centered in a [`LINE_WIDTH`] line padded with the given
/// symbol, followed by a full-width rule of the same symbol. when the padding
/// does not split evenly, the extra symbol goes to the right.
pub fn banner(message: &str, symb: char) {
    let len = message.chars().count().min(LINE_WIDTH);
    let shift = (LINE_WIDTH - len) / 2;
    let remainder = (LINE_WIDTH - len) % 2;
    let pad = symb.to_string();
    println!(
        "{}{}{}",
        pad.repeat(shift),
        message,
        pad.repeat(shift + remainder)
    );
    println!("{}", pad.repeat(LINE_WIDTH));
}

/// prints a full-width rule of the given symbol.
pub fn rule(symb: char) {
    println!("{}", symb.to_string().repeat(LINE_WIDTH));
}

/// clears the console screen. failures are ignored; a cleared screen is
/// cosmetic and some terminals do not support it.
pub fn clear() {
    let status = if cfg!(target_os = "windows") {
        std::process::Command::new("cmd").args(["/C", "cls"]).status()
    } else {
        std::process::Command::new("clear").status()
    };
    if let Err(e) = status {
        log::debug!("could not clear screen: {e}");
    }
}

/// prints a prompt message and reads one line from the input with only the
/// line ending removed. answers that must match exactly, like the exit
/// confirmation, go through this so surrounding whitespace is not forgiven.
/// end-of-input is an error so the unbounded reprompt loops terminate when
/// stdin closes.
pub fn prompt_raw<R: BufRead>(input: &mut R, message: &str) -> Result<String, BikeshareError> {
    println!("{message}");
    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Err(BikeshareError::InputClosedError);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// like [`prompt_raw`], but trims surrounding whitespace from the answer.
pub fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<String, BikeshareError> {
    let line = prompt_raw(input, message)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod test {
    use super::{prompt, prompt_raw};
    use crate::model::BikeshareError;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_input_line() {
        let mut input = Cursor::new("  chicago  \n");
        let result = prompt(&mut input, "city?").expect("should read line");
        assert_eq!(result, "chicago");
    }

    #[test]
    fn test_prompt_raw_keeps_surrounding_whitespace() {
        let mut input = Cursor::new(" yes \r\n");
        let result = prompt_raw(&mut input, "exit?").expect("should read line");
        assert_eq!(result, " yes ");
    }

    #[test]
    fn test_prompt_fails_on_closed_input() {
        let mut input = Cursor::new("");
        let result = prompt(&mut input, "city?");
        assert!(matches!(result, Err(BikeshareError::InputClosedError)));
    }
}
