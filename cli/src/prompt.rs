use anyhow::{Context, bail};
use minesweep_core::{Command, Pointer, command_for_key};

pub(crate) const HELP: &str = "\
commands:
  <x> <y>          reveal the cell, or flag it in flag mode
  click <px> <py>  same, at a pixel position
  f | <space>      toggle flag mode
  help             show this text
  quit             leave the game";

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Input {
    Command(Command),
    Help,
    Quit,
}

/// Parses one line typed by the player.
pub(crate) fn parse_input(line: &str, cell_size: f64) -> anyhow::Result<Input> {
    if let Some(command) = single_char(line).and_then(command_for_key) {
        return Ok(Input::Command(command));
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        bail!("empty command, try `help`");
    };

    let input = match head {
        "q" | "quit" | "exit" => Input::Quit,
        "h" | "help" | "?" => Input::Help,
        "c" | "click" => {
            let px = parse_arg::<f64>(words.next(), "px")?;
            let py = parse_arg::<f64>(words.next(), "py")?;
            Input::Command(Pointer::new(px, py).select(cell_size))
        }
        _ => {
            let x = parse_arg::<i64>(Some(head), "x")?;
            let y = parse_arg::<i64>(words.next(), "y")?;
            Input::Command(Command::Select { x, y })
        }
    };

    if let Some(extra) = words.next() {
        bail!("unexpected argument {extra:?}");
    }
    Ok(input)
}

fn single_char(line: &str) -> Option<char> {
    // a lone space is a key press, so only strip the line ending
    let line = line.trim_end_matches(['\r', '\n']);
    let mut chars = line.chars();
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

fn parse_arg<T: std::str::FromStr>(word: Option<&str>, name: &str) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let word = word.with_context(|| format!("missing {name}"))?;
    word.parse()
        .with_context(|| format!("invalid {name} {word:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Input {
        parse_input(line, 40.0).unwrap()
    }

    #[test]
    fn coordinates_select_a_cell() {
        assert_eq!(parse("3 4"), Input::Command(Command::Select { x: 3, y: 4 }));
        assert_eq!(parse("-1 0"), Input::Command(Command::Select { x: -1, y: 0 }));
    }

    #[test]
    fn click_resolves_pixels() {
        assert_eq!(
            parse("click 85 10.5"),
            Input::Command(Command::Select { x: 2, y: 0 })
        );
    }

    #[test]
    fn flag_mode_keys() {
        assert_eq!(parse("f"), Input::Command(Command::ToggleFlagMode));
        assert_eq!(parse(" "), Input::Command(Command::ToggleFlagMode));
        assert_eq!(parse("F\n"), Input::Command(Command::ToggleFlagMode));
    }

    #[test]
    fn words() {
        assert_eq!(parse("quit"), Input::Quit);
        assert_eq!(parse("help"), Input::Help);
    }

    #[test]
    fn malformed_lines_are_errors() {
        assert!(parse_input("", 40.0).is_err());
        assert!(parse_input("3", 40.0).is_err());
        assert!(parse_input("3 x", 40.0).is_err());
        assert!(parse_input("1 2 3", 40.0).is_err());
        assert!(parse_input("click 1", 40.0).is_err());
    }
}
