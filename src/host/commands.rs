use anyhow::{anyhow, Result};

/// Inputs the host maps raw events onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,
}

const KNOWN: &[(&str, Command)] = &[
    ("up", Command::Up),
    ("u", Command::Up),
    ("down", Command::Down),
    ("d", Command::Down),
    ("left", Command::Left),
    ("l", Command::Left),
    ("right", Command::Right),
    ("r", Command::Right),
    ("select", Command::Select),
    ("enter", Command::Select),
    ("back", Command::Back),
    ("esc", Command::Back),
    ("b", Command::Back),
];

pub fn decode(token: &str) -> Option<Command> {
    let token = token.trim().to_ascii_lowercase();
    KNOWN
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, cmd)| *cmd)
}

/// Parses a comma- or whitespace-separated list such as `"down,down,right,enter"`.
/// A token may carry a repeat count: `down*3`.
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    let mut out = Vec::new();
    for token in script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let (name, count) = match token.split_once('*') {
            Some((name, count)) => {
                let count: usize = count
                    .parse()
                    .map_err(|_| anyhow!("Invalid repeat count in '{token}'"))?;
                (name, count)
            }
            None => (token, 1),
        };
        let cmd = decode(name).ok_or_else(|| {
            let mut known = KNOWN.iter().map(|(n, _)| *n).collect::<Vec<_>>();
            known.sort_unstable();
            anyhow!("Unknown input '{name}'. Known inputs: {}", known.join(", "))
        })?;
        out.extend(std::iter::repeat(cmd).take(count));
    }
    Ok(out)
}
