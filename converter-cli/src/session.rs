//! Line-driven interactive session over a single converter.

use std::str::FromStr;

use converter_core::{Converter, Recompute};
use converter_types::{ConverterError, CurrencyCode, RateSource, SlotIndex};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::parse_code;

pub const HELP: &str = "\
Commands:
  amount <1|2> [value]   set the amount of a slot (no value clears it)
  currency <1|2> <CODE>  change the currency of a slot
  swap                   exchange the two slots
  reset                  go back to the starting pair
  refresh                fetch the rate table again
  show                   print both slots
  choices <1|2>          list currencies a slot can switch to
  help                   print this message
  quit                   leave the session";

/// One parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Amount(SlotIndex, String),
    Currency(SlotIndex, CurrencyCode),
    Swap,
    Reset,
    Refresh,
    Show,
    Choices(SlotIndex),
    Help,
    Quit,
}

/// Slots are numbered from 1 on the command line.
fn parse_slot(word: Option<&str>) -> anyhow::Result<SlotIndex> {
    let word = word.ok_or_else(|| anyhow::anyhow!("Missing slot, expected 1 or 2"))?;
    word.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|position| SlotIndex::try_from(position).ok())
        .ok_or_else(|| anyhow::anyhow!("Unknown slot {:?}, expected 1 or 2", word))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = match words.next().map(str::to_lowercase).as_deref() {
            Some("amount" | "a") => {
                let slot = parse_slot(words.next())?;
                Command::Amount(slot, words.next().unwrap_or_default().to_string())
            }
            Some("currency" | "c") => {
                let slot = parse_slot(words.next())?;
                let code = words
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("Missing currency code"))?;
                Command::Currency(slot, parse_code(code)?)
            }
            Some("swap" | "s") => Command::Swap,
            Some("reset") => Command::Reset,
            Some("refresh" | "r") => Command::Refresh,
            Some("show") => Command::Show,
            Some("choices") => Command::Choices(parse_slot(words.next())?),
            Some("help" | "?") => Command::Help,
            Some("quit" | "exit" | "q") => Command::Quit,
            Some(other) => anyhow::bail!("Unknown command {:?}, try `help`", other),
            None => anyhow::bail!("Empty command"),
        };

        if let Some(extra) = words.next() {
            anyhow::bail!("Unexpected argument {:?}", extra);
        }
        Ok(command)
    }
}

/// Renders both slots, one per line.
pub fn render(converter: &Converter) -> String {
    let mut out: String = converter
        .pair()
        .iter()
        .enumerate()
        .map(|(n, slot)| format!("[{}] {}\n", n + 1, slot))
        .collect();
    if !converter.is_loaded() {
        out.push_str("(rates not loaded)\n");
    }
    out
}

fn render_mutation(converter: &Converter, result: Result<Recompute, ConverterError>) -> String {
    match result {
        Ok(Recompute::Converted) => render(converter),
        Ok(Recompute::RatesUnavailable) => {
            format!("{}(nothing converted: rates unavailable)\n", render(converter))
        }
        Err(err) => format!("error: {err}\n"),
    }
}

/// Runs `command` against the converter and returns the text to print.
pub async fn execute<S>(converter: &mut Converter, source: &S, command: Command) -> String
where
    S: RateSource + ?Sized,
{
    match command {
        Command::Amount(slot, raw) => {
            let result = converter.edit_amount(slot, &raw);
            render_mutation(converter, result)
        }
        Command::Currency(slot, code) => {
            let result = converter.edit_denomination(slot, code);
            render_mutation(converter, result)
        }
        Command::Swap => {
            converter.swap();
            render(converter)
        }
        Command::Reset => {
            let result = converter.reset();
            render_mutation(converter, Ok(result))
        }
        Command::Refresh => match converter.refresh(source).await {
            Ok(_) => {
                let count = converter.rates().map(|t| t.len()).unwrap_or_default();
                format!("rates loaded ({count} currencies)\n{}", render(converter))
            }
            Err(err) => format!("rates not loaded: {err}\n"),
        },
        Command::Show => render(converter),
        Command::Choices(slot) => {
            let choices = converter.denomination_choices(slot);
            if choices.is_empty() {
                "no currencies available\n".to_string()
            } else {
                let codes: Vec<_> = choices.iter().map(|c| c.as_str()).collect();
                format!("{}\n", codes.join(" "))
            }
        }
        Command::Help => format!("{HELP}\n"),
        Command::Quit => String::new(),
    }
}

/// Loads rates once, then reads commands from stdin until `quit` or EOF.
pub async fn run<S>(converter: &mut Converter, source: &S) -> anyhow::Result<()>
where
    S: RateSource + ?Sized,
{
    print!("{}", execute(converter, source, Command::Refresh).await);
    if !converter.is_loaded() {
        print!("{}", render(converter));
    }
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => {
                tracing::debug!(?command, "Executing command");
                print!("{}", execute(converter, source, command).await);
            }
            Err(err) => println!("error: {err}"),
        }
    }
    Ok(())
}
