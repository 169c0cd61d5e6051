//! User input for the interactive page.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use wifi_setup_core::{DeviceConfig, ViewModel, utils::remove_trim};

/// What the user wants to do next
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Pick the network at this index of the list
    Choose(usize),
    Rescan,
    Connect,
    EditSettings,
    Quit,
}

impl Action {
    /// Parse one line typed on the page; network numbers start at 1
    pub fn parse(input: &str, networks: usize) -> Option<Self> {
        match remove_trim(input).to_ascii_lowercase().as_str() {
            "r" => Some(Action::Rescan),
            "c" => Some(Action::Connect),
            "s" => Some(Action::EditSettings),
            "q" => Some(Action::Quit),
            other => other
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=networks).contains(n))
                .map(|n| Action::Choose(n - 1)),
        }
    }
}

/// Source of user decisions
pub trait Prompt {
    fn next_action(&mut self, view: &ViewModel) -> Result<Action>;

    /// Password for a locked network
    fn password(&mut self, ssid: &str) -> Result<String>;

    /// New device settings, starting from the current ones
    fn settings(&mut self, current: &DeviceConfig) -> Result<DeviceConfig>;
}

/// Removes the line terminator only; passphrases may begin or end with spaces
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Reads decisions from the terminal
pub struct TerminalPrompt<R> {
    input: R,
    /// Read passwords without echo instead of from `input`
    hide_passwords: bool,
}

impl TerminalPrompt<std::io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: std::io::stdin().lock(),
            hide_passwords: true,
        }
    }
}

impl<R: BufRead> TerminalPrompt<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            hide_passwords: false,
        }
    }

    /// Next raw line of input, `None` at end of input
    fn read_raw_line(&mut self, label: &str) -> Result<Option<String>> {
        print!("{label}");
        std::io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from terminal")?;

        Ok((read > 0).then(|| strip_line_ending(&line).to_string()))
    }

    /// Next trimmed line of input, `None` at end of input
    fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        Ok(self.read_raw_line(label)?.map(|line| remove_trim(&line)))
    }

    /// Asks until the answer is a number; empty input or end of input keep `current`
    fn read_number(&mut self, label: &str, current: i32) -> Result<i32> {
        loop {
            match self.read_line(&format!("{label} [{current}]: "))? {
                Some(value) if !value.is_empty() => match value.parse::<i32>() {
                    Ok(number) => return Ok(number),
                    Err(e) => println!("? {e}"),
                },
                _ => return Ok(current),
            }
        }
    }

    fn read_flag(&mut self, label: &str, current: bool) -> Result<bool> {
        let default = if current { "y" } else { "n" };
        match self.read_line(&format!("{label} (y/n) [{default}]: "))? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => Ok(true),
            Some(answer) if answer.eq_ignore_ascii_case("n") => Ok(false),
            _ => Ok(current),
        }
    }
}

impl<R: BufRead> Prompt for TerminalPrompt<R> {
    fn next_action(&mut self, view: &ViewModel) -> Result<Action> {
        loop {
            let Some(line) = self.read_line("> ")? else {
                return Ok(Action::Quit);
            };
            if line.is_empty() {
                continue;
            }
            match Action::parse(&line, view.networks.len()) {
                Some(action) => return Ok(action),
                None => println!("?"),
            }
        }
    }

    fn password(&mut self, ssid: &str) -> Result<String> {
        let label = format!("{ssid}: ");

        if self.hide_passwords {
            return rpassword::prompt_password(label).context("failed to read password");
        }

        Ok(self.read_raw_line(&label)?.unwrap_or_default())
    }

    fn settings(&mut self, current: &DeviceConfig) -> Result<DeviceConfig> {
        let max_tx_power = self.read_number("max_tx_power", current.max_tx_power)?;
        let remember_bssid = self.read_flag("remember_bssid", current.remember_bssid)?;
        let sleep_mode = self.read_flag("sleep_mode", current.sleep_mode)?;

        Ok(DeviceConfig {
            max_tx_power,
            remember_bssid,
            sleep_mode,
        })
    }
}

/// Replays prepared decisions, then quits
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub actions: VecDeque<Action>,
    pub passwords: VecDeque<String>,
    pub settings: VecDeque<DeviceConfig>,
}

impl ScriptedPrompt {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.passwords.push_back(password.to_string());
        self
    }

    pub fn with_settings(mut self, settings: DeviceConfig) -> Self {
        self.settings.push_back(settings);
        self
    }
}

impl Prompt for ScriptedPrompt {
    fn next_action(&mut self, _view: &ViewModel) -> Result<Action> {
        Ok(self.actions.pop_front().unwrap_or(Action::Quit))
    }

    fn password(&mut self, ssid: &str) -> Result<String> {
        self.passwords
            .pop_front()
            .with_context(|| format!("no password scripted for {ssid}"))
    }

    fn settings(&mut self, current: &DeviceConfig) -> Result<DeviceConfig> {
        Ok(self.settings.pop_front().unwrap_or_else(|| current.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_parse_from_commands_and_numbers() {
        assert_eq!(Action::parse("r\n", 2), Some(Action::Rescan));
        assert_eq!(Action::parse(" C ", 2), Some(Action::Connect));
        assert_eq!(Action::parse("s", 2), Some(Action::EditSettings));
        assert_eq!(Action::parse("q", 0), Some(Action::Quit));
        assert_eq!(Action::parse("2", 2), Some(Action::Choose(1)));
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert_eq!(Action::parse("0", 2), None);
        assert_eq!(Action::parse("3", 2), None);
        assert_eq!(Action::parse("x", 2), None);
    }

    #[test]
    fn terminal_prompt_skips_invalid_lines() {
        let mut prompt = TerminalPrompt::new("9\n\n1\n".as_bytes());
        let view = ViewModel {
            networks: vec![wifi_setup_core::NetworkView::from_access_point(
                &wifi_setup_core::AccessPoint {
                    ssid: "Home".to_string(),
                    authmode: 3,
                    rssi: None,
                },
                "",
            )],
            ..Default::default()
        };

        assert_eq!(prompt.next_action(&view).unwrap(), Action::Choose(0));
        assert_eq!(prompt.next_action(&view).unwrap(), Action::Quit);
    }

    #[test]
    fn terminal_prompt_keeps_current_settings_on_empty_input() {
        let mut prompt = TerminalPrompt::new("40\n\ny\n".as_bytes());
        let current = DeviceConfig {
            max_tx_power: 20,
            remember_bssid: true,
            sleep_mode: false,
        };

        let settings = prompt.settings(&current).unwrap();

        assert_eq!(
            settings,
            DeviceConfig {
                max_tx_power: 40,
                remember_bssid: true,
                sleep_mode: true,
            }
        );
    }

    #[test]
    fn terminal_prompt_asks_again_for_mistyped_tx_power() {
        let mut prompt = TerminalPrompt::new("abc\n4O\n40\n\n\n".as_bytes());
        let current = DeviceConfig {
            max_tx_power: 20,
            remember_bssid: true,
            sleep_mode: false,
        };

        let settings = prompt.settings(&current).unwrap();

        assert_eq!(
            settings,
            DeviceConfig {
                max_tx_power: 40,
                ..current
            }
        );
    }

    #[test]
    fn terminal_prompt_keeps_tx_power_when_input_ends() {
        let mut prompt = TerminalPrompt::new("abc\n".as_bytes());
        let current = DeviceConfig {
            max_tx_power: 20,
            remember_bssid: false,
            sleep_mode: true,
        };

        assert_eq!(prompt.settings(&current).unwrap(), current);
    }

    #[test]
    fn terminal_prompt_keeps_password_whitespace() {
        let mut prompt = TerminalPrompt::new(" my pass \r\n".as_bytes());

        assert_eq!(prompt.password("Home").unwrap(), " my pass ");
    }

    #[test]
    fn line_ending_is_the_only_thing_stripped() {
        assert_eq!(strip_line_ending("  pass\t\n"), "  pass\t");
        assert_eq!(strip_line_ending("pass\r\n"), "pass");
        assert_eq!(strip_line_ending("pass"), "pass");
    }

    #[test]
    fn scripted_prompt_quits_when_exhausted() {
        let mut prompt = ScriptedPrompt::new([Action::Rescan]);
        let view = ViewModel::default();

        assert_eq!(prompt.next_action(&view).unwrap(), Action::Rescan);
        assert_eq!(prompt.next_action(&view).unwrap(), Action::Quit);
        assert!(prompt.password("Home").is_err());
    }
}
