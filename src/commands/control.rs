//! Playback controls for animated runs
//!
//! Ctrl-C cancels the run. While animating, a line on stdin starting with
//! `p` toggles pause and `q` cancels.

use std::io::{self, BufRead};
use std::thread;

use algoviz_core::error::{Result, VizError};
use algoviz_core::step::{Instant, Pacer, PauseGate};

/// Keys understood by the stdin reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    TogglePause,
    Quit,
}

fn parse_control(line: &str) -> Option<Control> {
    match line.trim().chars().next()?.to_ascii_lowercase() {
        'p' => Some(Control::TogglePause),
        'q' => Some(Control::Quit),
        _ => None,
    }
}

/// Pacing for one command invocation
pub enum Playback {
    /// No delays, no pausing
    Unpaced,
    /// Animated; shares its gate with the signal handler and stdin reader
    Gated(PauseGate),
}

impl Playback {
    pub fn start(animate: bool) -> Result<Self> {
        if !animate {
            return Ok(Playback::Unpaced);
        }

        let gate = PauseGate::new();

        let on_signal = gate.clone();
        ctrlc::set_handler(move || on_signal.cancel())
            .map_err(|e| VizError::Other(format!("failed to install Ctrl-C handler: {}", e)))?;

        let on_input = gate.clone();
        thread::spawn(move || read_controls(&on_input));

        Ok(Playback::Gated(gate))
    }

    pub fn pacer(&self) -> &dyn Pacer {
        match self {
            Playback::Unpaced => &Instant,
            Playback::Gated(gate) => gate,
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, Playback::Gated(_))
    }
}

fn read_controls(gate: &PauseGate) {
    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        if gate.is_cancelled() {
            break;
        }
        match parse_control(&line) {
            Some(Control::TogglePause) => {
                gate.toggle();
            }
            Some(Control::Quit) => {
                gate.cancel();
                break;
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_control() {
        assert_eq!(parse_control("p"), Some(Control::TogglePause));
        assert_eq!(parse_control("  Pause"), Some(Control::TogglePause));
        assert_eq!(parse_control("q"), Some(Control::Quit));
        assert_eq!(parse_control(""), None);
        assert_eq!(parse_control("x"), None);
    }

    #[test]
    fn test_instant_playback_never_waits() {
        let playback = Playback::start(false).unwrap();
        assert!(!playback.is_animated());
        assert!(playback
            .pacer()
            .step(std::time::Duration::from_secs(60))
            .is_ok());
    }
}
