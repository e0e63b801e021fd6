/// Feedback cues the menu asks the host to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Navigate,
    Adjust,
    Select,
    Back,
}

impl Signal {
    pub fn name(self) -> &'static str {
        match self {
            Signal::Navigate => "NAV_UP_DOWN",
            Signal::Adjust => "NAV_LEFT_RIGHT",
            Signal::Select => "SELECT",
            Signal::Back => "BACK",
        }
    }
}

/// Fire-and-forget audio. Implementations swallow their own failures.
pub trait SoundPlayer {
    fn play(&self, signal: Signal);
}

pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&self, _signal: Signal) {}
}

/// Reports every cue through the `log` facade.
pub struct LogSound;

impl SoundPlayer for LogSound {
    fn play(&self, signal: Signal) {
        log::info!("sound: {}", signal.name());
    }
}
