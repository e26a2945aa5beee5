//! Music widget state. The actual `AudioContext` lives in the page; this
//! tracks toggle/volume state and emits commands for it.

/// A command for the host audio layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCommand {
    /// Start a fresh source at the given gain.
    Play { gain: f32 },
    /// Stop and discard the active source. There is no pause: toggling back
    /// on starts over from the beginning.
    Stop,
    /// Adjust the gain of the active source.
    SetGain { gain: f32 },
}

/// Toggle + volume state for the floating music widget.
/// Volume is the 0–100 slider scale; gain is 0.0–1.0.
pub struct MusicController {
    playing: bool,
    volume: f32,
}

impl MusicController {
    pub fn new(default_volume: f32) -> Self {
        Self {
            playing: false,
            volume: default_volume.clamp(0.0, 100.0),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// The slider value mapped to a gain.
    pub fn gain(&self) -> f32 {
        self.volume / 100.0
    }

    /// Flip the playing state. Returns the command for the host.
    pub fn toggle(&mut self) -> AudioCommand {
        if self.playing {
            self.playing = false;
            AudioCommand::Stop
        } else {
            self.playing = true;
            AudioCommand::Play { gain: self.gain() }
        }
    }

    /// Move the volume slider. Returns a gain command while playing.
    pub fn set_volume(&mut self, volume: f32) -> Option<AudioCommand> {
        self.volume = volume.clamp(0.0, 100.0);
        if self.playing {
            Some(AudioCommand::SetGain { gain: self.gain() })
        } else {
            None
        }
    }
}
