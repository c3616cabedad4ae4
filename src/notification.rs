//! Notification toggle
//!
//! Enabling notifications shows a fixed confirmation message and plays a
//! bundled sound through a [`SoundPlayer`]. Disabling clears the message. The
//! message stays until notifications are turned off again.
//!
//! With the `audio` feature, `AudioPlayer` decodes the asset and plays it on
//! the default output device.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{KhabarError, Result};

/// Message shown while notifications are enabled
pub const ENABLED_MESSAGE: &str = "Notifications are now enabled!";

/// Capability for playing the notification sound
pub trait SoundPlayer {
    /// Play the asset at `asset`
    fn play(&mut self, asset: &Path) -> Result<()>;
}

/// Open a sound asset for decoding
///
/// # Errors
///
/// Returns [`KhabarError::Playback`] if the asset is missing or is not a
/// regular file, and [`KhabarError::Io`] for any other read failure.
pub fn open_asset(asset: &Path) -> Result<BufReader<File>> {
    let file = match File::open(asset) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(KhabarError::Playback(format!(
                "sound asset {} not found",
                asset.display()
            )));
        }
        Err(e) => return Err(e.into()),
    };
    if !file.metadata()?.is_file() {
        return Err(KhabarError::Playback(format!(
            "sound asset {} is not a file",
            asset.display()
        )));
    }
    Ok(BufReader::new(file))
}

/// Player that decodes the asset and plays it on the default output device
///
/// The output stream is opened on first use and kept for the player's
/// lifetime; playback does not block the caller.
#[cfg(feature = "audio")]
#[derive(Default)]
pub struct AudioPlayer {
    output: Option<(rodio::OutputStream, rodio::OutputStreamHandle)>,
}

#[cfg(feature = "audio")]
impl AudioPlayer {
    /// Create a player; no device is opened until the first sound
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&rodio::OutputStreamHandle> {
        if self.output.is_none() {
            let output = rodio::OutputStream::try_default()
                .map_err(|e| KhabarError::Playback(format!("no output device: {}", e)))?;
            self.output = Some(output);
        }
        match &self.output {
            Some((_, handle)) => Ok(handle),
            None => Err(KhabarError::Playback("no output device".to_string())),
        }
    }
}

#[cfg(feature = "audio")]
impl std::fmt::Debug for AudioPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioPlayer")
            .field("open", &self.output.is_some())
            .finish()
    }
}

#[cfg(feature = "audio")]
impl SoundPlayer for AudioPlayer {
    fn play(&mut self, asset: &Path) -> Result<()> {
        let source = rodio::Decoder::new(open_asset(asset)?)
            .map_err(|e| KhabarError::Playback(format!("{}: {}", asset.display(), e)))?;
        let sink = rodio::Sink::try_new(self.handle()?)
            .map_err(|e| KhabarError::Playback(e.to_string()))?;
        sink.append(source);
        sink.detach();
        debug!("Playing {}", asset.display());
        Ok(())
    }
}

/// Player that rings the terminal bell instead of decoding the asset
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    /// Ring the bell on `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundPlayer for TerminalBell<W> {
    fn play(&mut self, asset: &Path) -> Result<()> {
        debug!("Ringing bell for {}", asset.display());
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Player that does nothing (tests, headless use)
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&mut self, _asset: &Path) -> Result<()> {
        Ok(())
    }
}

/// Notification switch state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct NotificationState {
    enabled: bool,
    message: String,
}

impl NotificationState {
    /// Flip the switch
    ///
    /// When enabling, the confirmation message is set and `player` plays
    /// `sound`. A playback failure is logged and does not keep notifications
    /// from being enabled.
    #[must_use]
    pub fn toggle(self, player: &mut dyn SoundPlayer, sound: &Path) -> Self {
        if self.enabled {
            debug!("Notifications disabled");
            return Self::default();
        }

        if let Err(e) = player.play(sound) {
            warn!("Failed to play notification sound {}: {}", sound.display(), e);
        }
        debug!("Notifications enabled");
        Self {
            enabled: true,
            message: ENABLED_MESSAGE.to_string(),
        }
    }

    /// Whether notifications are on
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current message; empty when notifications are off
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `(enabled, message)` pair
    pub fn snapshot(&self) -> (bool, &str) {
        (self.enabled, &self.message)
    }
}
