//! Audio output preferences: which ones a platform shows, and what a change does.

use error::SoundError;
use std::fmt;
use tracing::debug;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum SoundError {
        #[error("Unknown sound preference: {0}")]
        UnknownPreference(String),

        #[error("Unknown DRC mode: {0}")]
        UnknownDrcMode(String),

        #[error("Unknown digital audio format: {0}")]
        UnknownDigitalFormat(String),

        #[error("Invalid value for {key}: {value}")]
        InvalidValue { key: &'static str, value: String },
    }
}

pub const PROP_SUPPORT_DOLBY: &str = "ro.platform.support.dolby";
pub const PROP_SUPPORT_DTS: &str = "ro.platform.support.dts";
pub const PROP_DTS_DRC_CUSTOM: &str = "persist.sys.dtsdrccustom";
pub const PROP_DTS_DRC_SCALE: &str = "persist.sys.dtsdrcscale";
pub const PROP_TV_UI_MODE: &str = "ro.platform.has.tvuimode";
pub const PROP_SOUND_DEBUG: &str = "sys.sound.debug";

pub const DEFAULT_DTS_DRC_SCALE: &str = "0";

/// Read access to platform system properties.
pub trait SystemProperties {
    fn get(&self, key: &str) -> Option<String>;

    /// Parses the property as a boolean, falling back to `default` when it is
    /// unset or unrecognised.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key).as_deref().map(str::trim) {
            Some("1" | "y" | "yes" | "true" | "on") => true,
            Some("0" | "n" | "no" | "false" | "off") => false,
            _ => default,
        }
    }
}

/// Audio output controls of the platform.
pub trait AudioOutput {
    fn enable_dolby_drc(&self, enable: bool);
    fn set_dolby_drc_mode(&self, mode: DolbyDrcMode);
    fn drc_passthrough(&self) -> DrcMode;
    fn set_drc_passthrough(&self, mode: DrcMode);
    fn digital_audio_format(&self) -> DigitalAudioFormat;
    fn set_digital_audio_format(&self, format: DigitalAudioFormat);
    fn set_dts_drc_scale(&self, scale: &str);
    fn line_out_enabled(&self) -> bool;
    fn enable_line_out(&self, enable: bool);
    fn hdmi_audio_enabled(&self) -> bool;
    fn enable_hdmi_audio(&self, enable: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundPreference {
    DrcMode,
    DigitalSound,
    DtsDrcMode,
    DtsDrcCustomMode,
    BoxLineOut,
    BoxHdmi,
}

impl SoundPreference {
    pub const ALL: [SoundPreference; 6] = [
        Self::DrcMode,
        Self::DigitalSound,
        Self::DtsDrcMode,
        Self::DtsDrcCustomMode,
        Self::BoxLineOut,
        Self::BoxHdmi,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::DrcMode => "drc_mode",
            Self::DigitalSound => "digital_sound",
            Self::DtsDrcMode => "dtsdrc_mode",
            Self::DtsDrcCustomMode => "dtsdrc_custom_mode",
            Self::BoxLineOut => "box_lineout",
            Self::BoxHdmi => "box_hdmi",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pref| pref.key() == key)
    }
}

/// Dolby dynamic range compression passthrough setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrcMode {
    Off,
    Line,
    Rf,
}

impl DrcMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Line => "line",
            Self::Rf => "rf",
        }
    }

    pub fn parse(value: &str) -> Result<Self, SoundError> {
        match value {
            "off" => Ok(Self::Off),
            "line" => Ok(Self::Line),
            "rf" => Ok(Self::Rf),
            other => Err(SoundError::UnknownDrcMode(other.to_string())),
        }
    }
}

impl fmt::Display for DrcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoder mode passed to the Dolby decoder alongside the DRC switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DolbyDrcMode {
    Line,
    Rf,
}

/// Format sent over the digital (SPDIF/HDMI) output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitalAudioFormat {
    Pcm,
    Auto,
}

impl DigitalAudioFormat {
    /// Index of the format in the preference's value list.
    pub const fn index(self) -> u32 {
        match self {
            Self::Pcm => 0,
            Self::Auto => 1,
        }
    }

    pub fn parse(value: &str) -> Result<Self, SoundError> {
        match value.trim().parse::<u32>() {
            Ok(0) => Ok(Self::Pcm),
            Ok(1) => Ok(Self::Auto),
            _ => Err(SoundError::UnknownDigitalFormat(value.to_string())),
        }
    }
}

/// A visible preference and its current value as the list shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundEntry {
    pub preference: SoundPreference,
    pub value: Option<String>,
}

/// The sound screen as it should be rendered on this platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundScreen {
    pub entries: Vec<SoundEntry>,
}

impl SoundScreen {
    pub fn is_visible(&self, preference: SoundPreference) -> bool {
        self.entries.iter().any(|e| e.preference == preference)
    }

    pub fn value(&self, preference: SoundPreference) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.preference == preference)
            .and_then(|e| e.value.as_deref())
    }
}

pub struct SoundSettings<'h, S: SystemProperties + ?Sized, A: AudioOutput + ?Sized> {
    props: &'h S,
    audio: &'h A,
}

impl<'h, S: SystemProperties + ?Sized, A: AudioOutput + ?Sized> SoundSettings<'h, S, A> {
    pub fn new(props: &'h S, audio: &'h A) -> Self {
        Self { props, audio }
    }

    fn debug_enabled(&self) -> bool {
        self.props.get_bool(PROP_SOUND_DEBUG, false)
    }

    /// Decides which preferences the platform supports and reads their values.
    pub fn screen(&self) -> SoundScreen {
        let mut entries = Vec::new();

        if self.props.get_bool(PROP_SUPPORT_DOLBY, false) {
            entries.push(SoundEntry {
                preference: SoundPreference::DrcMode,
                value: Some(self.audio.drc_passthrough().to_string()),
            });
        } else {
            debug!("platform doesn't support dolby");
        }

        entries.push(SoundEntry {
            preference: SoundPreference::DigitalSound,
            value: Some(self.audio.digital_audio_format().index().to_string()),
        });

        if !self.props.get_bool(PROP_SUPPORT_DTS, false) {
            debug!("platform doesn't support dts");
        } else if self.props.get_bool(PROP_DTS_DRC_CUSTOM, false) {
            entries.push(SoundEntry {
                preference: SoundPreference::DtsDrcCustomMode,
                value: None,
            });
        } else {
            let scale = self
                .props
                .get(PROP_DTS_DRC_SCALE)
                .unwrap_or_else(|| DEFAULT_DTS_DRC_SCALE.to_string());
            entries.push(SoundEntry {
                preference: SoundPreference::DtsDrcMode,
                value: Some(scale),
            });
        }

        if !self.props.get_bool(PROP_TV_UI_MODE, false) {
            entries.push(SoundEntry {
                preference: SoundPreference::BoxLineOut,
                value: Some(switch_value(self.audio.line_out_enabled())),
            });
            entries.push(SoundEntry {
                preference: SoundPreference::BoxHdmi,
                value: Some(switch_value(self.audio.hdmi_audio_enabled())),
            });
        }

        SoundScreen { entries }
    }

    /// Applies a preference change coming from the UI.
    pub fn on_preference_change(&self, key: &str, value: &str) -> Result<(), SoundError> {
        let preference = SoundPreference::from_key(key)
            .ok_or_else(|| SoundError::UnknownPreference(key.to_string()))?;

        if self.debug_enabled() {
            debug!("{key} -> {value}");
        }

        match preference {
            SoundPreference::DrcMode => {
                let mode = DrcMode::parse(value)?;
                let (enable, decoder_mode) = match mode {
                    DrcMode::Off => (false, DolbyDrcMode::Line),
                    DrcMode::Line => (true, DolbyDrcMode::Line),
                    DrcMode::Rf => (false, DolbyDrcMode::Rf),
                };
                self.audio.enable_dolby_drc(enable);
                self.audio.set_dolby_drc_mode(decoder_mode);
                self.audio.set_drc_passthrough(mode);
            }
            SoundPreference::DigitalSound => {
                self.audio
                    .set_digital_audio_format(DigitalAudioFormat::parse(value)?);
            }
            SoundPreference::DtsDrcMode => self.audio.set_dts_drc_scale(value),
            SoundPreference::DtsDrcCustomMode => {}
            SoundPreference::BoxLineOut => {
                self.audio.enable_line_out(parse_switch(preference, value)?);
            }
            SoundPreference::BoxHdmi => {
                self.audio
                    .enable_hdmi_audio(parse_switch(preference, value)?);
            }
        }
        Ok(())
    }
}

fn switch_value(on: bool) -> String {
    let value = if on { "1" } else { "0" };
    value.to_string()
}

/// `1` means on; any other integer means off.
fn parse_switch(preference: SoundPreference, value: &str) -> Result<bool, SoundError> {
    value
        .trim()
        .parse::<i32>()
        .map(|n| n == 1)
        .map_err(|_| SoundError::InvalidValue {
            key: preference.key(),
            value: value.to_string(),
        })
}
