//! Spatialized audio cues.
//!
//! The navigator never touches audio hardware. It decides *what* to play
//! and *where* (a [`Bias`]) and hands a [`Cue`] to a [`FeedbackSink`]. The
//! helpers on [`Cue`] describe how a sink should render the bias: pan,
//! pitch shift, and gain compensation.

use spatial_types::config::NavSettings;
use spatial_types::geometry::Bias;

/// Panner distance in front of the listener.
const PAN_DEPTH: f32 = 5.0;
/// Panner x range for a bias of `±1`.
const PAN_WIDTH: f32 = 20.0;
/// Pitch shift, in cents, for a bias of `y = ±1`.
const PITCH_CENTS: f32 = 350.0;

/// What to play.
#[derive(Debug, Clone, PartialEq)]
pub enum CueKind {
    /// Synthesized speech.
    Speech { text: String, voice_speed: u32 },
    /// Short beep marking that the page scrolled since the last focus.
    ScrollBeep,
    /// Click marking "nothing further in that direction".
    Click,
}

/// A sound positioned on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub bias: Bias,
    pub kind: CueKind,
}

impl Cue {
    /// 3D panner position `(x, y, z)`.
    pub fn pan_position(&self) -> (f32, f32, f32) {
        (self.bias.x * PAN_WIDTH, self.bias.y, PAN_DEPTH)
    }

    /// Detune in cents; higher on screen means higher pitch.
    pub fn detune_cents(&self) -> f32 {
        PITCH_CENTS * self.bias.y
    }

    /// Gain boost that balances perceived loudness of hard-panned cues.
    /// Starts at 1.0 in the centre and rises logarithmically with `|x|`.
    pub fn gain(&self) -> f32 {
        let max_output = 10.0_f32;
        let knee = 0.25_f32;
        let x = self.bias.x.abs();
        let k = (max_output + 1.0).ln() / (1.0 + max_output * (1.0 - knee)).ln();
        (1.0 + max_output * x).ln() / (1.0 + max_output * knee).ln() * k + 1.0
    }
}

/// Audio output.
///
/// Sinks play one cue at a time: `play` interrupts whatever is still
/// sounding.
pub trait FeedbackSink {
    fn play(&mut self, cue: Cue);

    /// Silence everything currently playing.
    fn stop_all(&mut self);
}

/// Sink that drops every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl FeedbackSink for SilentSink {
    fn play(&mut self, _cue: Cue) {}

    fn stop_all(&mut self) {}
}

impl<S: FeedbackSink + ?Sized> FeedbackSink for Box<S> {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue);
    }

    fn stop_all(&mut self) {
        (**self).stop_all();
    }
}

// ------------------------------------------------------------------
// Cue construction
// ------------------------------------------------------------------

fn placed(settings: &NavSettings, bias: Bias, spatialize: bool) -> Bias {
    if spatialize {
        bias.with_x_cutoffs(settings.left_stereo_cutoff, settings.right_stereo_cutoff)
    } else {
        Bias::CENTER
    }
}

/// Speech for a focused element. `None` when muted or nothing to say.
pub fn speech(settings: &NavSettings, text: &str, bias: Bias) -> Option<Cue> {
    if settings.mute || text.is_empty() {
        return None;
    }
    Some(Cue {
        bias: placed(settings, bias, settings.spatialize_audio),
        kind: CueKind::Speech {
            text: text.to_string(),
            voice_speed: settings.voice_speed,
        },
    })
}

/// Scroll beep for the element focused after a scroll, pinned to the
/// bottom row of the sound field.
pub fn scroll_beep(settings: &NavSettings, bias: Bias) -> Option<Cue> {
    if settings.mute || !settings.scroll_feedback {
        return None;
    }
    let spatialize = settings.spatialize_audio && settings.spatialize_scroll_feedback;
    Some(Cue {
        bias: placed(settings, Bias { x: bias.x, y: -1.0 }, spatialize),
        kind: CueKind::ScrollBeep,
    })
}

/// Edge click when a move finds nothing.
pub fn edge_click(settings: &NavSettings, bias: Bias) -> Option<Cue> {
    if settings.mute || !settings.edge_feedback {
        return None;
    }
    Some(Cue {
        bias: placed(settings, bias, settings.spatialize_audio),
        kind: CueKind::Click,
    })
}

/// Click played on every blank-region scroll step.
pub fn blank_region_click(settings: &NavSettings, bias: Bias) -> Option<Cue> {
    if settings.mute || !settings.blank_region_navigation_feedback {
        return None;
    }
    Some(Cue {
        bias: placed(settings, bias, settings.spatialize_audio),
        kind: CueKind::Click,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Bias {
        Bias { x, y }
    }

    #[test]
    fn speech_carries_text_and_speed() {
        let s = NavSettings::default();
        let cue = speech(&s, "link; Home", at(0.5, 0.2)).unwrap();
        assert_eq!(cue.bias, at(0.5, 0.2));
        assert_eq!(
            cue.kind,
            CueKind::Speech {
                text: "link; Home".into(),
                voice_speed: 175
            }
        );
    }

    #[test]
    fn empty_text_is_silent() {
        assert!(speech(&NavSettings::default(), "", at(0.0, 0.0)).is_none());
    }

    #[test]
    fn mute_suppresses_everything() {
        let s = NavSettings {
            mute: true,
            edge_feedback: true,
            blank_region_navigation_feedback: true,
            ..Default::default()
        };
        assert!(speech(&s, "x", Bias::CENTER).is_none());
        assert!(scroll_beep(&s, Bias::CENTER).is_none());
        assert!(edge_click(&s, Bias::CENTER).is_none());
        assert!(blank_region_click(&s, Bias::CENTER).is_none());
    }

    #[test]
    fn unspatialized_speech_is_centred() {
        let s = NavSettings {
            spatialize_audio: false,
            ..Default::default()
        };
        let cue = speech(&s, "x", at(-0.8, 0.9)).unwrap();
        assert_eq!(cue.bias, Bias::CENTER);
    }

    #[test]
    fn stereo_cutoffs_clamp_x() {
        let s = NavSettings {
            left_stereo_cutoff: -0.4,
            right_stereo_cutoff: 0.6,
            ..Default::default()
        };
        assert_eq!(speech(&s, "x", at(-1.0, 0.5)).unwrap().bias, at(-0.4, 0.5));
        assert_eq!(speech(&s, "x", at(0.9, 0.5)).unwrap().bias, at(0.6, 0.5));
    }

    #[test]
    fn scroll_beep_sits_at_bottom() {
        let s = NavSettings::default();
        assert_eq!(scroll_beep(&s, at(0.3, 0.7)).unwrap().bias, at(0.3, -1.0));

        let flat = NavSettings {
            spatialize_scroll_feedback: false,
            ..Default::default()
        };
        assert_eq!(scroll_beep(&flat, at(0.3, 0.7)).unwrap().bias, Bias::CENTER);

        let off = NavSettings {
            scroll_feedback: false,
            ..Default::default()
        };
        assert!(scroll_beep(&off, at(0.3, 0.7)).is_none());
    }

    #[test]
    fn clicks_follow_their_flags() {
        let s = NavSettings::default();
        assert!(edge_click(&s, Bias::CENTER).is_none());
        assert!(blank_region_click(&s, Bias::CENTER).is_none());
        let on = NavSettings {
            edge_feedback: true,
            blank_region_navigation_feedback: true,
            ..Default::default()
        };
        assert_eq!(edge_click(&on, Bias::CENTER).unwrap().kind, CueKind::Click);
        assert_eq!(blank_region_click(&on, Bias::CENTER).unwrap().kind, CueKind::Click);
    }

    #[test]
    fn rendering_parameters() {
        let centre = Cue {
            bias: Bias::CENTER,
            kind: CueKind::Click,
        };
        assert!((centre.gain() - 1.0).abs() < 1e-6);
        assert_eq!(centre.detune_cents(), 0.0);

        let edge = Cue {
            bias: at(-1.0, 1.0),
            kind: CueKind::Click,
        };
        assert_eq!(edge.pan_position(), (-20.0, 1.0, 5.0));
        assert_eq!(edge.detune_cents(), 350.0);
        assert!(edge.gain() > centre.gain());
    }

    #[test]
    fn silent_sink_accepts_cues() {
        let mut sink: Box<dyn FeedbackSink> = Box::new(SilentSink);
        sink.play(Cue {
            bias: Bias::CENTER,
            kind: CueKind::ScrollBeep,
        });
        sink.stop_all();
    }
}
