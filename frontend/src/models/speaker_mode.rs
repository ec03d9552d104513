//! Speaker Mode
//!
//! How participants get the floor in a newly created room.

/// Speaker mode chosen in the overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpeakerMode {
    /// Everyone may unmute freely
    #[default]
    FreeSpeech,
    /// Participants raise a hand and wait for the host
    ApplyToSpeak,
}

impl SpeakerMode {
    /// Every mode, in the order the overlay lists them
    pub const ALL: [SpeakerMode; 2] = [SpeakerMode::FreeSpeech, SpeakerMode::ApplyToSpeak];

    /// Text shown in the Room Type row and in the overlay
    pub fn title(&self) -> &'static str {
        match self {
            SpeakerMode::FreeSpeech => "Free Speech Room",
            SpeakerMode::ApplyToSpeak => "Raise Hand Room",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_free_speech() {
        assert_eq!(SpeakerMode::default(), SpeakerMode::FreeSpeech);
        assert_eq!(SpeakerMode::ALL[0], SpeakerMode::default());
    }

    #[test]
    fn test_titles_are_distinct() {
        assert_ne!(
            SpeakerMode::FreeSpeech.title(),
            SpeakerMode::ApplyToSpeak.title()
        );
    }
}
