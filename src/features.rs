//! Audio-feature snapshots and their aggregation.
//!
//! A snapshot either describes a single track or is the arithmetic mean over
//! a playlist's tracks. Retrieval from the music catalog is a collaborator's
//! job; this module only consumes the numbers it hands over.

use crate::error::{AudiogradError, AudiogradResult};

/// The four song descriptors one synthesis request consumes.
///
/// Values are taken as-is: valence, energy and acousticness are expected in
/// [0,1] and tempo positive, but nothing here validates that. Out-of-range
/// inputs propagate arithmetically through the palette mapper.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioFeatures {
    /// Beats per minute.
    pub tempo: f64,
    /// Musical positivity, 0 (sad) to 1 (euphoric).
    pub valence: f64,
    pub energy: f64,
    pub acousticness: f64,
}

/// Arithmetic mean of each descriptor across a track list.
///
/// An empty list has no mean; that is an input error, never a division by
/// zero.
pub fn average_features(tracks: &[AudioFeatures]) -> AudiogradResult<AudioFeatures> {
    if tracks.is_empty() {
        return Err(AudiogradError::invalid_input(
            "cannot average audio features over an empty track list",
        ));
    }

    let n = tracks.len() as f64;
    let mut sum = AudioFeatures {
        tempo: 0.0,
        valence: 0.0,
        energy: 0.0,
        acousticness: 0.0,
    };
    for t in tracks {
        sum.tempo += t.tempo;
        sum.valence += t.valence;
        sum.energy += t.energy;
        sum.acousticness += t.acousticness;
    }

    Ok(AudioFeatures {
        tempo: sum.tempo / n,
        valence: sum.valence / n,
        energy: sum.energy / n,
        acousticness: sum.acousticness / n,
    })
}
