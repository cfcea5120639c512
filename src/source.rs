use std::sync::{Arc, Mutex, PoisonError};

use crate::types::{HandDetection, Landmark, NUM_LANDMARKS};

/////////////////////////////////////////////////////////////////////////////////////////////////

/// One hand as delivered by an external landmark model, not yet validated.
/// Each landmark is expected to carry exactly 3 coordinates (x, y, z).
#[derive(Debug, Clone)]
pub struct RawHand {
    pub landmarks: Vec<Vec<f32>>,
}

/// Validate one raw hand into a fixed-size detection.
///
/// A hand without exactly 21 three-coordinate landmarks is rejected (the model
/// contract was violated); the caller skips it for this frame instead of
/// indexing out of bounds.
pub fn validate_hand(raw: &RawHand) -> Option<HandDetection> {
    if raw.landmarks.len() != NUM_LANDMARKS {
        log::warn!(
            "skipping hand with {} landmarks (expected {NUM_LANDMARKS})",
            raw.landmarks.len()
        );
        return None;
    }
    let mut landmarks = [Landmark::new(0.0, 0.0, 0.0); NUM_LANDMARKS];
    for (i, coords) in raw.landmarks.iter().enumerate() {
        match coords.as_slice() {
            &[x, y, z] => landmarks[i] = Landmark::new(x, y, z),
            _ => {
                log::warn!(
                    "skipping hand: landmark {i} has {} coordinates (expected 3)",
                    coords.len()
                );
                return None;
            }
        }
    }
    Some(HandDetection { landmarks })
}

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Single-slot last-write-wins channel between the landmark source and the
/// render tick.
///
/// The producer overwrites the slot whenever a detection cycle completes; the
/// consumer polls the latest value once per tick and simply sees the prior
/// frame's hands again if nothing new arrived. No queuing, no backpressure,
/// and neither side ever blocks waiting for the other.
#[derive(Debug, Clone, Default)]
pub struct PredictionSlot {
    latest: Arc<Mutex<Vec<RawHand>>>,
}

impl PredictionSlot {
    pub fn new() -> Self {
        PredictionSlot::default()
    }

    /// Replace the slot contents with this cycle's detections.
    /// Zero hands is a valid result.
    pub fn publish(&self, hands: Vec<RawHand>) {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        *latest = hands;
    }

    /// Snapshot of whatever the slot currently holds.
    pub fn latest(&self) -> Vec<RawHand> {
        let latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        latest.clone()
    }
}

/////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_hand(n: usize) -> RawHand {
        RawHand {
            landmarks: (0..n).map(|i| vec![i as f32, 0.0, 0.0]).collect(),
        }
    }

    #[test]
    fn full_hand_validates() {
        let hand = validate_hand(&raw_hand(NUM_LANDMARKS)).unwrap();
        assert_eq!(hand.landmarks[20].x, 20.0);
    }

    #[test]
    fn wrong_landmark_count_is_rejected() {
        assert!(validate_hand(&raw_hand(20)).is_none());
        assert!(validate_hand(&raw_hand(0)).is_none());
        assert!(validate_hand(&raw_hand(22)).is_none());
    }

    #[test]
    fn wrong_coordinate_arity_is_rejected() {
        let mut raw = raw_hand(NUM_LANDMARKS);
        raw.landmarks[7] = vec![1.0, 2.0];
        assert!(validate_hand(&raw).is_none());
    }

    #[test]
    fn later_publish_overwrites_earlier() {
        let slot = PredictionSlot::new();
        slot.publish(vec![raw_hand(NUM_LANDMARKS)]);
        slot.publish(vec![raw_hand(NUM_LANDMARKS), raw_hand(NUM_LANDMARKS)]);
        assert_eq!(slot.latest().len(), 2);
    }

    #[test]
    fn consumer_reuses_prior_value_when_nothing_arrived() {
        let slot = PredictionSlot::new();
        slot.publish(vec![raw_hand(NUM_LANDMARKS)]);
        assert_eq!(slot.latest().len(), 1);
        assert_eq!(slot.latest().len(), 1);
    }

    #[test]
    fn slot_starts_empty() {
        let slot = PredictionSlot::new();
        assert!(slot.latest().is_empty());
    }

    #[test]
    fn publishing_from_another_thread_is_seen() {
        let slot = PredictionSlot::new();
        let producer = slot.clone();
        std::thread::spawn(move || producer.publish(vec![raw_hand(NUM_LANDMARKS)]))
            .join()
            .unwrap();
        assert_eq!(slot.latest().len(), 1);
    }
}
