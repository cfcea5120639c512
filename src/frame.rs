use crate::orient::{orient_bone, BoneTransform};
use crate::projection::Projector;
use crate::source::{validate_hand, RawHand};
use crate::types::{HandDetection, Position, BONES, NUM_BONES, NUM_LANDMARKS};

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolved scene-space layout of one hand for one frame: where every joint
/// marker and bone segment goes.
#[derive(Debug, Clone)]
pub struct HandLayout {
    pub joints: [Position; NUM_LANDMARKS],
    pub bones: [BoneTransform; NUM_BONES],
}

/// Lay out one validated hand: project every landmark, then orient each bone
/// segment between its two joints.
pub fn layout_hand(projector: &Projector, hand: &HandDetection) -> HandLayout {
    let mut joints = [Position::new(0.0, 0.0, 0.0); NUM_LANDMARKS];
    for (joint, lm) in joints.iter_mut().zip(hand.landmarks.iter()) {
        *joint = projector.project(lm);
    }

    let bones = std::array::from_fn(|i| orient_bone(joints[BONES[i].start], joints[BONES[i].end]));

    HandLayout { joints, bones }
}

/// Lay out all hands delivered this frame. Malformed hands are skipped (with a
/// diagnostic from validation); an empty detection cycle yields no layouts.
pub fn layout_frame(projector: &Projector, raw_hands: &[RawHand]) -> Vec<HandLayout> {
    raw_hands
        .iter()
        .filter_map(validate_hand)
        .map(|hand| layout_hand(projector, &hand))
        .collect()
}

/////////////////////////////////////////////////////////////////////////////////////////////////
