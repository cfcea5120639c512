//! Synthetic landmark producer for running the visualizer without a camera
//! or a hand-pose model: generates plausible waving-hand landmark frames in
//! input-image pixel space and publishes them like a real detector would.

use std::thread;
use std::time::Duration;

use crate::source::{PredictionSlot, RawHand};

/// Detection cadence of the fake model.
const CYCLE: Duration = Duration::from_millis(33);

/// Per-finger spread angle from straight up, radians (thumb to pinky).
const FINGER_SPREAD: [f32; 5] = [-0.7, -0.25, 0.0, 0.25, 0.55];

/// Segment lengths in pixels along each finger (wrist->base, then 3 joints).
const SEGMENT_LENGTHS: [f32; 4] = [90.0, 35.0, 28.0, 22.0];

/////////////////////////////////////////////////////////////////////////////////////////////////

/// One waving hand at time `t` seconds, wrist anchored at `(cx, cy)` pixels.
pub fn wave_hand(t: f32, cx: f32, cy: f32) -> RawHand {
    let sway = (t * 0.8).sin() * 60.0;
    let curl = (t * 2.0).sin() * 0.25;
    let wrist_x = cx + sway;
    let wrist_y = cy;

    let mut landmarks = vec![vec![wrist_x, wrist_y, 0.0]];
    for (finger, &spread) in FINGER_SPREAD.iter().enumerate() {
        let mut x = wrist_x;
        let mut y = wrist_y;
        let mut angle = spread + (t + finger as f32).sin() * 0.1;
        for (joint, &len) in SEGMENT_LENGTHS.iter().enumerate() {
            // fingers point image-up; curl bends the outer joints
            if joint > 0 {
                angle += curl;
            }
            x += angle.sin() * len;
            y -= angle.cos() * len;
            let z = (t * 1.5 + finger as f32 * 0.6).cos() * 3.0;
            landmarks.push(vec![x, y, z]);
        }
    }
    RawHand { landmarks }
}

/// Hands visible at time `t`: one hand always, a second one that comes and
/// goes so the visual pool gets exercised.
pub fn hands_at(t: f32) -> Vec<RawHand> {
    let mut hands = vec![wave_hand(t, 230.0, 380.0)];
    if (t * 0.25).sin() > 0.0 {
        hands.push(wave_hand(t * 1.3 + 2.0, 440.0, 400.0));
    }
    hands
}

/// Start a background thread that overwrites the prediction slot at the fake
/// model's cadence. Runs for the life of the process.
pub fn spawn_producer(slot: PredictionSlot) {
    thread::spawn(move || {
        let start = std::time::Instant::now();
        loop {
            let t = start.elapsed().as_secs_f32();
            slot.publish(hands_at(t));
            thread::sleep(CYCLE);
        }
    });
}

/////////////////////////////////////////////////////////////////////////////////////////////////
