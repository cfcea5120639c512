use anyhow::Result;

use hand_skeleton_viz::projection::Projector;
use hand_skeleton_viz::source::PredictionSlot;
use hand_skeleton_viz::synthetic;
use hand_skeleton_viz::visualize::visualize_hands;

fn main() -> Result<()> {
    env_logger::init();

    // No model bundled: a synthetic producer stands in for the hand-pose
    // detector, publishing into the same single-slot channel a real one would.
    let slot = PredictionSlot::new();
    synthetic::spawn_producer(slot.clone());
    log::info!("synthetic landmark producer started");

    visualize_hands(slot, Projector::new(640.0, 480.0));
    Ok(())
}
