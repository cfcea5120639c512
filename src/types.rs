use cgmath::{Quaternion as CgQuaternion, Vector3};

/////////////////////////////////////////////////////////////////////////////////////////////////

pub type Index = usize;
pub type Quaternion = CgQuaternion<f32>;
pub type Position = Vector3<f32>;

/// Number of landmarks per detected hand (fixed by the hand landmark model).
pub const NUM_LANDMARKS: usize = 21;
/// Number of finger segments connecting those landmarks.
pub const NUM_BONES: usize = 20;

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Landmark indices, following the standard 21-point hand landmark numbering
/// (0 = wrist, then 4 joints per finger from thumb to pinky).
pub mod landmark_index {
    use super::Index;

    pub const WRIST: Index = 0;
    pub const THUMB_CMC: Index = 1;
    pub const THUMB_MCP: Index = 2;
    pub const THUMB_IP: Index = 3;
    pub const THUMB_TIP: Index = 4;
    pub const INDEX_MCP: Index = 5;
    pub const INDEX_PIP: Index = 6;
    pub const INDEX_DIP: Index = 7;
    pub const INDEX_TIP: Index = 8;
    pub const MIDDLE_MCP: Index = 9;
    pub const MIDDLE_PIP: Index = 10;
    pub const MIDDLE_DIP: Index = 11;
    pub const MIDDLE_TIP: Index = 12;
    pub const RING_MCP: Index = 13;
    pub const RING_PIP: Index = 14;
    pub const RING_DIP: Index = 15;
    pub const RING_TIP: Index = 16;
    pub const PINKY_MCP: Index = 17;
    pub const PINKY_PIP: Index = 18;
    pub const PINKY_DIP: Index = 19;
    pub const PINKY_TIP: Index = 20;
}

/////////////////////////////////////////////////////////////////////////////////////////////////

/// A single hand joint in source space: x and y in input-image pixel
/// coordinates, z as relative depth. Replaced wholesale each detection cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Landmark { x, y, z }
    }
}

/// The full 21-point skeleton of one hand in one frame.
#[derive(Debug, Clone)]
pub struct HandDetection {
    pub landmarks: [Landmark; NUM_LANDMARKS],
}

/////////////////////////////////////////////////////////////////////////////////////////////////

/// A fixed joint-pair connection used to draw a segment between two landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bone {
    pub start: Index,
    pub end: Index,
}

const fn bone(start: Index, end: Index) -> Bone {
    Bone { start, end }
}

/// Finger bone structure: every segment radiates out from the wrist along one
/// finger. Never mutated at runtime.
pub const BONES: [Bone; NUM_BONES] = [
    // thumb
    bone(0, 1),
    bone(1, 2),
    bone(2, 3),
    bone(3, 4),
    // index
    bone(0, 5),
    bone(5, 6),
    bone(6, 7),
    bone(7, 8),
    // middle
    bone(0, 9),
    bone(9, 10),
    bone(10, 11),
    bone(11, 12),
    // ring
    bone(0, 13),
    bone(13, 14),
    bone(14, 15),
    bone(15, 16),
    // pinky
    bone(0, 17),
    bone(17, 18),
    bone(18, 19),
    bone(19, 20),
];

/////////////////////////////////////////////////////////////////////////////////////////////////

/// RGB joint colors assigned to hand slots by allocation order, repeating.
pub const SLOT_PALETTE: [[f32; 3]; 4] = [
    [1.0, 0.0, 1.0], // magenta
    [0.0, 1.0, 0.0], // green
    [1.0, 1.0, 0.0], // yellow
    [0.0, 1.0, 1.0], // cyan
];

/// Joint color for a hand slot.
pub fn slot_color(slot: Index) -> [f32; 3] {
    SLOT_PALETTE[slot % SLOT_PALETTE.len()]
}

/////////////////////////////////////////////////////////////////////////////////////////////////
