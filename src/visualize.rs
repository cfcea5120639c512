use bevy::prelude::*;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

use crate::frame::layout_frame;
use crate::pool::HandPool;
use crate::projection::Projector;
use crate::source::PredictionSlot;
use crate::types::{slot_color, Index, NUM_BONES, NUM_LANDMARKS};

/////////////////////////////////////////////////////////////////////////////////////////////////

const JOINT_RADIUS: f32 = 5.0;
const BONE_RADIUS: f32 = 2.0;
const HELPER_SIZE: f32 = 400.0;

/// Scene entities owned by one hand slot.
#[derive(Debug)]
pub struct HandEntities {
    pub joints: [Entity; NUM_LANDMARKS],
    pub bones: [Entity; NUM_BONES],
}

#[derive(Debug, Resource)]
pub struct VizGlobalData {
    pub slot: PredictionSlot,
    pub projector: Projector,
    pub pool: HandPool<HandEntities>,
    pub show_helpers: bool,
}

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Run the render loop: every tick, poll the latest predictions, grow the hand
/// pool as needed and move the joint/bone visuals into place. Runs until the
/// window is closed; an upstream failure just means zero detections forever.
pub fn visualize_hands(slot: PredictionSlot, projector: Projector) {
    App::new()
        .insert_resource(VizGlobalData {
            slot,
            projector,
            pool: HandPool::new(),
            show_helpers: true,
        })
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 100.0,
        })
        .add_plugins(DefaultPlugins)
        .add_plugins(PanOrbitCameraPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, (update_hands, draw_helpers, update_main))
        .run();
}

/////////////////////////////////////////////////////////////////////////////////////////////////

fn setup(mut commands: Commands) {
    //// Orbit camera, pulled back far enough for the +-300 unit scene
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0., 150., 600.).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        PanOrbitCamera::default(),
    ));

    // key light pointing into the scene
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 10_000.0,
            ..default()
        },
        transform: Transform::from_xyz(0., 0., 600.).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    // instructions
    commands.spawn(
        TextBundle::from_section(
            "Press 'G' to toggle the grid and axes\n\
            Hold 'Up' or 'Down' to change the helper line width\n\
            Drag to orbit, scroll to zoom\n",
            TextStyle {
                font_size: 15.,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        }),
    );
}

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Spawn the 21 joint spheres and 20 bone cylinders for one hand slot, hidden
/// until the slot becomes active. Joint color comes from the repeating palette,
/// indexed by allocation order.
fn spawn_hand_entities(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    slot: Index,
) -> HandEntities {
    let [r, g, b] = slot_color(slot);
    let joint_mesh = meshes.add(Sphere::new(JOINT_RADIUS));
    let joint_material = materials.add(Color::rgb(r, g, b));
    // unit cylinder of height 2, so a half-length y scale spans the full joint distance
    let bone_mesh = meshes.add(Cylinder {
        radius: BONE_RADIUS,
        half_height: 1.0,
    });
    let bone_material = materials.add(Color::rgb(0.0, 1.0, 1.0));

    let joints = std::array::from_fn(|_| {
        commands
            .spawn(PbrBundle {
                mesh: joint_mesh.clone(),
                material: joint_material.clone(),
                visibility: Visibility::Hidden,
                ..default()
            })
            .id()
    });
    let bones = std::array::from_fn(|_| {
        commands
            .spawn(PbrBundle {
                mesh: bone_mesh.clone(),
                material: bone_material.clone(),
                visibility: Visibility::Hidden,
                ..default()
            })
            .id()
    });

    HandEntities { joints, bones }
}

fn update_hands(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut data: ResMut<VizGlobalData>,
    mut visuals: Query<(&mut Transform, &mut Visibility)>,
) {
    let VizGlobalData {
        slot,
        projector,
        pool,
        ..
    } = &mut *data;

    let raw_hands = slot.latest();
    let layouts = layout_frame(projector, &raw_hands);

    pool.ensure_capacity(layouts.len(), |slot_index| {
        spawn_hand_entities(&mut commands, &mut meshes, &mut materials, slot_index)
    });
    pool.set_active_count(layouts.len());

    for (slot_index, visible, hand) in pool.iter() {
        // sync pool visibility onto the scene graph
        // (entities spawned this tick are picked up by the query next tick)
        for &entity in hand.joints.iter().chain(hand.bones.iter()) {
            if let Ok((_, mut visibility)) = visuals.get_mut(entity) {
                *visibility = if visible {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                };
            }
        }
        if !visible {
            continue;
        }

        let layout = &layouts[slot_index];
        for (&entity, position) in hand.joints.iter().zip(layout.joints.iter()) {
            if let Ok((mut transform, _)) = visuals.get_mut(entity) {
                transform.translation = Vec3::new(position.x, position.y, position.z);
            }
        }
        for (&entity, bone) in hand.bones.iter().zip(layout.bones.iter()) {
            if let Ok((mut transform, _)) = visuals.get_mut(entity) {
                transform.translation = Vec3::new(bone.position.x, bone.position.y, bone.position.z);
                transform.rotation = Quat::from_xyzw(
                    bone.rotation.v.x,
                    bone.rotation.v.y,
                    bone.rotation.v.z,
                    bone.rotation.s,
                );
                transform.scale = Vec3::new(1.0, bone.half_length, 1.0);
            }
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////////////////////

/// Draw reference axes (red, green, blue) and a ground grid.
fn draw_helpers(mut gizmos: Gizmos, data: Res<VizGlobalData>) {
    if !data.show_helpers {
        return;
    }

    gizmos.line(Vec3::ZERO, Vec3::X * HELPER_SIZE, Color::RED);
    gizmos.line(Vec3::ZERO, Vec3::Y * HELPER_SIZE, Color::GREEN);
    gizmos.line(Vec3::ZERO, Vec3::Z * HELPER_SIZE, Color::BLUE);

    let divisions = 20;
    let half = HELPER_SIZE / 2.0;
    let step = HELPER_SIZE / divisions as f32;
    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        gizmos.line(
            Vec3::new(offset, 0.0, -half),
            Vec3::new(offset, 0.0, half),
            Color::GRAY,
        );
        gizmos.line(
            Vec3::new(-half, 0.0, offset),
            Vec3::new(half, 0.0, offset),
            Color::GRAY,
        );
    }
}

fn update_main(
    mut config_store: ResMut<GizmoConfigStore>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut data: ResMut<VizGlobalData>,
) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    if keyboard.pressed(KeyCode::ArrowUp) {
        config.line_width += 5. * time.delta_seconds();
        config.line_width = config.line_width.clamp(0., 50.);
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        config.line_width -= 5. * time.delta_seconds();
        config.line_width = config.line_width.clamp(0., 50.);
    }

    if keyboard.just_released(KeyCode::KeyG) {
        data.show_helpers = !data.show_helpers;
    }
}
